//! 批量译文 JSON 文件 IO 实现
use std::path::Path;

use super::traits::{ReconstructedUnitWriter, TranslationUnitReader};
use crate::string_types::{ReconstructedUnit, TranslationUnit};
use crate::utils::{decode_source, FtlError};

/// 默认的批量译文读取器
#[derive(Debug, Clone, Default)]
pub struct DefaultTranslationUnitReader;

impl TranslationUnitReader for DefaultTranslationUnitReader {
    fn read_units(&self, path: &Path) -> Result<Vec<TranslationUnit>, FtlError> {
        let bytes = std::fs::read(path)?;
        let content = decode_source(&bytes, &path.display().to_string())?;
        let units: Vec<TranslationUnit> = serde_json::from_str(&content)?;

        tracing::debug!("从 {:?} 读取了 {} 条译文", path, units.len());
        Ok(units)
    }
}

/// 默认的批量结果写入器，输出格式化的 JSON
#[derive(Debug, Clone, Default)]
pub struct DefaultReconstructedUnitWriter;

impl ReconstructedUnitWriter for DefaultReconstructedUnitWriter {
    fn write_units(&self, units: &[ReconstructedUnit], path: &Path) -> Result<(), FtlError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(units)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
