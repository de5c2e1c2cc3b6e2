//! FTL 条目文件 IO 实现
//!
//! 提供基于文件系统的默认读写实现
use std::path::Path;

use super::traits::{EntryReader, EntryWriter};
use crate::utils::{decode_source, FtlError};

/// 默认的条目读取器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultEntryReader;

impl EntryReader for DefaultEntryReader {
    fn read(&self, path: &Path) -> Result<String, FtlError> {
        let bytes = std::fs::read(path)?;
        decode_source(&bytes, &path.display().to_string())
    }
}

/// 默认的条目写入器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultEntryWriter;

impl EntryWriter for DefaultEntryWriter {
    fn write(&self, source: &str, path: &Path) -> Result<(), FtlError> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, source)?;
        tracing::debug!("已写入 {} 字节到 {:?}", source.len(), path);
        Ok(())
    }
}
