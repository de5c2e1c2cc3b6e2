//! IO 抽象层 - trait 定义
//!
//! 重建逻辑只处理文本，文件读写通过这里的 trait 注入，
//! 便于测试时替换为内存实现。

use std::path::Path;

use crate::string_types::{ReconstructedUnit, TranslationUnit};
use crate::utils::FtlError;

/// FTL 条目文件读取 trait
///
/// # 职责
/// - 读取文件字节并解码为文本
/// - 不负责解析，仅负责 IO
pub trait EntryReader {
    /// 读取条目源文本
    ///
    /// # 参数
    /// * `path` - 文件路径
    fn read(&self, path: &Path) -> Result<String, FtlError>;
}

/// FTL 条目文件写入 trait
pub trait EntryWriter {
    /// 写入条目源文本
    ///
    /// # 参数
    /// * `source` - 规范化后的条目文本
    /// * `path` - 目标文件路径
    fn write(&self, source: &str, path: &Path) -> Result<(), FtlError>;
}

/// 批量译文读取 trait
///
/// # 职责
/// - 读取并解析 `TranslationUnit` 数组（JSON）
pub trait TranslationUnitReader {
    fn read_units(&self, path: &Path) -> Result<Vec<TranslationUnit>, FtlError>;
}

/// 批量结果写入 trait
pub trait ReconstructedUnitWriter {
    fn write_units(&self, units: &[ReconstructedUnit], path: &Path) -> Result<(), FtlError>;
}
