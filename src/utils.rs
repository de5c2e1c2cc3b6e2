use thiserror::Error;
use std::path::Path;

use crate::syntax::GrammarError;

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum FtlError {
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("Invalid encoding: {0} is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("Translation batch is empty")]
    EmptyBatch,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 译文是否为多行
///
/// 只做换行符子串检测，末尾单独的换行也算多行
pub fn is_multiline(translation: &str) -> bool {
    translation.contains('\n')
}

/// 将文件字节解码为文本
///
/// FTL 文件固定为 UTF-8，去掉 BOM，遇到非法字节直接报错
pub fn decode_source(data: &[u8], origin: &str) -> Result<String, FtlError> {
    let (decoded, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(data);
    if had_errors {
        return Err(FtlError::InvalidEncoding(origin.to_string()));
    }
    Ok(decoded.into_owned())
}

/// 检查路径扩展名是否受支持
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| crate::SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<std::path::PathBuf, FtlError> {
    if !file_path.exists() {
        return Err(FtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!("{}.{}.bak", ext, timestamp))
        .unwrap_or_else(|| format!("{}.bak", timestamp));
    let backup_path = file_path.with_extension(extension);

    std::fs::copy(file_path, &backup_path)?;

    tracing::debug!("已创建备份文件: {:?}", backup_path);
    Ok(backup_path)
}
