use serde::{Serialize, Deserialize};

use crate::syntax::GrammarError;

/// 待重建的译文条目
///
/// 批量模式的输入格式：
/// - `original`：原始条目的 FTL 源文本
/// - `translation`：编辑器中提交的纯文本译文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// 调用方自定义的标识（可选，原样带回结果）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 原始条目源文本
    pub original: String,
    /// 译文
    pub translation: String,
}

impl TranslationUnit {
    /// 创建新的译文条目
    pub fn new(id: Option<String>, original: String, translation: String) -> Self {
        TranslationUnit {
            id,
            original,
            translation,
        }
    }

    /// 日志中使用的名称：优先 id，其次原文首行
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self.original.lines().next().unwrap_or_default().to_string(),
        }
    }
}

/// 重建结果
///
/// `reconstructed` 与 `error` 二者只有一个有值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructedUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub original: String,
    pub translation: String,
    /// 规范化后的条目源文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconstructed: Option<String>,
    /// 语法错误描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReconstructedUnit {
    /// 由重建结果生成
    pub fn from_result(unit: TranslationUnit, result: Result<String, GrammarError>) -> Self {
        let (reconstructed, error) = match result {
            Ok(text) => (Some(text), None),
            Err(error) => (None, Some(error.to_string())),
        };

        ReconstructedUnit {
            id: unit.id,
            original: unit.original,
            translation: unit.translation,
            reconstructed,
            error,
        }
    }

    /// 是否重建成功
    pub fn is_success(&self) -> bool {
        self.reconstructed.is_some()
    }
}
