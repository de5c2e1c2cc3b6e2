//! 消息重建模块
//!
//! 根据原始条目和纯文本译文生成新的条目源文本：
//! 1. 解析原始条目，取得键（Term 补回 `-`）与属性结构
//! 2. 按条目形状与译文行数拼出中间源文本
//! 3. 重新解析中间文本做语法校验
//! 4. 用规范化序列化输出最终结果
//!
//! 手工拼接的文本只是中间产物，最终格式完全由序列化决定。
//!
//! # 使用示例
//!
//! ```rust
//! use ftl_rebuild::reconstruct;
//!
//! let output = reconstruct("-brand-name = Firefox", "Zorro").unwrap();
//! assert_eq!(output, "-brand-name = Zorro\n");
//!
//! let output = reconstruct("search =\n    .placeholder = Search", "Suchen").unwrap();
//! assert_eq!(output, "search =\n    .placeholder = Suchen\n");
//! ```
pub mod batch;


use crate::syntax::{parse_entry, serialize_entry, Entry, EntryKind, GrammarError};
use crate::utils::is_multiline;

/// 条目形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryShape {
    /// 恰好一个属性：译文写入该属性
    SingleAttribute(String),
    /// 没有属性或多于一个属性：译文写入条目的值
    Value,
}

impl EntryShape {
    /// 根据属性数量判断形状
    pub fn of(entry: &Entry) -> Self {
        match entry.attributes.as_slice() {
            [only] => EntryShape::SingleAttribute(only.id.name.clone()),
            _ => EntryShape::Value,
        }
    }
}

impl std::fmt::Display for EntryShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryShape::SingleAttribute(name) => write!(f, "single attribute .{}", name),
            EntryShape::Value => write!(f, "value"),
        }
    }
}

/// 译文排版
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationLayout {
    SingleLine,
    MultiLine,
}

impl TranslationLayout {
    pub fn of(translation: &str) -> Self {
        if is_multiline(translation) {
            TranslationLayout::MultiLine
        } else {
            TranslationLayout::SingleLine
        }
    }
}

/// 一次重建的完整过程记录
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// 条目类型
    pub kind: EntryKind,
    /// 源文本中的键
    pub key: String,
    pub shape: EntryShape,
    pub layout: TranslationLayout,
    /// 拼接出的中间源文本
    pub source: String,
    /// 规范化后的最终输出
    pub output: String,
}

/// 用译文重建条目，返回规范化后的源文本
///
/// # 错误
/// 原始条目无法解析，或拼接出的中间文本无法重新解析时返回 [`GrammarError`]
pub fn reconstruct(original: &str, translation: &str) -> Result<String, GrammarError> {
    reconstruct_detailed(original, translation).map(|result| result.output)
}

/// 与 [`reconstruct`] 相同，同时返回形状判断与中间文本
pub fn reconstruct_detailed(
    original: &str,
    translation: &str,
) -> Result<Reconstruction, GrammarError> {
    let entry = parse_entry(original)?;
    let key = entry.key();
    let shape = EntryShape::of(&entry);
    let layout = TranslationLayout::of(translation);

    if entry.attributes.len() > 1 {
        tracing::warn!(
            "{} 有 {} 个属性，译文将作为值写入，属性不会保留",
            key,
            entry.attributes.len()
        );
    }
    tracing::debug!("重建 {} {}: {}, {:?}", entry.kind, key, shape, layout);

    let source = build_source(&key, &shape, layout, translation);
    let rebuilt = parse_entry(&source)?;
    let output = serialize_entry(&rebuilt);

    Ok(Reconstruction {
        kind: entry.kind,
        key,
        shape,
        layout,
        source,
        output,
    })
}

/// 按形状与排版拼接中间源文本
///
/// 多行译文的每一行都缩进到所属结构的下一级：值为 4 个空格，属性值为 8 个空格
pub fn build_source(
    key: &str,
    shape: &EntryShape,
    layout: TranslationLayout,
    translation: &str,
) -> String {
    match (shape, layout) {
        (EntryShape::SingleAttribute(attribute), TranslationLayout::SingleLine) => {
            format!("{} =\n    .{} = {}", key, attribute, translation)
        }
        (EntryShape::SingleAttribute(attribute), TranslationLayout::MultiLine) => {
            let mut content = format!("{} =\n    .{} =", key, attribute);
            append_block(&mut content, translation, "        ");
            content
        }
        (EntryShape::Value, TranslationLayout::SingleLine) => {
            format!("{} = {}", key, translation)
        }
        (EntryShape::Value, TranslationLayout::MultiLine) => {
            let mut content = format!("{} =", key);
            append_block(&mut content, translation, "    ");
            content
        }
    }
}

fn append_block(content: &mut String, translation: &str, indent: &str) {
    for line in translation.split('\n') {
        content.push('\n');
        content.push_str(indent);
        content.push_str(line);
    }
}
