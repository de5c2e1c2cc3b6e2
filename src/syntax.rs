//! FTL 语法层模块
//!
//! 在 fluent-syntax 之上提供单条目级别的解析与规范化序列化，是重建流程的外部协作者。
//!
//! # 架构设计
//!
//! - **ast**: 单条目视图 [`Entry`]，节点类型来自 `fluent_syntax::ast`
//! - **parser**: 源文本 → 条目，语法错误返回 [`GrammarError`]
//! - **serializer**: 条目 → 规范化源文本
//!
//! # 使用示例
//!
//! ```rust
//! use ftl_rebuild::syntax::{parse_entry, serialize_entry};
//!
//! let entry = parse_entry("-brand-name   =   Firefox").unwrap();
//! assert_eq!(entry.key(), "-brand-name");
//! assert_eq!(serialize_entry(&entry), "-brand-name = Firefox\n");
//! ```
pub mod ast;
pub mod error;
pub mod parser;
pub mod serializer;

#[cfg(test)]
mod tests;

// === 导出公共接口 ===
pub use ast::{pattern_text, Entry, EntryKind, EntrySummary};
pub use error::{GrammarError, GrammarErrorKind};
pub use parser::{parse_entry, MAX_NESTING_DEPTH};
pub use serializer::serialize_entry;
