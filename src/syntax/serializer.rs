//! FTL 规范化序列化
//!
//! 使用 fluent-syntax 的序列化器，输出格式与条目在源文本中的写法无关：
//! 单行值写在 `key = ` 之后，含换行或选择表达式的值从下一行开始并缩进 4 个空格，
//! 输出总是以一个 `\n` 结尾。
use fluent_syntax::{ast, serializer};

use super::ast::Entry;

/// 序列化单个条目
pub fn serialize_entry(entry: &Entry) -> String {
    let resource = ast::Resource {
        body: vec![entry.to_ast()],
    };
    serializer::serialize(&resource)
}
