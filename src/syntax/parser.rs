//! FTL 单条目解析
//!
//! 语法解析交给 fluent-syntax，这里只负责单条目的约束：
//! - 行尾统一为 `\n`
//! - 解析前限制占位符的嵌套层数，过深的输入直接返回错误
//! - 源文本中必须恰好有一个 Message 或 Term，独立注释会被忽略
use std::borrow::Cow;

use fluent_syntax::{ast, parser};

use super::ast::Entry;
use super::error::{GrammarError, GrammarErrorKind};

/// 占位符与调用参数允许的最大嵌套层数
pub const MAX_NESTING_DEPTH: usize = 100;

/// 解析单个 Message 或 Term
///
/// 紧贴条目的 `#` 注释会挂到条目上。条目之后再出现其他条目视为错误。
pub fn parse_entry(source: &str) -> Result<Entry, GrammarError> {
    let source: Cow<'_, str> = if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(source)
    };

    check_nesting(&source)?;

    let resource = match parser::parse(source.to_string()) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            return Err(match errors.into_iter().next() {
                Some(error) => GrammarError::from_parser_error(&source, error),
                None => GrammarError::at(&source, 0, GrammarErrorKind::MissingEntry),
            });
        }
    };

    let mut entries = resource.body.into_iter().filter_map(|entry| match entry {
        ast::Entry::Message(message) => Some(Entry::from(message)),
        ast::Entry::Term(term) => Some(Entry::from(term)),
        _ => None,
    });

    let entry = entries
        .next()
        .ok_or_else(|| GrammarError::at(&source, source.len(), GrammarErrorKind::MissingEntry))?;

    if entries.next().is_some() {
        let offset = entry_start_offsets(&source).nth(1).unwrap_or(0);
        return Err(GrammarError::at(&source, offset, GrammarErrorKind::TrailingContent));
    }

    Ok(entry)
}

/// 扫描 `{` 与调用参数 `(` 的嵌套层数
///
/// 占位符内的字符串字面量会被跳过，字面量在行尾结束。
fn check_nesting(source: &str) -> Result<(), GrammarError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        if in_string {
            match byte {
                b'\\' => pos += 1,
                b'"' | b'\n' => in_string = false,
                _ => {}
            }
        } else {
            match byte {
                b'{' => depth += 1,
                b'(' if depth > 0 => depth += 1,
                b'}' | b')' => depth = depth.saturating_sub(1),
                b'"' if depth > 0 => in_string = true,
                _ => {}
            }
            if depth > MAX_NESTING_DEPTH {
                return Err(GrammarError::at(
                    source,
                    pos,
                    GrammarErrorKind::TooDeeplyNested(MAX_NESTING_DEPTH),
                ));
            }
        }
        pos += 1;
    }

    Ok(())
}

/// 可能作为条目开头的行首偏移（行首为字母或 `-`）
fn entry_start_offsets(source: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(pos, _)| pos + 1))
        .filter(move |&start| {
            source[start..].starts_with(|ch: char| ch.is_ascii_alphabetic() || ch == '-')
        })
}
