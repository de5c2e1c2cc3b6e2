use fluent_syntax::parser::{ErrorKind, ParserError};
use thiserror::Error;

/// 语法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarErrorKind {
    /// fluent-syntax 报告的语法错误
    #[error("{0}")]
    Syntax(ErrorKind),

    #[error("expected a message or term")]
    MissingEntry,

    #[error("unexpected content after the entry")]
    TrailingContent,

    #[error("placeables nested deeper than {0} levels")]
    TooDeeplyNested(usize),
}

/// 解析失败时返回的错误，带有出错位置
///
/// `line` 和 `column` 从 1 开始计数，`offset` 为字节偏移
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (line {line}, column {column})")]
pub struct GrammarError {
    pub kind: GrammarErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl GrammarError {
    /// 根据源文本中的字节偏移创建错误
    pub fn at(source: &str, offset: usize, kind: GrammarErrorKind) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
        let column = source[line_start..offset].chars().count() + 1;

        GrammarError {
            kind,
            offset,
            line,
            column,
        }
    }

    /// 转换 fluent-syntax 的解析错误
    pub fn from_parser_error(source: &str, error: ParserError) -> Self {
        GrammarError::at(source, error.pos.start, GrammarErrorKind::Syntax(error.kind))
    }
}
