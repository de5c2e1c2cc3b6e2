//! 单条目视图
//!
//! 语法树节点直接使用 `fluent_syntax::ast`，这里只把 Message 与 Term
//! 统一成一个结构，方便重建流程按键、属性数量处理。
use fluent_syntax::ast;
use serde::{Deserialize, Serialize};

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// 普通消息，标识符没有前缀
    Message,
    /// 术语，源文本中以 `-` 开头
    Term,
}

impl EntryKind {
    /// 源文本中标识符前的符号
    pub fn sigil(&self) -> &'static str {
        match self {
            EntryKind::Message => "",
            EntryKind::Term => "-",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Message => write!(f, "Message"),
            EntryKind::Term => write!(f, "Term"),
        }
    }
}

/// 一个可翻译条目
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// 条目类型
    pub kind: EntryKind,
    /// 标识符（Term 不含 `-`）
    pub id: String,
    /// 条目的值，Term 解析后总是有值
    pub value: Option<ast::Pattern<String>>,
    /// 属性列表（保持源文本顺序）
    pub attributes: Vec<ast::Attribute<String>>,
    /// 紧贴在条目上方的 `#` 注释
    pub comment: Option<ast::Comment<String>>,
}

impl Entry {
    /// 源文本中使用的键（Term 需要补回 `-`）
    pub fn key(&self) -> String {
        format!("{}{}", self.kind.sigil(), self.id)
    }

    pub fn is_term(&self) -> bool {
        self.kind == EntryKind::Term
    }

    /// 按名称查找属性
    pub fn attribute(&self, name: &str) -> Option<&ast::Attribute<String>> {
        self.attributes.iter().find(|attr| attr.id.name == name)
    }

    /// 属性名称列表
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|attr| attr.id.name.as_str()).collect()
    }

    /// 注释文本，多行以 `\n` 连接
    pub fn comment_text(&self) -> Option<String> {
        self.comment.as_ref().map(|comment| comment.content.join("\n"))
    }

    /// 转回 fluent-syntax 的条目节点
    pub fn to_ast(&self) -> ast::Entry<String> {
        let id = ast::Identifier {
            name: self.id.clone(),
        };
        match self.kind {
            EntryKind::Message => ast::Entry::Message(ast::Message {
                id,
                value: self.value.clone(),
                attributes: self.attributes.clone(),
                comment: self.comment.clone(),
            }),
            EntryKind::Term => ast::Entry::Term(ast::Term {
                id,
                value: self
                    .value
                    .clone()
                    .unwrap_or(ast::Pattern { elements: Vec::new() }),
                attributes: self.attributes.clone(),
                comment: self.comment.clone(),
            }),
        }
    }
}

impl From<ast::Message<String>> for Entry {
    fn from(message: ast::Message<String>) -> Self {
        Entry {
            kind: EntryKind::Message,
            id: message.id.name,
            value: message.value,
            attributes: message.attributes,
            comment: message.comment,
        }
    }
}

impl From<ast::Term<String>> for Entry {
    fn from(term: ast::Term<String>) -> Self {
        Entry {
            kind: EntryKind::Term,
            id: term.id.name,
            value: Some(term.value),
            attributes: term.attributes,
            comment: term.comment,
        }
    }
}

/// 只包含纯文本的值返回拼接后的文本，含占位符时返回 None
pub fn pattern_text(pattern: &ast::Pattern<String>) -> Option<String> {
    let mut text = String::new();
    for element in &pattern.elements {
        match element {
            ast::PatternElement::TextElement { value } => text.push_str(value),
            ast::PatternElement::Placeable { .. } => return None,
        }
    }
    Some(text)
}

/// `--stats --json` 输出的条目概要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySummary {
    pub kind: EntryKind,
    pub key: String,
    pub has_value: bool,
    pub attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<&Entry> for EntrySummary {
    fn from(entry: &Entry) -> Self {
        EntrySummary {
            kind: entry.kind,
            key: entry.key(),
            has_value: entry.value.is_some(),
            attributes: entry.attribute_names().into_iter().map(String::from).collect(),
            comment: entry.comment_text(),
        }
    }
}
