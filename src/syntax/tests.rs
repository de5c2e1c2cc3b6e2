use super::*;
use fluent_syntax::ast as fluent;
use fluent_syntax::parser::ErrorKind;
use pretty_assertions::assert_eq;

/// 解析后重新序列化
fn normalize(source: &str) -> String {
    serialize_entry(&parse_entry(source).unwrap())
}

fn text_value(entry: &Entry) -> String {
    entry.value.as_ref().and_then(pattern_text).unwrap()
}

fn error_kind(source: &str) -> GrammarErrorKind {
    parse_entry(source).unwrap_err().kind
}

fn is_syntax_error(source: &str) -> bool {
    matches!(error_kind(source), GrammarErrorKind::Syntax(_))
}

fn placeables(entry: &Entry) -> Vec<&fluent::Expression<String>> {
    entry
        .value
        .as_ref()
        .unwrap()
        .elements
        .iter()
        .filter_map(|element| match element {
            fluent::PatternElement::Placeable { expression } => Some(expression),
            fluent::PatternElement::TextElement { .. } => None,
        })
        .collect()
}

#[test]
fn test_parse_simple_message() {
    let entry = parse_entry("hello = Hello, world!").unwrap();

    assert_eq!(entry.kind, EntryKind::Message);
    assert_eq!(entry.id, "hello");
    assert_eq!(text_value(&entry), "Hello, world!");
    assert!(entry.attributes.is_empty());
    assert!(entry.comment.is_none());
}

#[test]
fn test_parse_term_strips_sigil() {
    let entry = parse_entry("-brand-name = Firefox").unwrap();

    assert_eq!(entry.kind, EntryKind::Term);
    assert!(entry.is_term());
    assert_eq!(entry.id, "brand-name");
    assert_eq!(entry.key(), "-brand-name");
    assert_eq!(text_value(&entry), "Firefox");
}

#[test]
fn test_parse_attributes() {
    let entry = parse_entry("login-input = Predefined value\n    .placeholder = email@example.com\n    .title = Type your login email").unwrap();

    assert_eq!(text_value(&entry), "Predefined value");
    assert_eq!(entry.attribute_names(), vec!["placeholder", "title"]);
    assert_eq!(
        pattern_text(&entry.attribute("title").unwrap().value).unwrap(),
        "Type your login email"
    );
    assert!(entry.attribute("missing").is_none());
}

#[test]
fn test_parse_attributes_without_value() {
    let entry = parse_entry("search =\n    .placeholder = Search").unwrap();

    assert!(entry.value.is_none());
    assert_eq!(entry.attribute_names(), vec!["placeholder"]);
}

#[test]
fn test_parse_block_value_removes_common_indent() {
    let entry = parse_entry("multi =\n        Line one\n            indented\n        Line three").unwrap();
    assert_eq!(text_value(&entry), "Line one\n    indented\nLine three");

    let inline = parse_entry("multi = First\n    Second").unwrap();
    assert_eq!(text_value(&inline), "First\nSecond");
}

#[test]
fn test_parse_trims_trailing_whitespace() {
    let entry = parse_entry("key = Value   \n    \n").unwrap();
    assert_eq!(text_value(&entry), "Value");
}

#[test]
fn test_parse_crlf() {
    let entry = parse_entry("key =\r\n    One\r\n    Two\r\n").unwrap();
    assert_eq!(text_value(&entry), "One\nTwo");
}

#[test]
fn test_parse_leading_comment() {
    let entry = parse_entry("### Resource\n\n# Shown in the toolbar\n# second line\nkey = Value").unwrap();
    assert_eq!(
        entry.comment_text().unwrap(),
        "Shown in the toolbar\nsecond line"
    );

    let detached = parse_entry("# Detached\n\nkey = Value").unwrap();
    assert!(detached.comment.is_none());
}

#[test]
fn test_parse_placeables() {
    let entry = parse_entry(
        "welcome = Welcome, { $user } to { -brand-name }! { \"{\" } { 42 } { menu.title } { NUMBER($count, minimumFractionDigits: 2) }",
    )
    .unwrap();

    let placeables = placeables(&entry);
    assert_eq!(placeables.len(), 6);

    match placeables[0] {
        fluent::Expression::Inline(fluent::InlineExpression::VariableReference { id }) => {
            assert_eq!(id.name, "user");
        }
        other => panic!("unexpected expression: {:?}", other),
    }
    match placeables[1] {
        fluent::Expression::Inline(fluent::InlineExpression::TermReference { id, attribute, .. }) => {
            assert_eq!(id.name, "brand-name");
            assert!(attribute.is_none());
        }
        other => panic!("unexpected expression: {:?}", other),
    }
    match placeables[5] {
        fluent::Expression::Inline(fluent::InlineExpression::FunctionReference { id, arguments }) => {
            assert_eq!(id.name, "NUMBER");
            assert_eq!(arguments.positional.len(), 1);
            assert_eq!(arguments.named[0].name.name, "minimumFractionDigits");
        }
        other => panic!("unexpected expression: {:?}", other),
    }
}

#[test]
fn test_parse_select_expression() {
    let source = "emails =\n    { $unreadEmails ->\n        [one] You have one unread email.\n       *[other] You have { $unreadEmails } unread emails.\n    }\n";
    let entry = parse_entry(source).unwrap();

    match placeables(&entry)[0] {
        fluent::Expression::Select { variants, .. } => {
            assert_eq!(variants.len(), 2);
            assert!(!variants[0].default);
            assert!(variants[1].default);
        }
        other => panic!("unexpected expression: {:?}", other),
    }
}

#[test]
fn test_serialize_canonical_forms() {
    assert_eq!(normalize("key   =    Value"), "key = Value\n");
    assert_eq!(normalize("-term = Value"), "-term = Value\n");
    assert_eq!(
        normalize("key = First\n  Second"),
        "key =\n    First\n    Second\n"
    );
    assert_eq!(
        normalize("key =\n .title =   Title"),
        "key =\n    .title = Title\n"
    );
    assert_eq!(
        normalize("key = Value\n  .title =\n    One\n    Two"),
        "key = Value\n    .title =\n        One\n        Two\n"
    );
    assert_eq!(normalize("key = Hi {$user}!"), "key = Hi { $user }!\n");
}

#[test]
fn test_serialize_comment() {
    assert_eq!(normalize("# Note\nkey = Value"), "# Note\nkey = Value\n");
}

#[test]
fn test_round_trip_is_idempotent() {
    let canonical = [
        "hello = Hello, world!\n",
        "-brand-name = Firefox\n",
        "login =\n    .placeholder = email@example.com\n",
        "greeting =\n    Hello\n    World\n",
        "tooltip =\n    .title =\n        Line1\n        Line2\n",
        "key = Value\n    .a = A\n    .b = B\n",
        "welcome = Welcome, { $user }!\n",
    ];

    for text in canonical {
        let entry = parse_entry(text).unwrap();
        assert_eq!(serialize_entry(&entry), text);
    }
}

#[test]
fn test_serialize_is_stable() {
    let messy = [
        "key =\n       a\n         b\n       c",
        "key = { $n ->\n[one] One\n *[other] Many\n}",
        "key = {NUMBER( $n ,style:\"percent\")} {-brand(case:\"gen\")}",
        "key = {$x}   \n   .attr = { $y ->\n *[x] y\n }",
        "key =    { \"a\\\"b\\u0041\" } text",
        "# Comment\nkey =\n    { -brand.gender ->\n        [masculine] le\n       *[other] la\n    }\n",
    ];

    for source in messy {
        let once = normalize(source);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_error_missing_equals() {
    let error = parse_entry("brand-name Firefox").unwrap_err();
    assert_eq!(error.kind, GrammarErrorKind::Syntax(ErrorKind::ExpectedToken('=')));
    assert_eq!(error.line, 1);
}

#[test]
fn test_error_entry_count() {
    assert_eq!(error_kind(""), GrammarErrorKind::MissingEntry);
    assert_eq!(error_kind("# Only a comment\n"), GrammarErrorKind::MissingEntry);

    let error = parse_entry("key = Value\nother = Value").unwrap_err();
    assert_eq!(error.kind, GrammarErrorKind::TrailingContent);
    assert_eq!((error.line, error.column), (2, 1));
}

#[test]
fn test_error_from_parser() {
    assert!(is_syntax_error("  key = Value"));
    assert!(is_syntax_error("key ="));
    assert!(is_syntax_error("-term =\n    .attr = Value"));
    assert!(is_syntax_error("key =\n    .attr = "));
    assert!(is_syntax_error("key =\n    Value\n    [not a variant]"));
    assert!(is_syntax_error("key = a } b"));
    assert!(is_syntax_error("key = { $x"));
    assert!(is_syntax_error("key = { -term.attr }"));
    assert!(is_syntax_error("key = { number($x) }"));
    assert!(is_syntax_error("key = { $n ->\n    [one] One\n}"));
}

#[test]
fn test_error_nesting_depth() {
    let deep = format!("key = {}", "{".repeat(MAX_NESTING_DEPTH + 1));
    let error = parse_entry(&deep).unwrap_err();
    assert_eq!(error.kind, GrammarErrorKind::TooDeeplyNested(MAX_NESTING_DEPTH));
    assert_eq!(error.column, 7 + MAX_NESTING_DEPTH);

    let calls = format!("key = {{ {}", "F(".repeat(MAX_NESTING_DEPTH * 2));
    assert_eq!(
        error_kind(&calls),
        GrammarErrorKind::TooDeeplyNested(MAX_NESTING_DEPTH)
    );

    // 字符串字面量里的括号不计入层数
    let literal = format!("key = {{ \"{}\" }}", "{".repeat(MAX_NESTING_DEPTH * 2));
    assert!(parse_entry(&literal).is_ok());

    let nested = format!(
        "key = {}$x{}",
        "{ ".repeat(MAX_NESTING_DEPTH),
        " }".repeat(MAX_NESTING_DEPTH)
    );
    assert!(parse_entry(&nested).is_ok());
}
