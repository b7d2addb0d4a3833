#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::cst::NodeKind;

fn kinds(node: &SyntaxNode) -> Vec<NodeKind> {
    node.children().iter().map(|c| c.kind()).collect()
}

fn syntax_offset(result: Result<SyntaxNode, TomeError>) -> usize {
    match result {
        Err(TomeError::SyntaxError { offset, .. }) => offset,
        other => panic!("Expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_string_literals() {
    for input in [
        r#""""#,
        r#""This is a string""#,
        r#""This is an \n\t \bescaped string.""#,
        r#""This is a string containing úƞĩƈōƌě symbols.""#,
        r#""linefeed as \u000A.""#,
        r#""quote \" slash \/ backslash \\""#,
    ] {
        let node = parse(input, Rule::String).expect("Failed to parse string");
        assert_eq!(node.kind(), NodeKind::String);
        assert_eq!(node.text(), input);
    }
}

#[test]
fn test_string_rejects_bad_input() {
    assert!(parse(r#""unterminated"#, Rule::String).is_err());
    assert!(parse(r#""bad \q escape""#, Rule::String).is_err());
    assert!(parse(r#""short \u00A""#, Rule::String).is_err());
    assert!(parse("\"raw\nnewline\"", Rule::String).is_err());
    assert!(parse("\"raw\ttab\"", Rule::String).is_err());
    assert!(parse(r#""one" "two""#, Rule::String).is_err());
}

#[test]
fn test_string_rejects_surrogate_escape() {
    let offset = syntax_offset(parse(r#""\uD800""#, Rule::String));
    assert_eq!(offset, 3);
}

#[test]
fn test_numbers() {
    for input in ["-1", "1", "123", "+1", "+123", "007"] {
        let node = parse(input, Rule::Integer).expect("Failed to parse integer");
        assert_eq!(node.kind(), NodeKind::Integer);
    }
    for input in ["-0.0", "1.4", "123.2", "+1.1", "+123.9"] {
        let node = parse(input, Rule::Float).expect("Failed to parse float");
        assert_eq!(node.kind(), NodeKind::Float);
    }

    assert!(parse("1.5", Rule::Integer).is_err());
    assert!(parse("1", Rule::Float).is_err());
    assert!(parse("1.", Rule::Float).is_err());
    assert!(parse(".5", Rule::Float).is_err());
    assert!(parse("--1", Rule::Integer).is_err());
}

#[test]
fn test_booleans_and_timestamps() {
    assert_eq!(parse("true", Rule::Boolean).unwrap().kind(), NodeKind::Boolean);
    assert_eq!(parse("false", Rule::Boolean).unwrap().kind(), NodeKind::Boolean);
    assert!(parse("True", Rule::Boolean).is_err());
    assert!(parse("truex", Rule::Boolean).is_err());

    let node = parse("1979-05-27T07:32:00Z", Rule::Timestamp).expect("Failed to parse timestamp");
    assert_eq!(node.kind(), NodeKind::Timestamp);
    assert!(parse("1979-05-27T07:32:00", Rule::Timestamp).is_err());
    assert!(parse("1979-05-27T07:32:00.5Z", Rule::Timestamp).is_err());
    assert!(parse("1979-05-27T07:32:00+01:00", Rule::Timestamp).is_err());
}

#[test]
fn test_value_choice() {
    let cases = [
        (r#""hello""#, NodeKind::String),
        ("-1.0", NodeKind::Float),
        ("1", NodeKind::Integer),
        ("true", NodeKind::Boolean),
        ("1979-05-27T07:32:00Z", NodeKind::Timestamp),
        ("[1, 2]", NodeKind::Array),
    ];
    for (input, kind) in cases {
        let node = parse(input, Rule::Value).expect("Failed to parse value");
        assert_eq!(node.kind(), kind, "input {:?}", input);
    }
}

#[test]
fn test_simple_array() {
    let node = parse("[1, 2, 3]", Rule::Array).expect("Failed to parse array");
    assert_eq!(node.kind(), NodeKind::Array);
    assert_eq!(kinds(&node), vec![NodeKind::Integer; 3]);
}

#[test]
fn test_multiline_array_with_comments() {
    let input = "[ # Evil, must say\n1,\n\n     2        ,\n# Wait, you can put comments anywhere?\n\n4 ,\n# What the... is this right?\n]";
    let node = parse(input, Rule::Array).expect("Failed to parse array");
    let values: Vec<&str> = node.significant_children().map(|c| c.text()).collect();
    assert_eq!(values, vec!["1", "2", "4"]);
    assert_eq!(node.children().iter().filter(|c| c.kind() == NodeKind::Comment).count(), 3);
}

#[test]
fn test_nested_array_and_trailing_comma() {
    let input = "[\n  [1, 2,\n  # Nested comment, yeah!\n  3 ],\n  [\"hello\", \"world\"\n    # Now this is a doozy!\n  ],\n]";
    let node = parse(input, Rule::Array).expect("Failed to parse nested array");
    assert_eq!(node.significant_children().count(), 2);
    assert!(node.significant_children().all(|c| c.kind() == NodeKind::Array));

    assert!(parse("[]", Rule::Array).is_ok());
    assert!(parse("[ \n ]", Rule::Array).is_ok());
    assert!(parse("[,]", Rule::Array).is_err());
    assert!(parse("[1,,2]", Rule::Array).is_err());
    assert!(parse("[1 2]", Rule::Array).is_err());
}

#[test]
fn test_array_nesting_limit() {
    let ok = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
    assert!(parse(&ok, Rule::Array).is_ok());

    let deep = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH + 1), "]".repeat(MAX_NESTING_DEPTH + 1));
    match parse(&deep, Rule::Array) {
        Err(TomeError::NestingTooDeep { limit, offset, .. }) => {
            assert_eq!(limit, MAX_NESTING_DEPTH);
            assert_eq!(offset, MAX_NESTING_DEPTH + 1);
        }
        other => panic!("Expected NestingTooDeep, got {:?}", other),
    }
}

#[test]
fn test_comment_rule() {
    let node = parse("# This is a comment", Rule::Comment).expect("Failed to parse comment");
    assert_eq!(node.kind(), NodeKind::Comment);
    assert_eq!(node.text(), "# This is a comment");
}

#[test]
fn test_key_and_key_value() {
    assert_eq!(parse("hello", Rule::Key).unwrap().kind(), NodeKind::Key);
    assert_eq!(parse("what?", Rule::Key).unwrap().text(), "what?");
    assert!(parse("#nope", Rule::Key).is_err());
    assert!(parse("a.b", Rule::Key).is_err());

    for (key, value) in [
        ("string", r#""Hello""#),
        ("date", "1979-05-27T07:32:00Z"),
        ("integer", "114"),
        ("float", "1.0"),
    ] {
        let input = format!("{} =    \t {}", key, value);
        let node = parse(&input, Rule::KeyValue).expect("Failed to parse key value");
        assert_eq!(node.kind(), NodeKind::KeyValue);
        assert_eq!(node.children()[0].text(), key);
        assert_eq!(node.children()[1].text(), value);
    }
}

#[test]
fn test_section_header() {
    let node = parse("[key.hello.while]", Rule::SectionHeader).expect("Failed to parse header");
    let segments: Vec<&str> = node.children().iter().map(|c| c.text()).collect();
    assert_eq!(segments, vec!["key", "hello", "while"]);

    let node = parse("[the.hard.bit#]", Rule::SectionHeader).expect("Failed to parse header");
    assert_eq!(node.children()[2].text(), "bit#");

    assert!(parse("[a..b]", Rule::SectionHeader).is_err());
    assert!(parse("[.a]", Rule::SectionHeader).is_err());
    assert!(parse("[a.]", Rule::SectionHeader).is_err());
    assert!(parse("[]", Rule::SectionHeader).is_err());
}

#[test]
fn test_section_header_allows_inner_spaces() {
    for input in ["[ a.b ]", "[a . b]", "[\ta.\tb\t]", "[  a  ]"] {
        let node = parse(input, Rule::SectionHeader).expect("Failed to parse spaced header");
        let segments: Vec<&str> = node.children().iter().map(|c| c.text()).collect();
        assert_eq!(segments[0], "a", "input {}", input);
        assert_eq!(node.text(), input);
    }

    let doc = parse("  [ owner ]  # who
name = \"Tom\"\n", Rule::Document).expect("Failed to parse document");
    assert_eq!(kinds(&doc), vec![NodeKind::SectionHeader, NodeKind::Comment, NodeKind::KeyValue]);

    // spaces separate tokens, they never join two keys
    assert!(parse("[a b]", Rule::SectionHeader).is_err());
    assert!(parse("[ ]", Rule::SectionHeader).is_err());
    assert!(parse("[a. ]", Rule::SectionHeader).is_err());
}

#[test]
fn test_document_statements() {
    let input = "# header\ntitle = \"x\" # trailing\n\n[owner]\n  name = \"Tom\"\r\n[a.b]   # note\n";
    let doc = parse(input, Rule::Document).expect("Failed to parse document");
    assert_eq!(doc.kind(), NodeKind::Document);
    assert_eq!(
        kinds(&doc),
        vec![
            NodeKind::Comment,
            NodeKind::KeyValue,
            NodeKind::Comment,
            NodeKind::SectionHeader,
            NodeKind::KeyValue,
            NodeKind::SectionHeader,
            NodeKind::Comment,
        ]
    );
    assert_eq!(doc.text(), input);
}

#[test]
fn test_empty_document() {
    let doc = parse("", Rule::Document).expect("Failed to parse empty input");
    assert!(doc.children().is_empty());

    let doc = parse("\n\n   \n# only comments\n", Rule::Document).expect("Failed to parse blank input");
    assert_eq!(kinds(&doc), vec![NodeKind::Comment]);
}

#[test]
fn test_trailing_garbage_is_rejected() {
    assert_eq!(syntax_offset(parse("key = 1 garbage", Rule::Document)), 8);
    assert!(parse("[error]   if you didn't catch this, your parser is broken", Rule::Document).is_err());
    assert!(parse(r#"string = "Hello World!" Have fun"#, Rule::Document).is_err());
    assert!(parse("number = 3.14  pi <--again forgot the #", Rule::Document).is_err());
}

#[test]
fn test_malformed_multiline_array() {
    let input = r#"array = [
         "This might most likely happen in multiline arrays",
         Like here,
         "or here,
         and here"
]     End of array comment, forgot the #
"#;
    let offset = syntax_offset(parse(input, Rule::Document));
    assert_eq!(offset, input.find("Like").unwrap());
}

#[test]
fn test_statement_needs_its_own_line() {
    assert!(parse("a = 1 b = 2", Rule::Document).is_err());
    assert!(parse("[a] b = 2", Rule::Document).is_err());
    assert!(parse("a = ", Rule::Document).is_err());
    assert!(parse("= 1", Rule::Document).is_err());
}

#[test]
fn test_syntax_error_reports_line_and_expectation() {
    let err = parse("a = 1\nb = @\n", Rule::Document).unwrap_err();
    match err {
        TomeError::SyntaxError { offset, line, column, message, code, .. } => {
            assert_eq!(offset, 10);
            assert_eq!((line, column), (2, 5));
            assert!(message.contains("string"), "message was {}", message);
            assert!(message.contains("'@'"), "message was {}", message);
            assert_eq!(code, Some(101));
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_sub_rule_must_consume_all_input() {
    assert!(parse("1 ", Rule::Integer).is_err());
    assert!(parse("[1] x", Rule::Array).is_err());
}
