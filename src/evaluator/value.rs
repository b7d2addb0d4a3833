use chrono::{TimeZone, Utc};

use super::*;
use crate::utils::excerpt;

pub(super) fn string_value(node: &SyntaxNode) -> Value {
    let text = node.text();
    let body = &text[1..text.len() - 1];
    Value::String(unescape(body))
}

/// Decode escapes in one left-to-right pass so every escape is read exactly
/// once: `\\u0041` is a backslash followed by `u0041`, and the backslash
/// produced by `\u005C` is never combined with the character after it.
pub(crate) fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{8}'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('f') => out.push('\u{c}'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    // the grammar only lets valid scalars through
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

pub(super) fn integer_value(node: &SyntaxNode) -> Result<Value, TomeError> {
    node.text()
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|e| TomeError::InvalidNumber {
            literal: excerpt(node.text(), 40),
            message: format!("{} (integers are 64-bit signed)", e),
            offset: node.offset(),
            line: 0,
            column: 0,
            hint: Some(format!("Use a value between {} and {}", i64::MIN, i64::MAX)),
            code: Some(204),
        })
}

pub(super) fn float_value(node: &SyntaxNode) -> Result<Value, TomeError> {
    node.text()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|e| TomeError::InvalidNumber {
            literal: excerpt(node.text(), 40),
            message: e.to_string(),
            offset: node.offset(),
            line: 0,
            column: 0,
            hint: None,
            code: Some(204),
        })
}

pub(super) fn boolean_value(node: &SyntaxNode) -> Value {
    Value::Bool(node.text() == "true")
}

/// `YYYY-MM-DDTHH:MM:SSZ`; the grammar guarantees the digit positions.
pub(super) fn timestamp_value(node: &SyntaxNode) -> Result<Value, TomeError> {
    let text = node.text();
    let invalid = |message: String| TomeError::InvalidTimestamp {
        literal: text.to_string(),
        message,
        offset: node.offset(),
        line: 0,
        column: 0,
        hint: Some("Timestamps look like 1979-05-27T07:32:00Z".into()),
        code: Some(203),
    };

    let field = |range: std::ops::Range<usize>| -> Result<u32, TomeError> {
        text.get(range.clone())
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| invalid(format!("Malformed field at {}..{}", range.start, range.end)))
    };

    let year = field(0..4)?;
    let month = field(5..7)?;
    let day = field(8..10)?;
    let hour = field(11..13)?;
    let minute = field(14..16)?;
    let second = field(17..19)?;

    Utc.with_ymd_and_hms(year as i32, month, day, hour, minute, second)
        .single()
        .map(Value::Timestamp)
        .ok_or_else(|| invalid("Not a valid calendar date and time".into()))
}

/// Elements in source order. All elements must share one type; nested
/// arrays count as "array" whatever they hold.
pub(super) fn array_value(node: &SyntaxNode) -> Result<Value, TomeError> {
    let mut items: Vec<Value> = Vec::new();

    for (index, child) in node.significant_children().enumerate() {
        let item = evaluate(child)?;
        if let Some(first) = items.first() {
            if first.type_name() != item.type_name() {
                return Err(TomeError::MixedArray {
                    expected: first.type_name().to_string(),
                    found: item.type_name().to_string(),
                    index,
                    offset: child.offset(),
                    line: 0,
                    column: 0,
                    hint: Some("Arrays hold values of a single type".into()),
                    code: Some(205),
                });
            }
        }
        items.push(item);
    }

    Ok(Value::Array(items))
}
