use crate::TomeError;
use crate::ast::{Document, Value};
use crate::cst::{NodeKind, SyntaxNode};

mod document;
mod value;

/// Convert a syntax node into its value.
///
/// Literal nodes become scalars or arrays, a document becomes its root
/// table. Keys evaluate to their text, section headers to the list of
/// their segments and key/value pairs to a `[key, value]` pair.
pub fn evaluate(node: &SyntaxNode<'_>) -> Result<Value, TomeError> {
    match node.kind() {
        NodeKind::Document => document::assemble(node).map(Value::Table),
        NodeKind::SectionHeader => Ok(Value::Array(
            document::section_path(node).into_iter().map(Value::String).collect(),
        )),
        NodeKind::KeyValue => {
            let (key, value) = document::key_value(node)?;
            Ok(Value::Array(vec![Value::String(key), value]))
        }
        NodeKind::Key => Ok(Value::String(node.text().to_string())),
        NodeKind::String => Ok(value::string_value(node)),
        NodeKind::Integer => value::integer_value(node),
        NodeKind::Float => value::float_value(node),
        NodeKind::Boolean => Ok(value::boolean_value(node)),
        NodeKind::Timestamp => value::timestamp_value(node),
        NodeKind::Array => value::array_value(node),
        NodeKind::Comment => Err(TomeError::NotAValue {
            kind: node.kind().name().to_string(),
            hint: Some("Comments carry no value".into()),
            code: Some(206),
        }),
    }
}

/// Assemble a document node into its root table.
pub fn evaluate_document(node: &SyntaxNode<'_>) -> Result<Document, TomeError> {
    if node.kind() != NodeKind::Document {
        return Err(TomeError::NotAValue {
            kind: node.kind().name().to_string(),
            hint: Some("Only a document node evaluates to a document".into()),
            code: Some(206),
        });
    }
    document::assemble(node)
}
