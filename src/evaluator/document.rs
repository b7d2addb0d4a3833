use std::collections::HashSet;

use tracing::trace;

use super::*;
use crate::ast::Table;

/// Where key/value pairs currently land, plus every section declared so far.
/// Lives for one `assemble` call.
#[derive(Debug, Default)]
struct Cursor {
    path: Vec<String>,
    declared: HashSet<String>,
}

impl Cursor {
    fn canonical(&self) -> String {
        self.path.join(".")
    }
}

pub(super) fn assemble(node: &SyntaxNode) -> Result<Document, TomeError> {
    let mut root = Table::new();
    let mut cursor = Cursor::default();

    for statement in node.children() {
        match statement.kind() {
            NodeKind::SectionHeader => enter_section(&mut root, &mut cursor, statement)?,
            NodeKind::KeyValue => {
                let (key, value) = key_value(statement)?;
                insert(&mut root, &cursor, key, value, statement)?;
            }
            NodeKind::Comment => {}
            other => {
                return Err(TomeError::NotAValue {
                    kind: other.name().to_string(),
                    hint: Some("Documents hold only sections, key/value pairs and comments".into()),
                    code: Some(206),
                });
            }
        }
    }

    trace!(keys = root.len(), sections = cursor.declared.len(), "document assembled");
    Ok(root)
}

pub(super) fn section_path(node: &SyntaxNode) -> Vec<String> {
    node.children()
        .iter()
        .map(|segment| segment.text().to_string())
        .collect()
}

pub(super) fn key_value(node: &SyntaxNode) -> Result<(String, Value), TomeError> {
    let mut parts = node.significant_children();
    match (parts.next(), parts.next()) {
        (Some(key), Some(value)) => Ok((key.text().to_string(), evaluate(value)?)),
        _ => Err(TomeError::NotAValue {
            kind: node.kind().name().to_string(),
            hint: Some("A key/value pair needs a key and a value".into()),
            code: Some(206),
        }),
    }
}

/// Reset to the root, reject a repeated path, then create any missing
/// tables along it.
fn enter_section(root: &mut Table, cursor: &mut Cursor, header: &SyntaxNode) -> Result<(), TomeError> {
    cursor.path = section_path(header);
    let canonical = cursor.canonical();

    if !cursor.declared.insert(canonical.clone()) {
        return Err(TomeError::DuplicateSection {
            path: canonical,
            offset: header.offset(),
            line: 0,
            column: 0,
            hint: Some("Merge the two sections into one".into()),
            code: Some(201),
        });
    }

    trace!(path = %canonical, "entering section");
    descend(root, &cursor.path, header).map(|_| ())
}

fn insert(
    root: &mut Table,
    cursor: &Cursor,
    key: String,
    value: Value,
    statement: &SyntaxNode,
) -> Result<(), TomeError> {
    let level = descend(root, &cursor.path, statement)?;
    if level.contains_key(&key) {
        return Err(TomeError::DuplicateKey {
            key,
            path: cursor.canonical(),
            offset: statement.offset(),
            line: 0,
            column: 0,
            hint: Some("Each key may be assigned once per table".into()),
            code: Some(202),
        });
    }
    level.insert(key, value);
    Ok(())
}

/// Walk `path` from the root, creating empty tables for missing segments.
/// A segment that already holds a non-table value is a key conflict.
fn descend<'t>(root: &'t mut Table, path: &[String], at: &SyntaxNode) -> Result<&'t mut Table, TomeError> {
    let mut level = root;
    for (depth, segment) in path.iter().enumerate() {
        let entry = level
            .entry(segment.clone())
            .or_insert_with(|| Value::Table(Table::new()));
        level = match entry {
            Value::Table(table) => table,
            _ => {
                return Err(TomeError::DuplicateKey {
                    key: segment.clone(),
                    path: path[..depth].join("."),
                    offset: at.offset(),
                    line: 0,
                    column: 0,
                    hint: Some(format!("'{}' already holds a value and cannot be a section", segment)),
                    code: Some(202),
                });
            }
        };
    }
    Ok(level)
}
