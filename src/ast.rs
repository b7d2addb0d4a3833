use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// An ordered mapping level. Insertion order follows the source.
pub type Table = IndexMap<String, Value>;

/// A fully evaluated document is its root table.
pub type Document = Table;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Array(Vec<Value>),
    Table(Table),
}

impl Value {
    /// Name of the value's type as used in error messages and for the
    /// array homogeneity check.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        if let Value::Table(table) = self {
            Some(table)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Follow a dotted path through nested tables. The empty path is `self`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.trim().is_empty() {
            return Some(self);
        }
        path.split('.')
            .try_fold(self, |current, segment| current.as_table()?.get(segment))
    }
}
