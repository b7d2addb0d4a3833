// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::ast::Table;
use crate::{TomeError, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> TomeError {
    TomeError::TypeError {
        message: format!("Expected {}, got {}", expected, value.type_name()),
        hint: Some(format!("Use a {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(type_error("string", &other, 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            other => Err(type_error("integer", &other, 402)),
        }
    }
}

/// Narrower integer types go through `i64` and are range checked.
macro_rules! narrow_integer {
    ($($target:ty),*) => {$(
        impl TryFrom<Value> for $target {
            type Error = TomeError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let n = i64::try_from(value)?;
                <$target>::try_from(n).map_err(|_| TomeError::TypeError {
                    message: format!("Number {} out of range for {}", n, stringify!($target)),
                    hint: Some(format!(
                        "Use a number between {} and {}",
                        <$target>::MIN,
                        <$target>::MAX
                    )),
                    code: Some(403),
                })
            }
        }
    )*};
}

narrow_integer!(i32, u8, u16, u32, u64, usize);

impl TryFrom<Value> for f64 {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Integer(n) => Ok(n as f64),
            other => Err(type_error("float", &other, 404)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for bool {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(ref s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
                Err(TomeError::TypeError {
                    message: format!("Expected boolean, got the string \"{}\"", s),
                    hint: Some("Write true or false without quotes".into()),
                    code: Some(405),
                })
            }
            other => Err(type_error("boolean", &other, 405)),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Timestamp(t) => Ok(t),
            other => Err(type_error("timestamp", &other, 406)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = TomeError>,
{
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(type_error("array", &other, 407)),
        }
    }
}

impl TryFrom<Value> for Table {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(table) => Ok(table),
            other => Err(type_error("table", &other, 408)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = TomeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Table::try_from(value).map(|table| table.into_iter().collect())
    }
}
