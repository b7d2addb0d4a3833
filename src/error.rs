use std::fmt;

use crate::utils::line_column;

/// The main error type for TOME parsing, evaluation and config access.
/// Semantic variants carry `line: 0` until `parse_document` locates them
/// against the input text.
#[derive(Debug, Clone, PartialEq)]
pub enum TomeError {
    /// The grammar could not match the input; `offset` is the furthest
    /// position any rule reached.
    SyntaxError {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    NestingTooDeep {
        limit: usize,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the same `[a.b.c]` path is declared twice.
    DuplicateSection {
        path: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a key is assigned twice in the same table.
    /// `path` is the enclosing section, empty at the root.
    DuplicateKey {
        key: String,
        path: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidTimestamp {
        literal: String,
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidNumber {
        literal: String,
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an array mixes element types.
    MixedArray {
        expected: String,
        found: String,
        index: usize,
        offset: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotAValue {
        kind: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when input bytes are not valid UTF-8.
    EncodingError {
        message: String,
        path: String,
        offset: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingPath {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl TomeError {
    /// Byte offset into the parsed text, for errors that have one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TomeError::SyntaxError { offset, .. }
            | TomeError::NestingTooDeep { offset, .. }
            | TomeError::DuplicateSection { offset, .. }
            | TomeError::DuplicateKey { offset, .. }
            | TomeError::InvalidTimestamp { offset, .. }
            | TomeError::InvalidNumber { offset, .. }
            | TomeError::MixedArray { offset, .. }
            | TomeError::EncodingError { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            TomeError::SyntaxError { code, .. }
            | TomeError::NestingTooDeep { code, .. }
            | TomeError::DuplicateSection { code, .. }
            | TomeError::DuplicateKey { code, .. }
            | TomeError::InvalidTimestamp { code, .. }
            | TomeError::InvalidNumber { code, .. }
            | TomeError::MixedArray { code, .. }
            | TomeError::NotAValue { code, .. }
            | TomeError::FileError { code, .. }
            | TomeError::EncodingError { code, .. }
            | TomeError::MissingPath { code, .. }
            | TomeError::TypeError { code, .. }
            | TomeError::ExportError { code, .. } => *code,
        }
    }

    /// Fill in line and column for semantic errors raised by the evaluator,
    /// which only knows node offsets.
    pub(crate) fn locate(mut self, input: &str) -> Self {
        if let Some(at) = self.offset() {
            let (l, c) = line_column(input, at);
            match &mut self {
                TomeError::DuplicateSection { line, column, .. }
                | TomeError::DuplicateKey { line, column, .. }
                | TomeError::InvalidTimestamp { line, column, .. }
                | TomeError::InvalidNumber { line, column, .. }
                | TomeError::MixedArray { line, column, .. } => {
                    *line = l;
                    *column = c;
                }
                _ => {}
            }
        }
        self
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

/// Errors from a bare `evaluate` call have no line yet (line 0), only the
/// byte offset of the node.
fn location(offset: usize, line: usize, column: usize) -> String {
    if line == 0 {
        format!("at offset {}", offset)
    } else {
        format!("at {}:{}", line, column)
    }
}

impl fmt::Display for TomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomeError::SyntaxError { message, offset, line, column, hint, code } =>
                write!(f, "[TOME] Syntax Error at {}:{} (offset {}): {}{}",
                    line, column, offset, message, suffix(hint, code)),
            TomeError::NestingTooDeep { limit, offset, line, column, hint, code } =>
                write!(f, "[TOME] Nesting deeper than {} levels at {}:{} (offset {}){}",
                    limit, line, column, offset, suffix(hint, code)),
            TomeError::DuplicateSection { path, offset, line, column, hint, code } =>
                write!(f, "[TOME] Section [{}] already defined, redeclared {}{}",
                    path, location(*offset, *line, *column), suffix(hint, code)),
            TomeError::DuplicateKey { key, path, offset, line, column, hint, code } => {
                if path.is_empty() {
                    write!(f, "[TOME] Duplicate value for key '{}' {}{}",
                        key, location(*offset, *line, *column), suffix(hint, code))
                } else {
                    write!(f, "[TOME] Duplicate value for key '{}' in [{}] {}{}",
                        key, path, location(*offset, *line, *column), suffix(hint, code))
                }
            }
            TomeError::InvalidTimestamp { literal, message, offset, line, column, hint, code } =>
                write!(f, "[TOME] Invalid timestamp '{}' {}: {}{}",
                    literal, location(*offset, *line, *column), message, suffix(hint, code)),
            TomeError::InvalidNumber { literal, message, offset, line, column, hint, code } =>
                write!(f, "[TOME] Invalid number '{}' {}: {}{}",
                    literal, location(*offset, *line, *column), message, suffix(hint, code)),
            TomeError::MixedArray { expected, found, index, offset, line, column, hint, code } =>
                write!(f, "[TOME] Array element {} is {} but the array holds {} values {}{}",
                    index, found, expected, location(*offset, *line, *column), suffix(hint, code)),
            TomeError::NotAValue { kind, hint, code } =>
                write!(f, "[TOME] A {} node has no value{}", kind, suffix(hint, code)),
            TomeError::FileError { message, path, hint, code } =>
                write!(f, "[TOME] File Error '{}': {}{}", path, message, suffix(hint, code)),
            TomeError::EncodingError { message, path, offset, hint, code } =>
                write!(f, "[TOME] Encoding Error '{}' at byte {}: {}{}",
                    path, offset, message, suffix(hint, code)),
            TomeError::MissingPath { path, hint, code } =>
                write!(f, "[TOME] Path '{}' not found in configuration{}", path, suffix(hint, code)),
            TomeError::TypeError { message, hint, code } =>
                write!(f, "[TOME] Type Error: {}{}", message, suffix(hint, code)),
            TomeError::ExportError { message, hint, code } =>
                write!(f, "[TOME] Export Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for TomeError {}
