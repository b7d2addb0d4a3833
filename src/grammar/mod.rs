// Author: Dustin Pilgrim
// License: MIT

use tracing::{debug, trace};

use crate::TomeError;
use crate::cst::SyntaxNode;
use crate::utils::line_column;

mod literals;
mod scanner;
mod structure;

/// Deepest array nesting the grammar accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Productions a parse can be anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    #[default]
    Document,
    SectionHeader,
    KeyValue,
    Key,
    Value,
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Array,
    Comment,
}

/// PEG-style recursive descent state.
///
/// Rules return `None` on mismatch and the caller rewinds `pos`. Every
/// mismatch is recorded against the furthest offset seen so far, which is
/// what a failed parse reports.
pub struct Grammar<'a> {
    input: &'a str,
    pos: usize,
    furthest: usize,
    expected: Vec<&'static str>,
    depth: usize,
    overflow: Option<usize>,
}

impl<'a> Grammar<'a> {
    pub fn new(input: &'a str) -> Self {
        Grammar {
            input,
            pos: 0,
            furthest: 0,
            expected: Vec::new(),
            depth: 0,
            overflow: None,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Match `rule` against the whole input.
    pub fn parse(mut self, rule: Rule) -> Result<SyntaxNode<'a>, TomeError> {
        trace!(?rule, bytes = self.input.len(), "applying start rule");

        let node = match rule {
            Rule::Document => structure::document(&mut self),
            Rule::SectionHeader => structure::section_header(&mut self),
            Rule::KeyValue => structure::key_value(&mut self),
            Rule::Key => structure::key(&mut self),
            Rule::Value => structure::value(&mut self),
            Rule::String => literals::string(&mut self),
            Rule::Integer => literals::integer(&mut self),
            Rule::Float => literals::float(&mut self),
            Rule::Boolean => literals::boolean(&mut self),
            Rule::Timestamp => literals::timestamp(&mut self),
            Rule::Array => structure::array(&mut self),
            Rule::Comment => structure::comment(&mut self),
        };

        match node {
            Some(node) if self.at_end() => Ok(node),
            Some(_) => {
                self.fail("end of input");
                Err(self.into_error())
            }
            None => Err(self.into_error()),
        }
    }

    fn into_error(self) -> TomeError {
        if let Some(offset) = self.overflow {
            let (line, column) = line_column(self.input, offset);
            debug!(offset, "array nesting limit exceeded");
            return TomeError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                offset,
                line,
                column,
                hint: Some("Flatten the nested arrays".into()),
                code: Some(102),
            };
        }

        let (line, column) = line_column(self.input, self.furthest);
        let found = match self.input[self.furthest..].chars().next() {
            Some('\n') => "end of line".to_string(),
            Some(c) => format!("'{}'", c.escape_default()),
            None => "end of input".to_string(),
        };
        let wanted = if self.expected.is_empty() {
            "valid input".to_string()
        } else {
            self.expected.join(" or ")
        };
        debug!(offset = self.furthest, expected = ?self.expected, "syntax failure");

        TomeError::SyntaxError {
            message: format!("Expected {}, found {}", wanted, found),
            offset: self.furthest,
            line,
            column,
            hint: None,
            code: Some(101),
        }
    }
}

/// Parse `text` starting from `rule`.
pub fn parse(text: &str, rule: Rule) -> Result<SyntaxNode<'_>, TomeError> {
    Grammar::new(text).parse(rule)
}

#[cfg(test)]
mod tests;
