pub mod ast;
pub mod config;
pub mod cst;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod grammar;
pub mod utils;

use tracing::debug;

pub use ast::{Document, Table, Value};
pub use config::TomeConfig;
pub use cst::{NodeKind, SyntaxNode};
pub use error::TomeError;
pub use evaluator::evaluate;
pub use grammar::Rule;

/// Parse and evaluate a complete document.
///
/// # Examples
/// ```
/// let doc = tome_cfg::parse_document("[server]\nport = 8080\n")?;
/// assert_eq!(doc["server"].lookup("port"), Some(&tome_cfg::Value::Integer(8080)));
/// # Ok::<(), tome_cfg::TomeError>(())
/// ```
pub fn parse_document(text: &str) -> Result<Document, TomeError> {
    debug!(bytes = text.len(), "parsing document");
    let tree = grammar::parse(text, Rule::Document)?;
    evaluator::evaluate_document(&tree).map_err(|e| e.locate(text))
}

/// Parse `text` anchored on a single grammar rule, without evaluating it.
pub fn parse_rule(text: &str, rule: Rule) -> Result<SyntaxNode<'_>, TomeError> {
    grammar::parse(text, rule)
}
