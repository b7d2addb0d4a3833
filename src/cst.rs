use std::fmt;
use std::ops::Range;

/// Grammar rule a syntax node was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    SectionHeader,
    KeyValue,
    Key,
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Array,
    Comment,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::SectionHeader => "section header",
            NodeKind::KeyValue => "key/value pair",
            NodeKind::Key => "key",
            NodeKind::String => "string",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::Boolean => "boolean",
            NodeKind::Timestamp => "timestamp",
            NodeKind::Array => "array",
            NodeKind::Comment => "comment",
        }
    }

    /// Whether the node can stand in value position.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::String
                | NodeKind::Integer
                | NodeKind::Float
                | NodeKind::Boolean
                | NodeKind::Timestamp
                | NodeKind::Array
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the concrete syntax tree.
///
/// Borrows its matched text from the input, so a tree never outlives the
/// string it was parsed from. Only the grammar creates nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode<'a> {
    kind: NodeKind,
    text: &'a str,
    offset: usize,
    children: Vec<SyntaxNode<'a>>,
}

impl<'a> SyntaxNode<'a> {
    pub(crate) fn leaf(kind: NodeKind, text: &'a str, offset: usize) -> Self {
        Self { kind, text, offset, children: Vec::new() }
    }

    pub(crate) fn branch(
        kind: NodeKind,
        text: &'a str,
        offset: usize,
        children: Vec<SyntaxNode<'a>>,
    ) -> Self {
        Self { kind, text, offset, children }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Exact source text matched by the rule.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the match in the parsed input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    pub fn children(&self) -> &[SyntaxNode<'a>] {
        &self.children
    }

    /// Children other than comments.
    pub fn significant_children(&self) -> impl Iterator<Item = &SyntaxNode<'a>> {
        self.children.iter().filter(|c| c.kind != NodeKind::Comment)
    }
}
