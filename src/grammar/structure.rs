use super::*;
use super::literals;
use super::scanner::is_key_char;
use crate::cst::NodeKind;

type Alternative<'a> = fn(&mut Grammar<'a>) -> Option<SyntaxNode<'a>>;

pub(super) fn document<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    let mut children = Vec::new();

    while !g.at_end() {
        if !line(g, &mut children) {
            return None;
        }
    }

    Some(SyntaxNode::branch(NodeKind::Document, g.since(start), start, children))
}

/// One physical line: an optional statement, an optional comment, then a
/// line break or the end of input.
fn line<'a>(g: &mut Grammar<'a>, children: &mut Vec<SyntaxNode<'a>>) -> bool {
    g.skip_spaces();

    match g.peek() {
        Some('[') => match section_header(g) {
            Some(node) => children.push(node),
            None => return false,
        },
        Some('#' | '\r' | '\n') | None => {}
        Some(_) => match key_value(g) {
            Some(node) => children.push(node),
            None => return false,
        },
    }

    line_end(g, children)
}

fn line_end<'a>(g: &mut Grammar<'a>, children: &mut Vec<SyntaxNode<'a>>) -> bool {
    g.skip_spaces();
    if g.peek() == Some('#') {
        if let Some(node) = comment(g) {
            children.push(node);
        }
    }

    if g.at_end() || g.newline() {
        return true;
    }
    g.fail("comment");
    false
}

pub(super) fn comment<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    if !g.eat('#', "comment") {
        return None;
    }
    while let Some(c) = g.peek() {
        if c == '\n' || g.rest().starts_with("\r\n") {
            break;
        }
        g.bump();
    }
    Some(SyntaxNode::leaf(NodeKind::Comment, g.since(start), start))
}

pub(super) fn key<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    match g.peek() {
        Some(c) if c != '#' && is_key_char(c) => {}
        _ => {
            g.fail("key");
            return None;
        }
    }
    while let Some(c) = g.peek() {
        if !is_key_char(c) {
            break;
        }
        g.bump();
    }
    Some(SyntaxNode::leaf(NodeKind::Key, g.since(start), start))
}

pub(super) fn section_header<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    if !g.eat('[', "section header") {
        return None;
    }

    g.skip_spaces();
    let mut segments = vec![key(g)?];
    g.skip_spaces();
    while g.peek() == Some('.') {
        g.bump();
        g.skip_spaces();
        segments.push(key(g)?);
        g.skip_spaces();
    }

    if !g.eat(']', "']'") {
        g.fail("'.'");
        return None;
    }
    Some(SyntaxNode::branch(NodeKind::SectionHeader, g.since(start), start, segments))
}

pub(super) fn key_value<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    let name = key(g)?;
    g.skip_spaces();
    if !g.eat('=', "'='") {
        return None;
    }
    g.skip_spaces();
    let value = value(g)?;
    Some(SyntaxNode::branch(NodeKind::KeyValue, g.since(start), start, vec![name, value]))
}

/// Ordered choice over the literal rules. Timestamps come before numbers and
/// floats before integers so the longer match wins.
pub(super) fn value<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let alternatives: [Alternative<'a>; 6] = [
        |g| literals::string(g),
        |g| literals::timestamp(g),
        |g| literals::float(g),
        |g| literals::integer(g),
        |g| literals::boolean(g),
        |g| array(g),
    ];

    let start = g.pos;
    for alternative in alternatives {
        if let Some(node) = alternative(g) {
            return Some(node);
        }
        g.rewind(start);
        if g.aborted() {
            break;
        }
    }
    None
}

pub(super) fn array<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    if !g.eat('[', "array") {
        return None;
    }
    if !g.enter_nesting() {
        return None;
    }

    let items = array_items(g);
    g.leave_nesting();
    let mut children = items?;

    array_space(g, &mut children);
    if !g.eat(']', "']'") {
        return None;
    }
    Some(SyntaxNode::branch(NodeKind::Array, g.since(start), start, children))
}

/// Values separated by commas, with an optional trailing comma. Stops in
/// front of the closing bracket.
fn array_items<'a>(g: &mut Grammar<'a>) -> Option<Vec<SyntaxNode<'a>>> {
    let mut children = Vec::new();
    array_space(g, &mut children);
    if g.peek() == Some(']') {
        return Some(children);
    }

    loop {
        children.push(value(g)?);
        array_space(g, &mut children);
        if !g.eat(',', "','") {
            break;
        }
        array_space(g, &mut children);
        if g.peek() == Some(']') {
            break;
        }
    }
    Some(children)
}

/// Inside brackets newlines and comments are insignificant.
fn array_space<'a>(g: &mut Grammar<'a>, children: &mut Vec<SyntaxNode<'a>>) {
    loop {
        g.skip_spaces();
        match g.peek() {
            Some('#') => {
                if let Some(node) = comment(g) {
                    children.push(node);
                }
            }
            Some('\n') => {
                g.bump();
            }
            Some('\r') if g.rest().starts_with("\r\n") => {
                g.pos += 2;
            }
            _ => break,
        }
    }
}
