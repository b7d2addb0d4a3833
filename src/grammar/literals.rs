use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use super::scanner::is_control;
use crate::cst::NodeKind;

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z")
        .expect("timestamp pattern compiles")
});

pub(super) fn string<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    if !g.eat('"', "string") {
        return None;
    }

    loop {
        match g.peek() {
            Some('"') => {
                g.bump();
                break;
            }
            Some('\\') => {
                if !escape(g) {
                    return None;
                }
            }
            Some(c) if is_control(c) => {
                g.fail("closing quote");
                return None;
            }
            Some(_) => {
                g.bump();
            }
            None => {
                g.fail("closing quote");
                return None;
            }
        }
    }

    Some(SyntaxNode::leaf(NodeKind::String, g.since(start), start))
}

fn escape(g: &mut Grammar) -> bool {
    g.bump(); // consume '\'
    match g.peek() {
        Some('b' | 't' | 'n' | 'f' | 'r' | '"' | '\\' | '/') => {
            g.bump();
            true
        }
        Some('u') => {
            g.bump();
            unicode_escape(g)
        }
        _ => {
            g.fail("escape sequence");
            false
        }
    }
}

fn unicode_escape(g: &mut Grammar) -> bool {
    let hex = g.rest().chars().take(4).take_while(char::is_ascii_hexdigit).count();
    if hex < 4 {
        g.pos += hex;
        g.fail("hex digit");
        return false;
    }

    let scalar = u32::from_str_radix(&g.rest()[..4], 16)
        .ok()
        .and_then(char::from_u32);
    if scalar.is_none() {
        // surrogate halves have no char
        g.fail("unicode scalar value");
        return false;
    }

    g.pos += 4;
    true
}

fn sign(g: &mut Grammar) {
    if let Some('+' | '-') = g.peek() {
        g.bump();
    }
}

pub(super) fn integer<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    sign(g);
    if g.digits() == 0 {
        return None;
    }
    Some(SyntaxNode::leaf(NodeKind::Integer, g.since(start), start))
}

pub(super) fn float<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    sign(g);
    if g.digits() == 0 || !g.eat('.', "decimal point") || g.digits() == 0 {
        return None;
    }
    Some(SyntaxNode::leaf(NodeKind::Float, g.since(start), start))
}

pub(super) fn boolean<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    if g.eat_str("true", "boolean") || g.eat_str("false", "boolean") {
        Some(SyntaxNode::leaf(NodeKind::Boolean, g.since(start), start))
    } else {
        None
    }
}

pub(super) fn timestamp<'a>(g: &mut Grammar<'a>) -> Option<SyntaxNode<'a>> {
    let start = g.pos;
    match TIMESTAMP.find(g.rest()) {
        Some(m) => {
            g.pos += m.end();
            Some(SyntaxNode::leaf(NodeKind::Timestamp, g.since(start), start))
        }
        None => {
            g.fail("timestamp");
            None
        }
    }
}
