//! Message Parser Module
//!
//! Turns a template string into the message AST. Parsing never fails: text
//! that does not match the placeholder grammar stays literal text.

use crate::chars;
use crate::message::ast::{Item, Message, ParsedTemplate};
use once_cell::sync::Lazy;
use regex::Regex;

/// `{ name }`, `{0}` or `{'literal'}`.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\s*(?:(?P<ident>[A-Za-z0-9_.]+)|'(?P<literal>[^']*)')\s*\}").unwrap()
});

/// A literal token starting exactly at the scan position.
static LITERAL_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{\s*'[^']*'\s*\}").unwrap());

/// Parse a template into a single message, or into its plural cases when it
/// contains an unescaped `|`.
pub fn parse(template: &str) -> ParsedTemplate {
    let mut cases: Vec<Message> = split_plural(template)
        .into_iter()
        .map(parse_single)
        .collect();
    if cases.len() == 1 {
        ParsedTemplate::Single(cases.remove(0))
    } else {
        ParsedTemplate::Plural(cases)
    }
}

/// Split a template on every `|` that is neither escaped as `\|` nor part of
/// a `{'...'}` literal token. Segments are trimmed.
pub fn split_plural(template: &str) -> Vec<&str> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        if byte == chars::LBRACE as u8 {
            if let Some(token) = LITERAL_TOKEN_RE.find(&template[index..]) {
                index += token.end();
                continue;
            }
        } else if byte == chars::BAR as u8 && (index == 0 || bytes[index - 1] != chars::BACKSLASH as u8) {
            segments.push(template[start..index].trim());
            start = index + 1;
        }
        index += 1;
    }
    segments.push(template[start..].trim());
    segments
}

/// Tokenize one plural case.
pub fn parse_single(source: &str) -> Message {
    let mut items = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        let Some(caps) = PLACEHOLDER_RE.captures(rest) else {
            push_text(&mut items, rest);
            break;
        };
        let whole = caps.get(0).unwrap();
        push_text(&mut items, &rest[..whole.start()]);

        if let Some(literal) = caps.name("literal") {
            items.push(Item::literal(literal.as_str()));
        } else if let Some(ident) = caps.name("ident") {
            items.push(placeholder(ident.as_str().trim()));
        }
        rest = &rest[whole.end()..];
    }

    Message::new(items)
}

fn placeholder(ident: &str) -> Item {
    if ident.chars().all(chars::is_digit) {
        if let Ok(index) = ident.parse::<usize>() {
            return Item::list(index);
        }
    }
    Item::named(ident)
}

fn push_text(items: &mut Vec<Item>, text: &str) {
    if text.is_empty() {
        return;
    }
    items.push(Item::text(unescape_bar(text)));
}

/// `\|` in text stands for a literal `|`.
fn unescape_bar(text: &str) -> String {
    text.replace("\\|", "|")
}
