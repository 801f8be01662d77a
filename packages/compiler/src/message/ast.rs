//! Message AST Module
//!
//! The data model shared by the AOT compiler and the JIT builder.

use serde::Serialize;

/// One piece of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Item {
    /// A contiguous literal run.
    Text { value: String },
    /// `{name}` placeholder.
    Named { key: String },
    /// `{0}` placeholder.
    List { index: usize },
    /// `{'...'}` escape, emitted verbatim.
    Literal { value: String },
    /// Linked reference to another message (`@:key` in richer dialects).
    /// Reserved: the parser never produces it and both backends skip it.
    Linked {
        key: String,
        modifier: Option<String>,
    },
}

impl Item {
    pub fn text(value: impl Into<String>) -> Self {
        Item::Text {
            value: value.into(),
        }
    }

    pub fn named(key: impl Into<String>) -> Self {
        Item::Named { key: key.into() }
    }

    pub fn list(index: usize) -> Self {
        Item::List { index }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Item::Literal {
            value: value.into(),
        }
    }

    /// Literal text carried by a `Text` or `Literal` item.
    pub fn static_text(&self) -> Option<&str> {
        match self {
            Item::Text { value } | Item::Literal { value } => Some(value),
            Item::Named { .. } | Item::List { .. } | Item::Linked { .. } => None,
        }
    }
}

/// A single (non-plural) message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "message")]
pub struct Message {
    pub items: Vec<Item>,
}

impl Message {
    /// Never leaves the item list empty: an empty message is one empty `Text`.
    pub fn new(items: Vec<Item>) -> Self {
        if items.is_empty() {
            Message {
                items: vec![Item::text("")],
            }
        } else {
            Message { items }
        }
    }

    /// Static text when the message is exactly one `Text` or `Literal` item.
    pub fn as_static(&self) -> Option<&str> {
        match self.items.as_slice() {
            [only] => only.static_text(),
            _ => None,
        }
    }
}

/// Result of parsing a template: a single message or its plural cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedTemplate {
    Single(Message),
    Plural(Vec<Message>),
}

impl ParsedTemplate {
    pub fn is_plural(&self) -> bool {
        matches!(self, ParsedTemplate::Plural(_))
    }

    /// All cases in order; a single message is one case.
    pub fn cases(&self) -> &[Message] {
        match self {
            ParsedTemplate::Single(message) => std::slice::from_ref(message),
            ParsedTemplate::Plural(cases) => cases,
        }
    }
}
