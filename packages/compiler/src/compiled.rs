//! Compiled Message Module
//!
//! In-memory form of compiled messages, as built by the JIT builder or read
//! back from AOT output. Values are immutable once built and are `Send + Sync`,
//! so one tree can serve any number of concurrent evaluations.

use crate::render::Renderer;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// Interpolation key: a named placeholder or a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Named(String),
    Index(usize),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Named(name.to_string())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Literal segments interleaved with interpolation keys.
///
/// Segments and keys alternate, starting and ending with a segment, so
/// `parts.len() == keys.len() + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    parts: Vec<String>,
    keys: Vec<Key>,
}

impl Interpolation {
    /// Pads `parts` with empty segments when it is too short and merges any
    /// surplus segments into the last one.
    pub fn new(mut parts: Vec<String>, keys: Vec<Key>) -> Self {
        let wanted = keys.len() + 1;
        if parts.len() > wanted {
            let tail: String = parts.drain(wanted..).collect();
            if let Some(last) = parts.last_mut() {
                last.push_str(&tail);
            }
        }
        while parts.len() < wanted {
            parts.push(String::new());
        }
        Interpolation { parts, keys }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Hand the segments and keys to a renderer and return what it produces.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.parts, &self.keys)
    }
}

/// Output of either backend for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledMessage {
    /// Fast path: no placeholders.
    Static(String),
    Interpolated(Interpolation),
}

impl CompiledMessage {
    pub fn is_static(&self) -> bool {
        matches!(self, CompiledMessage::Static(_))
    }

    pub fn as_static(&self) -> Option<&str> {
        match self {
            CompiledMessage::Static(text) => Some(text),
            CompiledMessage::Interpolated(_) => None,
        }
    }

    /// A static message renders as a single segment with no keys.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> R::Output {
        match self {
            CompiledMessage::Static(text) => renderer.render(std::slice::from_ref(text), &[]),
            CompiledMessage::Interpolated(interpolation) => interpolation.render(renderer),
        }
    }
}

impl From<&str> for CompiledMessage {
    fn from(text: &str) -> Self {
        CompiledMessage::Static(text.to_string())
    }
}

/// Cases of a plural group, in cardinal-table order.
pub type PluralGroup = SmallVec<[CompiledMessage; 3]>;

/// What a message key maps to: one message or a plural group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(CompiledMessage),
    Plural(PluralGroup),
}

impl Translation {
    pub fn is_plural(&self) -> bool {
        matches!(self, Translation::Plural(_))
    }

    /// The message for `count`; a single message ignores the count.
    pub fn select(&self, count: i64) -> Option<&CompiledMessage> {
        match self {
            Translation::Single(message) => Some(message),
            Translation::Plural(cases) => crate::runtime::plural::select(cases.as_slice(), count),
        }
    }

    /// First case of a plural group, or the single message.
    pub fn first(&self) -> Option<&CompiledMessage> {
        match self {
            Translation::Single(message) => Some(message),
            Translation::Plural(cases) => cases.first(),
        }
    }
}

impl From<CompiledMessage> for Translation {
    fn from(message: CompiledMessage) -> Self {
        Translation::Single(message)
    }
}

/// Compiled form of a nested input: template leaves are compiled, every
/// other leaf is kept as data.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageTree {
    Translation(Translation),
    Map(IndexMap<String, MessageTree>),
    List(Vec<MessageTree>),
    Data(serde_json::Value),
}

impl MessageTree {
    pub fn as_translation(&self) -> Option<&Translation> {
        match self {
            MessageTree::Translation(translation) => Some(translation),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, MessageTree>> {
        match self {
            MessageTree::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Follow a path of map keys.
    pub fn get_path(&self, path: &[&str]) -> Option<&MessageTree> {
        path.iter()
            .try_fold(self, |node, segment| node.as_map()?.get(*segment))
    }
}
