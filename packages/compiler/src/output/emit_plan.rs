//! Emit Plan Module
//!
//! The single traversal behind both backends. Parsing, fast-path detection,
//! the segment/key decomposition and the walk over nested inputs all happen
//! here; a [`MessageSink`] only decides what each step produces (source
//! text for the AOT compiler, in-memory values for the JIT builder). Both
//! backends therefore agree by construction.

use crate::compiled::Key;
use crate::error::{value_kind, CompileError, Result};
use crate::logging::Logger;
use crate::message::{parse, Item, Message, ParsedTemplate};
use serde_json::Value;

/// What one message compiles to, before a sink gives it a concrete form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePlan {
    Static(String),
    /// `parts.len() == keys.len() + 1`.
    Interpolated { parts: Vec<String>, keys: Vec<Key> },
}

/// Backend-specific construction of compiled messages and trees.
pub trait MessageSink {
    /// One compiled message.
    type Message;
    /// A compiled template or nested input.
    type Output;

    fn static_message(&mut self, text: String) -> Self::Message;
    fn interpolation(&mut self, parts: Vec<String>, keys: Vec<Key>) -> Self::Message;
    fn single(&mut self, message: Self::Message) -> Self::Output;
    fn plural(&mut self, cases: Vec<Self::Message>) -> Self::Output;
    fn map(&mut self, entries: Vec<(String, Self::Output)>) -> Self::Output;
    fn list(&mut self, items: Vec<Self::Output>) -> Self::Output;
    /// Non-template leaf, passed through unchanged.
    fn data(&mut self, value: &Value) -> Self::Output;
}

pub struct EmitPlan<'a> {
    logger: &'a dyn Logger,
}

impl<'a> EmitPlan<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        EmitPlan { logger }
    }

    /// Decompose a message into its static text or its segments and keys.
    pub fn plan(&self, message: &Message) -> MessagePlan {
        if let Some(text) = message.as_static() {
            return MessagePlan::Static(text.to_string());
        }

        let mut parts = vec![String::new()];
        let mut keys = Vec::new();
        for item in &message.items {
            match item {
                Item::Text { value } | Item::Literal { value } => {
                    if let Some(current) = parts.last_mut() {
                        current.push_str(value);
                    }
                }
                Item::Named { key } => {
                    keys.push(Key::Named(key.clone()));
                    parts.push(String::new());
                }
                Item::List { index } => {
                    keys.push(Key::Index(*index));
                    parts.push(String::new());
                }
                Item::Linked { key, .. } => {
                    self.logger.warn(&format!(
                        "Linked message \"{}\" is not supported and was skipped",
                        key
                    ));
                }
            }
        }
        if keys.is_empty() {
            return MessagePlan::Static(parts.concat());
        }
        MessagePlan::Interpolated { parts, keys }
    }

    pub fn emit_single<S: MessageSink>(&self, message: &Message, sink: &mut S) -> S::Message {
        match self.plan(message) {
            MessagePlan::Static(text) => sink.static_message(text),
            MessagePlan::Interpolated { parts, keys } => sink.interpolation(parts, keys),
        }
    }

    pub fn emit_parsed<S: MessageSink>(&self, parsed: &ParsedTemplate, sink: &mut S) -> S::Output {
        match parsed {
            ParsedTemplate::Single(message) => {
                let compiled = self.emit_single(message, sink);
                sink.single(compiled)
            }
            ParsedTemplate::Plural(cases) => {
                let compiled = cases.iter().map(|case| self.emit_single(case, sink)).collect();
                sink.plural(compiled)
            }
        }
    }

    pub fn emit_template<S: MessageSink>(&self, template: &str, sink: &mut S) -> S::Output {
        self.emit_parsed(&parse(template), sink)
    }

    /// Walk a nested value. An array of templates that are each a single
    /// message is a plural group written out case by case.
    pub fn emit_value<S: MessageSink>(&self, value: &Value, sink: &mut S) -> S::Output {
        match value {
            Value::String(template) => self.emit_template(template, sink),
            Value::Object(map) => {
                let entries = map
                    .iter()
                    .map(|(key, value)| (key.clone(), self.emit_value(value, sink)))
                    .collect();
                sink.map(entries)
            }
            Value::Array(items) => match plural_cases(items) {
                Some(cases) => {
                    let compiled = cases.iter().map(|case| self.emit_single(case, sink)).collect();
                    sink.plural(compiled)
                }
                None => {
                    let compiled = items.iter().map(|item| self.emit_value(item, sink)).collect();
                    sink.list(compiled)
                }
            },
            Value::Null | Value::Bool(_) | Value::Number(_) => sink.data(value),
        }
    }

    /// Top-level entry: a template string or a key/value mapping.
    pub fn emit_input<S: MessageSink>(&self, input: &Value, sink: &mut S) -> Result<S::Output> {
        match input {
            Value::String(_) | Value::Object(_) => Ok(self.emit_value(input, sink)),
            other => Err(CompileError::InvalidInput {
                kind: value_kind(other),
            }),
        }
    }
}

fn plural_cases(items: &[Value]) -> Option<Vec<Message>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::String(template) => match parse(template) {
                ParsedTemplate::Single(message) => Some(message),
                ParsedTemplate::Plural(_) => None,
            },
            _ => None,
        })
        .collect()
}
