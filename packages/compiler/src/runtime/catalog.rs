//! Message Catalog
//!
//! Compiled messages indexed by locale, then by key.

use crate::compiled::{MessageTree, Translation};
use crate::error::{value_kind, CompileError, Result};
use crate::output::output_jit::JitBuilder;
use crate::logging::Logger;
use indexmap::IndexMap;
use serde_json::Value;

/// Messages of one locale, by key.
pub type LocaleMessages = IndexMap<String, Translation>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    locales: IndexMap<String, LocaleMessages>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a compiled tree of `locale -> key -> message`. Nested key
    /// maps are flattened into dotted keys; data leaves are ignored.
    pub fn from_tree(tree: MessageTree) -> Result<Self> {
        let MessageTree::Map(locales) = tree else {
            return Err(CompileError::InvalidInput {
                kind: "a message tree that is not a locale map",
            });
        };

        let mut messages = Messages::new();
        for (locale, subtree) in locales {
            let MessageTree::Map(entries) = subtree else {
                return Err(CompileError::InvalidCatalog { locale });
            };
            let target = messages.locales.entry(locale).or_default();
            flatten_into(target, None, entries);
        }
        Ok(messages)
    }

    /// JIT-compile a JSON object of `locale -> key -> template`.
    pub fn from_json(value: &Value, logger: &dyn Logger) -> Result<Self> {
        if !value.is_object() {
            return Err(CompileError::InvalidInput {
                kind: value_kind(value),
            });
        }
        Self::from_tree(JitBuilder::new(logger).build(value)?)
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        translation: impl Into<Translation>,
    ) -> Option<Translation> {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), translation.into())
    }

    pub fn get(&self, locale: &str, key: &str) -> Option<&Translation> {
        self.locales.get(locale)?.get(key)
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleMessages> {
        self.locales.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Add every message of `other`, replacing existing keys.
    pub fn merge(&mut self, other: Messages) {
        for (locale, entries) in other.locales {
            self.locales.entry(locale).or_default().extend(entries);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locales.values().all(IndexMap::is_empty)
    }
}

fn flatten_into(target: &mut LocaleMessages, prefix: Option<&str>, entries: IndexMap<String, MessageTree>) {
    for (key, node) in entries {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };
        match node {
            MessageTree::Translation(translation) => {
                target.insert(path, translation);
            }
            MessageTree::Map(nested) => flatten_into(target, Some(path.as_str()), nested),
            MessageTree::List(_) | MessageTree::Data(_) => {}
        }
    }
}
