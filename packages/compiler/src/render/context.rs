//! Interpolation Contexts
//!
//! Caller-owned values looked up while rendering. Contexts are only read.

use crate::compiled::Key;
use indexmap::IndexMap;
use serde_json::Value;
use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

/// Maps placeholder keys to displayable values.
///
/// Keyed maps answer positional keys by their decimal form, so `{0}` reads
/// the `"0"` entry of a map. Sequences answer positional keys only.
pub trait InterpolationContext {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>>;
}

impl<T: InterpolationContext + ?Sized> InterpolationContext for &T {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl InterpolationContext for () {
    fn lookup(&self, _key: &Key) -> Option<Cow<'_, str>> {
        None
    }
}

fn lookup_keyed<'a, V: Display + 'a>(key: &Key, get: impl Fn(&str) -> Option<&'a V>) -> Option<Cow<'a, str>> {
    let value = match key {
        Key::Named(name) => get(name),
        Key::Index(index) => get(index.to_string().as_str()),
    }?;
    Some(Cow::Owned(value.to_string()))
}

impl<K, V, S> InterpolationContext for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        lookup_keyed(key, |name| self.get(name))
    }
}

impl<K, V, S> InterpolationContext for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        lookup_keyed(key, |name| self.get(name))
    }
}

impl<V: Display> InterpolationContext for [V] {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        match key {
            Key::Index(index) => self.get(*index).map(|v| Cow::Owned(v.to_string())),
            Key::Named(_) => None,
        }
    }
}

impl<V: Display> InterpolationContext for Vec<V> {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

impl<V: Display, const N: usize> InterpolationContext for [V; N] {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

/// JSON objects are keyed maps, arrays are positional. Strings render
/// without quotes and `null` renders as nothing.
impl InterpolationContext for Value {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        let value = match (self, key) {
            (Value::Object(map), Key::Named(name)) => map.get(name.as_str()),
            (Value::Object(map), Key::Index(index)) => map.get(&index.to_string()),
            (Value::Array(items), Key::Index(index)) => items.get(*index),
            _ => None,
        }?;
        Some(display_json(value))
    }
}

fn display_json(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Looks in the first context, then in the second.
#[derive(Debug, Clone, Copy)]
pub struct Layered<A, B>(pub A, pub B);

impl<A: InterpolationContext, B: InterpolationContext> InterpolationContext for Layered<A, B> {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        self.0.lookup(key).or_else(|| self.1.lookup(key))
    }
}
