//! Renderers
//!
//! Everything that turns the segments and keys of a compiled message into
//! output. [`evaluate`] is the one place where the order of concatenation is
//! defined: segment, value, segment, ..., segment.

use crate::compiled::{CompiledMessage, Key};
use crate::render::context::InterpolationContext;

/// Strategy invoked by a compiled message with its literal segments and its
/// interpolation keys. `parts.len() == keys.len() + 1`.
pub trait Renderer {
    type Output;

    fn render(&mut self, parts: &[String], keys: &[Key]) -> Self::Output;
}

impl<F, T> Renderer for F
where
    F: FnMut(&[String], &[Key]) -> T,
{
    type Output = T;

    fn render(&mut self, parts: &[String], keys: &[Key]) -> T {
        self(parts, keys)
    }
}

/// Joins segments with values looked up in a context. Missing values
/// contribute nothing.
pub struct StringRenderer<'c, C: ?Sized> {
    context: &'c C,
}

impl<'c, C: InterpolationContext + ?Sized> StringRenderer<'c, C> {
    pub fn new(context: &'c C) -> Self {
        StringRenderer { context }
    }
}

impl<C: InterpolationContext + ?Sized> Renderer for StringRenderer<'_, C> {
    type Output = String;

    fn render(&mut self, parts: &[String], keys: &[Key]) -> String {
        let mut out = String::new();
        let mut parts = parts.iter();
        if let Some(first) = parts.next() {
            out.push_str(first);
        }
        for key in keys {
            if let Some(value) = self.context.lookup(key) {
                out.push_str(&value);
            }
            if let Some(part) = parts.next() {
                out.push_str(part);
            }
        }
        out
    }
}

/// Evaluate a compiled message against an interpolation context.
pub fn evaluate<C: InterpolationContext + ?Sized>(compiled: &CompiledMessage, context: &C) -> String {
    match compiled {
        CompiledMessage::Static(text) => text.clone(),
        CompiledMessage::Interpolated(interpolation) => {
            interpolation.render(&mut StringRenderer::new(context))
        }
    }
}

/// One piece of structured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    /// Where the content for a placeholder goes.
    Slot(Key),
}

/// Produces text fragments and placeholder slots instead of a string, for
/// callers that map placeholders onto their own content. Empty segments are
/// dropped.
#[derive(Debug, Default)]
pub struct FragmentRenderer;

impl FragmentRenderer {
    pub fn new() -> Self {
        FragmentRenderer
    }
}

impl Renderer for FragmentRenderer {
    type Output = Vec<Fragment>;

    fn render(&mut self, parts: &[String], keys: &[Key]) -> Vec<Fragment> {
        let mut fragments = Vec::with_capacity(parts.len() + keys.len());
        let mut parts = parts.iter();
        push_text(&mut fragments, parts.next());
        for key in keys {
            fragments.push(Fragment::Slot(key.clone()));
            push_text(&mut fragments, parts.next());
        }
        fragments
    }
}

fn push_text(fragments: &mut Vec<Fragment>, text: Option<&String>) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        fragments.push(Fragment::Text(text.clone()));
    }
}
