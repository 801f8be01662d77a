//! Output JIT Module
//!
//! Just-in-time construction of compiled messages. Runs the same emit plan as
//! the AOT compiler but builds the compiled values directly, so evaluating a
//! JIT result gives the same string as loading and evaluating AOT output.

use crate::compiled::{CompiledMessage, Interpolation, Key, MessageTree, Translation};
use crate::error::Result;
use crate::logging::{ConsoleLogger, Logger};
use crate::message::{parse, Message, ParsedTemplate};
use crate::output::emit_plan::{EmitPlan, MessageSink};
use serde_json::Value;

/// Builds [`CompiledMessage`]s and [`MessageTree`]s.
#[derive(Debug, Default)]
pub struct ClosureSink;

impl MessageSink for ClosureSink {
    type Message = CompiledMessage;
    type Output = MessageTree;

    fn static_message(&mut self, text: String) -> CompiledMessage {
        CompiledMessage::Static(text)
    }

    fn interpolation(&mut self, parts: Vec<String>, keys: Vec<Key>) -> CompiledMessage {
        CompiledMessage::Interpolated(Interpolation::new(parts, keys))
    }

    fn single(&mut self, message: CompiledMessage) -> MessageTree {
        MessageTree::Translation(Translation::Single(message))
    }

    fn plural(&mut self, cases: Vec<CompiledMessage>) -> MessageTree {
        MessageTree::Translation(Translation::Plural(cases.into()))
    }

    fn map(&mut self, entries: Vec<(String, MessageTree)>) -> MessageTree {
        MessageTree::Map(entries.into_iter().collect())
    }

    fn list(&mut self, items: Vec<MessageTree>) -> MessageTree {
        MessageTree::List(items)
    }

    fn data(&mut self, value: &Value) -> MessageTree {
        MessageTree::Data(value.clone())
    }
}

/// JIT builder reporting diagnostics to `logger`.
pub struct JitBuilder<'a> {
    plan: EmitPlan<'a>,
}

impl<'a> JitBuilder<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        JitBuilder {
            plan: EmitPlan::new(logger),
        }
    }

    /// Build a template string or a nested key/value mapping.
    pub fn build(&self, input: &Value) -> Result<MessageTree> {
        self.plan.emit_input(input, &mut ClosureSink)
    }

    pub fn build_message(&self, template: &str) -> Translation {
        match parse(template) {
            ParsedTemplate::Single(message) => Translation::Single(self.build_single(&message)),
            ParsedTemplate::Plural(cases) => {
                Translation::Plural(cases.iter().map(|case| self.build_single(case)).collect())
            }
        }
    }

    pub fn build_single(&self, message: &Message) -> CompiledMessage {
        self.plan.emit_single(message, &mut ClosureSink)
    }
}

/// Build a template string or a nested key/value mapping in memory.
pub fn jit(input: &Value) -> Result<MessageTree> {
    JitBuilder::new(&ConsoleLogger::default()).build(input)
}

/// Build one template string in memory.
pub fn jit_message(template: &str) -> Translation {
    JitBuilder::new(&ConsoleLogger::default()).build_message(template)
}
