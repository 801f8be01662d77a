//! Output AOT Module
//!
//! Ahead-of-time compilation of templates into JavaScript source.
//!
//! A message without placeholders becomes a string literal. An interpolating
//! message becomes a closure over a renderer:
//!
//! ```text
//! Hello {name}! You have {0} new messages.
//! i => i`Hello ${"name"}! You have ${0} new messages.`
//! ```
//!
//! Plural groups become array literals and nested inputs become object and
//! array literals with every template leaf compiled this way.

use crate::compiled::Key;
use crate::error::Result;
use crate::logging::{ConsoleLogger, Logger};
use crate::message::Message;
use crate::output::abstract_emitter::{emit_expression, emit_statements};
use crate::output::emit_plan::{EmitPlan, MessageSink};
use crate::output::output_ast as o;
use serde_json::Value;

/// Name of the renderer parameter of emitted closures.
pub const RENDERER_PARAM: &str = "i";

/// Builds output AST nodes.
#[derive(Debug, Default)]
pub struct SourceSink;

impl MessageSink for SourceSink {
    type Message = o::Expression;
    type Output = o::Expression;

    fn static_message(&mut self, text: String) -> o::Expression {
        o::literal(text)
    }

    fn interpolation(&mut self, parts: Vec<String>, keys: Vec<Key>) -> o::Expression {
        let expressions = keys
            .into_iter()
            .map(|key| match key {
                Key::Named(name) => o::literal(name),
                Key::Index(index) => o::literal(index),
            })
            .collect();
        o::arrow_fn(
            vec![RENDERER_PARAM.to_string()],
            o::tagged_template(o::variable(RENDERER_PARAM), parts, expressions),
        )
    }

    fn single(&mut self, message: o::Expression) -> o::Expression {
        message
    }

    fn plural(&mut self, cases: Vec<o::Expression>) -> o::Expression {
        o::literal_arr(cases)
    }

    fn map(&mut self, entries: Vec<(String, o::Expression)>) -> o::Expression {
        o::literal_map(entries)
    }

    fn list(&mut self, items: Vec<o::Expression>) -> o::Expression {
        o::literal_arr(items)
    }

    fn data(&mut self, value: &Value) -> o::Expression {
        o::literal(value.clone())
    }
}

/// AOT compiler reporting diagnostics to `logger`.
pub struct AotCompiler<'a> {
    plan: EmitPlan<'a>,
}

impl<'a> AotCompiler<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        AotCompiler {
            plan: EmitPlan::new(logger),
        }
    }

    /// Compile a template string or a nested key/value mapping.
    pub fn compile(&self, input: &Value) -> Result<String> {
        Ok(emit_expression(&self.to_expression(input)?))
    }

    /// Compile into an ES module whose default export is the compiled input.
    pub fn compile_module(&self, input: &Value) -> Result<String> {
        let expr = self.to_expression(input)?;
        Ok(emit_statements(&[o::Statement::ExportDefault(expr)]))
    }

    pub fn compile_message(&self, template: &str) -> String {
        emit_expression(&self.plan.emit_template(template, &mut SourceSink))
    }

    pub fn compile_single(&self, message: &Message) -> String {
        emit_expression(&self.plan.emit_single(message, &mut SourceSink))
    }

    fn to_expression(&self, input: &Value) -> Result<o::Expression> {
        self.plan.emit_input(input, &mut SourceSink)
    }
}

/// Compile a template string or a nested key/value mapping into source.
pub fn compile(input: &Value) -> Result<String> {
    AotCompiler::new(&ConsoleLogger::default()).compile(input)
}

/// Compile into `export default <compiled>;`.
pub fn compile_module(input: &Value) -> Result<String> {
    AotCompiler::new(&ConsoleLogger::default()).compile_module(input)
}

/// Compile one template string into source.
pub fn compile_message(template: &str) -> String {
    AotCompiler::new(&ConsoleLogger::default()).compile_message(template)
}
