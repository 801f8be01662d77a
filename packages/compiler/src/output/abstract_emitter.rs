//! Abstract Emitter Module
//!
//! Line/indent bookkeeping and the JavaScript printer for the output AST.

use crate::chars;
use crate::output::output_ast as o;

const INDENT_WITH: &str = "  ";

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
        }
    }
}

pub struct EmitterVisitorContext {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl EmitterVisitorContext {
    /// `lines` is never empty: it starts with one line and only grows.
    pub fn create_root() -> Self {
        EmitterVisitorContext::new(0)
    }

    pub fn new(indent: usize) -> Self {
        EmitterVisitorContext {
            lines: vec![EmittedLine::new(indent)],
            indent,
        }
    }

    fn current_line_mut(&mut self) -> &mut EmittedLine {
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    pub fn println(&mut self, last_part: &str) {
        self.print(last_part, true);
    }

    pub fn line_is_empty(&self) -> bool {
        self.lines.last().map(|line| line.parts.is_empty()).unwrap_or(true)
    }

    pub fn print(&mut self, part: &str, new_line: bool) {
        if !part.is_empty() {
            self.current_line_mut().parts.push(part.to_string());
        }
        if new_line {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            self.current_line_mut().indent = self.indent;
        }
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if self.line_is_empty() {
            self.current_line_mut().indent = self.indent;
        }
    }

    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(|l| {
                if !l.parts.is_empty() {
                    format!("{}{}", create_indent(l.indent), l.parts.join(""))
                } else {
                    String::new()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn create_indent(count: usize) -> String {
    INDENT_WITH.repeat(count)
}

/// Double-quoted string literal with JSON escaping. Object keys are always
/// written this way too.
pub fn escape_string(input: &str) -> String {
    serde_json::Value::String(input.to_string()).to_string()
}

/// Raw text of a template literal whose cooked value is `input`.
pub fn escape_template_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    let mut chars_iter = input.chars().peekable();
    while let Some(ch) = chars_iter.next() {
        match ch {
            chars::BACKSLASH => escaped.push_str("\\\\"),
            chars::BT => escaped.push_str("\\`"),
            chars::DOLLAR if chars_iter.peek() == Some(&chars::LBRACE) => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Prints output AST nodes as JavaScript.
#[derive(Debug, Default)]
pub struct JsEmitter;

impl JsEmitter {
    pub fn new() -> Self {
        JsEmitter
    }

    pub fn visit_all_statements(&mut self, statements: &[o::Statement], ctx: &mut EmitterVisitorContext) {
        for statement in statements {
            self.visit_statement(statement, ctx);
        }
    }

    pub fn visit_statement(&mut self, statement: &o::Statement, ctx: &mut EmitterVisitorContext) {
        match statement {
            o::Statement::ExportDefault(expr) => {
                ctx.print("export default ", false);
                self.visit_expression(expr, ctx);
                ctx.println(";");
            }
            o::Statement::Expression(expr) => {
                self.visit_expression(expr, ctx);
                ctx.println(";");
            }
        }
    }

    pub fn visit_expression(&mut self, expr: &o::Expression, ctx: &mut EmitterVisitorContext) {
        match expr {
            o::Expression::Literal(e) => self.visit_literal_expr(e, ctx),
            o::Expression::ArrowFunction(e) => self.visit_arrow_function_expr(e, ctx),
            o::Expression::TaggedTemplate(e) => self.visit_tagged_template_expr(e, ctx),
            o::Expression::ReadVar(e) => self.visit_read_var_expr(e, ctx),
            o::Expression::LiteralArray(e) => self.visit_literal_array_expr(e, ctx),
            o::Expression::LiteralMap(e) => self.visit_literal_map_expr(e, ctx),
        }
    }

    fn visit_literal_expr(&mut self, expr: &o::LiteralExpr, ctx: &mut EmitterVisitorContext) {
        ctx.print(&expr.value.to_string(), false);
    }

    fn visit_read_var_expr(&mut self, expr: &o::ReadVarExpr, ctx: &mut EmitterVisitorContext) {
        ctx.print(&expr.name, false);
    }

    fn visit_arrow_function_expr(&mut self, expr: &o::ArrowFunctionExpr, ctx: &mut EmitterVisitorContext) {
        match expr.params.as_slice() {
            [single] => ctx.print(single, false),
            params => {
                ctx.print("(", false);
                ctx.print(&params.join(", "), false);
                ctx.print(")", false);
            }
        }
        ctx.print(" => ", false);
        self.visit_expression(&expr.body, ctx);
    }

    fn visit_tagged_template_expr(&mut self, expr: &o::TaggedTemplateExpr, ctx: &mut EmitterVisitorContext) {
        self.visit_expression(&expr.tag, ctx);
        self.visit_template_literal_expr(&expr.template, ctx);
    }

    fn visit_template_literal_expr(&mut self, expr: &o::TemplateLiteralExpr, ctx: &mut EmitterVisitorContext) {
        ctx.print("`", false);
        for (i, element) in expr.elements.iter().enumerate() {
            ctx.print(&escape_template_text(element), false);
            if let Some(expression) = expr.expressions.get(i) {
                ctx.print("${", false);
                self.visit_expression(expression, ctx);
                ctx.print("}", false);
            }
        }
        ctx.print("`", false);
    }

    fn visit_literal_array_expr(&mut self, expr: &o::LiteralArrayExpr, ctx: &mut EmitterVisitorContext) {
        ctx.print("[", false);
        for (i, entry) in expr.entries.iter().enumerate() {
            if i > 0 {
                ctx.print(", ", false);
            }
            self.visit_expression(entry, ctx);
        }
        ctx.print("]", false);
    }

    fn visit_literal_map_expr(&mut self, expr: &o::LiteralMapExpr, ctx: &mut EmitterVisitorContext) {
        if expr.entries.is_empty() {
            ctx.print("{}", false);
            return;
        }
        ctx.println("{");
        ctx.inc_indent();
        let last = expr.entries.len() - 1;
        for (i, entry) in expr.entries.iter().enumerate() {
            ctx.print(&escape_string(&entry.key), false);
            ctx.print(": ", false);
            self.visit_expression(&entry.value, ctx);
            ctx.println(if i < last { "," } else { "" });
        }
        ctx.dec_indent();
        ctx.print("}", false);
    }
}

/// Print one expression as source.
pub fn emit_expression(expr: &o::Expression) -> String {
    let mut ctx = EmitterVisitorContext::create_root();
    JsEmitter::new().visit_expression(expr, &mut ctx);
    ctx.to_source()
}

/// Print statements as source.
pub fn emit_statements(statements: &[o::Statement]) -> String {
    let mut ctx = EmitterVisitorContext::create_root();
    JsEmitter::new().visit_all_statements(statements, &mut ctx);
    ctx.to_source()
}
