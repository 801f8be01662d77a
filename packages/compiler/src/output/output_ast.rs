//! Output AST Module
//!
//! The slice of JavaScript the AOT compiler emits: scalar literals, the
//! `i => i`...`` closure of an interpolating message, array and object
//! literals, and the `export default` wrapper of a compiled module.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    ArrowFunction(ArrowFunctionExpr),
    TaggedTemplate(TaggedTemplateExpr),
    ReadVar(ReadVarExpr),
    LiteralArray(LiteralArrayExpr),
    LiteralMap(LiteralMapExpr),
}

/// A JSON scalar: string, number, boolean or null.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunctionExpr {
    pub params: Vec<String>,
    pub body: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedTemplateExpr {
    pub tag: Box<Expression>,
    pub template: TemplateLiteralExpr,
}

/// `elements.len() == expressions.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteralExpr {
    pub elements: Vec<String>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadVarExpr {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralArrayExpr {
    pub entries: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralMapEntry {
    pub key: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralMapExpr {
    pub entries: Vec<LiteralMapEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    ExportDefault(Expression),
    Expression(Expression),
}

pub fn literal(value: impl Into<Value>) -> Expression {
    Expression::Literal(LiteralExpr {
        value: value.into(),
    })
}

pub fn variable(name: impl Into<String>) -> Expression {
    Expression::ReadVar(ReadVarExpr { name: name.into() })
}

pub fn arrow_fn(params: Vec<String>, body: Expression) -> Expression {
    Expression::ArrowFunction(ArrowFunctionExpr {
        params,
        body: Box::new(body),
    })
}

pub fn tagged_template(tag: Expression, elements: Vec<String>, expressions: Vec<Expression>) -> Expression {
    Expression::TaggedTemplate(TaggedTemplateExpr {
        tag: Box::new(tag),
        template: TemplateLiteralExpr {
            elements,
            expressions,
        },
    })
}

pub fn literal_arr(entries: Vec<Expression>) -> Expression {
    Expression::LiteralArray(LiteralArrayExpr { entries })
}

pub fn literal_map(entries: Vec<(String, Expression)>) -> Expression {
    Expression::LiteralMap(LiteralMapExpr {
        entries: entries
            .into_iter()
            .map(|(key, value)| LiteralMapEntry { key, value })
            .collect(),
    })
}
