//! Message Module
//!
//! Template grammar: parsing template strings into the message AST.

pub mod ast;
pub mod parser;

pub use ast::{Item, Message, ParsedTemplate};
pub use parser::{parse, parse_single, split_plural};
