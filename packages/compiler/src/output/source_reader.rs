//! Source Reader Module
//!
//! Loads text produced by the AOT compiler back into a [`MessageTree`]: string
//! literals, `i => i`...`` closures, array and object literals, JSON scalars
//! and an optional `export default ...;` wrapper. Anything else is rejected
//! with [`CompileError::InvalidSource`].
//!
//! Arrays whose entries are all compiled messages are read as plural groups,
//! matching how the emit plan treats arrays of templates.

use crate::chars;
use crate::compiled::{CompiledMessage, Interpolation, Key, MessageTree, Translation};
use crate::error::{CompileError, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Read compiled source (or a compiled module) into memory.
pub fn read_compiled(source: &str) -> Result<MessageTree> {
    let mut reader = SourceReader::new(source);
    let node = reader.read_module()?;
    Ok(node.into_tree())
}

enum Node {
    Message(CompiledMessage),
    Tree(MessageTree),
}

impl Node {
    fn into_tree(self) -> MessageTree {
        match self {
            Node::Message(message) => MessageTree::Translation(Translation::Single(message)),
            Node::Tree(tree) => tree,
        }
    }
}

struct SourceReader<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> SourceReader<'s> {
    fn new(src: &'s str) -> Self {
        SourceReader { src, pos: 0 }
    }

    fn read_module(&mut self) -> Result<Node> {
        self.skip_whitespace();
        if self.rest().starts_with("export") {
            self.pos += "export".len();
            self.skip_whitespace();
            self.expect_word("default")?;
        }
        let node = self.read_value()?;
        self.skip_whitespace();
        self.eat(chars::SEMICOLON);
        self.skip_whitespace();
        if self.pos < self.src.len() {
            return Err(self.error("unexpected trailing source"));
        }
        Ok(node)
    }

    fn read_value(&mut self) -> Result<Node> {
        self.skip_whitespace();
        match self.peek() {
            Some(chars::DQ) => Ok(Node::Message(CompiledMessage::Static(self.read_string()?))),
            Some(chars::LBRACKET) => self.read_array(),
            Some(chars::LBRACE) => self.read_object(),
            Some(ch) if ch == chars::MINUS || chars::is_digit(ch) => {
                Ok(Node::Tree(MessageTree::Data(self.read_number()?)))
            }
            Some(ch) if chars::is_identifier_start(ch) => {
                let word = self.read_identifier();
                match word {
                    "true" => Ok(Node::Tree(MessageTree::Data(Value::Bool(true)))),
                    "false" => Ok(Node::Tree(MessageTree::Data(Value::Bool(false)))),
                    "null" => Ok(Node::Tree(MessageTree::Data(Value::Null))),
                    param => self.read_closure(param).map(Node::Message),
                }
            }
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of source")),
        }
    }

    fn read_array(&mut self) -> Result<Node> {
        self.expect(chars::LBRACKET)?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eat(chars::RBRACKET) {
                break;
            }
            items.push(self.read_value()?);
            self.skip_whitespace();
            if !self.eat(chars::COMMA) {
                self.skip_whitespace();
                self.expect(chars::RBRACKET)?;
                break;
            }
        }

        let all_messages = !items.is_empty() && items.iter().all(|n| matches!(n, Node::Message(_)));
        if all_messages {
            let cases = items
                .into_iter()
                .filter_map(|n| match n {
                    Node::Message(message) => Some(message),
                    Node::Tree(_) => None,
                })
                .collect();
            return Ok(Node::Tree(MessageTree::Translation(Translation::Plural(cases))));
        }
        Ok(Node::Tree(MessageTree::List(
            items.into_iter().map(Node::into_tree).collect(),
        )))
    }

    fn read_object(&mut self) -> Result<Node> {
        self.expect(chars::LBRACE)?;
        let mut map = IndexMap::new();
        loop {
            self.skip_whitespace();
            if self.eat(chars::RBRACE) {
                break;
            }
            let key = match self.peek() {
                Some(chars::DQ) => self.read_string()?,
                Some(ch) if chars::is_identifier_start(ch) => self.read_identifier().to_string(),
                _ => return Err(self.error("expected an object key")),
            };
            self.skip_whitespace();
            self.expect(chars::COLON)?;
            let value = self.read_value()?;
            map.insert(key, value.into_tree());
            self.skip_whitespace();
            if !self.eat(chars::COMMA) {
                self.skip_whitespace();
                self.expect(chars::RBRACE)?;
                break;
            }
        }
        Ok(Node::Tree(MessageTree::Map(map)))
    }

    /// `i => i`...``, the parameter already consumed.
    fn read_closure(&mut self, param: &str) -> Result<CompiledMessage> {
        self.skip_whitespace();
        self.expect(chars::EQ)?;
        self.expect(chars::GT)?;
        self.skip_whitespace();
        let tag_start = self.pos;
        if !self.peek().is_some_and(chars::is_identifier_start) {
            return Err(self.error("expected the renderer call"));
        }
        let tag = self.read_identifier();
        if tag != param {
            self.pos = tag_start;
            return Err(self.error("closure must call its own renderer parameter"));
        }
        self.skip_whitespace();
        let (parts, keys) = self.read_template()?;
        Ok(CompiledMessage::Interpolated(Interpolation::new(parts, keys)))
    }

    fn read_template(&mut self) -> Result<(Vec<String>, Vec<Key>)> {
        self.expect(chars::BT)?;
        let mut parts = vec![String::new()];
        let mut keys = Vec::new();
        loop {
            let Some(ch) = self.next_char() else {
                return Err(self.error("unterminated template literal"));
            };
            match ch {
                chars::BT => break,
                chars::BACKSLASH => {
                    let cooked = self.read_escape()?;
                    current(&mut parts).push(cooked);
                }
                chars::DOLLAR if self.peek() == Some(chars::LBRACE) => {
                    self.pos += 1;
                    self.skip_whitespace();
                    keys.push(self.read_key()?);
                    self.skip_whitespace();
                    self.expect(chars::RBRACE)?;
                    parts.push(String::new());
                }
                other => current(&mut parts).push(other),
            }
        }
        Ok((parts, keys))
    }

    fn read_key(&mut self) -> Result<Key> {
        match self.peek() {
            Some(chars::DQ) => Ok(Key::Named(self.read_string()?)),
            Some(ch) if chars::is_digit(ch) => {
                let start = self.pos;
                while self.peek().is_some_and(chars::is_digit) {
                    self.pos += 1;
                }
                self.src[start..self.pos]
                    .parse()
                    .map(Key::Index)
                    .map_err(|_| self.error("invalid positional key"))
            }
            _ => Err(self.error("expected an interpolation key")),
        }
    }

    fn read_escape(&mut self) -> Result<char> {
        let Some(ch) = self.next_char() else {
            return Err(self.error("unterminated escape sequence"));
        };
        Ok(match ch {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'u' => return self.read_unicode_escape(),
            other => other,
        })
    }

    fn read_unicode_escape(&mut self) -> Result<char> {
        let src = self.src;
        let hex = if self.eat(chars::LBRACE) {
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            let hex = &src[start..self.pos];
            self.expect(chars::RBRACE)?;
            hex
        } else {
            let end = (self.pos + 4).min(src.len());
            let hex = src.get(self.pos..end).unwrap_or("");
            self.pos = end;
            hex
        };
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error("invalid unicode escape"))
    }

    /// A double-quoted JSON string.
    fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        self.expect(chars::DQ)?;
        let mut escaped = false;
        loop {
            let Some(ch) = self.next_char() else {
                return Err(self.error("unterminated string literal"));
            };
            match ch {
                _ if escaped => escaped = false,
                chars::BACKSLASH => escaped = true,
                chars::DQ => break,
                _ => {}
            }
        }
        serde_json::from_str(&self.src[start..self.pos])
            .map_err(|e| CompileError::invalid_source(start, e.to_string()))
    }

    fn read_number(&mut self) -> Result<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| chars::is_digit(c) || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.pos += 1;
        }
        serde_json::from_str(&self.src[start..self.pos])
            .map_err(|e| CompileError::invalid_source(start, e.to_string()))
    }

    fn read_identifier(&mut self) -> &'s str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| chars::is_identifier_start(c) || chars::is_digit(c))
        {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn expect_word(&mut self, word: &str) -> Result<()> {
        if self.rest().starts_with(word) {
            self.pos += word.len();
            Ok(())
        } else {
            Err(self.error(format!("expected `{}`", word)))
        }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{}`", expected)))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(chars::is_whitespace) {
            self.pos += self.peek().map_or(1, char::len_utf8);
        }
    }

    fn error(&self, message: impl Into<String>) -> CompileError {
        CompileError::invalid_source(self.pos, message)
    }
}

fn current(parts: &mut [String]) -> &mut String {
    // `parts` is created with one segment and only grows.
    let last = parts.len() - 1;
    &mut parts[last]
}
