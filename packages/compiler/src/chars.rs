/*
 * Character Codes
 *
 * Control characters of the message template grammar and of the emitted
 * JavaScript source.
 */

//! Character constants used throughout the compiler

// Template grammar
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
pub const BAR: char = '|';
pub const BACKSLASH: char = '\\';
pub const UNDERSCORE: char = '_';

// Locale tags
pub const MINUS: char = '-';

// Emitted source
pub const DQ: char = '"';
pub const BT: char = '`';
pub const DOLLAR: char = '$';
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';
pub const COLON: char = ':';
pub const COMMA: char = ',';
pub const SEMICOLON: char = ';';
pub const EQ: char = '=';
pub const GT: char = '>';

/// Check if character is whitespace
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if character is an ASCII digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character can start a JavaScript identifier
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE || ch == DOLLAR
}
