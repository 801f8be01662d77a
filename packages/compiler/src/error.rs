//! Compiler Errors
//!
//! Hard failures only. Malformed template text and missing keys never end up
//! here; they degrade to literal text and to the key itself.

use thiserror::Error;

/// Errors surfaced by the compiler, the source reader and catalog building.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiler input is neither a template string nor a key/value mapping.
    #[error("cannot compile {kind}: expected a message string or a key/value mapping")]
    InvalidInput { kind: &'static str },

    /// Compiled source that does not follow the compiled-message contract.
    #[error("invalid compiled source at offset {offset}: {message}")]
    InvalidSource { offset: usize, message: String },

    /// A locale entry of a message tree is not a key/value mapping.
    #[error("messages for locale \"{locale}\" must be a key/value mapping")]
    InvalidCatalog { locale: String },

    /// Malformed options JSON.
    #[error("invalid i18n options: {0}")]
    Config(#[from] serde_json::Error),
}

impl CompileError {
    pub fn invalid_source(offset: usize, message: impl Into<String>) -> Self {
        CompileError::InvalidSource {
            offset,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;

/// Name of a JSON value's kind, for diagnostics.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
