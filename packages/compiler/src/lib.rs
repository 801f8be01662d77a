#![deny(clippy::all)]

/**
 * i18n message compiler
 *
 * Parses localization templates (`Hello {name}! | {n} items`), compiles them
 * ahead of time into JavaScript source or just in time into in-memory
 * messages, and resolves them per locale at request time.
 */

#[cfg(feature = "napi-bindings")]
use napi::bindgen_prelude::*;
#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod chars;
pub mod compiled;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod output;
pub mod render;
pub mod runtime;

// Re-exports
pub use compiled::{CompiledMessage, Interpolation, Key, MessageTree, PluralGroup, Translation};
pub use config::I18nOptions;
pub use error::{CompileError, Result as CompileResult};
pub use message::{parse, Item, Message, ParsedTemplate};
pub use output::{compile, compile_message, compile_module, jit, jit_message, read_compiled};
pub use render::{evaluate, InterpolationContext, Renderer};
pub use runtime::{FallbackLocale, Messages, Resolved, Resolver, Translator, WarnOn};

/// Compile a JSON-encoded template string or message object into source
#[cfg(feature = "napi-bindings")]
#[napi(js_name = "compile")]
pub fn compile_json(source: String) -> Result<String> {
    let input: serde_json::Value =
        serde_json::from_str(&source).map_err(|e| Error::from_reason(e.to_string()))?;
    output::compile(&input).map_err(|e| Error::from_reason(e.to_string()))
}

/// Compile a JSON message file into an ES module
#[cfg(feature = "napi-bindings")]
#[napi(js_name = "compileModule")]
pub fn compile_module_json(source: String) -> Result<String> {
    let input: serde_json::Value =
        serde_json::from_str(&source).map_err(|e| Error::from_reason(e.to_string()))?;
    output::compile_module(&input).map_err(|e| Error::from_reason(e.to_string()))
}
