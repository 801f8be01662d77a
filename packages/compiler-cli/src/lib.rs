#![deny(clippy::all)]

/**
 * i18n Compiler CLI
 *
 * Precompiles message files into ES modules for bundlers
 */
pub use i18n_compiler as compiler;

pub mod perform_compile;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
