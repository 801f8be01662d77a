//! Runtime Module
//!
//! Request-time lookup: locale catalogs, the locale resolver, fallback chains,
//! plural selection and the translator facade built from them.

pub mod catalog;
pub mod fallback;
pub mod locale;
pub mod plural;
pub mod resolver;
pub mod translator;

pub use catalog::{LocaleMessages, Messages};
pub use fallback::FallbackLocale;
pub use locale::dialect_chain;
pub use resolver::{Resolved, Resolver, WarnOn};
pub use translator::{LocalTranslator, Translator};
