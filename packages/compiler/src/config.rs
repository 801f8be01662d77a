//! I18n Options
//!
//! Runtime configuration of a [`Translator`](crate::runtime::Translator),
//! readable from JSON:
//!
//! ```json
//! { "locale": "nl", "fallbackLocale": ["de", "en"], "silentFallbackWarn": true }
//! ```

use crate::error::Result;
use crate::runtime::fallback::FallbackLocale;
use crate::runtime::resolver::WarnOn;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nOptions {
    /// Active locale.
    pub locale: String,
    pub fallback_locale: FallbackLocale,
    /// Do not warn when a key is missing for the active locale.
    pub silent_translation_warn: bool,
    /// Do not warn when a fallback locale supplies a message.
    pub silent_fallback_warn: bool,
}

impl Default for I18nOptions {
    fn default() -> Self {
        I18nOptions {
            locale: "en".to_string(),
            fallback_locale: FallbackLocale::from("en"),
            silent_translation_warn: false,
            silent_fallback_warn: false,
        }
    }
}

impl I18nOptions {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn warn_on(&self) -> WarnOn {
        let mut flags = WarnOn::empty();
        flags.set(WarnOn::MISS, !self.silent_translation_warn);
        flags.set(WarnOn::FALLBACK, !self.silent_fallback_warn);
        flags
    }

    /// Silence both warnings.
    pub fn silent(mut self) -> Self {
        self.silent_translation_warn = true;
        self.silent_fallback_warn = true;
        self
    }
}
