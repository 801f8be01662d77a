//! Fallback Locales
//!
//! A fallback setting is a locale, an ordered list of locales, or a map from
//! locale (searched with dialect stripping) to a nested setting. Every form is
//! normalized to one ordered chain before lookup starts.

use crate::runtime::locale::dialect_chain;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackLocale {
    Locale(String),
    Chain(Vec<String>),
    ByLocale(IndexMap<String, FallbackLocale>),
}

impl FallbackLocale {
    /// No fallback at all.
    pub fn none() -> Self {
        FallbackLocale::Chain(Vec::new())
    }

    /// Ordered fallback locales for `locale`.
    pub fn chain_for(&self, locale: &str) -> Vec<String> {
        match self {
            FallbackLocale::Locale(fallback) => vec![fallback.clone()],
            FallbackLocale::Chain(chain) => chain.clone(),
            FallbackLocale::ByLocale(map) => dialect_chain(locale)
                .find_map(|candidate| map.get(candidate))
                .map(|nested| nested.chain_for(locale))
                .unwrap_or_default(),
        }
    }
}

impl Default for FallbackLocale {
    fn default() -> Self {
        FallbackLocale::none()
    }
}

impl From<&str> for FallbackLocale {
    fn from(locale: &str) -> Self {
        FallbackLocale::Locale(locale.to_string())
    }
}

impl From<Vec<&str>> for FallbackLocale {
    fn from(chain: Vec<&str>) -> Self {
        FallbackLocale::Chain(chain.into_iter().map(str::to_string).collect())
    }
}
