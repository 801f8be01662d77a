//! Locale Resolver
//!
//! Finds the compiled message for a key and a locale. The order of attempts:
//!
//! 1. local messages, then global messages, each searched with dialect
//!    stripping (`en-US` before `en`);
//! 2. the same search for every locale of the fallback chain, in order.
//!
//! The first hit wins. When nothing matches, the key itself is returned, so
//! an untranslated message renders as its identifier. Lookup never fails.

use crate::compiled::Translation;
use crate::logging::Logger;
use crate::runtime::catalog::Messages;
use crate::runtime::fallback::FallbackLocale;
use crate::runtime::locale::dialect_chain;
use bitflags::bitflags;
use once_cell::sync::Lazy;

bitflags! {
    /// Which resolution events are reported to the logger.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WarnOn: u8 {
        /// The key is missing for the requested locale.
        const MISS = 0b01;
        /// A fallback locale supplied the message.
        const FALLBACK = 0b10;
    }
}

/// Outcome of a resolution: a message, or the key standing in for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'m, 'k> {
    Message(&'m Translation),
    Key(&'k str),
}

impl<'m> Resolved<'m, '_> {
    pub fn translation(&self) -> Option<&'m Translation> {
        match *self {
            Resolved::Message(translation) => Some(translation),
            Resolved::Key(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Message(_))
    }
}

static NO_MESSAGES: Lazy<Messages> = Lazy::new(Messages::new);

/// Read-only view over the message maps and fallback setting of one request.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    local: &'a Messages,
    global: &'a Messages,
    fallback: &'a FallbackLocale,
    warn_on: WarnOn,
    logger: &'a dyn Logger,
}

impl<'a> Resolver<'a> {
    pub fn new(global: &'a Messages, fallback: &'a FallbackLocale, logger: &'a dyn Logger) -> Self {
        Resolver {
            local: &NO_MESSAGES,
            global,
            fallback,
            warn_on: WarnOn::all(),
            logger,
        }
    }

    /// Search `local` before the global messages.
    pub fn with_local(mut self, local: &'a Messages) -> Self {
        self.local = local;
        self
    }

    pub fn warn_on(mut self, warn_on: WarnOn) -> Self {
        self.warn_on = warn_on;
        self
    }

    /// Resolve `key` for `locale`, falling back as described above.
    pub fn resolve<'k>(&self, key: &'k str, locale: &str) -> Resolved<'a, 'k> {
        if let Some(found) = self.lookup(key, locale) {
            return Resolved::Message(found);
        }
        if self.warn_on.contains(WarnOn::MISS) {
            self.logger.warn(&format!(
                "No message \"{}\" found for locale \"{}\"!",
                key, locale
            ));
        }

        for fallback in self.fallback.chain_for(locale) {
            if fallback == locale {
                continue;
            }
            if let Some(found) = self.lookup(key, &fallback) {
                if self.warn_on.contains(WarnOn::FALLBACK) {
                    self.logger.warn(&format!(
                        "Using fallback locale \"{}\" for key \"{}\"!",
                        fallback, key
                    ));
                }
                return Resolved::Message(found);
            }
        }

        Resolved::Key(key)
    }

    /// Direct lookup for one locale, without fallback locales.
    pub fn lookup(&self, key: &str, locale: &str) -> Option<&'a Translation> {
        lookup_in(self.local, locale, key).or_else(|| lookup_in(self.global, locale, key))
    }
}

fn lookup_in<'m>(messages: &'m Messages, locale: &str, key: &str) -> Option<&'m Translation> {
    dialect_chain(locale).find_map(|candidate| messages.get(candidate, key))
}
