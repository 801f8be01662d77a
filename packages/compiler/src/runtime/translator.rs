//! Translator
//!
//! Resolve, select and evaluate in one call: the string-producing entry
//! point most callers want. Holds the global messages and the active locale;
//! a [`LocalTranslator`] adds component-local messages on top.

use crate::compiled::Key;
use crate::config::I18nOptions;
use crate::logging::{ConsoleLogger, Logger};
use crate::render::{evaluate, InterpolationContext, Layered};
use crate::runtime::catalog::Messages;
use crate::runtime::fallback::FallbackLocale;
use crate::runtime::resolver::{Resolved, Resolver, WarnOn};
use std::borrow::Cow;

pub struct Translator<L = ConsoleLogger> {
    locale: String,
    fallback_locale: FallbackLocale,
    warn_on: WarnOn,
    messages: Messages,
    logger: L,
}

impl Translator<ConsoleLogger> {
    pub fn new(options: I18nOptions, messages: Messages) -> Self {
        Translator {
            warn_on: options.warn_on(),
            locale: options.locale,
            fallback_locale: options.fallback_locale,
            messages,
            logger: ConsoleLogger::default(),
        }
    }
}

impl<L: Logger> Translator<L> {
    pub fn with_logger<M: Logger>(self, logger: M) -> Translator<M> {
        Translator {
            locale: self.locale,
            fallback_locale: self.fallback_locale,
            warn_on: self.warn_on,
            messages: self.messages,
            logger,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn fallback_locale(&self) -> &FallbackLocale {
        &self.fallback_locale
    }

    pub fn set_fallback_locale(&mut self, fallback: impl Into<FallbackLocale>) {
        self.fallback_locale = fallback.into();
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.messages, &self.fallback_locale, &self.logger).warn_on(self.warn_on)
    }

    /// Translate `key`. A plural group renders its first case.
    pub fn t<C: InterpolationContext + ?Sized>(&self, key: &str, ctx: &C) -> String {
        translate(&self.resolver(), &self.locale, key, None, ctx)
    }

    /// Translate `key` for `count`. `n` and `count` default to the count
    /// unless `ctx` provides them.
    pub fn tc<C: InterpolationContext + ?Sized>(&self, key: &str, count: i64, ctx: &C) -> String {
        translate(&self.resolver(), &self.locale, key, Some(count), ctx)
    }

    /// Search `local` before the global messages.
    pub fn scope<'a>(&'a self, local: &'a Messages) -> LocalTranslator<'a, L> {
        LocalTranslator {
            parent: self,
            local,
            locale: None,
        }
    }
}

/// Translator over local messages, falling back to its parent's messages.
pub struct LocalTranslator<'a, L = ConsoleLogger> {
    parent: &'a Translator<L>,
    local: &'a Messages,
    locale: Option<String>,
}

impl<'a, L: Logger> LocalTranslator<'a, L> {
    /// Use `locale` instead of the parent's active locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.parent.locale)
    }

    pub fn resolver(&self) -> Resolver<'a> {
        self.parent.resolver().with_local(self.local)
    }

    /// The compiled message for `key`, for callers that render it themselves.
    pub fn lookup<'k>(&self, key: &'k str) -> Resolved<'a, 'k> {
        self.resolver().resolve(key, self.locale())
    }

    pub fn t<C: InterpolationContext + ?Sized>(&self, key: &str, ctx: &C) -> String {
        translate(&self.resolver(), self.locale(), key, None, ctx)
    }

    pub fn tc<C: InterpolationContext + ?Sized>(&self, key: &str, count: i64, ctx: &C) -> String {
        translate(&self.resolver(), self.locale(), key, Some(count), ctx)
    }
}

fn translate<C: InterpolationContext + ?Sized>(
    resolver: &Resolver<'_>,
    locale: &str,
    key: &str,
    count: Option<i64>,
    ctx: &C,
) -> String {
    let translation = match resolver.resolve(key, locale) {
        Resolved::Message(translation) => translation,
        Resolved::Key(key) => return key.to_string(),
    };
    let selected = match count {
        Some(count) => translation.select(count),
        None => translation.first(),
    };
    let Some(message) = selected else {
        return key.to_string();
    };
    match count {
        Some(count) => evaluate(message, &Layered(ctx, CountContext(count))),
        None => evaluate(message, ctx),
    }
}

/// Supplies `n` and `count` for plural messages.
struct CountContext(i64);

impl InterpolationContext for CountContext {
    fn lookup(&self, key: &Key) -> Option<Cow<'_, str>> {
        match key {
            Key::Named(name) if name == "n" || name == "count" => Some(Cow::Owned(self.0.to_string())),
            _ => None,
        }
    }
}
