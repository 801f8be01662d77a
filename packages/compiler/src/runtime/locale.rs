//! Locale Tags
//!
//! Dialect stripping: `en-US-funky` is searched as `en-US-funky`, `en-US`,
//! then `en`.

use crate::chars;

/// Iterator over a locale and its progressively shorter prefixes.
#[derive(Debug, Clone)]
pub struct DialectChain<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for DialectChain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = current
            .rfind(chars::MINUS)
            .map(|cut| &current[..cut])
            .filter(|base| !base.is_empty());
        Some(current)
    }
}

pub fn dialect_chain(locale: &str) -> DialectChain<'_> {
    DialectChain { next: Some(locale) }
}
