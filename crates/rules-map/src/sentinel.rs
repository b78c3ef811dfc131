//! Null-sentinel tokens.

use std::collections::BTreeSet;

/// Tokens the built-in tables treat as "no value".
pub const STANDARD_SENTINELS: [&str; 3] = ["*", "[NULL]", "(null)"];

/// Cell contents that mean "absent".
///
/// Blank and whitespace-only text is always absent; the listed tokens are
/// matched exactly (case-sensitive) after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    tokens: BTreeSet<String>,
}

impl Sentinels {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().trim().to_string())
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SENTINELS)
    }

    /// True when `text` is blank or, once trimmed, one of the tokens.
    pub fn is_sentinel(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.is_empty() || self.tokens.contains(trimmed)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self::standard()
    }
}
