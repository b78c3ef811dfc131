//! Label lookup tables.

use std::collections::BTreeMap;

/// Trims a label and collapses internal whitespace runs to one space.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps spreadsheet labels to canonical values.
///
/// Keys are compared after whitespace normalization, so `"Outcome  Reason "`
/// and `"Outcome Reason"` are the same label. Case is significant unless the
/// map was built with [`LabelMap::case_insensitive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap<T> {
    entries: BTreeMap<String, T>,
    ignore_case: bool,
}

impl<T: Copy> LabelMap<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            ignore_case: false,
        }
    }

    pub fn case_insensitive() -> Self {
        Self {
            entries: BTreeMap::new(),
            ignore_case: true,
        }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    pub fn from_pairs_ignore_case<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let mut map = Self::case_insensitive();
        map.extend(pairs);
        map
    }

    fn key(&self, label: &str) -> String {
        let normalized = normalize_label(label);
        if self.ignore_case {
            normalized.to_lowercase()
        } else {
            normalized
        }
    }

    /// Adds or replaces a label.
    pub fn insert(&mut self, label: &str, value: T) {
        let key = self.key(label);
        self.entries.insert(key, value);
    }

    pub fn extend<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        for (label, value) in pairs {
            self.insert(label, value);
        }
    }

    pub fn get(&self, label: &str) -> Option<T> {
        self.entries.get(&self.key(label)).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(&self.key(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized labels and their values, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

impl<T: Copy> Default for LabelMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
