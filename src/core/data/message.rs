use serde_json::{Map, Value};

/// Nested key/value structure of a single locale file, in file order.
pub type LocaleTree = Map<String, Value>;

/// Dotted-path key to leaf value, in flattening order.
///
/// `serde_json` is built with `preserve_order`, so iteration follows
/// insertion order rather than hash order.
pub type FlatMessages = Map<String, Value>;

/// A locale file as read from disk, before flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleFile {
    /// Locale code (e.g., "en", "mm").
    pub locale: String,
    /// Path the file was read from.
    pub file_path: String,
    pub tree: LocaleTree,
}

impl LocaleFile {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>, tree: LocaleTree) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            tree,
        }
    }
}

/// All flattened messages for a single locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "mm").
    pub locale: String,
    /// File path of the locale file.
    pub file_path: String,
    /// All leaf values, keyed by dotted path.
    pub entries: FlatMessages,
}

impl LocaleMessages {
    /// Create an empty LocaleMessages.
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: FlatMessages::new(),
        }
    }

    /// Get a leaf value by dotted key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all keys as an iterator.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flattened messages of every loaded locale, kept in load order.
///
/// Load order is the configured locale order with absent files skipped,
/// so enumeration here is deterministic and doubles as the fallback
/// search order for reference values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllLocaleMessages {
    locales: Vec<LocaleMessages>,
}

impl AllLocaleMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locale. A locale that is already present is replaced in place.
    pub fn insert(&mut self, messages: LocaleMessages) {
        match self
            .locales
            .iter_mut()
            .find(|existing| existing.locale == messages.locale)
        {
            Some(existing) => *existing = messages,
            None => self.locales.push(messages),
        }
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleMessages> {
        self.locales.iter().find(|m| m.locale == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleMessages> {
        self.locales.iter()
    }

    /// Locale codes in load order.
    pub fn locale_names(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|m| m.locale.as_str())
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl FromIterator<LocaleMessages> for AllLocaleMessages {
    fn from_iter<I: IntoIterator<Item = LocaleMessages>>(iter: I) -> Self {
        let mut all = Self::new();
        for messages in iter {
            all.insert(messages);
        }
        all
    }
}

/// The value shown to a translator for a missing key, and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub locale: String,
    pub value: Value,
}

impl Reference {
    pub fn new(locale: impl Into<String>, value: Value) -> Self {
        Self {
            locale: locale.into(),
            value,
        }
    }

    /// Text form of the value.
    ///
    /// Strings are shown verbatim; every other leaf (numbers, booleans,
    /// null, arrays) uses its compact JSON rendering.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A key present in the key universe but absent from one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingKey {
    /// Dotted path of the missing key.
    pub key: String,
    /// First locale (in load order) that holds the key.
    pub reference: Reference,
    /// Base locale's value when it holds the key, otherwise same as `reference`.
    pub stub_reference: Reference,
}

/// Missing keys of one locale, sorted lexicographically.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleGaps {
    pub locale: String,
    pub missing: Vec<MissingKey>,
}

impl LocaleGaps {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            missing: Vec::new(),
        }
    }

    pub fn missing_keys(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(|m| m.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of the gap analysis: one entry per loaded locale, in configured order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingReport {
    pub locales: Vec<LocaleGaps>,
}

impl MissingReport {
    /// Gaps for a given locale, if that locale was loaded.
    pub fn get(&self, locale: &str) -> Option<&LocaleGaps> {
        self.locales.iter().find(|gaps| gaps.locale == locale)
    }

    /// Locales with at least one missing key, in configured order.
    pub fn with_missing(&self) -> impl Iterator<Item = &LocaleGaps> {
        self.locales.iter().filter(|gaps| !gaps.is_empty())
    }

    pub fn total_missing(&self) -> usize {
        self.locales.iter().map(|gaps| gaps.missing.len()).sum()
    }

    /// True when every loaded locale has every key.
    pub fn is_complete(&self) -> bool {
        self.total_missing() == 0
    }
}
