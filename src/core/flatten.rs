//! Nested-to-flat key conversion.
//!
//! `{"a": {"b": "B", "c": "C"}}` becomes `{"a.b": "B", "a.c": "C"}`.
//! Any non-object value is a leaf and is carried over untouched, arrays
//! included. Output order follows the file's key order.

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{AllLocaleMessages, FlatMessages, LocaleFile, LocaleMessages, LocaleTree};

/// Flatten a nested structure into dotted-path keys.
///
/// `prefix` is prepended (with a `.`) to every produced key; pass `""` for
/// a top-level call.
pub fn flatten(nested: &LocaleTree, prefix: &str) -> FlatMessages {
    let mut result = FlatMessages::new();
    flatten_into(nested, prefix, &mut result);
    result
}

fn flatten_into(nested: &LocaleTree, prefix: &str, result: &mut FlatMessages) {
    for (key, value) in nested {
        let new_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(child) => flatten_into(child, &new_key, result),
            leaf => {
                result.insert(new_key, leaf.clone());
            }
        }
    }
}

/// Flatten every loaded locale file, keeping load order.
pub fn flatten_locales(files: &[LocaleFile]) -> AllLocaleMessages {
    files
        .iter()
        .map(|file| {
            let mut messages = LocaleMessages::new(&file.locale, &file.file_path);
            messages.entries = flatten(&file.tree, "");
            if messages.is_empty() {
                warn!(locale = %messages.locale, "locale file has no keys");
            } else {
                debug!(locale = %messages.locale, keys = messages.len(), "flattened locale");
            }
            messages
        })
        .collect()
}
