use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::LocaleFile;

/// Path of the file holding `locale` inside `messages_dir`.
///
/// Examples:
/// - ("src/i18n/locales", "en") -> "src/i18n/locales/en.json"
/// - ("messages", "zh-CN") -> "messages/zh-CN.json"
pub fn locale_file_path(messages_dir: &Path, locale: &str) -> PathBuf {
    messages_dir.join(format!("{}.json", locale))
}

/// Read and parse a single locale file.
///
/// The root of the document must be a JSON object. Anything else, like a
/// file that cannot be read or is not JSON, is an error: a garbage file
/// must never be mistaken for an empty locale.
pub fn load_locale_file(path: &Path, locale: &str) -> Result<LocaleFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(tree) = json else {
        bail!(
            "Failed to parse JSON file: {:?}\n\
             Hint: a locale file must contain a JSON object at the top level.",
            path
        );
    };

    Ok(LocaleFile::new(
        locale,
        path.to_string_lossy().to_string(),
        tree,
    ))
}

/// Load every configured locale that has a file in `messages_dir`.
///
/// Locales are visited in the given order and the result keeps that order.
/// A locale whose file does not exist is skipped silently; it is not treated
/// as an empty locale. The first file that fails to load aborts the run.
pub fn load_locales(messages_dir: impl AsRef<Path>, locales: &[String]) -> Result<Vec<LocaleFile>> {
    let messages_dir = messages_dir.as_ref();

    if !messages_dir.is_dir() {
        warn!(
            dir = %messages_dir.display(),
            "messages directory does not exist, no locales will be loaded"
        );
    }

    let mut loaded = Vec::with_capacity(locales.len());
    for locale in locales {
        let path = locale_file_path(messages_dir, locale);
        if !path.exists() {
            debug!(locale = %locale, path = %path.display(), "locale file not found, skipping");
            continue;
        }

        let file = load_locale_file(&path, locale)?;
        debug!(
            locale = %locale,
            path = %path.display(),
            top_level_keys = file.tree.len(),
            "loaded locale file"
        );
        loaded.push(file);
    }

    Ok(loaded)
}
