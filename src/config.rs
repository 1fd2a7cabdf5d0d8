use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".localegapsrc.json";

pub const DEFAULT_LOCALES: &[&str] = &["en", "mm", "th", "cn"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locales to audit, in report order.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// Directory holding `<locale>.json` files.
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    /// Preferred source of stub values.
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect()
}

fn default_messages_root() -> String {
    "src/i18n/locales".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            messages_root: default_messages_root(),
            base_locale: default_base_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locale names become file names, so they must be non-empty, unique,
    /// and free of path separators. The base locale does not have to be in
    /// `locales`; stubs then always use the fallback reference.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale.");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            validate_locale_name(locale).context("Invalid entry in 'locales'")?;
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate locale in 'locales': \"{}\"", locale);
            }
        }

        validate_locale_name(&self.base_locale).context("Invalid 'baseLocale'")?;

        Ok(())
    }
}

fn validate_locale_name(locale: &str) -> Result<()> {
    if locale.trim().is_empty() {
        bail!("locale name must not be empty");
    }
    if locale.contains(['/', '\\']) || locale == "." || locale == ".." {
        bail!("\"{}\" is not a valid locale name", locale);
    }
    Ok(())
}

/// Search `start_dir` and its ancestors for the config file.
///
/// The search stops at the first directory containing `.git`. A relative
/// `start_dir` such as `.` is made absolute first so parents are reachable.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Directory holding the config file, against which its relative
    /// paths are resolved.
    pub fn config_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
