//! Drives one audit: settings → load → flatten → analyze.
//!
//! Nothing is written to stdout here. Any failure surfaces as an `Err`
//! before the caller prints a single line of the report.

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use super::args::Arguments;
use crate::{
    config::{Config, load_config},
    core::{MissingReport, find_missing, flatten_locales, load_locales},
};

/// Settings for a single run, merged from CLI args, config file, and defaults.
///
/// Priority (highest to lowest):
/// 1. CLI arguments (e.g., `--base-locale en`)
/// 2. `.localegapsrc.json` config file
/// 3. Built-in defaults
#[derive(Debug)]
pub struct AuditContext {
    pub config: Config,
    /// Directory the locale files are read from.
    pub messages_dir: PathBuf,
}

impl AuditContext {
    pub fn new(args: &Arguments) -> Result<Self> {
        let root_dir = args.root.clone().unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        match &config_result.path {
            Some(path) => debug!(path = %path.display(), "loaded config file"),
            None => debug!("no config file found, using default configuration"),
        }

        // A message root read from the file is relative to that file
        let messages_base = match (&args.messages_root, config_result.config_dir()) {
            (None, Some(config_dir)) => config_dir.to_path_buf(),
            _ => root_dir,
        };

        let mut config = config_result.config;

        if !args.locales.is_empty() {
            config.locales = args.locales.clone();
        }

        if let Some(ref base_locale) = args.base_locale {
            config.base_locale = base_locale.clone();
        }

        if let Some(ref messages_root) = args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }

        // Overrides can break what the file-level check accepted
        config.validate()?;

        let messages_dir = resolve_messages_dir(&messages_base, &config.messages_root);

        Ok(Self {
            config,
            messages_dir,
        })
    }
}

/// Relative message roots are taken from `base_dir`.
fn resolve_messages_dir(base_dir: &Path, messages_root: &str) -> PathBuf {
    let p = Path::new(messages_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = base_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base_dir.join(rel)
    }
}

/// Run the full audit and return the analysis result.
pub fn run(args: &Arguments) -> Result<MissingReport> {
    let ctx = AuditContext::new(args)?;
    audit(&ctx)
}

pub fn audit(ctx: &AuditContext) -> Result<MissingReport> {
    let config = &ctx.config;

    let files = load_locales(&ctx.messages_dir, &config.locales)?;
    let all_messages = flatten_locales(&files);
    let report = find_missing(&all_messages, &config.locales, &config.base_locale);

    info!(
        loaded = all_messages.len(),
        configured = config.locales.len(),
        missing = report.total_missing(),
        complete = report.is_complete(),
        "audit finished"
    );

    Ok(report)
}
