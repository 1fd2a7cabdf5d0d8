//! CLI argument definitions using clap.
//!
//! Every flag is optional. Values given here override the config file,
//! which in turn overrides the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root used to find the config file and resolve relative paths
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory containing <locale>.json files (overrides config file)
    #[arg(long, env = "LOCALE_GAPS_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Comma-separated locales to audit, in report order (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Locale whose values are preferred for stubs (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
