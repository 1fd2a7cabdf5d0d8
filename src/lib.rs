//! Locale Gaps - translation completeness audit for JSON locale files
//!
//! Locale Gaps reads one `<locale>.json` file per configured locale, flattens
//! nested keys into dotted paths, and reports for every locale the keys that
//! other locales have but it lacks. Alongside the report it prints stub
//! entries ready to paste into each locale file, filled with the base
//! locale's text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, pipeline driver, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (load → flatten → analyze)

pub mod cli;
pub mod config;
pub mod core;
