//! File parsers for locale files.
//!
//! - `json`: JSON locale file loader (one `<locale>.json` per configured locale)

pub mod json;
