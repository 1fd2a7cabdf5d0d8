//! Core analysis engine.
//!
//! A single forward pipeline, with each stage's output threaded into the next:
//!
//! 1. **Load** (`parsers::json`): read `<locale>.json` for each configured locale
//! 2. **Flatten** (`flatten`): nested objects become dotted-path keys
//! 3. **Analyze** (`analyze`): key universe, per-locale gaps, reference values
//!
//! Rendering lives in `cli::report` so the engine can be used as a library.

pub mod analyze;
pub mod data;
pub mod flatten;
pub mod parsers;

pub use analyze::{find_missing, key_universe, resolve_reference, resolve_stub_reference};
pub use data::*;
pub use flatten::{flatten, flatten_locales};
pub use parsers::json::{load_locale_file, load_locales};
