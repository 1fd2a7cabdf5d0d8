//! Core data types used across all pipeline stages.
//!
//! ## Module Structure
//!
//! - `message`: Locale trees, flattened messages, and gap-analysis results

pub mod message;

pub use message::{
    AllLocaleMessages, FlatMessages, LocaleFile, LocaleGaps, LocaleMessages, LocaleTree,
    MissingKey, MissingReport, Reference,
};
