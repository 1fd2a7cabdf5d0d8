//! Report formatting and printing utilities.
//!
//! Two blocks are written, in order:
//!
//! 1. A summary listing every missing key per locale with the value of the
//!    first locale that has it.
//! 2. Stub lines (`"key": "value",`) ready to paste into each locale file,
//!    using the base locale's value whenever it has one.
//!
//! Separate from core logic to allow locale-gaps to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{LocaleGaps, MissingKey, MissingReport};

/// Width of the rule under the summary title.
pub const SUMMARY_RULE_WIDTH: usize = 50;

/// Width of the rules around the stub block title.
pub const STUB_BANNER_WIDTH: usize = 80;

/// Width of the rule under each locale's stub header.
pub const STUB_RULE_WIDTH: usize = 40;

/// Print both report blocks to stdout.
pub fn report(report: &MissingReport) {
    report_to(report, &mut io::stdout().lock());
}

/// Print both report blocks to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(report: &MissingReport, writer: &mut W) {
    print_summary_to(report, writer);
    print_stubs_to(report, writer);
}

/// Print the per-locale missing key summary.
pub fn print_summary_to<W: Write>(report: &MissingReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Missing translations by locale:".bold());
    let _ = writeln!(writer, "{}", "=".repeat(SUMMARY_RULE_WIDTH).dimmed());

    for gaps in report.with_missing() {
        print_summary_section(gaps, writer);
    }
}

/// Print the copy-paste stub listing.
pub fn print_stubs_to<W: Write>(report: &MissingReport, writer: &mut W) {
    let banner = "=".repeat(STUB_BANNER_WIDTH);
    let _ = writeln!(writer, "\n\n{}", banner.dimmed());
    let _ = writeln!(writer, "{}", "MISSING TRANSLATIONS TO ADD:".bold());
    let _ = writeln!(writer, "{}", banner.dimmed());

    for gaps in report.with_missing() {
        print_stub_section(gaps, writer);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_summary_section<W: Write>(gaps: &LocaleGaps, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        gaps.locale.to_uppercase().bold().yellow(),
        format!("({} missing):", gaps.missing.len()).yellow()
    );

    for missing in &gaps.missing {
        let _ = writeln!(writer, "{}", summary_line(missing));
    }
}

fn print_stub_section<W: Write>(gaps: &LocaleGaps, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {} {}",
        ">>>".cyan(),
        gaps.locale.to_uppercase().bold().cyan(),
        "MISSING TRANSLATIONS:".bold()
    );
    let _ = writeln!(writer, "{}", "-".repeat(STUB_RULE_WIDTH).dimmed());

    // Stub lines stay unstyled so they paste cleanly
    for missing in &gaps.missing {
        let _ = writeln!(writer, "{}", stub_line(missing));
    }
}

/// `  - a.c (ref: en: "C1")`
fn summary_line(missing: &MissingKey) -> String {
    format!(
        "  - {} (ref: {}: \"{}\")",
        missing.key,
        missing.reference.locale,
        missing.reference.display_value()
    )
}

/// `"a.c": "C1",`
///
/// Key and value are JSON string literals, so quotes, backslashes and
/// control characters in either are escaped.
fn stub_line(missing: &MissingKey) -> String {
    format!(
        "{}: {},",
        json_string(&missing.key),
        json_string(&missing.stub_reference.display_value())
    )
}

fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
