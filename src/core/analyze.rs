//! Gap analysis across loaded locales.
//!
//! Every key that exists in at least one loaded locale forms the key
//! universe. A locale is missing a key when the key is in the universe but
//! not in that locale's flattened messages. Locales whose file was never
//! loaded take no part: they are neither reported nor used as references.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::{AllLocaleMessages, LocaleGaps, MissingKey, MissingReport, Reference};

/// Union of keys across every loaded locale, in lexicographic order.
pub fn key_universe(all_messages: &AllLocaleMessages) -> BTreeSet<&str> {
    all_messages
        .iter()
        .flat_map(|messages| messages.keys().map(String::as_str))
        .collect()
}

/// First locale in load order that holds `key`, with its value.
pub fn resolve_reference(all_messages: &AllLocaleMessages, key: &str) -> Option<Reference> {
    all_messages.iter().find_map(|messages| {
        messages
            .get(key)
            .map(|value| Reference::new(&messages.locale, value.clone()))
    })
}

/// Reference for stub generation.
///
/// The base locale wins whenever it was loaded and holds `key`, even if an
/// earlier locale in load order also has it. Otherwise this falls back to
/// [`resolve_reference`].
pub fn resolve_stub_reference(
    all_messages: &AllLocaleMessages,
    key: &str,
    base_locale: &str,
) -> Option<Reference> {
    all_messages
        .get(base_locale)
        .and_then(|base| base.get(key))
        .map(|value| Reference::new(base_locale, value.clone()))
        .or_else(|| resolve_reference(all_messages, key))
}

/// Find the missing keys of every loaded locale.
///
/// # Arguments
/// * `all_messages` - Flattened messages of all loaded locales
/// * `locale_order` - Configured locale order; fixes the order of the result
/// * `base_locale` - Preferred source of stub values (e.g., "en")
///
/// # Returns
/// One `LocaleGaps` per locale in `locale_order` that was loaded (a locale
/// listed twice is reported once), each with its missing keys in sorted order.
pub fn find_missing(
    all_messages: &AllLocaleMessages,
    locale_order: &[String],
    base_locale: &str,
) -> MissingReport {
    let all_keys = key_universe(all_messages);
    debug!(
        keys = all_keys.len(),
        locales = all_messages.len(),
        "computed key universe"
    );

    let mut report = MissingReport::default();

    for locale in locale_order {
        let Some(messages) = all_messages.get(locale) else {
            continue;
        };
        if report.get(locale).is_some() {
            continue;
        }

        let mut gaps = LocaleGaps::new(locale);
        for key in all_keys.iter().filter(|key| !messages.contains_key(key)) {
            // The key came from some loaded locale, so both lookups succeed.
            let (Some(reference), Some(stub_reference)) = (
                resolve_reference(all_messages, key),
                resolve_stub_reference(all_messages, key, base_locale),
            ) else {
                continue;
            };

            gaps.missing.push(MissingKey {
                key: key.to_string(),
                reference,
                stub_reference,
            });
        }

        debug!(locale = %locale, missing = gaps.missing.len(), "analyzed locale");
        report.locales.push(gaps);
    }

    report
}
