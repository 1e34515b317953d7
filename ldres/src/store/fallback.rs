//! The synthetic code-fallback store.
//!
//! When nothing in a chain (and no alias) yields a value, resolution ends at
//! this store. It holds constructed items whose value is simply the code being
//! named: display names for common keys and types, a few alternate names for
//! languages and territories, and variant Gregorian era names.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::locale::LocaleId;
use crate::path::{Grammar, Path};
use crate::store::{Entry, PathStore};

const KEYS: &[&str] = &["calendar", "cf", "collation", "currency", "hc", "lb", "ms", "numbers"];

/// `(type, key)` pairs for type display names.
const TYPES: &[(&str, &str)] = &[
    ("account", "cf"),
    ("standard", "cf"),
    ("buddhist", "calendar"),
    ("chinese", "calendar"),
    ("coptic", "calendar"),
    ("dangi", "calendar"),
    ("ethiopic", "calendar"),
    ("gregorian", "calendar"),
    ("hebrew", "calendar"),
    ("indian", "calendar"),
    ("islamic", "calendar"),
    ("iso8601", "calendar"),
    ("japanese", "calendar"),
    ("persian", "calendar"),
    ("roc", "calendar"),
    ("big5han", "collation"),
    ("compat", "collation"),
    ("dictionary", "collation"),
    ("ducet", "collation"),
    ("emoji", "collation"),
    ("eor", "collation"),
    ("phonebk", "collation"),
    ("pinyin", "collation"),
    ("search", "collation"),
    ("standard", "collation"),
    ("h11", "hc"),
    ("h12", "hc"),
    ("h23", "hc"),
    ("h24", "hc"),
    ("loose", "lb"),
    ("normal", "lb"),
    ("strict", "lb"),
    ("metric", "ms"),
    ("uksystem", "ms"),
    ("ussystem", "ms"),
    ("arab", "numbers"),
    ("arabext", "numbers"),
    ("beng", "numbers"),
    ("deva", "numbers"),
    ("fullwide", "numbers"),
    ("hanidec", "numbers"),
    ("latn", "numbers"),
    ("thai", "numbers"),
];

const LANGUAGES: &[&str] = &[
    "ar_001", "de_AT", "de_CH", "en_AU", "en_CA", "en_GB", "en_US", "es_419", "es_ES", "es_MX",
    "fr_CA", "fr_CH", "nl_BE", "pt_BR", "pt_PT", "ro_MD", "sw_CD", "zh_Hans", "zh_Hant",
];

/// `(element, code, alt)` alternate display names.
const ALTERNATES: &[(&str, &str, &str)] = &[
    ("languages/language", "en_GB", "short"),
    ("languages/language", "en_US", "short"),
    ("languages/language", "az", "short"),
    ("scripts/script", "Hans", "stand-alone"),
    ("scripts/script", "Hant", "stand-alone"),
    ("territories/territory", "GB", "short"),
    ("territories/territory", "HK", "short"),
    ("territories/territory", "MO", "short"),
    ("territories/territory", "PS", "short"),
    ("territories/territory", "US", "short"),
    ("territories/territory", "CD", "variant"),
    ("territories/territory", "CG", "variant"),
    ("territories/territory", "CI", "variant"),
    ("territories/territory", "CZ", "variant"),
    ("territories/territory", "FK", "variant"),
    ("territories/territory", "MK", "variant"),
    ("territories/territory", "TL", "variant"),
];

const ERAS: &[(&str, &str, &str)] = &[
    ("eraAbbr", "0", "BCE"),
    ("eraAbbr", "1", "CE"),
    ("eraNames", "0", "BCE"),
    ("eraNames", "1", "CE"),
    ("eraNarrow", "0", "BCE"),
    ("eraNarrow", "1", "CE"),
];

static CODE_FALLBACK: Lazy<Arc<PathStore>> = Lazy::new(|| Arc::new(build()));

/// The shared code-fallback store.
///
/// # Examples
///
/// ```
/// use ldres::{code_fallback, Path};
///
/// let store = code_fallback();
/// let key = Path::parse(r#"//ldml/localeDisplayNames/keys/key[@type="calendar"]"#).unwrap();
/// assert_eq!(store.get(&key), Some("calendar"));
/// ```
#[must_use]
pub fn code_fallback() -> Arc<PathStore> {
    Arc::clone(&CODE_FALLBACK)
}

fn build() -> PathStore {
    let mut items = Vec::new();

    for key in KEYS {
        items.push((
            format!(r#"//ldml/localeDisplayNames/keys/key[@type="{key}"]"#),
            (*key).to_string(),
        ));
    }
    for (kind, key) in TYPES {
        items.push((
            format!(r#"//ldml/localeDisplayNames/types/type[@key="{key}"][@type="{kind}"]"#),
            (*kind).to_string(),
        ));
    }
    for code in LANGUAGES {
        items.push((
            format!(r#"//ldml/localeDisplayNames/languages/language[@type="{code}"]"#),
            (*code).to_string(),
        ));
    }
    for (element, code, alt) in ALTERNATES {
        items.push((
            format!(r#"//ldml/localeDisplayNames/{element}[@type="{code}"][@alt="{alt}"]"#),
            (*code).to_string(),
        ));
    }
    for (width, era, value) in ERAS {
        items.push((
            format!(
                r#"//ldml/dates/calendars/calendar[@type="gregorian"]/eras/{width}/era[@type="{era}"][@alt="variant"]"#
            ),
            (*value).to_string(),
        ));
    }

    let grammar = Grammar::ldml();
    let entries: HashMap<Path, Entry> = items
        .into_iter()
        .filter_map(|(path, value)| match grammar.parse(&path) {
            Ok(decorated) => Some((
                decorated.identity(),
                Entry {
                    value,
                    decorated,
                    comment: None,
                },
            )),
            Err(e) => {
                log::warn!("skipping constructed item {path}: {e}");
                None
            }
        })
        .collect();

    PathStore {
        locale: LocaleId::code_fallback(),
        inheriting: true,
        entries,
        aliases: None,
    }
}
