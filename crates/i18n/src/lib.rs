//! Localized strings for every user-visible piece of a rider document.
//!
//! The tables are plain JSON documents embedded at compile time, one per
//! locale, and parsed once on first use. Adding a locale means adding a file
//! to `locales/` and a line to [`BUILTIN_LOCALES`].
//!
//! Lookups are total: an unknown locale resolves against [`DEFAULT_LOCALE`],
//! a key missing from the requested locale is looked up in the default
//! locale, and a key missing everywhere renders as its last path segment.

mod table;

pub use table::{LocaleTable, interpolate};

use once_cell::sync::Lazy;

/// Locale used when the requested one is unknown.
pub const DEFAULT_LOCALE: &str = "pt";

/// `(identifier, embedded JSON)` for each shipped locale.
pub const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("pt", include_str!("../locales/pt.json")),
    ("en", include_str!("../locales/en.json")),
];

static TABLE: Lazy<LocaleTable> = Lazy::new(|| LocaleTable::from_sources(BUILTIN_LOCALES, DEFAULT_LOCALE));

/// The process-wide locale table.
pub fn table() -> &'static LocaleTable {
    &TABLE
}

/// Resolves `namespace.key[.subkey]` for `locale`. Never fails.
pub fn translate(locale: &str, namespace: &str, key: &str, subkey: Option<&str>) -> String {
    match subkey {
        Some(sub) => TABLE.lookup(locale, &[namespace, key, sub]),
        None => TABLE.lookup(locale, &[namespace, key]),
    }
}

/// Same as [`translate`] but takes a dotted path (`"cover.contacts"`).
pub fn translate_path(locale: &str, path: &str) -> String {
    let segments: Vec<&str> = path.split('.').collect();
    TABLE.lookup(locale, &segments)
}

/// A translator bound to one locale, handed to every layout-building step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    locale: String,
}

impl Translator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: TABLE.resolve_locale(locale).to_string(),
        }
    }

    /// The locale actually used for lookups, after normalization and fallback.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, path: &str) -> String {
        translate_path(&self.locale, path)
    }

    /// Looks up `path` and substitutes `{name}` placeholders.
    pub fn t_with(&self, path: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(path), args)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_parse() {
        for (id, _) in BUILTIN_LOCALES {
            assert!(table().has_locale(id), "locale '{}' did not load", id);
        }
    }

    #[test]
    fn unknown_locale_matches_default() {
        assert_eq!(
            translate("xx-unknown", "cover", "contacts", None),
            translate(DEFAULT_LOCALE, "cover", "contacts", None)
        );
    }

    #[test]
    fn unknown_key_renders_literally() {
        assert_eq!(translate("en", "cover", "unknown-key", None), "unknown-key");
        assert_eq!(translate("pt", "nowhere", "unknown-key", None), "unknown-key");
        assert_eq!(translate("en", "listening", "defaultModel", Some("missing")), "missing");
    }

    #[test]
    fn subkeys_resolve() {
        assert_eq!(translate("en", "monitors", "formats", Some("stereo")), "Stereo");
        assert_eq!(translate("pt", "monitors", "formats", Some("stereo")), "Estéreo");
    }

    #[test]
    fn regional_variants_normalize() {
        let t = Translator::new("en-US");
        assert_eq!(t.locale(), "en");
        assert_eq!(Translator::new("PT-br").locale(), "pt");
        assert_eq!(Translator::new("").locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn partial_path_is_not_a_string() {
        // "monitors.kinds" is an object; it must not leak as text.
        assert_eq!(translate_path("en", "monitors.kinds"), "kinds");
    }

    #[test]
    fn interpolates_arguments() {
        let t = Translator::new("en");
        assert_eq!(t.t_with("footer.page", &[("page", "2"), ("total", "5")]), "Page 2 of 5");
    }
}
