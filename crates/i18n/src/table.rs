use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Per-locale nested dictionaries.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    locales: BTreeMap<String, Value>,
    default_locale: String,
}

impl LocaleTable {
    /// Builds a table from `(locale, json)` pairs. A source that fails to
    /// parse is logged and registered as empty so lookups stay total.
    pub fn from_sources(sources: &[(&str, &str)], default_locale: &str) -> Self {
        let mut locales = BTreeMap::new();
        for (id, source) in sources {
            let value = serde_json::from_str::<Value>(source).unwrap_or_else(|e| {
                log::error!("[I18N] Locale '{}' failed to parse: {}", id, e);
                Value::Object(Map::new())
            });
            locales.insert(id.to_ascii_lowercase(), value);
        }
        Self {
            locales,
            default_locale: default_locale.to_string(),
        }
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Maps `pt-BR`, `en_US`, `EN` to a registered locale, or the default.
    pub fn resolve_locale<'a>(&'a self, locale: &str) -> &'a str {
        let lowered = locale.trim().to_ascii_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();
        [lowered.as_str(), primary]
            .into_iter()
            .find_map(|candidate| self.locales.get_key_value(candidate))
            .map(|(k, _)| k.as_str())
            .unwrap_or(self.default_locale.as_str())
    }

    /// Walks `segments` in `locale`, then in the default locale; falls back to
    /// the last segment verbatim.
    pub fn lookup(&self, locale: &str, segments: &[&str]) -> String {
        let resolved = self.resolve_locale(locale);
        let found = self
            .find(resolved, segments)
            .or_else(|| self.find(&self.default_locale, segments));

        match found {
            Some(text) => text.to_string(),
            None => {
                log::debug!("[I18N] Missing key '{}' for locale '{}'", segments.join("."), resolved);
                segments.last().copied().unwrap_or_default().to_string()
            }
        }
    }

    fn find(&self, locale: &str, segments: &[&str]) -> Option<&str> {
        let mut node = self.locales.get(locale)?;
        for segment in segments {
            node = node.as_object()?.get(*segment)?;
        }
        node.as_str()
    }
}

/// Replaces `{name}` placeholders. Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
