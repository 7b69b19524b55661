//! Named color palettes. Palettes are data: `themes/themes.json` is embedded
//! at compile time and parsed once.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use stagerider_types::Color;
use std::collections::BTreeMap;

pub const DEFAULT_THEME: &str = "default";

static BUILTIN_THEMES: &str = include_str!("../themes/themes.json");

static REGISTRY: Lazy<ThemeRegistry> = Lazy::new(|| ThemeRegistry::from_json(BUILTIN_THEMES));

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub on_primary: Color,
    pub zebra: Color,
}

impl Default for Palette {
    /// Built-in fallback used only if the embedded theme data is unusable.
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1e, 0x3a, 0x5f),
            secondary: Color::rgb(0x3d, 0x5a, 0x80),
            accent: Color::rgb(0xe8, 0x5d, 0x04),
            background: Color::WHITE,
            surface: Color::rgb(0xf5, 0xf7, 0xfa),
            border: Color::rgb(0xd5, 0xdb, 0xe3),
            text: Color::rgb(0x1f, 0x29, 0x33),
            text_muted: Color::rgb(0x6b, 0x77, 0x85),
            on_primary: Color::WHITE,
            zebra: Color::rgb(0xee, 0xf2, 0xf6),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    palettes: BTreeMap<String, Palette>,
    fallback: Palette,
}

impl ThemeRegistry {
    pub fn from_json(source: &str) -> Self {
        let palettes: BTreeMap<String, Palette> = serde_json::from_str(source).unwrap_or_else(|e| {
            log::error!("[THEME] Theme data failed to parse: {}", e);
            BTreeMap::new()
        });
        let fallback = palettes.get(DEFAULT_THEME).cloned().unwrap_or_default();
        Self { palettes, fallback }
    }

    /// The palette for `id`, or the default palette when `id` is unknown.
    pub fn resolve(&self, id: &str) -> &Palette {
        match self.palettes.get(id.trim()) {
            Some(palette) => palette,
            None => {
                if id != DEFAULT_THEME {
                    log::debug!("[THEME] Unknown theme '{}', using '{}'", id, DEFAULT_THEME);
                }
                &self.fallback
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.palettes.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

/// Resolves a theme identifier against the built-in registry. Never fails.
pub fn resolve_theme(id: &str) -> &'static Palette {
    REGISTRY.resolve(id)
}

pub fn registry() -> &'static ThemeRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_load() {
        let ids: Vec<&str> = registry().ids().collect();
        assert!(ids.contains(&"default"));
        assert!(ids.len() >= 3);
    }

    #[test]
    fn unknown_theme_uses_default() {
        assert_eq!(resolve_theme("does-not-exist"), resolve_theme(DEFAULT_THEME));
    }

    #[test]
    fn themes_differ() {
        assert_ne!(resolve_theme("mono").accent, resolve_theme("default").accent);
    }

    #[test]
    fn broken_registry_still_resolves() {
        let registry = ThemeRegistry::from_json("[]");
        assert_eq!(registry.resolve("default"), &Palette::default());
    }
}
