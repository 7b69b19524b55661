use serde::{Deserialize, Serialize};
use stagerider_style::DEFAULT_THEME;
use stagerider_style::theme::registry;

/// What the account is allowed to render. Supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub pro: bool,
}

impl Entitlement {
    pub const FREE: Entitlement = Entitlement { pro: false };
    pub const PRO: Entitlement = Entitlement { pro: true };

    /// Free documents carry the "Generated with" footer line.
    pub fn watermark(self) -> bool {
        !self.pro
    }
}

/// Non-pro accounts always get the default theme; unknown ids also fall back.
pub fn resolve_theme_for(entitlement: Entitlement, requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(id) if entitlement.pro && registry().contains(id) => id.to_string(),
        _ => DEFAULT_THEME.to_string(),
    }
}

/// A finished PDF and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPdf {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl ExportedPdf {
    pub fn new(bytes: Vec<u8>, artist: Option<&str>, locale: &str) -> Self {
        Self {
            bytes,
            filename: export_filename(artist, locale),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Lowercase ASCII with runs of anything else collapsed to `_`.
pub fn sanitize_filename(name: &str) -> String {
    slug::slugify(name).replace('-', "_")
}

/// `{artist}_rider_{locale}.pdf`, with `rider` standing in for a blank name.
pub fn export_filename(artist: Option<&str>, locale: &str) -> String {
    let stem = artist.map(sanitize_filename).filter(|s| !s.is_empty());
    let locale = sanitize_filename(locale);
    format!("{}_rider_{}.pdf", stem.as_deref().unwrap_or("rider"), locale)
}
