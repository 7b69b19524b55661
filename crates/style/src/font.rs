use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// The PDF standard Type1 font for a weight/style pair. Documents only use the
/// Helvetica family so no font program has to be embedded.
pub fn base_font_name(weight: FontWeight, style: FontStyle) -> &'static str {
    match (weight, style) {
        (FontWeight::Regular, FontStyle::Normal) => "Helvetica",
        (FontWeight::Bold, FontStyle::Normal) => "Helvetica-Bold",
        (FontWeight::Regular, FontStyle::Italic) => "Helvetica-Oblique",
        (FontWeight::Bold, FontStyle::Italic) => "Helvetica-BoldOblique",
    }
}

/// Every base font a document may reference, in resource order.
pub const BASE_FONTS: [&str; 4] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
];
