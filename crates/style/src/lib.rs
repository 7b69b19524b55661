pub mod dimension;
pub mod font;
pub mod rules;
pub mod text;
pub mod theme;

pub use dimension::{Margins, PageSize, mm_to_pt};
pub use font::{FontStyle, FontWeight};
pub use rules::{
    CardStyle, CoverStyle, FooterStyle, PageLayout, StyleRuleSet, TableStyle, TextStyle, build_styles,
};
pub use text::TextAlign;
pub use theme::{DEFAULT_THEME, Palette, ThemeRegistry, resolve_theme};
