use serde::Serialize;
use serde_json::Value;

/// Who brings a piece of equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Supplier {
    Artist,
    Promoter,
    #[default]
    Unspecified,
}

impl Supplier {
    /// Normalizes the boolean and string spellings found across rider sections.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Supplier::Artist,
            Value::String(s) => Self::from_label(s),
            _ => Supplier::Unspecified,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "true" | "band" | "artist" | "banda" | "artista" => Supplier::Artist,
            "promoter" | "supplier" | "venue" | "produtor" | "produtora" | "local" => Supplier::Promoter,
            _ => Supplier::Unspecified,
        }
    }

    pub fn is_artist(self) -> bool {
        self == Supplier::Artist
    }
}
