//! Classification of band-owned input-list equipment into microphones, DI
//! boxes and cables, and grouping of identical entries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

const BUILTIN_CATALOG: &str = include_str!("../data/equipment.json");

static DEFAULT_CATALOG: Lazy<EquipmentCatalog> = Lazy::new(|| {
    EquipmentCatalog::from_json(BUILTIN_CATALOG).unwrap_or_else(|e| {
        log::error!("[ASSEMBLER] Built-in equipment catalog failed to parse: {}", e);
        EquipmentCatalog::fallback()
    })
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentCategory {
    Microphone,
    DiBox,
    XlrCable,
}

impl EquipmentCategory {
    /// Display order of the advisory lines.
    pub const ALL: [EquipmentCategory; 3] = [
        EquipmentCategory::Microphone,
        EquipmentCategory::DiBox,
        EquipmentCategory::XlrCable,
    ];

    /// Key under the `advisory` locale namespace.
    pub fn locale_key(self) -> &'static str {
        match self {
            EquipmentCategory::Microphone => "microphones",
            EquipmentCategory::DiBox => "diBoxes",
            EquipmentCategory::XlrCable => "cables",
        }
    }
}

/// Brand and marker lists. Brand entries are matched case-insensitively as
/// substrings; the DI marker is matched as a whole, case-sensitive token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentCatalog {
    #[serde(default)]
    pub microphone_brands: Vec<String>,
    #[serde(default)]
    pub di_brands: Vec<String>,
    #[serde(default = "default_di_marker")]
    pub di_marker: String,
    #[serde(default = "default_cable_marker")]
    pub cable_marker: String,
}

fn default_di_marker() -> String {
    "DI".to_string()
}

fn default_cable_marker() -> String {
    "xlr".to_string()
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

impl EquipmentCatalog {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let mut catalog: EquipmentCatalog = serde_json::from_str(source)?;
        for brand in catalog.microphone_brands.iter_mut().chain(catalog.di_brands.iter_mut()) {
            *brand = brand.trim().to_lowercase();
        }
        catalog.microphone_brands.retain(|b| !b.is_empty());
        catalog.di_brands.retain(|b| !b.is_empty());
        Ok(catalog)
    }

    fn fallback() -> Self {
        Self {
            microphone_brands: Vec::new(),
            di_brands: Vec::new(),
            di_marker: default_di_marker(),
            cable_marker: default_cable_marker(),
        }
    }

    pub fn classify(&self, label: &str) -> EquipmentCategory {
        let lowered = label.to_lowercase();
        let has_di_token = !self.di_marker.is_empty()
            && label
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == self.di_marker);
        if has_di_token || self.di_brands.iter().any(|b| lowered.contains(b.as_str())) {
            return EquipmentCategory::DiBox;
        }
        if !self.cable_marker.is_empty() && lowered.contains(&self.cable_marker.to_lowercase()) {
            return EquipmentCategory::XlrCable;
        }
        if self.microphone_brands.iter().any(|b| lowered.contains(b.as_str())) {
            return EquipmentCategory::Microphone;
        }
        log::debug!("[ASSEMBLER] '{}' matched no brand, counted as a microphone.", label);
        EquipmentCategory::Microphone
    }
}

/// One distinct label with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedItem {
    pub label: String,
    pub count: usize,
}

impl fmt::Display for GroupedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}x \"{}\"", self.count, self.label)
        } else {
            write!(f, "\"{}\"", self.label)
        }
    }
}

/// Groups trimmed labels case-insensitively, keeping first-occurrence order
/// and spelling. Blank labels are skipped.
pub fn group_items<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<GroupedItem> {
    let mut groups: Vec<(String, GroupedItem)> = Vec::new();
    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        let key = label.to_lowercase();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, item)) => item.count += 1,
            None => groups.push((
                key,
                GroupedItem {
                    label: label.to_string(),
                    count: 1,
                },
            )),
        }
    }
    groups.into_iter().map(|(_, item)| item).collect()
}
