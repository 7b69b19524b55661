//! Defensive access to the rider JSON.
//!
//! The rider is never deserialized into a fixed schema. Each section is read
//! through [`Fields`], which turns every absent or malformed value into an
//! empty one, so the assembler cannot fail on sparse input.

mod access;
mod media;
mod supplier;

pub use access::Fields;
pub use media::decode_image;
pub use supplier::Supplier;

use serde_json::Value;

pub const GENERAL_INFO: &[&str] = &["general-info", "generalInfo", "informacoes-gerais"];
pub const PA: &[&str] = &["pa"];
pub const CONSOLES: &[&str] = &["consoles", "consoles-mesas"];
pub const LISTENING_SYSTEMS: &[&str] = &["listening-systems", "listeningSystems", "sistemas-escuta"];
pub const AUXILIARY_EQUIPMENT: &[&str] = &["auxiliary-equipment", "auxiliaryEquipment", "equipamentos-auxiliares"];
pub const INPUT_LIST: &[&str] = &["input-list", "inputList"];
pub const MONITOR_MIXES: &[&str] = &["monitor-mixes", "monitorMixes"];
pub const FINAL_NOTES: &[&str] = &["final-notes", "finalNotes", "observacoes-finais"];

/// The root of a rider document.
#[derive(Debug, Clone, Copy)]
pub struct Rider<'a> {
    root: Fields<'a>,
}

impl<'a> Rider<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            root: Fields::new(value),
        }
    }

    pub fn section(&self, aliases: &[&str]) -> Fields<'a> {
        self.root.get(aliases)
    }

    pub fn general_info(&self) -> Fields<'a> {
        self.section(GENERAL_INFO)
    }

    pub fn artist_name(&self) -> Option<String> {
        self.general_info().text(&["artistName", "artista", "artist"])
    }

    pub fn final_notes(&self) -> Option<String> {
        self.section(FINAL_NOTES).text(&["notes", "observacoes"])
    }

    pub fn inputs(&self) -> &'a [Value] {
        self.section(INPUT_LIST).array(&["inputs", "entradas"])
    }

    pub fn mixes(&self) -> &'a [Value] {
        self.section(MONITOR_MIXES).array(&["mixes", "vias"])
    }
}
