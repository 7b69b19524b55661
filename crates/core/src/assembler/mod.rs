//! Turns a rider into a logical [`Document`].
//!
//! Pages are produced by a fixed sequence of constructors, each returning
//! `None` when its source data is empty. The resulting order is the page order
//! of the output: cover, equipment sections, input list, monitor mixes, final
//! notes, stage plot. The assembler is total; any JSON value yields at least
//! the cover page.

mod band;
mod cover;
mod notes;
mod sections;
mod tables;

use crate::equipment::EquipmentCatalog;
use crate::rider::{Rider, Supplier};
use band::BandEquipment;
use log::{debug, info};
use serde_json::Value;
use stagerider_i18n::Translator;
use stagerider_layout::{BulletItem, Document, FooterTemplate, Page, SectionLabels};
use stagerider_style::DEFAULT_THEME;

/// Caller-controlled switches for one assembly run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleOptions {
    pub include_stage_plot: bool,
    pub custom_footer_text: Option<String>,
    pub theme_id: String,
    /// Adds the "Generated with" line to every footer.
    pub watermark: bool,
    pub input_rows_per_page: usize,
    pub monitor_rows_per_page: usize,
    pub min_row_height: f32,
    /// Overrides the localized product name in footers and metadata.
    pub product_name: Option<String>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            include_stage_plot: true,
            custom_footer_text: None,
            theme_id: DEFAULT_THEME.to_string(),
            watermark: false,
            input_rows_per_page: 22,
            monitor_rows_per_page: 24,
            min_row_height: 18.0,
            product_name: None,
        }
    }
}

/// Document assembler bound to an equipment catalog.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    catalog: EquipmentCatalog,
}

/// Everything the page constructors read.
pub(crate) struct Context<'a> {
    pub rider: Rider<'a>,
    pub t: Translator,
    pub options: &'a AssembleOptions,
    pub catalog: &'a EquipmentCatalog,
    pub band: BandEquipment,
}

impl Context<'_> {
    pub fn section_labels(&self) -> SectionLabels {
        SectionLabels {
            suggested_items: self.t.t("sections.suggested"),
            band_supplied: self.t.t("common.suppliedByBand"),
            unspecified: self.t.t("common.unspecified"),
        }
    }

    /// `text` with the band-supplied annotation when `supplier` is the artist.
    pub fn annotate(&self, text: String, supplier: Supplier) -> String {
        if supplier.is_artist() {
            format!("{} ({})", text, self.t.t("common.suppliedByBand"))
        } else {
            text
        }
    }
}

impl Assembler {
    pub fn new(catalog: EquipmentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    pub fn assemble(&self, rider: &Value, locale: &str, options: &AssembleOptions) -> Document {
        let t = Translator::new(locale);
        let rider = Rider::new(rider);
        let band = BandEquipment::survey(rider, &t);
        let ctx = Context {
            rider,
            t,
            options,
            catalog: &self.catalog,
            band,
        };

        let pages: Vec<Page> = [
            Some(cover::cover_page(&ctx)),
            sections::sections_page(&ctx),
            tables::input_list_page(&ctx),
            tables::monitor_mixes_page(&ctx),
            notes::final_notes_page(&ctx),
            notes::stage_plot_page(&ctx),
        ]
        .into_iter()
        .flatten()
        .collect();

        for page in &pages {
            debug!("[ASSEMBLER] Emitting {:?} page with {} blocks.", page.kind, page.blocks.len());
        }
        info!(
            "[ASSEMBLER] Assembled {} logical pages for locale '{}'.",
            pages.len(),
            ctx.t.locale()
        );

        Document {
            title: document_title(&ctx),
            locale: ctx.t.locale().to_string(),
            theme: options.theme_id.clone(),
            pages,
            footer: footer_template(&ctx),
        }
    }
}

/// Assembles with the built-in equipment catalog.
pub fn assemble(rider: &Value, locale: &str, options: &AssembleOptions) -> Document {
    Assembler::default().assemble(rider, locale, options)
}

fn artist_title(ctx: &Context<'_>) -> String {
    ctx.rider.artist_name().unwrap_or_else(|| ctx.t.t("common.artist"))
}

fn document_title(ctx: &Context<'_>) -> String {
    format!("{} - {}", artist_title(ctx), ctx.t.t("common.technicalRider"))
}

fn footer_template(ctx: &Context<'_>) -> FooterTemplate {
    let product = ctx
        .options
        .product_name
        .clone()
        .unwrap_or_else(|| ctx.t.t("common.product"));
    let watermark = ctx
        .options
        .watermark
        .then(|| ctx.t.t_with("footer.watermark", &[("product", product.as_str())]));
    FooterTemplate::new(product, ctx.t.t("footer.page"))
        .with_custom_text(ctx.options.custom_footer_text.as_deref())
        .with_watermark(watermark)
}

/// Reads a bullet entry: plain text or a brand/model record. Blank strings
/// and nulls are skipped.
pub(crate) fn bullet_items(values: &[Value]) -> Vec<BulletItem> {
    values
        .iter()
        .filter_map(|value| match value {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(BulletItem::Text(s.trim().to_string())),
            Value::Object(_) => {
                let fields = crate::rider::Fields::new(value);
                Some(BulletItem::Equipment {
                    brand: fields.text(&["brand", "marca"]).unwrap_or_default(),
                    model: fields.text(&["model", "modelo"]).unwrap_or_default(),
                    band_supplied: fields.supplier(&["supplier", "fornecedor"]).is_artist(),
                })
            }
            _ => Some(BulletItem::Malformed),
        })
        .collect()
}
