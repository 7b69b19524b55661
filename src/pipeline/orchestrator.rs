use super::export::{Entitlement, ExportedPdf, resolve_theme_for};
use crate::config::EngineConfig;
use crate::error::PipelineError;
use log::{debug, info};
use serde_json::Value;
use stagerider_core::{AssembleOptions, Assembler, Document, Rider};
use stagerider_i18n::Translator;
use stagerider_layout::{LaidOutDocument, LayoutEngine};
use stagerider_render_lopdf::LopdfRenderer;
use stagerider_style::{build_styles, resolve_theme};
use std::sync::Arc;
use std::time::Instant;

/// One document to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub rider: Value,
    /// Falls back to the configured default locale.
    pub locale: Option<String>,
    pub theme: Option<String>,
    pub include_stage_plot: bool,
    pub custom_footer_text: Option<String>,
    pub entitlement: Entitlement,
}

impl RenderRequest {
    pub fn new(rider: Value) -> Self {
        Self {
            rider,
            locale: None,
            theme: None,
            include_stage_plot: true,
            custom_footer_text: None,
            entitlement: Entitlement::default(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_stage_plot(mut self, include: bool) -> Self {
        self.include_stage_plot = include;
        self
    }

    pub fn with_footer_text(mut self, text: impl Into<String>) -> Self {
        self.custom_footer_text = Some(text.into());
        self
    }

    pub fn with_entitlement(mut self, entitlement: Entitlement) -> Self {
        self.entitlement = entitlement;
        self
    }
}

/// Assembly, layout and serialization behind one handle. Cheap to clone.
#[derive(Clone)]
pub struct RiderPipeline {
    config: Arc<EngineConfig>,
    assembler: Arc<Assembler>,
}

impl RiderPipeline {
    pub(crate) fn new(config: EngineConfig, assembler: Assembler) -> Self {
        Self {
            config: Arc::new(config),
            assembler: Arc::new(assembler),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The locale actually used for `request`, after fallback.
    pub fn locale_for(&self, request: &RenderRequest) -> String {
        let requested = request.locale.as_deref().unwrap_or(&self.config.default_locale);
        Translator::new(requested).locale().to_string()
    }

    fn options_for(&self, request: &RenderRequest) -> AssembleOptions {
        let requested_theme = request.theme.as_deref().unwrap_or(&self.config.default_theme);
        AssembleOptions {
            include_stage_plot: request.include_stage_plot,
            custom_footer_text: request.custom_footer_text.clone(),
            theme_id: resolve_theme_for(request.entitlement, Some(requested_theme)),
            watermark: request.entitlement.watermark(),
            input_rows_per_page: self.config.input_rows_per_page,
            monitor_rows_per_page: self.config.monitor_rows_per_page,
            min_row_height: self.config.min_row_height,
            product_name: self.config.product_name.clone(),
        }
    }

    /// The logical document, before layout. Never fails.
    pub fn assemble(&self, request: &RenderRequest) -> Document {
        let options = self.options_for(request);
        self.assembler
            .assemble(&request.rider, &self.locale_for(request), &options)
    }

    pub fn layout(&self, document: &Document) -> Result<LaidOutDocument, PipelineError> {
        let styles = build_styles(resolve_theme(&document.theme));
        Ok(LayoutEngine::new(styles).layout(document)?)
    }

    /// Runs every stage on the calling thread.
    pub fn render(&self, request: &RenderRequest) -> Result<ExportedPdf, PipelineError> {
        let started = Instant::now();
        let document = self.assemble(request);
        let laid_out = self.layout(&document)?;
        let bytes = LopdfRenderer::new().render(&laid_out)?;
        info!(
            "[PIPELINE] Rendered {} pages ({} bytes) in {:?}.",
            laid_out.page_count(),
            bytes.len(),
            started.elapsed()
        );
        let artist = Rider::new(&request.rider).artist_name();
        Ok(ExportedPdf::new(bytes, artist.as_deref(), &document.locale))
    }

    /// Renders on the blocking pool so async callers stay responsive.
    pub async fn generate(&self, request: RenderRequest) -> Result<ExportedPdf, PipelineError> {
        let pipeline = self.clone();
        debug!("[PIPELINE] Dispatching render to the blocking pool.");
        tokio::task::spawn_blocking(move || pipeline.render(&request))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))?
    }
}
