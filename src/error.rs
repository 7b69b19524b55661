use crate::config::ConfigError;
use stagerider_i18n::translate_path;
use stagerider_layout::LayoutError;
use stagerider_render_lopdf::RenderError;
use thiserror::Error;

/// A comprehensive error type for the rider generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rider JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation was superseded by a newer request")]
    Superseded,

    #[error("Preview session is closed")]
    Closed,

    #[error("Generation task failed: {0}")]
    Task(String),
}

impl PipelineError {
    /// The generic, localized message shown to end users. Details stay in the
    /// logs.
    pub fn user_message(&self, locale: &str) -> String {
        translate_path(locale, "errors.generation")
    }

    /// Stale results are discarded silently rather than reported.
    pub fn is_stale(&self) -> bool {
        matches!(self, PipelineError::Superseded | PipelineError::Closed)
    }
}
