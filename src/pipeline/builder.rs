use super::orchestrator::RiderPipeline;
use crate::config::EngineConfig;
use crate::error::PipelineError;
use stagerider_core::{Assembler, EquipmentCatalog};
use std::path::Path;

/// A builder for creating a `RiderPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: EngineConfig,
    catalog: Option<EquipmentCatalog>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings and the built-in catalog.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a TOML file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = EngineConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.config.default_locale = locale.to_string();
        self
    }

    pub fn with_default_theme(mut self, theme: &str) -> Self {
        self.config.default_theme = theme.to_string();
        self
    }

    /// Row budgets for the input-list and monitor-mix tables.
    pub fn with_rows_per_page(mut self, inputs: usize, monitors: usize) -> Self {
        self.config.input_rows_per_page = inputs;
        self.config.monitor_rows_per_page = monitors;
        self
    }

    /// Overrides both the built-in catalog and any catalog named in the config.
    pub fn with_equipment_catalog(mut self, catalog: EquipmentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Consumes the builder, validating the configuration and loading the
    /// equipment catalog.
    pub fn build(self) -> Result<RiderPipeline, PipelineError> {
        self.config.validate()?;
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => self.config.load_catalog()?,
        };
        log::info!(
            "[PIPELINE] Built pipeline (locale '{}', theme '{}', {} mic brands).",
            self.config.default_locale,
            self.config.default_theme,
            catalog.microphone_brands.len()
        );
        Ok(RiderPipeline::new(self.config, Assembler::new(catalog)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_row_budget_fails_the_build() {
        let result = PipelineBuilder::new().with_rows_per_page(0, 24).build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn missing_catalog_file_fails_the_build() {
        let config = EngineConfig {
            equipment_catalog: Some("/nonexistent/equipment.json".into()),
            ..Default::default()
        };
        assert!(PipelineBuilder::new().with_config(config).build().is_err());
    }
}
