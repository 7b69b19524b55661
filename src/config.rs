//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! default-locale = "en"
//! default-theme = "default"
//! product-name = "StageRider"
//! input-rows-per-page = 22
//! monitor-rows-per-page = 24
//! min-row-height = 18.0
//! equipment-catalog = "equipment.json"
//! ```

use serde::{Deserialize, Serialize};
use stagerider_core::{AssembleOptions, EquipmentCatalog};
use stagerider_i18n::DEFAULT_LOCALE;
use stagerider_style::DEFAULT_THEME;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid equipment catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    pub default_locale: String,
    pub default_theme: String,
    /// Falls back to the localized product name when unset.
    pub product_name: Option<String>,
    pub input_rows_per_page: usize,
    pub monitor_rows_per_page: usize,
    pub min_row_height: f32,
    /// JSON file replacing the built-in brand lists.
    pub equipment_catalog: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let options = AssembleOptions::default();
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            product_name: None,
            input_rows_per_page: options.input_rows_per_page,
            monitor_rows_per_page: options.monitor_rows_per_page,
            min_row_height: options.min_row_height,
            equipment_catalog: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// A relative catalog path is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&source)?;
        if let (Some(catalog), Some(dir)) = (&config.equipment_catalog, path.parent()) {
            if catalog.is_relative() {
                config.equipment_catalog = Some(dir.join(catalog));
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_rows_per_page == 0 || self.monitor_rows_per_page == 0 {
            return Err(ConfigError::Invalid("rows per page must be at least 1".to_string()));
        }
        if !(self.min_row_height.is_finite() && self.min_row_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min-row-height must be positive, got {}",
                self.min_row_height
            )));
        }
        Ok(())
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<EquipmentCatalog, ConfigError> {
        match &self.equipment_catalog {
            Some(path) => {
                let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(EquipmentCatalog::from_json(&source)?)
            }
            None => Ok(EquipmentCatalog::default()),
        }
    }
}
