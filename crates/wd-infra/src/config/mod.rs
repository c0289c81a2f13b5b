//! Settings loading for the wiring layer.
//!
//! Pure data loading: an optional TOML file overlaid with `WARDROBE_*`
//! environment variables, deserialized into the settings DTO. Defaults live
//! on the types themselves, not here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use wd_core::MaintenanceConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Directory the object store is rooted at.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,

    /// Base of the download URLs handed out for stored objects.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_storage_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wardrobe")
        .join("objects")
}

fn default_base_url() -> String {
    "https://storage.example.com/v0/b/wardrobe".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wardrobe")
        .join("wardrobe.db")
        .to_string_lossy()
        .into_owned()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub maintenance: MaintenanceConfig,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Load settings from an optional TOML file plus `WARDROBE_*` overrides,
/// e.g. `WARDROBE_MAINTENANCE__MIN_SWEEP_INTERVAL_MS=30000`.
pub fn load_settings(config_path: Option<&Path>) -> Result<AppSettings> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(Environment::with_prefix("WARDROBE").separator("__"));

    let settings = builder
        .build()
        .context("failed to assemble configuration sources")?;

    settings
        .try_deserialize()
        .context("failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_settings(None).expect("defaults");
        assert_eq!(settings.maintenance.min_sweep_interval_ms, 60_000);
        assert_eq!(settings.maintenance.image_retry_delay_ms, 1_500);
    }

    #[test]
    fn toml_values_override_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            "[maintenance]\nmin_sweep_interval_ms = 30000\n\n[storage]\nbase_url = \"https://objects.test/b/w\"\n"
        )
        .expect("write toml");

        let settings = load_settings(Some(file.path())).expect("load");
        assert_eq!(settings.maintenance.min_sweep_interval_ms, 30_000);
        assert_eq!(settings.maintenance.image_retry_delay_ms, 1_500);
        assert_eq!(settings.storage.base_url, "https://objects.test/b/w");
    }
}
