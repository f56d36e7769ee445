//! Global schedule-ics configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use schedule_ics_core::constants::{DEFAULT_CALENDAR_NAME, OUTPUT_FILENAME, SCHEDULE_EXTENSION};
use schedule_ics_core::expand::ExportOptions;
use serde::{Deserialize, Serialize};

static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_output_filename() -> String {
    OUTPUT_FILENAME.to_string()
}

fn default_schedule_extension() -> String {
    SCHEDULE_EXTENSION.to_string()
}

/// Configuration at ~/.config/schedule-ics/config.toml
///
/// Every field can be overridden with a `SCHEDULE_ICS_<FIELD>` environment
/// variable, e.g. `SCHEDULE_ICS_OUTPUT_DIR=~/Downloads`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    #[serde(default = "default_output_filename")]
    pub output_filename: String,

    #[serde(default = "default_schedule_extension")]
    pub schedule_extension: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: default_output_dir(),
            calendar_name: default_calendar_name(),
            output_filename: default_output_filename(),
            schedule_extension: default_schedule_extension(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("schedule-ics");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (created with commented defaults on first run)
    /// and apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            if let Err(e) = Self::create_default_config(&config_path) {
                tracing::warn!(path = %config_path.display(), "{e:#}");
            }
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        ::config::Config::builder()
            .add_source(::config::File::from(path.to_path_buf()).required(false))
            .add_source(::config::Environment::with_prefix("SCHEDULE_ICS"))
            .build()
            .context("Could not read config")?
            .try_deserialize()
            .context("Invalid config")
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# schedule-ics configuration

# Where exported calendars are written:
# output_dir = \"{DEFAULT_OUTPUT_DIR}\"

# Calendar name shown by calendar clients:
# calendar_name = \"{DEFAULT_CALENDAR_NAME}\"

# File name of the exported calendar:
# output_filename = \"{OUTPUT_FILENAME}\"

# Extension marking schedule files (without the dot):
# schedule_extension = \"{SCHEDULE_EXTENSION}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn export_options(&self, stamp: DateTime<Utc>) -> ExportOptions {
        ExportOptions {
            calendar_name: self.calendar_name.clone(),
            filename: self.output_filename.clone(),
            ..ExportOptions::at(stamp)
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Could not serialize config")
    }
}
