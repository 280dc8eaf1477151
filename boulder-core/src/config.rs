//! Global boulder configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar_event::CalendarOptions;
use crate::error::{BoulderError, BoulderResult};
use crate::store::AppointmentStore;

static DEFAULT_STORE_PATH: &str = "~/.local/share/boulder/appointments.csv";
static DEFAULT_TITLE: &str = "Bouldern";
static DEFAULT_INITIAL_VIEW: &str = "dayGridWeek";
const DEFAULT_SERVER_PORT: u16 = 4097;

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_initial_view() -> String {
    DEFAULT_INITIAL_VIEW.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/boulder/config.toml
///
/// Values can be overridden with `BOULDER_*` environment variables
/// (e.g. `BOULDER_STORE_PATH`).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoulderConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Title used when an appointment is added without one
    #[serde(default = "default_title")]
    pub default_title: String,

    #[serde(default = "default_initial_view")]
    pub initial_view: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for BoulderConfig {
    fn default() -> Self {
        BoulderConfig {
            store_path: default_store_path(),
            default_title: default_title(),
            initial_view: default_initial_view(),
            server_port: default_server_port(),
        }
    }
}

impl BoulderConfig {
    pub fn config_path() -> BoulderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoulderError::Config("Could not determine config directory".into()))?
            .join("boulder");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented config file
    /// on first run.
    pub fn load() -> BoulderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> BoulderResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("BOULDER").try_parsing(true))
            .build()
            .map_err(|e| BoulderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BoulderError::Config(e.to_string()))
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store(&self) -> AppointmentStore {
        AppointmentStore::new(self.store_path())
    }

    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions::with_initial_view(&self.initial_view)
    }

    /// Write the current config as TOML.
    pub fn save(&self, path: &Path) -> BoulderResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BoulderError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| BoulderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BoulderResult<()> {
        let contents = format!(
            "\
# boulder configuration

# CSV file holding all appointments:
# store_path = \"{}\"

# Title for appointments added without one:
# default_title = \"{}\"

# Calendar view shown first by web clients:
# initial_view = \"{}\"

# Port for boulder-server:
# server_port = {}
",
            DEFAULT_STORE_PATH, DEFAULT_TITLE, DEFAULT_INITIAL_VIEW, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BoulderError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BoulderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn commented_default_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boulder/config.toml");

        BoulderConfig::create_default_config(&path).unwrap();
        let config = BoulderConfig::load_from(&path).unwrap();

        assert_eq!(config.default_title, "Bouldern");
        assert_eq!(config.initial_view, "dayGridWeek");
        assert_eq!(config.server_port, 4097);
    }

    #[test]
    fn saved_values_are_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = BoulderConfig {
            store_path: dir.path().join("termine.csv"),
            default_title: "Klettern".to_string(),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = BoulderConfig::load_from(&path).unwrap();
        assert_eq!(loaded.store_path(), dir.path().join("termine.csv"));
        assert_eq!(loaded.default_title, "Klettern");
    }

    #[test]
    fn calendar_options_follow_initial_view() {
        let config = BoulderConfig {
            initial_view: "dayGridMonth".to_string(),
            ..Default::default()
        };
        assert_eq!(config.calendar_options().initial_view, "dayGridMonth");
    }
}
