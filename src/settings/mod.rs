use std::{fs, io};
use std::path::PathBuf;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {source}")]
    Config {
        #[from]
        source: ConfigError
    },
    #[error("failed to encode settings to toml: {source}")]
    Encode {
        #[from]
        source: toml::ser::Error
    },
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    log_dir: String,
    scenario_path: String
}

impl GlobalSettings {
    const LOG_DIR: &'static str = "log_dir";
    const SCENARIO_PATH: &'static str = "scenario_path";
    pub const CONFIG_FILENAME: &'static str = "vehicle-lab-conf";
    pub const LOG_FILENAME: &'static str = "vehicle_lab.log";

    pub fn default() -> Self {
        GlobalSettings {
            log_dir: default_log_dir(),
            scenario_path: String::new()
        }
    }

    pub fn load() -> Result<Self, SettingsError> {
        GlobalSettings::load_from(GlobalSettings::CONFIG_FILENAME)
    }

    /// Defaults, then `<config_name>.toml`, then `APP_*` environment variables.
    /// A missing or unreadable file is replaced with one holding the defaults.
    pub fn load_from(config_name: &str) -> Result<Self, SettingsError> {
        return match Config::builder()
            .set_default(GlobalSettings::LOG_DIR, default_log_dir())?
            .set_default(GlobalSettings::SCENARIO_PATH, String::new())?
            .add_source(config::File::with_name(config_name))
            .add_source(config::Environment::with_prefix("APP"))
            .build() {
            Ok(settings) => {
                Ok(settings.try_deserialize()?)
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = Config::builder()
                    .set_default(GlobalSettings::LOG_DIR, default_log_dir())?
                    .set_default(GlobalSettings::SCENARIO_PATH, String::new())?
                    .add_source(config::Environment::with_prefix("APP"))
                    .build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write_to(config_name).unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.log_dir)
    }

    /// `None` only when no scenario is configured. A configured path is
    /// returned whether or not it exists.
    pub fn scenario_path(&self) -> Option<PathBuf> {
        if self.scenario_path.trim().is_empty() {
            return None;
        }
        Some(PathBuf::from(&self.scenario_path))
    }

    pub fn write_to(&self, config_name: &str) -> Result<(), SettingsError> {
        fs::write(format!("{}.toml", config_name), toml::to_string(&self)?)?;
        Ok(())
    }
}

fn default_log_dir() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("."))
}
