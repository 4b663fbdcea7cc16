use crate::core::pager::DEFAULT_PAGE_SIZE;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Rejected answers allowed per prompt; unbounded when absent.
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            max_attempts: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.bikeshare`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path`, or from the standard file.
    /// A missing standard file yields the defaults; a missing explicit path
    /// is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let cfg = match path {
            Some(path) if !path.is_file() => {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::read(path)?,
            None => {
                let path = Self::config_file();
                if path.is_file() {
                    Self::read(&path)?
                } else {
                    Config::default()
                }
            }
        };

        cfg.validate()?;
        Ok(cfg)
    }

    fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.max_attempts == Some(0) {
            return Err(AppError::Config("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_dir)
    }
}
