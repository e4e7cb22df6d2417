use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::paths;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_res_dir")]
    pub res_dir: PathBuf,
    #[serde(default = "default_source_icon")]
    pub source_icon: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_res_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_RES_DIR)
}

fn default_source_icon() -> PathBuf {
    PathBuf::from(paths::SOURCE_ICON)
}

fn default_output_file() -> String {
    paths::OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            res_dir: default_res_dir(),
            source_icon: default_source_icon(),
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Load settings from `explicit` if given (must exist and be valid),
    /// otherwise fall back to [`Config::load_from_dir`] on the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::from_file(path)
            }
            None => Ok(Self::load_from_dir(Path::new("."))),
        }
    }

    /// Settings from `notification-icons.yaml` in `dir`, or defaults.
    ///
    /// A file nobody asked for never stops a run: unreadable or invalid
    /// contents are logged and ignored.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(paths::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no config file, using defaults");
            return Config::default();
        }

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring config file");
                Config::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.res_dir.as_os_str().is_empty() {
            bail!("res_dir cannot be empty");
        }

        if self.source_icon.as_os_str().is_empty() {
            bail!("source_icon cannot be empty");
        }
        if self.source_icon.is_absolute() {
            bail!("source_icon must be relative to res_dir");
        }

        if self.output_file.is_empty() {
            bail!("output_file cannot be empty");
        }
        if self.output_file.contains('/') || self.output_file.contains('\\') {
            bail!("output_file must be a file name, not a path");
        }
        if !self.output_file.ends_with(".png") {
            bail!("output_file must end in .png");
        }

        Ok(())
    }

    pub fn source_icon_path(&self) -> PathBuf {
        self.res_dir.join(&self.source_icon)
    }
}
