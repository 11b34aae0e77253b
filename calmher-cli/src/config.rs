//! CLI configuration at ~/.config/calmher/config.toml
//!
//! Values can be overridden with `CALMHER_*` environment variables
//! (e.g. `CALMHER_CALENDAR_NAME`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

static DEFAULT_CALENDAR_NAME: &str = "CalmHer Wellness Schedule";
static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CliConfig {
    /// Written to X-WR-CALNAME on export
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// Where exports land when no explicit output path is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            calendar_name: default_calendar_name(),
            output_dir: default_output_dir(),
        }
    }
}

impl CliConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("calmher");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: CliConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CALMHER"))
            .build()
            .with_context(|| format!("Could not read config at {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid config at {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Could not serialize config")?;
        std::fs::write(path, content).context("Could not write config file")?;

        Ok(())
    }

    /// `output_dir` with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Create a default config file with all options commented out.
    /// Returns false when a file already exists.
    pub fn create_default_config(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        let contents = format!(
            "\
# calmher configuration

# Calendar name used for exported .ics files:
# calendar_name = \"{DEFAULT_CALENDAR_NAME}\"

# Directory exports are written to:
# output_dir = \"{DEFAULT_OUTPUT_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }
        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(true)
    }
}
