//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dotget/dotget.toml`
//! 3. Local config: `<project_dir>/.dotget.toml`
//! 4. Environment variables: `DOTGET_*` prefix
//!
//! Command-line flags are applied on top by the CLI.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{AbsencePolicy, DocumentFormat};

/// How lookup results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Strings raw, everything else as compact JSON, absence as `undefined`
    #[default]
    Plain,
    /// One JSON object per path: `{"path":..,"value":..,"type":..}`
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ApplicationError::Config {
                message: format!("unknown output format: {s} (expected plain or json)"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub policy: Option<AbsencePolicy>,
    pub output: Option<OutputFormat>,
    pub format: Option<DocumentFormat>,
}

/// Unified configuration for dotget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// When a walk reports absence (default: falsy)
    pub policy: AbsencePolicy,
    /// Result rendering (default: plain)
    pub output: OutputFormat,
    /// Input format when it cannot be inferred from the file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DocumentFormat>,
}

/// Get the XDG config directory for dotget.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dotget").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dotget.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".dotget.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            policy: overlay.policy.unwrap_or(self.policy),
            output: overlay.output.unwrap_or(self.output),
            format: overlay.format.or(self.format),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.dotget.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/dotget/dotget.toml`
    /// 3. Local config: `<project_dir>/.dotget.toml`
    /// 4. Environment variables: `DOTGET_POLICY`, `DOTGET_OUTPUT`, `DOTGET_FORMAT`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply DOTGET_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("DOTGET"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("policy") {
            settings.policy = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("DOTGET_POLICY: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = val.parse()?;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = Some(val.parse().map_err(|e| ApplicationError::Config {
                message: format!("DOTGET_FORMAT: {e}"),
            })?);
        }

        Ok(settings)
    }

    /// Apply command-line overrides (highest precedence).
    pub fn with_overrides(
        mut self,
        policy: Option<AbsencePolicy>,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dotget configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/dotget/dotget.toml
#   Local:  <project_dir>/.dotget.toml
#   Env:    DOTGET_POLICY, DOTGET_OUTPUT, DOTGET_FORMAT
#   Flags:  --policy, --output, --format

# When a lookup reports a path as absent:
#   "falsy"   - a missing key, or any of null, false, 0, "" along the path
#   "missing" - only a missing key (stored falsy values are returned)
# policy = "falsy"

# Result rendering: "plain" or "json"
# output = "plain"

# Input format when the file extension does not tell: "json" or "toml"
# format = "json"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
