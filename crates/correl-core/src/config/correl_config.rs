//! Top-level correl configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ENV_INPUT_PATH, ENV_OUTPUT_PATH,
    PROJECT_CONFIG_FILE,
};
use crate::errors::ConfigError;

/// Where the table is read from and where the document is written.
///
/// Resolution order (highest priority first):
/// 1. CLI arguments (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CORREL_INPUT`, `CORREL_OUTPUT`)
/// 3. Project config (`correl.toml` in the working directory, or an explicit file)
/// 4. Compiled defaults (`correl.csv`, `correl_data.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorrelConfig {
    /// Input table path. Default: `correl.csv`.
    pub input_path: Option<PathBuf>,
    /// Output document path. Default: `correl_data.json`.
    pub output_path: Option<PathBuf>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl CorrelConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit_file` replaces the `correl.toml` lookup in `root`; unlike the
    /// implicit project file it must exist.
    pub fn load(
        root: &Path,
        explicit_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project or explicit config file
        match explicit_file {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI arguments
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the effective input path, defaulting to `correl.csv`.
    pub fn effective_input_path(&self) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }

    /// Returns the effective output path, defaulting to `correl_data.json`.
    pub fn effective_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// Validate the configuration values.
    pub fn validate(config: &CorrelConfig) -> Result<(), ConfigError> {
        if matches!(config.input_path.as_deref(), Some(p) if p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "input_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if matches!(config.output_path.as_deref(), Some(p) if p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "output_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CorrelConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CorrelConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut CorrelConfig, other: &CorrelConfig) {
        if other.input_path.is_some() {
            base.input_path = other.input_path.clone();
        }
        if other.output_path.is_some() {
            base.output_path = other.output_path.clone();
        }
    }

    fn apply_env_overrides(config: &mut CorrelConfig) {
        if let Some(val) = std::env::var_os(ENV_INPUT_PATH) {
            config.input_path = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os(ENV_OUTPUT_PATH) {
            config.output_path = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut CorrelConfig, cli: &CliOverrides) {
        if let Some(ref path) = cli.input_path {
            config.input_path = Some(path.clone());
        }
        if let Some(ref path) = cli.output_path {
            config.output_path = Some(path.clone());
        }
    }
}
