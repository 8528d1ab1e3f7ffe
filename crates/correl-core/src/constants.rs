//! Fixed names shared across the crate.

/// Input table read when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "correl.csv";

/// Output document written when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "correl_data.json";

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "correl.toml";

pub const ENV_INPUT_PATH: &str = "CORREL_INPUT";
pub const ENV_OUTPUT_PATH: &str = "CORREL_OUTPUT";

/// Log filter environment variable, `EnvFilter` syntax.
pub const ENV_LOG: &str = "CORREL_LOG";

/// Filter used when `CORREL_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "correl=warn,correl_core=warn";

/// JSON indentation width of the output document.
pub const OUTPUT_INDENT: &[u8] = b"  ";
