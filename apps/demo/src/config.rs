//! Demo configuration.
//!
//! Configuration is an optional TOML file, looked up in order:
//! - the first command-line argument
//! - the `RINGKIT_DEMO_CONFIG` environment variable
//!
//! Without either, built-in defaults are used.

use std::path::{Path, PathBuf};

use ringkit_buffer::OverflowPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "RINGKIT_DEMO_CONFIG";

/// How the surviving elements are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated values on one line.
    #[default]
    Plain,
    /// The buffer's serde representation.
    Json,
}

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Buffer capacity.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Overflow policy: `"evict"` or `"grow"`.
    #[serde(default)]
    pub policy: OverflowPolicy,

    /// Values pushed to the back, in order.
    #[serde(default = "default_values")]
    pub values: Vec<i64>,

    /// Elements kept at the front of the erased range.
    #[serde(default = "default_skip")]
    pub erase_skip_front: usize,

    /// Elements kept at the back of the erased range.
    #[serde(default = "default_skip")]
    pub erase_skip_back: usize,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_capacity() -> usize {
    5
}

fn default_values() -> Vec<i64> {
    vec![1, 2, 3, 4, 5]
}

fn default_skip() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            policy: OverflowPolicy::default(),
            values: default_values(),
            erase_skip_front: default_skip(),
            erase_skip_back: default_skip(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the first argument or the environment,
    /// falling back to defaults when neither names a file.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from `path`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}
