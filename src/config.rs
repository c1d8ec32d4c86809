//! Configuration management
//!
//! Resolution follows the precedence: CLI > Env > File > Defaults. The env
//! layer rides on the CLI arguments (clap's `env` attribute), so this module
//! only merges defaults, an optional TOML file, and the pre-merged overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ClipMarkError, ClipMarkResult};

/// Default clipping backend endpoint base
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Config file names probed in the working directory
const CONFIG_FILE_CANDIDATES: &[&str] = &["clipmark.toml", ".clipmark.toml"];

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the clipping backend
    pub backend_url: String,
    /// Directory rendered clips are written into
    pub output_dir: PathBuf,
    /// Timeout for a single export request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            output_dir: PathBuf::from("."),
            request_timeout_secs: 600,
        }
    }
}

/// Overrides carried on the command line (already merged with env by clap)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Resolve configuration following precedence: CLI > Env > File > Defaults
    pub fn resolve(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> ClipMarkResult<Self> {
        // Step 1: defaults
        let mut config = Self::default();

        // Step 2: file (an explicit --config must exist; candidates may not)
        match config_file {
            Some(path) => config = Self::load_file(path)?,
            None => {
                for candidate in CONFIG_FILE_CANDIDATES {
                    let path = Path::new(candidate);
                    if path.exists() {
                        config = Self::load_file(path)?;
                        break;
                    }
                }
            }
        }

        // Steps 3-4: environment and CLI, pre-merged by clap
        if let Some(url) = &overrides.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(dir) = &overrides.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            config.request_timeout_secs = timeout;
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_file(path: &Path) -> ClipMarkResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClipMarkError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let config = toml::from_str(&contents).map_err(|e| ClipMarkError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;
        info!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}
