//! Exporter configuration.
//!
//! Values are layered, later layers winning:
//! 1. built-in defaults
//! 2. `permit-pdf.toml` in the working directory, or the file named by
//!    `PERMIT_PDF_CONFIG`
//! 3. environment variables such as `PERMIT_PDF__API__BASE_URL`

use crate::report::ReportStyle;
use crate::sink::DEFAULT_FILE_NAME;
use config::{Config, ConfigError, Environment, File};
use permit_source::HttpPermitSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name (without extension) of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "permit-pdf";
/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "PERMIT_PDF_CONFIG";
const ENV_PREFIX: &str = "PERMIT_PDF";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    pub api: ApiConfig,
    pub output: OutputConfig,
    pub report: ReportStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: HttpPermitSource::DEFAULT_BASE_URL.to_string(),
            timeout_secs: HttpPermitSource::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl ExporterConfig {
    /// Loads the configuration from the standard locations.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty());
        Self::load_from(path.as_deref().map(Path::new))
    }

    /// Loads the configuration with `path` as the config file.
    ///
    /// An explicit path must exist; without one, `permit-pdf.toml` is used if
    /// present.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    fn build(
        path: Option<&Path>,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(CONFIG_FILE).required(false)),
        };

        // Always layer environment variables on top
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(env_vars);
        builder = builder.add_source(env);

        let config: ExporterConfig = builder.build()?.try_deserialize()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
