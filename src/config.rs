use config::{self, File};
use log::{debug, error};
use serde::Deserialize;
use std::path::Path;

use crate::prelude::{ConfGenError, Result};

/// A request for metric collection
///
/// `interval` is the scrape interval in seconds; 0 selects the default.
/// `scrape` is the ordered list of metric categories to collect, and its
/// order is preserved in the generated configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Scrape interval in seconds
    #[serde(default)]
    pub interval: u32,
    /// Metric categories to scrape
    #[serde(default)]
    pub scrape: Vec<String>,
}

/// Builder for metric requests
pub struct MetricsBuilder {
    metrics: Metrics,
}

impl MetricsBuilder {
    /// Create a new metrics builder
    pub fn new() -> Self {
        Self {
            metrics: Metrics::default(),
        }
    }

    /// Set the scrape interval in seconds
    pub fn interval(mut self, interval: u32) -> Self {
        self.metrics.interval = interval;
        self
    }

    /// Append a metric category to the scrape list
    pub fn scrape(mut self, metric: impl Into<String>) -> Self {
        self.metrics.scrape.push(metric.into());
        self
    }

    /// Build the request
    pub fn build(self) -> Metrics {
        self.metrics
    }
}

impl Default for MetricsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Logging level
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfGenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            level => Err(ConfGenError::Config(format!(
                "Unknown log level: {}",
                level
            ))),
        }
    }
}

/// Load a metric request from a file
pub fn load_metrics<P: AsRef<Path>>(path: P) -> Result<Metrics> {
    let path = path.as_ref();
    debug!("Loading metric request from {}", path.display());

    // Check if the file exists
    if !path.exists() {
        error!("Request file {} does not exist", path.display());
        return Err(ConfGenError::Config(format!("Request file not found: {}", path.display())).into());
    }

    // Get the file extension
    let extension = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => {
            error!("Request file has no extension");
            return Err(ConfGenError::Config(format!("Request file has no extension: {}", path.display())).into());
        }
    };

    // Check if the extension is supported and create the appropriate FileFormat
    let format = match extension.as_str() {
        "toml" => config::FileFormat::Toml,
        "json" => config::FileFormat::Json,
        "yaml" | "yml" => config::FileFormat::Yaml,
        format => {
            error!("Unsupported request format: {}", format);
            return Err(ConfGenError::Config(format!("Unsupported request format: {}", format)).into());
        }
    };

    // Build configuration
    let config = config::Config::builder()
        .add_source(File::from(path).format(format))
        .build()
        .map_err(|e| ConfGenError::Config(e.to_string()))?;

    // Deserialize into the request record
    config
        .try_deserialize()
        .map_err(|e| ConfGenError::Config(e.to_string()).into())
}
