// src/error.rs
use std::io;
use thiserror::Error;

// Re-export anyhow's Result type
pub use anyhow::Result;

/// Custom Error type for the collectd-confgen library
#[derive(Error, Debug)]
pub enum ConfGenError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("metric input '{metric}' not in known values: {known:?}")]
    UnknownMetric {
        metric: String,
        known: Vec<&'static str>,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Other error: {0}")]
    Other(String),
}
