//! A library for generating collectd configuration for metric-collecting agents

pub mod config;
pub mod error;
pub mod generator;
pub mod translation;
pub mod util;

/// Re-export of commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Metrics, MetricsBuilder};
    pub use crate::error::{ConfGenError, Result};
    pub use crate::generator::generate_collectd_config;
    pub use crate::translation::{DEFAULT_SCRAPE_INTERVAL, known_metrics};
}

pub use util::logging::init as init_logging;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
