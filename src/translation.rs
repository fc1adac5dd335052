//! Fixed configuration text and the category translation table
//!
//! The fragments below are hand-authored collectd configuration known to be
//! accepted by the downstream daemon. They are literal data; the generator
//! concatenates them and never parses them back.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Scrape interval used when the request does not specify one
pub const DEFAULT_SCRAPE_INTERVAL: u32 = 60;

/// Category name that enables aggregate process metrics
pub const PROCESS_METRIC: &str = "process";

/// Category name that enables per-process detail metrics
pub const PER_PROCESS_METRIC: &str = "perprocess";

/// Configuration block emitted for every request, directly after the
/// interval line. The syslog plugin must be loaded before all others so that
/// diagnostics from later plugins are captured.
pub(crate) const FIXED_CONFIG: &str = r#"
# Explicitly set hostname to "" to indicate the default resource.
Hostname ""

# The Stackdriver agent does not use fully qualified domain names.
FQDNLookup false

# Collectd processes its config in order, so this must be loaded first in order
# to catch messages from other plugins during configuration.
LoadPlugin syslog
<Plugin "syslog">
  LogLevel "info"
</Plugin>

LoadPlugin stackdriver_agent
LoadPlugin write_gcm
<Plugin "write_gcm">
  PrettyPrintJSON false
</Plugin>
"#;

const CPU_CONFIG: &str = r#"
LoadPlugin cpu
<Plugin "cpu">
  ValuesPercentage true
  ReportByCpu true
  ReportByState true
</Plugin>
"#;

const DISK_CONFIG: &str = r#"
LoadPlugin disk
<Plugin "disk">
</Plugin>

LoadPlugin df
<Plugin "df">
  FSType "devfs"
  IgnoreSelected true
  ReportByDevice true
  ValuesPercentage true
</Plugin>
"#;

const MEMORY_CONFIG: &str = r#"
LoadPlugin memory
<Plugin "memory">
  ValuesPercentage true
</Plugin>
"#;

const NETWORK_CONFIG: &str = r#"
LoadPlugin interface
<Plugin "interface">
</Plugin>

LoadPlugin tcpconns
<Plugin "tcpconns">
  AllPortsSummary true
</Plugin>
"#;

const SWAP_CONFIG: &str = r#"
LoadPlugin swap
<Plugin "swap">
  ValuesPercentage true
</Plugin>
"#;

/// Translation from category name to configuration fragment
///
/// Built once on first use and read-only afterwards, so concurrent
/// generation calls can share it without locking. The "process" and
/// "perprocess" categories are known names whose configuration is produced
/// by the processes stage instead of this table, hence the empty fragments.
pub(crate) static TRANSLATION: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("cpu", CPU_CONFIG),
            ("disk", DISK_CONFIG),
            ("memory", MEMORY_CONFIG),
            ("network", NETWORK_CONFIG),
            ("swap", SWAP_CONFIG),
            (PER_PROCESS_METRIC, ""),
            (PROCESS_METRIC, ""),
        ])
    });

/// All category names the generator accepts
///
/// The order of the returned names is not specified.
pub fn known_metrics() -> Vec<&'static str> {
    TRANSLATION.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_metrics_membership() {
        let known = known_metrics();
        assert_eq!(known.len(), 7);
        for name in ["cpu", "disk", "memory", "network", "swap", "process", "perprocess"] {
            assert!(known.contains(&name), "missing category '{}'", name);
        }
    }

    #[test]
    fn test_process_categories_have_empty_fragments() {
        assert_eq!(TRANSLATION[PROCESS_METRIC], "");
        assert_eq!(TRANSLATION[PER_PROCESS_METRIC], "");
    }

    #[test]
    fn test_fragments_are_newline_delimited_blocks() {
        for (name, fragment) in TRANSLATION.iter() {
            if fragment.is_empty() {
                continue;
            }
            assert!(fragment.starts_with('\n'), "fragment '{}' missing leading newline", name);
            assert!(fragment.ends_with('\n'), "fragment '{}' missing trailing newline", name);
        }
    }
}
