//! Core configuration generation
use log::{debug, trace};

use crate::config::Metrics;
use crate::error::{ConfGenError, Result};
use crate::translation::{DEFAULT_SCRAPE_INTERVAL, FIXED_CONFIG, TRANSLATION, known_metrics};

use super::processes::append_processes_plugin_config;

/// Generate the full collectd configuration for a metric request
///
/// The output is a pure function of the request: the interval line, the
/// fixed preamble, one fragment per requested category in request order,
/// and the processes plugin block when process metrics were requested.
/// Generation fails on the first scrape entry that is not a known category.
pub fn generate_collectd_config(metrics: &Metrics) -> Result<String> {
    let mut out = String::new();

    append_scrape_interval(&mut out, metrics.interval);
    out.push_str(FIXED_CONFIG);
    append_scrape_translations(&mut out, metrics)?;
    append_processes_plugin_config(&mut out, metrics).map_err(|e| {
        ConfGenError::Render(format!(
            "failed to generate 'processes' plugin config: {}",
            e
        ))
    })?;

    debug!(
        "Generated collectd config for {} scrape categories",
        metrics.scrape.len()
    );

    Ok(out)
}

/// Write the scrape interval line, falling back to the default for 0
fn append_scrape_interval(out: &mut String, interval: u32) {
    let interval = if interval != 0 {
        interval
    } else {
        DEFAULT_SCRAPE_INTERVAL
    };
    out.push_str(&format!("Interval {}\n", interval));
}

/// Append the translation fragment for each requested category, in request order
fn append_scrape_translations(out: &mut String, metrics: &Metrics) -> Result<()> {
    for metric in &metrics.scrape {
        match TRANSLATION.get(metric.as_str()) {
            Some(fragment) => {
                trace!("Appending translation for '{}'", metric);
                out.push_str(fragment);
            }
            None => {
                return Err(ConfGenError::UnknownMetric {
                    metric: metric.clone(),
                    known: known_metrics(),
                }
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(interval: u32, scrape: &[&str]) -> Metrics {
        Metrics {
            interval,
            scrape: scrape.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn unknown_metric(err: &anyhow::Error) -> (&str, &[&'static str]) {
        match err.downcast_ref::<ConfGenError>() {
            Some(ConfGenError::UnknownMetric { metric, known }) => (metric.as_str(), known.as_slice()),
            other => panic!("expected UnknownMetric, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_interval_uses_default() {
        let out = generate_collectd_config(&request(0, &[])).unwrap();
        assert_eq!(out.lines().next(), Some("Interval 60"));
    }

    #[test]
    fn test_explicit_interval() {
        let out = generate_collectd_config(&request(42, &[])).unwrap();
        assert_eq!(out.lines().next(), Some("Interval 42"));
    }

    #[test]
    fn test_preamble_follows_interval_line() {
        let out = generate_collectd_config(&request(0, &["cpu", "process"])).unwrap();
        assert!(out.starts_with(&format!("Interval 60\n{}", FIXED_CONFIG)));
    }

    #[test]
    fn test_known_categories_concatenate_in_request_order() {
        let out = generate_collectd_config(&request(0, &["cpu", "swap"])).unwrap();
        assert_eq!(
            out,
            format!(
                "Interval 60\n{}{}{}",
                FIXED_CONFIG, TRANSLATION["cpu"], TRANSLATION["swap"]
            )
        );
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = generate_collectd_config(&request(0, &["cpu", "bogus", "disk"])).unwrap_err();
        let (metric, known) = unknown_metric(&err);

        assert_eq!(metric, "bogus");
        for name in ["cpu", "disk", "memory", "network", "swap", "process", "perprocess"] {
            assert!(known.contains(&name));
        }
    }

    #[test]
    fn test_unknown_category_position_is_irrelevant() {
        let err = generate_collectd_config(&request(0, &["bogus"])).unwrap_err();
        assert_eq!(unknown_metric(&err).0, "bogus");

        let err = generate_collectd_config(&request(0, &["cpu", "disk", "bogus"])).unwrap_err();
        assert_eq!(unknown_metric(&err).0, "bogus");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = generate_collectd_config(&request(0, &["CPU"])).unwrap_err();
        assert_eq!(unknown_metric(&err).0, "CPU");
    }

    #[test]
    fn test_scrape_order_is_preserved() {
        let cpu_first = generate_collectd_config(&request(0, &["cpu", "memory"])).unwrap();
        let memory_first = generate_collectd_config(&request(0, &["memory", "cpu"])).unwrap();

        assert_ne!(cpu_first, memory_first);
        assert!(
            cpu_first.find("LoadPlugin cpu").unwrap() < cpu_first.find("LoadPlugin memory").unwrap()
        );
        assert!(
            memory_first.find("LoadPlugin memory").unwrap()
                < memory_first.find("LoadPlugin cpu").unwrap()
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let metrics = request(30, &["cpu", "disk", "network", "perprocess", "process"]);
        assert_eq!(
            generate_collectd_config(&metrics).unwrap(),
            generate_collectd_config(&metrics).unwrap()
        );
    }

    #[test]
    fn test_no_process_categories_omits_plugin_block() {
        let out = generate_collectd_config(&request(0, &["cpu", "swap"])).unwrap();
        assert!(!out.contains("LoadPlugin processes"));
        assert!(!out.contains("PostCacheChain"));
    }

    #[test]
    fn test_process_only_output() {
        let out = generate_collectd_config(&request(0, &["process"])).unwrap();
        assert!(out.contains(r#"Type "^(fork_rate|ps_state)$""#));
        assert!(!out.contains("Detail"));
    }

    #[test]
    fn test_per_process_only_output() {
        let out = generate_collectd_config(&request(0, &["perprocess"])).unwrap();
        assert!(out.contains(r#"Type "^(ps_cputime|disk_octets|ps_rss|ps_vm)$""#));
        assert_eq!(out.matches("Detail ").count(), 4);
    }

    #[test]
    fn test_both_process_categories_output() {
        let out = generate_collectd_config(&request(0, &["process", "perprocess"])).unwrap();
        assert!(out.contains(r#"Type "^(ps_cputime|disk_octets|ps_rss|ps_vm|fork_rate|ps_state)$""#));
        assert_eq!(out.matches("Detail ").count(), 4);
    }

    #[test]
    fn test_duplicate_process_entries_collapse() {
        let once = generate_collectd_config(&request(0, &["process"])).unwrap();
        let twice = generate_collectd_config(&request(0, &["process", "process"])).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_scrape_is_interval_and_preamble_only() {
        let out = generate_collectd_config(&request(0, &[])).unwrap();
        assert_eq!(out, format!("Interval 60\n{}", FIXED_CONFIG));
    }
}
