//! Processes plugin stage
//!
//! The "process" and "perprocess" categories share one plugin block: the
//! processes plugin itself plus a post-cache chain that decides which
//! process metric types reach the writer. Which types pass depends on which
//! of the two categories the request named, so the block is assembled here
//! instead of the translation table.

use std::fmt::{self, Write};

use crate::config::Metrics;
use crate::translation::{PER_PROCESS_METRIC, PROCESS_METRIC};

const PROCESSES_PLUGIN_HEADER: &str = r#"
LoadPlugin processes
LoadPlugin match_regex
<Plugin "processes">
  ProcessMatch "all" ".*"
"#;

const PER_PROCESS_DETAIL: &str = r#"  Detail "ps_cputime"
  Detail "ps_disk_octets"
  Detail "ps_rss"
  Detail "ps_vm"
"#;

/// Which process metric families the request asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessScope {
    /// Aggregate and per-process metrics
    Full,
    /// Per-process detail metrics only
    PerProcessOnly,
    /// Aggregate process metrics only
    ProcessOnly,
}

impl ProcessScope {
    /// Derive the scope from the scrape list
    ///
    /// Presence checks cover the whole list, so duplicates and ordering are
    /// irrelevant. `None` means the request asked for no process metrics and
    /// the stage emits nothing.
    fn from_scrape(scrape: &[String]) -> Option<Self> {
        let include_process = scrape.iter().any(|m| m == PROCESS_METRIC);
        let include_per_process = scrape.iter().any(|m| m == PER_PROCESS_METRIC);

        match (include_process, include_per_process) {
            (true, true) => Some(ProcessScope::Full),
            (false, true) => Some(ProcessScope::PerProcessOnly),
            (true, false) => Some(ProcessScope::ProcessOnly),
            (false, false) => None,
        }
    }

    /// Regex over metric-type names admitted by the post-cache rule
    fn type_filter(self) -> &'static str {
        match self {
            ProcessScope::Full => "^(ps_cputime|disk_octets|ps_rss|ps_vm|fork_rate|ps_state)$",
            ProcessScope::PerProcessOnly => "^(ps_cputime|disk_octets|ps_rss|ps_vm)$",
            ProcessScope::ProcessOnly => "^(fork_rate|ps_state)$",
        }
    }

    /// Whether the plugin collects the per-process Detail metrics
    fn wants_detail(self) -> bool {
        matches!(self, ProcessScope::Full | ProcessScope::PerProcessOnly)
    }
}

/// Append the processes plugin block for the request, if it asked for one
pub(super) fn append_processes_plugin_config(out: &mut String, metrics: &Metrics) -> fmt::Result {
    let Some(scope) = ProcessScope::from_scrape(&metrics.scrape) else {
        return Ok(());
    };

    out.push_str(PROCESSES_PLUGIN_HEADER);
    if scope.wants_detail() {
        out.push_str(PER_PROCESS_DETAIL);
    }

    // Route matching process metrics to the writer, then stop further
    // processing for them.
    write!(
        out,
        r#"</Plugin>

PostCacheChain "PostCache"
<Chain "PostCache">
  <Rule "processes">
    <Match "regex">
      Plugin "^processes$"
      Type "{type_filter}"
    </Match>
    <Target "write">
      Plugin "write_gcm"
    </Target>
  </Rule>
  Target "stop"
</Chain>
"#,
        type_filter = scope.type_filter()
    )
}
