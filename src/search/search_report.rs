use crate::search::SearchStatistics;
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// The outcome record every strategy produces exactly once per invocation.
/// `success = false` means the frontier was exhausted (or the depth limit cut
/// every branch) without reaching a goal; the metrics gathered up to that
/// point are still valid. External reporting and visualization consume this
/// record; nothing in the engine mutates it after return.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<S: Eq + Hash, A> {
    pub success: bool,
    /// Root state first, goal state last. Empty on failure.
    pub path: Vec<S>,
    /// The action labels between consecutive path states.
    pub actions: Vec<A>,
    pub path_cost: f64,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub nodes_reopened: u64,
    pub runtime: Duration,
    /// Peak resident set in bytes, `None` when the platform reports nothing.
    pub peak_memory: Option<usize>,
    /// Every state registered during the search, for diagnostics.
    pub visited_states: HashSet<S>,
}

impl<S: Eq + Hash, A> SearchReport<S, A> {
    pub(crate) fn from_success(
        path: Vec<S>,
        actions: Vec<A>,
        path_cost: f64,
        mut statistics: SearchStatistics,
        visited_states: HashSet<S>,
    ) -> Self {
        statistics.finalise_search();
        Self {
            success: true,
            path,
            actions,
            path_cost,
            nodes_expanded: statistics.expanded_nodes(),
            nodes_generated: statistics.generated_nodes(),
            nodes_reopened: statistics.reopened_nodes(),
            runtime: statistics.elapsed(),
            peak_memory: statistics.peak_memory_bytes(),
            visited_states,
        }
    }

    pub(crate) fn from_failure(
        mut statistics: SearchStatistics,
        visited_states: HashSet<S>,
    ) -> Self {
        statistics.finalise_search();
        Self {
            success: false,
            path: vec![],
            actions: vec![],
            path_cost: 0.0,
            nodes_expanded: statistics.expanded_nodes(),
            nodes_generated: statistics.generated_nodes(),
            nodes_reopened: statistics.reopened_nodes(),
            runtime: statistics.elapsed(),
            peak_memory: statistics.peak_memory_bytes(),
            visited_states,
        }
    }

    /// Flat summary for tabular reporting, one row per invocation.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "success": self.success,
            "path_length": self.path.len(),
            "path_cost": self.path_cost,
            "nodes_expanded": self.nodes_expanded,
            "nodes_generated": self.nodes_generated,
            "nodes_reopened": self.nodes_reopened,
            "runtime_secs": self.runtime.as_secs_f64(),
            "peak_memory_bytes": self.peak_memory,
            "visited_count": self.visited_states.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_the_report() {
        let report: SearchReport<&str, &str> = SearchReport::from_failure(
            SearchStatistics::new(),
            HashSet::from(["a", "b"]),
        );
        let summary = report.summary();
        assert_eq!(summary["success"], false);
        assert_eq!(summary["path_length"], 0);
        assert_eq!(summary["visited_count"], 2);
    }
}
