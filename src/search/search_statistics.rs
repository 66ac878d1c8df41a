use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Per-invocation instrumentation shared by every strategy: node counters, a
/// monotonic clock, and peak resident memory sampled alongside the periodic
/// progress log. Counters never influence the search itself.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded (popped from the frontier and processed)
    expanded_nodes: u64,
    /// Number of nodes produced by the successor function, duplicates included
    generated_nodes: u64,
    /// Number of heuristic evaluations
    evaluated_nodes: u64,
    /// Number of nodes redirected onto a cheaper incoming path
    reopened_nodes: u64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Highest resident memory observed at any sample point
    peak_memory_bytes: Option<usize>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        let mut statistics = Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            reopened_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            peak_memory_bytes: None,
        };
        statistics.sample_memory();
        statistics
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> u64 {
        self.reopened_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    pub fn peak_memory_bytes(&self) -> Option<usize> {
        self.peak_memory_bytes
    }

    fn sample_memory(&mut self) {
        let usage = memory_stats().map(|usage| usage.physical_mem);
        self.peak_memory_bytes = self.peak_memory_bytes.max(usage);
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.sample_memory();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            reopened_nodes = self.reopened_nodes,
            peak_memory_bytes = self.peak_memory_bytes,
        );
    }

    /// Take the final memory sample and emit the closing log line. Called
    /// exactly once, when the report is assembled.
    pub fn finalise_search(&mut self) {
        self.sample_memory();
        self.log();
        info!(
            search_duration = %humantime::format_duration(self.search_start_time.elapsed()),
        );
    }
}
