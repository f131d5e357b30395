// src/models/report.rs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A path whose response body carried enough distinct matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanHit {
    pub url: String,
    pub matches: BTreeSet<String>,
}

impl ScanHit {
    /// Render the match set as `["a", "b"]`.
    pub fn formatted_matches(&self) -> String {
        let quoted: Vec<String> = self.matches.iter().map(|m| format!("\"{m}\"")).collect();
        format!("[{}]", quoted.join(", "))
    }
}

impl fmt::Display for ScanHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.formatted_matches())
    }
}

/// What a single domain scan did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: String,
    pub requests: usize,
    pub fetch_failures: usize,
    pub hits: Vec<ScanHit>,
    /// Whether the stop count cut the path list short
    pub stopped_early: bool,
}

/// Summary of a whole scan run.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub domain_total: usize,
    pub request_total: usize,
    pub fetch_failures: usize,
    pub hit_total: usize,
    pub stopped_early: usize,
    pub task_failures: usize,
    /// Final aggregator snapshot keyed by escaped path
    pub summary: BTreeMap<String, usize>,
}

impl ScanOutcome {
    pub fn new(start_time: DateTime<Utc>, domain_total: usize) -> Self {
        Self {
            start_time,
            end_time: start_time,
            domain_total,
            request_total: 0,
            fetch_failures: 0,
            hit_total: 0,
            stopped_early: 0,
            task_failures: 0,
            summary: BTreeMap::new(),
        }
    }

    /// Fold one finished domain into the totals.
    pub fn absorb(&mut self, report: &DomainReport) {
        self.request_total += report.requests;
        self.fetch_failures += report.fetch_failures;
        self.hit_total += report.hits.len();
        if report.stopped_early {
            self.stopped_early += 1;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}
