// src/services/scanner.rs

//! Per-domain path scanning.
//!
//! Paths are probed one at a time, in list order, so a domain never has
//! more than one request in flight.

use std::sync::Arc;

use crate::models::{Config, DomainReport, ScanHit};
use crate::services::{Aggregator, Classifier, Fetcher, HitReporter};
use crate::utils::{escaped_path, join_url};

/// Scans one domain at a time against the shared path list.
///
/// Cheap to share: every field is read-only or internally synchronized.
pub struct DomainScanner {
    config: Arc<Config>,
    paths: Arc<[String]>,
    classifier: Classifier,
    fetcher: Arc<dyn Fetcher>,
    aggregator: Arc<Aggregator>,
    reporter: Arc<dyn HitReporter>,
}

impl DomainScanner {
    pub fn new(
        config: Arc<Config>,
        paths: Arc<[String]>,
        classifier: Classifier,
        fetcher: Arc<dyn Fetcher>,
        aggregator: Arc<Aggregator>,
        reporter: Arc<dyn HitReporter>,
    ) -> Self {
        Self {
            config,
            paths,
            classifier,
            fetcher,
            aggregator,
            reporter,
        }
    }

    pub fn aggregator(&self) -> &Arc<Aggregator> {
        &self.aggregator
    }

    /// Probe every path of `domain` until the stop count is reached.
    ///
    /// Fetch failures are skipped and never count toward the stop count.
    /// Each qualifying path is reported and recorded before the next
    /// request is issued.
    pub async fn scan(&self, domain: &str) -> DomainReport {
        let settings = &self.config.scan;
        let mut report = DomainReport {
            domain: domain.to_string(),
            ..DomainReport::default()
        };

        for (index, path) in self.paths.iter().enumerate() {
            let url = join_url(domain, path);
            log::debug!("Scanning {}", url);

            report.requests += 1;
            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(error) => {
                    report.fetch_failures += 1;
                    log::debug!("Skipping {}: {}", url, error);
                    continue;
                }
            };

            let matches = self.classifier.classify(&body);
            if matches.len() < settings.min_matches {
                continue;
            }

            let hit = ScanHit { url, matches };
            self.reporter.report(&hit);
            if let Some(key) = escaped_path(&hit.url) {
                self.aggregator.record(&key);
            }
            report.hits.push(hit);

            if !settings.is_unbounded() && report.hits.len() >= settings.stop_count {
                report.stopped_early = index + 1 < self.paths.len();
                break;
            }
        }

        report
    }
}
