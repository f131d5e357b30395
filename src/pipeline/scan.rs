// src/pipeline/scan.rs

//! Scan coordination: one task per domain under a global cap.

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::error::{AppError, Result};
use crate::models::{Config, ScanOutcome};
use crate::services::{Aggregator, Classifier, DomainScanner, Fetcher, HitReporter, HttpFetcher};

/// Run a full scan of `domains` over `paths` using a real HTTP client.
///
/// The classification pattern is compiled before any request is made, so
/// a bad pattern aborts the run up front.
pub async fn run_scanner(
    config: Arc<Config>,
    paths: Vec<String>,
    domains: Vec<String>,
    reporter: Arc<dyn HitReporter>,
) -> Result<ScanOutcome> {
    let classifier = Classifier::new(&config.classifier.pattern)?;
    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.scan)?);

    log::info!(
        "Scanning {} domains x {} paths ({} at a time, stop after {}, min {} matches)",
        domains.len(),
        paths.len(),
        config.scan.parallel,
        if config.scan.is_unbounded() {
            "all".to_string()
        } else {
            config.scan.stop_count.to_string()
        },
        config.scan.min_matches
    );

    let scanner = DomainScanner::new(
        Arc::clone(&config),
        paths.into(),
        classifier,
        fetcher,
        Arc::new(Aggregator::new()),
        reporter,
    );

    run_scan(Arc::new(scanner), domains, config.scan.parallel).await
}

/// Scan every domain, keeping at most `parallel` domain scans alive.
///
/// A slot is taken before a task is spawned and given back when that
/// task's scan finishes, so dispatch waits whenever every slot is busy.
/// Returns once every spawned task has completed.
pub async fn run_scan(
    scanner: Arc<DomainScanner>,
    domains: Vec<String>,
    parallel: usize,
) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::new(Utc::now(), domains.len());
    let semaphore = Arc::new(Semaphore::new(parallel.max(1)));
    let mut tasks = FuturesUnordered::new();

    for domain in domains {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .map_err(AppError::task)?;
        let scanner = Arc::clone(&scanner);

        tasks.push(tokio::spawn(async move {
            let report = scanner.scan(&domain).await;
            drop(permit);
            report
        }));
    }

    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(report) => {
                log::debug!(
                    "Finished {}: {} requests, {} failed, {} hits",
                    report.domain,
                    report.requests,
                    report.fetch_failures,
                    report.hits.len()
                );
                outcome.absorb(&report);
            }
            Err(error) => {
                outcome.task_failures += 1;
                log::warn!("Domain scan task failed: {}", error);
            }
        }
    }

    outcome.summary = scanner.aggregator().snapshot();
    outcome.end_time = Utc::now();
    Ok(outcome)
}
