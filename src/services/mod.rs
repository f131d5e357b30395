//! Service layer for the scanner.
//!
//! - `Classifier`: pattern matching over response bodies
//! - `Fetcher` / `HttpFetcher`: single-shot page fetching
//! - `Aggregator`: run-wide hit counts per path
//! - `DomainScanner`: sequential path probing for one domain
//! - `HitReporter` / `StdoutReporter`: streaming result output

mod aggregator;
mod classifier;
mod fetcher;
mod reporter;
mod scanner;

pub use aggregator::Aggregator;
pub use classifier::{Classifier, DEFAULT_PATTERN};
pub use fetcher::{Fetcher, HttpFetcher};
pub use reporter::{HitReporter, StdoutReporter};
pub use scanner::DomainScanner;
