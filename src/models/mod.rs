// src/models/mod.rs

//! Data structures shared across the scanner.

mod config;
mod report;

pub use config::{ClassifierConfig, Config, ScanConfig};
pub use report::{DomainReport, ScanHit, ScanOutcome};
