// src/services/reporter.rs

//! Streaming output of qualifying results.

use std::io::Write;

use crate::models::ScanHit;

/// Receives each qualifying result as soon as it is found.
pub trait HitReporter: Send + Sync {
    fn report(&self, hit: &ScanHit);
}

/// Writes one line per hit to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter {
    verbose: bool,
}

impl StdoutReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Format the output line for a hit.
    pub fn line(&self, hit: &ScanHit) -> String {
        if self.verbose {
            format!("[FOUND] {hit}")
        } else {
            hit.to_string()
        }
    }
}

impl HitReporter for StdoutReporter {
    fn report(&self, hit: &ScanHit) {
        let line = self.line(hit);
        let mut stdout = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) must not take the scan down.
        let _ = writeln!(stdout, "{line}").and_then(|_| stdout.flush());
    }
}
