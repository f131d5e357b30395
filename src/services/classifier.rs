// src/services/classifier.rs

//! Response body classification.
//!
//! A single case-insensitive alternation of bug bounty keywords and
//! security contact addresses is run over the whole body.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::Result;

/// Keyword and contact-address alternation matched against response bodies.
pub const DEFAULT_PATTERN: &str = concat!(
    r"(?i)scope|Eligible Targets|reward|bounty|monetary|compensation",
    r"|we offer a monetary|We offer reward|monetary reward|eligible for a reward",
    r"|we award a bounty|We offer monetary rewards",
    r"|security@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|bugbounty@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|bugreport@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|vulnerability@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-team@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|responsible-disclosure@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|infosec@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-alert@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|secure@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-alerts@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-notification@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|secure-report@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-incident@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-response@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|cybersecurity@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|reportabug@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-research@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
    r"|security-reports@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}",
);

/// Compiled classification pattern.
#[derive(Debug, Clone)]
pub struct Classifier {
    pattern: Regex,
}

impl Classifier {
    /// Compile a classifier from a pattern string.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Collect every distinct match in `body`, trimmed and lower-cased.
    pub fn classify(&self, body: &str) -> BTreeSet<String> {
        self.pattern
            .find_iter(body)
            .map(|m| m.as_str().trim().to_lowercase())
            .collect()
    }
}
