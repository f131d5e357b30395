// src/lib.rs

//! bbpscraper library
//!
//! Probes every domain against a list of URL paths, classifies each
//! response body against bug bounty and security contact patterns, and
//! counts qualifying paths across the run.

pub mod banner;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

#[cfg(test)]
pub mod test_utils;
