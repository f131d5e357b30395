// src/error.rs

//! Unified error handling for the scanner.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Classification pattern failed to compile
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input list could not be read
    #[error("Error reading {path}: {message}")]
    Input { path: String, message: String },

    /// Summary output could not be written
    #[error("Error writing {path}: {message}")]
    Output { path: String, message: String },

    /// A domain task died before reporting
    #[error("Task error: {0}")]
    Task(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an input error for the given file.
    pub fn input(path: impl AsRef<Path>, message: impl fmt::Display) -> Self {
        Self::Input {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an output error for the given file.
    pub fn output(path: impl AsRef<Path>, message: impl fmt::Display) -> Self {
        Self::Output {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a task error.
    pub fn task(message: impl fmt::Display) -> Self {
        Self::Task(message.to_string())
    }
}
