//! Module-specific error types.
//!
//! This module defines error types specific to the Mist modules that are not
//! covered by the client library errors.

use mist_client::MistError;
use thiserror::Error;

/// Errors that can occur while running a Mist module.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Mist API error
    #[error("Mist error: {0}")]
    Mist(#[from] MistError),

    /// Desired-state document failed validation
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Credentials missing from both the document and the environment
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// More than one remote resource carries the natural key
    #[error("Ambiguous match: {0}")]
    AmbiguousMatch(String),

    /// A site referenced by name does not exist
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    /// Reconciliation failed
    #[error("Reconciliation failed: {0}")]
    Reconciliation(String),

    /// Could not read the params document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Params document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Params document is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Bad command line
    #[error("Usage error: {0}")]
    Usage(String),
}
