//! Reconciliation logic for Mist resources.
//!
//! One reconciler per module, organized by resource type:
//! - `site`: sites within an organization
//! - `site_group`: site groups within an organization
//! - `wlan`: org-level and site-level WLANs
//! - `wired`: wired switch configuration in the org inventory
//!
//! Every reconciler follows the same shape: fetch the scoped collection with
//! a single read, match by natural key, then issue at most one mutation.

pub mod site;
pub mod site_group;
#[cfg(test)]
mod site_group_test;
pub mod wlan;
#[cfg(test)]
mod wlan_test;
pub mod wired;
#[cfg(test)]
mod wired_test;

use crate::error::ModuleError;
use mist_client::MistClientTrait;
use serde::Serialize;

/// Result record returned to the calling automation runtime.
#[derive(Debug, Serialize)]
pub struct ModuleResult {
    /// Whether a mutation was issued
    pub changed: bool,
    /// The remote resource after reconciliation, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<serde_json::Value>,
    /// Diagnostic message
    pub msg: String,
}

impl ModuleResult {
    pub fn changed(resource: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self {
            changed: true,
            resource,
            msg: msg.into(),
        }
    }

    pub fn unchanged(resource: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            resource,
            msg: msg.into(),
        }
    }
}

/// Reconciles Mist resources.
pub struct Reconciler {
    pub(crate) client: Box<dyn MistClientTrait + Send + Sync>,
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(client: impl MistClientTrait + Send + Sync + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }
}

/// Find the collection entry carrying the natural key.
///
/// The key is expected to be unique within its scope; more than one match is
/// an error, never a guess.
pub(crate) fn find_unique<'a, T>(
    items: &'a [T],
    key: &str,
    kind: &str,
    key_of: impl Fn(&T) -> Option<&str>,
) -> Result<Option<&'a T>, ModuleError> {
    let mut matches = items.iter().filter(|item| key_of(item) == Some(key));
    let first = matches.next();
    if matches.next().is_some() {
        return Err(ModuleError::AmbiguousMatch(format!(
            "more than one {} named '{}' in this scope",
            kind, key
        )));
    }
    Ok(first)
}
