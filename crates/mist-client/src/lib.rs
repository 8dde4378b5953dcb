//! Mist REST API Client
//!
//! A Rust client library for interacting with the Juniper Mist cloud REST API.
//! Provides type-safe models and methods for org-level resources (sites, site
//! groups, WLANs) and the wired switch inventory.
//!
//! # Example
//!
//! ```no_run
//! use mist_client::{MistClient, SiteData, DEFAULT_BASE_URL};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = MistClient::new(
//!     DEFAULT_BASE_URL.to_string(),
//!     "your-api-token".to_string(),
//!     None,
//! )?;
//!
//! // Verify the token before doing anything else
//! client.whoami().await?;
//!
//! let org_id: Uuid = "9777c1a0-6ef6-11eb-9439-0242ac130002".parse()?;
//!
//! // List the sites in an organization
//! let sites = client.list_sites(org_id).await?;
//!
//! // Create a new site
//! let site = client
//!     .create_site(org_id, &SiteData::named("katy"))
//!     .await?;
//! # let _ = (sites, site);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Org operations**: list, create, update and delete sites and site groups
//! - **WLAN operations**: org-level and site-level WLAN management
//! - **Inventory operations**: list the org device inventory, push wired
//!   switch configuration
//! - **Token validation**: lightweight `GET /self` probe before mutations

pub mod client;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod mist_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{MistClient, DEFAULT_BASE_URL};
pub use error::MistError;
pub use models::*;
pub use mist_trait::MistClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockMistClient;
