//! MistClient trait for mocking
//!
//! This trait abstracts the MistClient to enable mocking in unit tests.
//! The concrete MistClient implements this trait, and tests can use mock
//! implementations.

use crate::error::MistError;
use crate::models::*;
use uuid::Uuid;

/// Trait for Mist API client operations
///
/// This trait enables mocking of Mist API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait MistClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token by fetching the caller identity
    async fn whoami(&self) -> Result<SelfInfo, MistError>;

    // Site operations
    async fn list_sites(&self, org_id: Uuid) -> Result<Vec<Site>, MistError>;
    async fn create_site(&self, org_id: Uuid, data: &SiteData) -> Result<Site, MistError>;
    async fn update_site(&self, site_id: Uuid, data: &SiteData) -> Result<Site, MistError>;
    async fn delete_site(&self, site_id: Uuid) -> Result<(), MistError>;

    // Site group operations
    async fn list_site_groups(&self, org_id: Uuid) -> Result<Vec<SiteGroup>, MistError>;
    async fn create_site_group(&self, org_id: Uuid, data: &SiteGroupData) -> Result<SiteGroup, MistError>;
    async fn update_site_group(&self, org_id: Uuid, group_id: Uuid, data: &SiteGroupData) -> Result<SiteGroup, MistError>;
    async fn delete_site_group(&self, org_id: Uuid, group_id: Uuid) -> Result<(), MistError>;

    // WLAN operations
    async fn list_org_wlans(&self, org_id: Uuid) -> Result<Vec<Wlan>, MistError>;
    async fn create_org_wlan(&self, org_id: Uuid, data: &WlanData) -> Result<Wlan, MistError>;
    async fn update_org_wlan(&self, org_id: Uuid, wlan_id: Uuid, data: &WlanData) -> Result<Wlan, MistError>;
    async fn delete_org_wlan(&self, org_id: Uuid, wlan_id: Uuid) -> Result<(), MistError>;
    async fn list_site_wlans(&self, site_id: Uuid) -> Result<Vec<Wlan>, MistError>;
    async fn create_site_wlan(&self, site_id: Uuid, data: &WlanData) -> Result<Wlan, MistError>;
    async fn update_site_wlan(&self, site_id: Uuid, wlan_id: Uuid, data: &WlanData) -> Result<Wlan, MistError>;
    async fn delete_site_wlan(&self, site_id: Uuid, wlan_id: Uuid) -> Result<(), MistError>;

    // Inventory operations
    async fn list_inventory(&self, org_id: Uuid) -> Result<Vec<InventoryDevice>, MistError>;
    async fn update_device_config(&self, site_id: Uuid, device_id: Uuid, config: &SwitchConfig) -> Result<serde_json::Value, MistError>;
}
