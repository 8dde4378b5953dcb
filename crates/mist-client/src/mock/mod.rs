//! Mock MistClient for unit testing
//!
//! This module provides a mock implementation of MistClientTrait that can be
//! used in unit tests without requiring access to the Mist cloud.
//!
//! The mock is organized into domain-specific modules:
//! - `org.rs` - org-level resources (sites, site groups)
//! - `wlans.rs` - org-level and site-level WLANs
//! - `inventory.rs` - device inventory and switch configuration

mod inventory;
mod org;
mod wlans;

use crate::error::MistError;
use crate::models::*;
use crate::mist_trait::MistClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock MistClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios. Clones share the same
/// underlying stores, so a test can keep a handle for assertions while the
/// reconciler owns another.
#[derive(Debug, Clone)]
pub struct MockMistClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) sites: Arc<Mutex<HashMap<Uuid, Site>>>,
    pub(crate) site_groups: Arc<Mutex<HashMap<Uuid, SiteGroup>>>,
    pub(crate) org_wlans: Arc<Mutex<HashMap<Uuid, Wlan>>>,
    pub(crate) site_wlans: Arc<Mutex<HashMap<Uuid, Wlan>>>,
    pub(crate) inventory: Arc<Mutex<Vec<InventoryDevice>>>,
    pub(crate) device_configs: Arc<Mutex<HashMap<Uuid, SwitchConfig>>>,
}

impl MockMistClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sites: Arc::new(Mutex::new(HashMap::new())),
            site_groups: Arc::new(Mutex::new(HashMap::new())),
            org_wlans: Arc::new(Mutex::new(HashMap::new())),
            site_wlans: Arc::new(Mutex::new(HashMap::new())),
            inventory: Arc::new(Mutex::new(Vec::new())),
            device_configs: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a site to the mock store (for test setup)
    pub fn add_site(&self, site: Site) {
        self.sites.lock().unwrap().insert(site.id, site);
    }

    /// Add a site group to the mock store (for test setup)
    pub fn add_site_group(&self, group: SiteGroup) {
        self.site_groups.lock().unwrap().insert(group.id, group);
    }

    /// Add an org-level WLAN to the mock store (for test setup)
    pub fn add_org_wlan(&self, wlan: Wlan) {
        self.org_wlans.lock().unwrap().insert(wlan.id, wlan);
    }

    /// Add a site-level WLAN to the mock store (for test setup)
    pub fn add_site_wlan(&self, wlan: Wlan) {
        self.site_wlans.lock().unwrap().insert(wlan.id, wlan);
    }

    /// Add an inventory device to the mock store (for test setup)
    pub fn add_inventory_device(&self, device: InventoryDevice) {
        self.inventory.lock().unwrap().push(device);
    }

    /// Number of sites currently stored (for test assertions)
    pub fn site_count(&self) -> usize {
        self.sites.lock().unwrap().len()
    }

    /// Number of site groups currently stored (for test assertions)
    pub fn site_group_count(&self) -> usize {
        self.site_groups.lock().unwrap().len()
    }

    /// Fetch a stored site by name (for test assertions)
    pub fn site_by_name(&self, name: &str) -> Option<Site> {
        self.sites
            .lock()
            .unwrap()
            .values()
            .find(|s| s.name == name)
            .cloned()
    }

    /// Fetch a stored site group by name (for test assertions)
    pub fn site_group_by_name(&self, name: &str) -> Option<SiteGroup> {
        self.site_groups
            .lock()
            .unwrap()
            .values()
            .find(|g| g.name == name)
            .cloned()
    }

    /// Number of org-level WLANs currently stored (for test assertions)
    pub fn org_wlan_count(&self) -> usize {
        self.org_wlans.lock().unwrap().len()
    }

    /// Number of site-level WLANs currently stored (for test assertions)
    pub fn site_wlan_count(&self) -> usize {
        self.site_wlans.lock().unwrap().len()
    }

    /// Fetch a stored org-level WLAN by SSID (for test assertions)
    pub fn org_wlan_by_ssid(&self, ssid: &str) -> Option<Wlan> {
        self.org_wlans
            .lock()
            .unwrap()
            .values()
            .find(|w| w.ssid == ssid)
            .cloned()
    }

    /// Fetch a stored site-level WLAN by SSID (for test assertions)
    pub fn site_wlan_by_ssid(&self, ssid: &str) -> Option<Wlan> {
        self.site_wlans
            .lock()
            .unwrap()
            .values()
            .find(|w| w.ssid == ssid)
            .cloned()
    }

    /// Fetch the last config pushed to a device (for test assertions)
    pub fn device_config(&self, device_id: Uuid) -> Option<SwitchConfig> {
        self.device_configs.lock().unwrap().get(&device_id).cloned()
    }
}

#[async_trait::async_trait]
impl MistClientTrait for MockMistClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn whoami(&self) -> Result<SelfInfo, MistError> {
        Ok(SelfInfo {
            email: Some("mock@example.com".to_string()),
            first_name: None,
            last_name: None,
        })
    }

    async fn list_sites(&self, org_id: Uuid) -> Result<Vec<Site>, MistError> {
        org::list_sites(self, org_id).await
    }

    async fn create_site(&self, org_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        org::create_site(self, org_id, data).await
    }

    async fn update_site(&self, site_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        org::update_site(self, site_id, data).await
    }

    async fn delete_site(&self, site_id: Uuid) -> Result<(), MistError> {
        org::delete_site(self, site_id).await
    }

    async fn list_site_groups(&self, org_id: Uuid) -> Result<Vec<SiteGroup>, MistError> {
        org::list_site_groups(self, org_id).await
    }

    async fn create_site_group(
        &self,
        org_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        org::create_site_group(self, org_id, data).await
    }

    async fn update_site_group(
        &self,
        org_id: Uuid,
        group_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        org::update_site_group(self, org_id, group_id, data).await
    }

    async fn delete_site_group(&self, org_id: Uuid, group_id: Uuid) -> Result<(), MistError> {
        org::delete_site_group(self, org_id, group_id).await
    }

    async fn list_org_wlans(&self, org_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        wlans::list_org_wlans(self, org_id).await
    }

    async fn create_org_wlan(&self, org_id: Uuid, data: &WlanData) -> Result<Wlan, MistError> {
        wlans::create_org_wlan(self, org_id, data).await
    }

    async fn update_org_wlan(
        &self,
        org_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        wlans::update_org_wlan(self, org_id, wlan_id, data).await
    }

    async fn delete_org_wlan(&self, org_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        wlans::delete_org_wlan(self, org_id, wlan_id).await
    }

    async fn list_site_wlans(&self, site_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        wlans::list_site_wlans(self, site_id).await
    }

    async fn create_site_wlan(&self, site_id: Uuid, data: &WlanData) -> Result<Wlan, MistError> {
        wlans::create_site_wlan(self, site_id, data).await
    }

    async fn update_site_wlan(
        &self,
        site_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        wlans::update_site_wlan(self, site_id, wlan_id, data).await
    }

    async fn delete_site_wlan(&self, site_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        wlans::delete_site_wlan(self, site_id, wlan_id).await
    }

    async fn list_inventory(&self, org_id: Uuid) -> Result<Vec<InventoryDevice>, MistError> {
        inventory::list_inventory(self, org_id).await
    }

    async fn update_device_config(
        &self,
        site_id: Uuid,
        device_id: Uuid,
        config: &SwitchConfig,
    ) -> Result<serde_json::Value, MistError> {
        inventory::update_device_config(self, site_id, device_id, config).await
    }
}
