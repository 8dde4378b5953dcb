//! Mist API client
//!
//! Implements the Mist cloud REST API client for the org-scoped resources the
//! modules manage. Endpoint layout follows the public cloud API, e.g.
//! `GET /api/v1/orgs/{org_id}/sites` and `PUT /api/v1/sites/{site_id}`.

use crate::error::MistError;
use crate::models::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Base URL of the Mist public cloud API
pub const DEFAULT_BASE_URL: &str = "https://api.mist.com/api/v1";

/// Default request timeout in seconds when the caller does not set one
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Mist API client
pub struct MistClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for MistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token deliberately left out
        f.debug_struct("MistClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MistClient {
    /// Create a new Mist client
    ///
    /// # Arguments
    /// * `base_url` - Mist API base URL (e.g., `https://api.mist.com/api/v1`)
    /// * `token` - API token for authentication
    /// * `timeout` - per-request timeout; defaults to 30 seconds
    pub fn new(
        base_url: String,
        token: String,
        timeout: Option<Duration>,
    ) -> Result<Self, MistError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .build()
            .map_err(MistError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Get authorization header value
    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Map a non-success response to the error taxonomy
    async fn error_for(path: &str, response: reqwest::Response) -> MistError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == 401 || status == 403 {
            return MistError::Authentication(format!(
                "request to {} rejected: {} - {}",
                path, status, body
            ));
        }
        if status == 404 {
            return MistError::NotFound(format!("{} - {}", path, body));
        }
        MistError::Api(format!("{} failed: {} - {}", path, status, body))
    }

    /// Make a GET request and deserialize the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, MistError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(MistError::Http)?;

        if !response.status().is_success() {
            return Err(Self::error_for(path, response).await);
        }

        // Capture the body so a decode failure carries context
        let text = response.text().await.map_err(MistError::Http)?;
        serde_json::from_str(&text).map_err(|e| {
            MistError::Api(format!(
                "error decoding response body for {}: {} - Response (first 500 chars): {}",
                path,
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Make a POST request with a JSON body
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, MistError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(MistError::Http)?;

        if !response.status().is_success() {
            return Err(Self::error_for(path, response).await);
        }

        response.json().await.map_err(MistError::Http)
    }

    /// Make a PUT request with a JSON body
    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, MistError> {
        let url = self.url(path);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(MistError::Http)?;

        if !response.status().is_success() {
            return Err(Self::error_for(path, response).await);
        }

        response.json().await.map_err(MistError::Http)
    }

    /// Make a DELETE request
    async fn delete(&self, path: &str) -> Result<(), MistError> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(MistError::Http)?;

        let status = response.status();
        if !status.is_success() && status != 204 {
            return Err(Self::error_for(path, response).await);
        }

        Ok(())
    }

    /// Validate the API token by fetching the caller identity.
    ///
    /// This is a lightweight authenticated request made before any other
    /// operation; a 401/403 surfaces as `MistError::Authentication`.
    pub async fn whoami(&self) -> Result<SelfInfo, MistError> {
        debug!("Validating Mist token and connectivity");
        self.get("self").await
    }

    // Site operations

    /// List the sites of an organization
    pub async fn list_sites(&self, org_id: Uuid) -> Result<Vec<Site>, MistError> {
        self.get(&format!("orgs/{}/sites", org_id)).await
    }

    /// Create a site in an organization
    pub async fn create_site(&self, org_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        debug!("Creating site {} in org {}", data.name, org_id);
        self.post(&format!("orgs/{}/sites", org_id), data).await
    }

    /// Update an existing site
    pub async fn update_site(&self, site_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        debug!("Updating site {}", site_id);
        self.put(&format!("sites/{}", site_id), data).await
    }

    /// Delete a site
    pub async fn delete_site(&self, site_id: Uuid) -> Result<(), MistError> {
        debug!("Deleting site {}", site_id);
        self.delete(&format!("sites/{}", site_id)).await
    }

    // Site group operations

    /// List the site groups of an organization
    pub async fn list_site_groups(&self, org_id: Uuid) -> Result<Vec<SiteGroup>, MistError> {
        self.get(&format!("orgs/{}/sitegroups", org_id)).await
    }

    /// Create a site group in an organization
    pub async fn create_site_group(
        &self,
        org_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        debug!("Creating site group {} in org {}", data.name, org_id);
        self.post(&format!("orgs/{}/sitegroups", org_id), data).await
    }

    /// Update an existing site group
    pub async fn update_site_group(
        &self,
        org_id: Uuid,
        group_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        debug!("Updating site group {} in org {}", group_id, org_id);
        self.put(&format!("orgs/{}/sitegroups/{}", org_id, group_id), data)
            .await
    }

    /// Delete a site group
    pub async fn delete_site_group(&self, org_id: Uuid, group_id: Uuid) -> Result<(), MistError> {
        debug!("Deleting site group {} in org {}", group_id, org_id);
        self.delete(&format!("orgs/{}/sitegroups/{}", org_id, group_id))
            .await
    }

    // WLAN operations (org level)

    /// List the org-level WLANs of an organization
    pub async fn list_org_wlans(&self, org_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        self.get(&format!("orgs/{}/wlans", org_id)).await
    }

    /// Create an org-level WLAN
    pub async fn create_org_wlan(&self, org_id: Uuid, data: &WlanData) -> Result<Wlan, MistError> {
        debug!("Creating org wlan {} in org {}", data.ssid, org_id);
        self.post(&format!("orgs/{}/wlans", org_id), data).await
    }

    /// Update an org-level WLAN
    pub async fn update_org_wlan(
        &self,
        org_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        debug!("Updating org wlan {} in org {}", wlan_id, org_id);
        self.put(&format!("orgs/{}/wlans/{}", org_id, wlan_id), data)
            .await
    }

    /// Delete an org-level WLAN
    pub async fn delete_org_wlan(&self, org_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        debug!("Deleting org wlan {} in org {}", wlan_id, org_id);
        self.delete(&format!("orgs/{}/wlans/{}", org_id, wlan_id))
            .await
    }

    // WLAN operations (site level)

    /// List the WLANs of a site
    pub async fn list_site_wlans(&self, site_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        self.get(&format!("sites/{}/wlans", site_id)).await
    }

    /// Create a site-level WLAN
    pub async fn create_site_wlan(
        &self,
        site_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        debug!("Creating site wlan {} in site {}", data.ssid, site_id);
        self.post(&format!("sites/{}/wlans", site_id), data).await
    }

    /// Update a site-level WLAN
    pub async fn update_site_wlan(
        &self,
        site_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        debug!("Updating site wlan {} in site {}", wlan_id, site_id);
        self.put(&format!("sites/{}/wlans/{}", site_id, wlan_id), data)
            .await
    }

    /// Delete a site-level WLAN
    pub async fn delete_site_wlan(&self, site_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        debug!("Deleting site wlan {} in site {}", wlan_id, site_id);
        self.delete(&format!("sites/{}/wlans/{}", site_id, wlan_id))
            .await
    }

    // Inventory operations

    /// List the org device inventory, including virtual-chassis members
    pub async fn list_inventory(&self, org_id: Uuid) -> Result<Vec<InventoryDevice>, MistError> {
        let query = format!("vc={}", urlencoding::encode("true"));
        self.get(&format!("orgs/{}/inventory?{}", org_id, query))
            .await
    }

    /// Push configuration to a device assigned to a site
    pub async fn update_device_config(
        &self,
        site_id: Uuid,
        device_id: Uuid,
        config: &SwitchConfig,
    ) -> Result<serde_json::Value, MistError> {
        debug!("Pushing config to device {} in site {}", device_id, site_id);
        self.put(&format!("sites/{}/devices/{}", site_id, device_id), config)
            .await
    }
}

// Implement MistClientTrait for MistClient
// This delegates all trait methods to the existing implementations
#[async_trait::async_trait]
impl crate::mist_trait::MistClientTrait for MistClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn whoami(&self) -> Result<SelfInfo, MistError> {
        self.whoami().await
    }

    async fn list_sites(&self, org_id: Uuid) -> Result<Vec<Site>, MistError> {
        self.list_sites(org_id).await
    }

    async fn create_site(&self, org_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        self.create_site(org_id, data).await
    }

    async fn update_site(&self, site_id: Uuid, data: &SiteData) -> Result<Site, MistError> {
        self.update_site(site_id, data).await
    }

    async fn delete_site(&self, site_id: Uuid) -> Result<(), MistError> {
        self.delete_site(site_id).await
    }

    async fn list_site_groups(&self, org_id: Uuid) -> Result<Vec<SiteGroup>, MistError> {
        self.list_site_groups(org_id).await
    }

    async fn create_site_group(
        &self,
        org_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        self.create_site_group(org_id, data).await
    }

    async fn update_site_group(
        &self,
        org_id: Uuid,
        group_id: Uuid,
        data: &SiteGroupData,
    ) -> Result<SiteGroup, MistError> {
        self.update_site_group(org_id, group_id, data).await
    }

    async fn delete_site_group(&self, org_id: Uuid, group_id: Uuid) -> Result<(), MistError> {
        self.delete_site_group(org_id, group_id).await
    }

    async fn list_org_wlans(&self, org_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        self.list_org_wlans(org_id).await
    }

    async fn create_org_wlan(&self, org_id: Uuid, data: &WlanData) -> Result<Wlan, MistError> {
        self.create_org_wlan(org_id, data).await
    }

    async fn update_org_wlan(
        &self,
        org_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        self.update_org_wlan(org_id, wlan_id, data).await
    }

    async fn delete_org_wlan(&self, org_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        self.delete_org_wlan(org_id, wlan_id).await
    }

    async fn list_site_wlans(&self, site_id: Uuid) -> Result<Vec<Wlan>, MistError> {
        self.list_site_wlans(site_id).await
    }

    async fn create_site_wlan(&self, site_id: Uuid, data: &WlanData) -> Result<Wlan, MistError> {
        self.create_site_wlan(site_id, data).await
    }

    async fn update_site_wlan(
        &self,
        site_id: Uuid,
        wlan_id: Uuid,
        data: &WlanData,
    ) -> Result<Wlan, MistError> {
        self.update_site_wlan(site_id, wlan_id, data).await
    }

    async fn delete_site_wlan(&self, site_id: Uuid, wlan_id: Uuid) -> Result<(), MistError> {
        self.delete_site_wlan(site_id, wlan_id).await
    }

    async fn list_inventory(&self, org_id: Uuid) -> Result<Vec<InventoryDevice>, MistError> {
        self.list_inventory(org_id).await
    }

    async fn update_device_config(
        &self,
        site_id: Uuid,
        device_id: Uuid,
        config: &SwitchConfig,
    ) -> Result<serde_json::Value, MistError> {
        self.update_device_config(site_id, device_id, config).await
    }
}
