//! Mist API models
//!
//! These models match the Mist cloud REST API payloads under
//! `https://api.mist.com/api/v1`. List endpoints return plain JSON arrays
//! (no pagination envelope), and timestamps are epoch seconds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Caller identity returned by `GET /self`, used as the token-validation probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfInfo {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Geo coordinates for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Site model as returned by `GET orgs/{org_id}/sites`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Uuid,
    pub org_id: Option<Uuid>,
    pub name: String,
    pub address: Option<String>,
    pub alarmtemplate_id: Option<String>,
    pub country_code: Option<String>,
    pub latlng: Option<LatLng>,
    pub notes: Option<String>,
    pub rftemplate_id: Option<String>,
    pub secpolicy_id: Option<String>,
    pub sitegroup_ids: Option<Vec<Uuid>>,
    pub timezone: Option<String>,
    pub created_time: Option<f64>,
    pub modified_time: Option<f64>,
}

/// Request body for creating or updating a site
///
/// Optional fields are left out of the serialized payload entirely so that
/// updates carry only the attributes the caller declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarmtemplate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rftemplate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secpolicy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitegroup_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl SiteData {
    /// Payload with only the name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Site group model as returned by `GET orgs/{org_id}/sitegroups`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteGroup {
    pub id: Uuid,
    pub org_id: Option<Uuid>,
    pub name: String,
    pub site_ids: Option<Vec<Uuid>>,
    pub created_time: Option<f64>,
    pub modified_time: Option<f64>,
}

/// Request body for creating or updating a site group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteGroupData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ids: Option<Vec<Uuid>>,
}

/// WLAN authentication settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WlanAuth {
    /// One of `open`, `psk`, `wep`, `eap`, `psk-tkip`, `psk-wpa2-tkip`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_mac_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_psk_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairwise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wep_as_secondary_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_wlan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_idx: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eap_reauth: Option<bool>,
}

/// RADIUS server entry (authentication or accounting)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusServer {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secret: Option<String>,
}

/// WLAN model as returned by the org-level and site-level wlans endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wlan {
    pub id: Uuid,
    pub org_id: Option<Uuid>,
    pub site_id: Option<Uuid>,
    pub ssid: String,
    pub enabled: Option<bool>,
    pub auth: Option<WlanAuth>,
    pub auth_servers: Option<Vec<RadiusServer>>,
    pub acct_servers: Option<Vec<RadiusServer>>,
    pub apply_to: Option<String>,
    pub band: Option<String>,
    pub band_steer: Option<bool>,
    pub disable_11ax: Option<bool>,
    pub dtim: Option<u8>,
    pub dynamic_psk: Option<bool>,
    pub hide_ssid: Option<bool>,
    pub interface: Option<String>,
    pub isolation: Option<bool>,
    pub max_idletime: Option<u32>,
    pub vlan_enabled: Option<bool>,
    pub vlan_id: Option<u16>,
    pub vlan_ids: Option<Vec<String>>,
    pub vlan_pooling: Option<bool>,
    pub wlan_limit_up_enabled: Option<bool>,
    pub wlan_limit_up: Option<u32>,
    pub wlan_limit_down_enabled: Option<bool>,
    pub wlan_limit_down: Option<u32>,
    pub client_limit_up_enabled: Option<bool>,
    pub client_limit_up: Option<u32>,
    pub client_limit_down_enabled: Option<bool>,
    pub client_limit_down: Option<u32>,
    pub wxtag_ids: Option<Vec<Uuid>>,
    pub created_time: Option<f64>,
    pub modified_time: Option<f64>,
}

/// Request body for creating or updating a WLAN
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WlanData {
    pub ssid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<WlanAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_servers: Option<Vec<RadiusServer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acct_servers: Option<Vec<RadiusServer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_steer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_11ax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtim: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_psk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ssid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idletime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_pooling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_limit_up_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_limit_up: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_limit_down_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_limit_down: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_limit_up_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_limit_up: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_limit_down_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_limit_down: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wxtag_ids: Option<Vec<Uuid>>,
}

/// One entry of `GET orgs/{org_id}/inventory?vc=true`
///
/// Devices that have not been claimed or assigned yet may have no `id`,
/// `name` or `site_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryDevice {
    pub id: Option<Uuid>,
    pub mac: Option<String>,
    pub serial: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub name: Option<String>,
    pub org_id: Option<Uuid>,
    pub site_id: Option<Uuid>,
    pub connected: Option<bool>,
}

/// Layer-3 interface configuration (in-band or out-of-band management)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,
}

/// Network (VLAN) definition in the switch payload, keyed by network name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchNetwork {
    pub vlan_id: String,
}

/// Per-interface config entry in the switch payload, keyed by interface name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchPortConfig {
    pub usage: String,
}

/// Port usage (port profile) template in the switch payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_networks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit: Option<u32>,
    /// `access` or `trunk`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poe_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_auth: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp_edge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip_network: Option<String>,
}

/// Request body for `PUT sites/{site_id}/devices/{device_id}`
///
/// The map-shaped fields use the names of networks, interfaces and port
/// profiles as keys, which is the shape the Mist API expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwitchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_config: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_config_cmds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_config: Option<IpConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oob_ip_config: Option<IpConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<BTreeMap<String, SwitchNetwork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_config: Option<BTreeMap<String, SwitchPortConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_usages: Option<BTreeMap<String, PortProfile>>,
}
