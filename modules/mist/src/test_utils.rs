//! Test utilities for unit testing reconcilers
//!
//! This module provides helpers for creating test data and setting up test
//! scenarios against the mock client.

use crate::params::{SiteGroupParams, SiteParams, State, WiredParams, WlanParams};
use mist_client::{InventoryDevice, Site, SiteGroup, Wlan};
use uuid::Uuid;

/// Fixed org id used across reconciler tests
pub fn test_org_id() -> Uuid {
    "9777c1a0-6ef6-11eb-9439-0242ac130002"
        .parse()
        .expect("valid uuid literal")
}

/// Minimal site params: everything optional left undeclared
pub fn site_params(name: &str, state: State) -> SiteParams {
    SiteParams {
        api_token: None,
        org_id: None,
        base_url: None,
        timeout: None,
        state,
        name: name.to_string(),
        address: None,
        alarmtemplate_id: None,
        country_code: None,
        latlng: None,
        notes: None,
        rftemplate_id: None,
        secpolicy_id: None,
        sitegroups: None,
        timezone: None,
    }
}

/// Minimal site group params
pub fn site_group_params(name: &str, state: State) -> SiteGroupParams {
    SiteGroupParams {
        api_token: None,
        org_id: None,
        base_url: None,
        timeout: None,
        state,
        name: name.to_string(),
        site_ids: None,
    }
}

/// Minimal org-level wlan params
pub fn wlan_params(ssid: &str, state: State) -> WlanParams {
    WlanParams {
        api_token: None,
        org_id: None,
        base_url: None,
        timeout: None,
        state,
        ssid: ssid.to_string(),
        level: Default::default(),
        site_id: None,
        site_name: None,
        enabled: None,
        auth: None,
        auth_servers: None,
        acct_servers: None,
        apply_to: None,
        band: None,
        band_steer: None,
        disable_11ax: None,
        dtim: None,
        dynamic_psk: None,
        hide_ssid: None,
        interface: None,
        isolation: None,
        max_idletime: None,
        vlan_enabled: None,
        vlan_id: None,
        vlan_ids: None,
        vlan_pooling: None,
        wlan_limit_up_enabled: None,
        wlan_limit_up: None,
        wlan_limit_down_enabled: None,
        wlan_limit_down: None,
        client_limit_up_enabled: None,
        client_limit_up: None,
        client_limit_down_enabled: None,
        client_limit_down: None,
        wxtag_ids: None,
    }
}

/// Minimal wired params targeting a site by id
pub fn wired_params(name: &str, site_id: Uuid) -> WiredParams {
    WiredParams {
        api_token: None,
        org_id: None,
        base_url: None,
        timeout: None,
        name: name.to_string(),
        site_id: Some(site_id),
        site_name: None,
        role: None,
        notes: None,
        disable_auto_config: None,
        additional_config_cmds: None,
        ip_config: None,
        oob_ip_config: None,
        networks: None,
        port_config: None,
        port_profiles: None,
    }
}

/// A remote site as the API would return it
pub fn remote_site(name: &str) -> Site {
    Site {
        id: Uuid::new_v4(),
        org_id: Some(test_org_id()),
        name: name.to_string(),
        address: None,
        alarmtemplate_id: None,
        country_code: None,
        latlng: None,
        notes: None,
        rftemplate_id: None,
        secpolicy_id: None,
        sitegroup_ids: None,
        timezone: None,
        created_time: None,
        modified_time: None,
    }
}

/// A remote site group as the API would return it
pub fn remote_site_group(name: &str) -> SiteGroup {
    SiteGroup {
        id: Uuid::new_v4(),
        org_id: Some(test_org_id()),
        name: name.to_string(),
        site_ids: None,
        created_time: None,
        modified_time: None,
    }
}

/// A remote org-level WLAN as the API would return it
pub fn remote_wlan(ssid: &str) -> Wlan {
    Wlan {
        id: Uuid::new_v4(),
        org_id: Some(test_org_id()),
        site_id: None,
        ssid: ssid.to_string(),
        enabled: None,
        auth: None,
        auth_servers: None,
        acct_servers: None,
        apply_to: None,
        band: None,
        band_steer: None,
        disable_11ax: None,
        dtim: None,
        dynamic_psk: None,
        hide_ssid: None,
        interface: None,
        isolation: None,
        max_idletime: None,
        vlan_enabled: None,
        vlan_id: None,
        vlan_ids: None,
        vlan_pooling: None,
        wlan_limit_up_enabled: None,
        wlan_limit_up: None,
        wlan_limit_down_enabled: None,
        wlan_limit_down: None,
        client_limit_up_enabled: None,
        client_limit_up: None,
        client_limit_down_enabled: None,
        client_limit_down: None,
        wxtag_ids: None,
        created_time: None,
        modified_time: None,
    }
}

/// An inventory switch as the API would return it
pub fn inventory_switch(name: &str) -> InventoryDevice {
    InventoryDevice {
        id: Some(Uuid::new_v4()),
        mac: Some("aa:bb:cc:dd:ee:ff".to_string()),
        serial: Some("HV0123456789".to_string()),
        model: Some("EX2300-C-12P".to_string()),
        device_type: Some("switch".to_string()),
        name: Some(name.to_string()),
        org_id: Some(test_org_id()),
        site_id: None,
        connected: Some(true),
    }
}
