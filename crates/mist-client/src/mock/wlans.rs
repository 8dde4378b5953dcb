//! WLAN operations for MockMistClient
//!
//! Handles both org-level and site-level WLANs.

use super::MockMistClient;
use crate::error::MistError;
use crate::models::*;
use uuid::Uuid;

/// Build a stored WLAN from a request payload
fn wlan_from_data(org_id: Option<Uuid>, site_id: Option<Uuid>, data: &WlanData) -> Wlan {
    Wlan {
        id: Uuid::new_v4(),
        org_id,
        site_id,
        ssid: data.ssid.clone(),
        enabled: data.enabled,
        auth: data.auth.clone(),
        auth_servers: data.auth_servers.clone(),
        acct_servers: data.acct_servers.clone(),
        apply_to: data.apply_to.clone(),
        band: data.band.clone(),
        band_steer: data.band_steer,
        disable_11ax: data.disable_11ax,
        dtim: data.dtim,
        dynamic_psk: data.dynamic_psk,
        hide_ssid: data.hide_ssid,
        interface: data.interface.clone(),
        isolation: data.isolation,
        max_idletime: data.max_idletime,
        vlan_enabled: data.vlan_enabled,
        vlan_id: data.vlan_id,
        vlan_ids: data.vlan_ids.clone(),
        vlan_pooling: data.vlan_pooling,
        wlan_limit_up_enabled: data.wlan_limit_up_enabled,
        wlan_limit_up: data.wlan_limit_up,
        wlan_limit_down_enabled: data.wlan_limit_down_enabled,
        wlan_limit_down: data.wlan_limit_down,
        client_limit_up_enabled: data.client_limit_up_enabled,
        client_limit_up: data.client_limit_up,
        client_limit_down_enabled: data.client_limit_down_enabled,
        client_limit_down: data.client_limit_down,
        wxtag_ids: data.wxtag_ids.clone(),
        created_time: None,
        modified_time: None,
    }
}

/// Overwrite the fields a payload declares on a stored WLAN
fn apply_wlan_data(wlan: &mut Wlan, data: &WlanData) {
    wlan.ssid = data.ssid.clone();
    if data.enabled.is_some() {
        wlan.enabled = data.enabled;
    }
    if data.auth.is_some() {
        wlan.auth = data.auth.clone();
    }
    if data.auth_servers.is_some() {
        wlan.auth_servers = data.auth_servers.clone();
    }
    if data.acct_servers.is_some() {
        wlan.acct_servers = data.acct_servers.clone();
    }
    if data.apply_to.is_some() {
        wlan.apply_to = data.apply_to.clone();
    }
    if data.band.is_some() {
        wlan.band = data.band.clone();
    }
    if data.band_steer.is_some() {
        wlan.band_steer = data.band_steer;
    }
    if data.disable_11ax.is_some() {
        wlan.disable_11ax = data.disable_11ax;
    }
    if data.dtim.is_some() {
        wlan.dtim = data.dtim;
    }
    if data.dynamic_psk.is_some() {
        wlan.dynamic_psk = data.dynamic_psk;
    }
    if data.hide_ssid.is_some() {
        wlan.hide_ssid = data.hide_ssid;
    }
    if data.interface.is_some() {
        wlan.interface = data.interface.clone();
    }
    if data.isolation.is_some() {
        wlan.isolation = data.isolation;
    }
    if data.max_idletime.is_some() {
        wlan.max_idletime = data.max_idletime;
    }
    if data.vlan_enabled.is_some() {
        wlan.vlan_enabled = data.vlan_enabled;
    }
    if data.vlan_id.is_some() {
        wlan.vlan_id = data.vlan_id;
    }
    if data.vlan_ids.is_some() {
        wlan.vlan_ids = data.vlan_ids.clone();
    }
    if data.vlan_pooling.is_some() {
        wlan.vlan_pooling = data.vlan_pooling;
    }
    if data.wlan_limit_up_enabled.is_some() {
        wlan.wlan_limit_up_enabled = data.wlan_limit_up_enabled;
    }
    if data.wlan_limit_up.is_some() {
        wlan.wlan_limit_up = data.wlan_limit_up;
    }
    if data.wlan_limit_down_enabled.is_some() {
        wlan.wlan_limit_down_enabled = data.wlan_limit_down_enabled;
    }
    if data.wlan_limit_down.is_some() {
        wlan.wlan_limit_down = data.wlan_limit_down;
    }
    if data.client_limit_up_enabled.is_some() {
        wlan.client_limit_up_enabled = data.client_limit_up_enabled;
    }
    if data.client_limit_up.is_some() {
        wlan.client_limit_up = data.client_limit_up;
    }
    if data.client_limit_down_enabled.is_some() {
        wlan.client_limit_down_enabled = data.client_limit_down_enabled;
    }
    if data.client_limit_down.is_some() {
        wlan.client_limit_down = data.client_limit_down;
    }
    if data.wxtag_ids.is_some() {
        wlan.wxtag_ids = data.wxtag_ids.clone();
    }
}

pub async fn list_org_wlans(client: &MockMistClient, _org_id: Uuid) -> Result<Vec<Wlan>, MistError> {
    let wlans = client.org_wlans.lock().unwrap();
    Ok(wlans.values().cloned().collect())
}

pub async fn create_org_wlan(
    client: &MockMistClient,
    org_id: Uuid,
    data: &WlanData,
) -> Result<Wlan, MistError> {
    let wlan = wlan_from_data(Some(org_id), None, data);
    client
        .org_wlans
        .lock()
        .unwrap()
        .insert(wlan.id, wlan.clone());
    Ok(wlan)
}

pub async fn update_org_wlan(
    client: &MockMistClient,
    _org_id: Uuid,
    wlan_id: Uuid,
    data: &WlanData,
) -> Result<Wlan, MistError> {
    let mut wlans = client.org_wlans.lock().unwrap();
    let wlan = wlans
        .get_mut(&wlan_id)
        .ok_or_else(|| MistError::NotFound(format!("WLAN {} not found", wlan_id)))?;
    apply_wlan_data(wlan, data);
    Ok(wlan.clone())
}

pub async fn delete_org_wlan(
    client: &MockMistClient,
    _org_id: Uuid,
    wlan_id: Uuid,
) -> Result<(), MistError> {
    client
        .org_wlans
        .lock()
        .unwrap()
        .remove(&wlan_id)
        .map(|_| ())
        .ok_or_else(|| MistError::NotFound(format!("WLAN {} not found", wlan_id)))
}

pub async fn list_site_wlans(
    client: &MockMistClient,
    _site_id: Uuid,
) -> Result<Vec<Wlan>, MistError> {
    let wlans = client.site_wlans.lock().unwrap();
    Ok(wlans.values().cloned().collect())
}

pub async fn create_site_wlan(
    client: &MockMistClient,
    site_id: Uuid,
    data: &WlanData,
) -> Result<Wlan, MistError> {
    let wlan = wlan_from_data(None, Some(site_id), data);
    client
        .site_wlans
        .lock()
        .unwrap()
        .insert(wlan.id, wlan.clone());
    Ok(wlan)
}

pub async fn update_site_wlan(
    client: &MockMistClient,
    _site_id: Uuid,
    wlan_id: Uuid,
    data: &WlanData,
) -> Result<Wlan, MistError> {
    let mut wlans = client.site_wlans.lock().unwrap();
    let wlan = wlans
        .get_mut(&wlan_id)
        .ok_or_else(|| MistError::NotFound(format!("WLAN {} not found", wlan_id)))?;
    apply_wlan_data(wlan, data);
    Ok(wlan.clone())
}

pub async fn delete_site_wlan(
    client: &MockMistClient,
    _site_id: Uuid,
    wlan_id: Uuid,
) -> Result<(), MistError> {
    client
        .site_wlans
        .lock()
        .unwrap()
        .remove(&wlan_id)
        .map(|_| ())
        .ok_or_else(|| MistError::NotFound(format!("WLAN {} not found", wlan_id)))
}
