//! Org-level operations for MockMistClient
//!
//! Handles sites and site groups. Updates overwrite only the fields the
//! payload declares, matching the partial-payload semantics of the real API.

use super::MockMistClient;
use crate::error::MistError;
use crate::models::*;
use uuid::Uuid;

pub async fn list_sites(client: &MockMistClient, _org_id: Uuid) -> Result<Vec<Site>, MistError> {
    let sites = client.sites.lock().unwrap();
    Ok(sites.values().cloned().collect())
}

pub async fn create_site(
    client: &MockMistClient,
    org_id: Uuid,
    data: &SiteData,
) -> Result<Site, MistError> {
    let site = Site {
        id: Uuid::new_v4(),
        org_id: Some(org_id),
        name: data.name.clone(),
        address: data.address.clone(),
        alarmtemplate_id: data.alarmtemplate_id.clone(),
        country_code: data.country_code.clone(),
        latlng: data.latlng.clone(),
        notes: data.notes.clone(),
        rftemplate_id: data.rftemplate_id.clone(),
        secpolicy_id: data.secpolicy_id.clone(),
        sitegroup_ids: data.sitegroup_ids.clone(),
        timezone: data.timezone.clone(),
        created_time: None,
        modified_time: None,
    };
    client.sites.lock().unwrap().insert(site.id, site.clone());
    Ok(site)
}

pub async fn update_site(
    client: &MockMistClient,
    site_id: Uuid,
    data: &SiteData,
) -> Result<Site, MistError> {
    let mut sites = client.sites.lock().unwrap();
    let site = sites
        .get_mut(&site_id)
        .ok_or_else(|| MistError::NotFound(format!("Site {} not found", site_id)))?;

    site.name = data.name.clone();
    if data.address.is_some() {
        site.address = data.address.clone();
    }
    if data.alarmtemplate_id.is_some() {
        site.alarmtemplate_id = data.alarmtemplate_id.clone();
    }
    if data.country_code.is_some() {
        site.country_code = data.country_code.clone();
    }
    if data.latlng.is_some() {
        site.latlng = data.latlng.clone();
    }
    if data.notes.is_some() {
        site.notes = data.notes.clone();
    }
    if data.rftemplate_id.is_some() {
        site.rftemplate_id = data.rftemplate_id.clone();
    }
    if data.secpolicy_id.is_some() {
        site.secpolicy_id = data.secpolicy_id.clone();
    }
    if data.sitegroup_ids.is_some() {
        site.sitegroup_ids = data.sitegroup_ids.clone();
    }
    if data.timezone.is_some() {
        site.timezone = data.timezone.clone();
    }
    Ok(site.clone())
}

pub async fn delete_site(client: &MockMistClient, site_id: Uuid) -> Result<(), MistError> {
    client
        .sites
        .lock()
        .unwrap()
        .remove(&site_id)
        .map(|_| ())
        .ok_or_else(|| MistError::NotFound(format!("Site {} not found", site_id)))
}

pub async fn list_site_groups(
    client: &MockMistClient,
    _org_id: Uuid,
) -> Result<Vec<SiteGroup>, MistError> {
    let groups = client.site_groups.lock().unwrap();
    Ok(groups.values().cloned().collect())
}

pub async fn create_site_group(
    client: &MockMistClient,
    org_id: Uuid,
    data: &SiteGroupData,
) -> Result<SiteGroup, MistError> {
    let group = SiteGroup {
        id: Uuid::new_v4(),
        org_id: Some(org_id),
        name: data.name.clone(),
        site_ids: data.site_ids.clone(),
        created_time: None,
        modified_time: None,
    };
    client
        .site_groups
        .lock()
        .unwrap()
        .insert(group.id, group.clone());
    Ok(group)
}

pub async fn update_site_group(
    client: &MockMistClient,
    _org_id: Uuid,
    group_id: Uuid,
    data: &SiteGroupData,
) -> Result<SiteGroup, MistError> {
    let mut groups = client.site_groups.lock().unwrap();
    let group = groups
        .get_mut(&group_id)
        .ok_or_else(|| MistError::NotFound(format!("Site group {} not found", group_id)))?;

    group.name = data.name.clone();
    if data.site_ids.is_some() {
        group.site_ids = data.site_ids.clone();
    }
    Ok(group.clone())
}

pub async fn delete_site_group(
    client: &MockMistClient,
    _org_id: Uuid,
    group_id: Uuid,
) -> Result<(), MistError> {
    client
        .site_groups
        .lock()
        .unwrap()
        .remove(&group_id)
        .map(|_| ())
        .ok_or_else(|| MistError::NotFound(format!("Site group {} not found", group_id)))
}
