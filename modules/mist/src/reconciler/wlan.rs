//! WLAN reconciler
//!
//! WLANs live either at the org level or at a site; the scope decides which
//! collection is read and which endpoints mutate it.

use super::{find_unique, ModuleResult, Reconciler};
use crate::error::ModuleError;
use crate::params::{State, WlanLevel, WlanParams};
use mist_client::{Wlan, WlanAuth, WlanData};
use tracing::{debug, info};
use uuid::Uuid;

/// Resolved WLAN scope for one reconciliation
#[derive(Debug, Clone, Copy)]
enum WlanScope {
    Org(Uuid),
    Site(Uuid),
}

impl Reconciler {
    /// Compare declared auth settings with the existing WLAN's auth block.
    fn auth_needs_update(desired: &WlanAuth, existing: Option<&WlanAuth>) -> bool {
        let Some(existing) = existing else {
            return true;
        };
        if desired.auth_type.is_some() && desired.auth_type != existing.auth_type {
            return true;
        }
        if desired.psk.is_some() && desired.psk != existing.psk {
            return true;
        }
        if desired.enable_mac_auth.is_some() && desired.enable_mac_auth != existing.enable_mac_auth
        {
            return true;
        }
        if desired.multi_psk_only.is_some() && desired.multi_psk_only != existing.multi_psk_only {
            return true;
        }
        if desired.pairwise.is_some() && desired.pairwise != existing.pairwise {
            return true;
        }
        if desired.wep_as_secondary_auth.is_some()
            && desired.wep_as_secondary_auth != existing.wep_as_secondary_auth
        {
            return true;
        }
        if desired.private_wlan.is_some() && desired.private_wlan != existing.private_wlan {
            return true;
        }
        if desired.keys.is_some() && desired.keys != existing.keys {
            return true;
        }
        if desired.key_idx.is_some() && desired.key_idx != existing.key_idx {
            return true;
        }
        if desired.eap_reauth.is_some() && desired.eap_reauth != existing.eap_reauth {
            return true;
        }
        false
    }

    /// Compare the declared payload with the existing WLAN.
    ///
    /// The payload carries only the fields the caller declared, so a field
    /// that is `None` here is simply not part of the diff.
    fn wlan_needs_update(data: &WlanData, existing: &Wlan) -> bool {
        if let Some(auth) = &data.auth {
            if Self::auth_needs_update(auth, existing.auth.as_ref()) {
                debug!("WLAN auth changed");
                return true;
            }
        }

        macro_rules! field_changed {
            ($field:ident) => {
                if data.$field.is_some() && data.$field != existing.$field {
                    debug!(concat!("WLAN ", stringify!($field), " changed"));
                    return true;
                }
            };
        }

        field_changed!(enabled);
        field_changed!(auth_servers);
        field_changed!(acct_servers);
        field_changed!(apply_to);
        field_changed!(band);
        field_changed!(band_steer);
        field_changed!(disable_11ax);
        field_changed!(dtim);
        field_changed!(dynamic_psk);
        field_changed!(hide_ssid);
        field_changed!(interface);
        field_changed!(isolation);
        field_changed!(max_idletime);
        field_changed!(vlan_enabled);
        field_changed!(vlan_id);
        field_changed!(vlan_ids);
        field_changed!(vlan_pooling);
        field_changed!(wlan_limit_up_enabled);
        field_changed!(wlan_limit_up);
        field_changed!(wlan_limit_down_enabled);
        field_changed!(wlan_limit_down);
        field_changed!(client_limit_up_enabled);
        field_changed!(client_limit_up);
        field_changed!(client_limit_down_enabled);
        field_changed!(client_limit_down);
        field_changed!(wxtag_ids);

        false // No changes needed
    }

    /// Build the create/update payload from the declared attributes.
    fn wlan_payload(params: &WlanParams) -> WlanData {
        WlanData {
            ssid: params.ssid.clone(),
            enabled: params.enabled,
            auth: params.auth.clone(),
            auth_servers: params.auth_servers.clone(),
            acct_servers: params.acct_servers.clone(),
            apply_to: params.apply_to.clone(),
            band: params.band.clone(),
            band_steer: params.band_steer,
            disable_11ax: params.disable_11ax,
            dtim: params.dtim,
            dynamic_psk: params.dynamic_psk,
            hide_ssid: params.hide_ssid,
            interface: params.interface.clone(),
            isolation: params.isolation,
            max_idletime: params.max_idletime,
            // Declaring a vlan_id implies vlan tagging unless the caller says
            // otherwise
            vlan_enabled: params.vlan_enabled.or(params.vlan_id.map(|_| true)),
            vlan_id: params.vlan_id,
            vlan_ids: params.vlan_ids.clone(),
            vlan_pooling: params.vlan_pooling,
            wlan_limit_up_enabled: params.wlan_limit_up_enabled,
            wlan_limit_up: params.wlan_limit_up,
            wlan_limit_down_enabled: params.wlan_limit_down_enabled,
            wlan_limit_down: params.wlan_limit_down,
            client_limit_up_enabled: params.client_limit_up_enabled,
            client_limit_up: params.client_limit_up,
            client_limit_down_enabled: params.client_limit_down_enabled,
            client_limit_down: params.client_limit_down,
            wxtag_ids: params.wxtag_ids.clone(),
        }
    }

    /// Resolve the WLAN scope, translating `site_name` into a site id when
    /// needed.
    async fn wlan_scope(
        &self,
        params: &WlanParams,
        org_id: Uuid,
    ) -> Result<WlanScope, ModuleError> {
        match params.level {
            WlanLevel::Org => Ok(WlanScope::Org(org_id)),
            WlanLevel::Site => {
                if let Some(site_id) = params.site_id {
                    return Ok(WlanScope::Site(site_id));
                }
                // validate() guarantees site_name is present here
                let site_name = params.site_name.as_deref().ok_or_else(|| {
                    ModuleError::InvalidParams(
                        "site-level wlan requires either site_id or site_name".into(),
                    )
                })?;
                let sites = self.client.list_sites(org_id).await?;
                let site = find_unique(&sites, site_name, "site", |s| Some(s.name.as_str()))?
                    .ok_or_else(|| ModuleError::SiteNotFound(site_name.to_string()))?;
                Ok(WlanScope::Site(site.id))
            }
        }
    }

    /// Reconcile one WLAN definition against its org or site scope.
    pub async fn reconcile_wlan(
        &self,
        params: &WlanParams,
        org_id: Uuid,
    ) -> Result<ModuleResult, ModuleError> {
        let scope = self.wlan_scope(params, org_id).await?;

        let wlans = match scope {
            WlanScope::Org(org) => self.client.list_org_wlans(org).await?,
            WlanScope::Site(site) => self.client.list_site_wlans(site).await?,
        };
        let existing = find_unique(&wlans, &params.ssid, "wlan", |w| Some(w.ssid.as_str()))?;

        match params.state {
            State::Absent => match existing {
                Some(wlan) => {
                    match scope {
                        WlanScope::Org(org) => self.client.delete_org_wlan(org, wlan.id).await?,
                        WlanScope::Site(site) => {
                            self.client.delete_site_wlan(site, wlan.id).await?;
                        }
                    }
                    info!("Deleted wlan {} ({})", wlan.ssid, wlan.id);
                    Ok(ModuleResult::changed(
                        Some(serde_json::to_value(wlan)?),
                        format!("wlan '{}' deleted", params.ssid),
                    ))
                }
                None => Ok(ModuleResult::unchanged(
                    None,
                    format!("wlan '{}' does not exist", params.ssid),
                )),
            },
            State::Present => {
                let payload = Self::wlan_payload(params);
                match existing {
                    None => {
                        let created = match scope {
                            WlanScope::Org(org) => {
                                self.client.create_org_wlan(org, &payload).await?
                            }
                            WlanScope::Site(site) => {
                                self.client.create_site_wlan(site, &payload).await?
                            }
                        };
                        info!("Created wlan {} ({})", created.ssid, created.id);
                        Ok(ModuleResult::changed(
                            Some(serde_json::to_value(&created)?),
                            format!("wlan '{}' created", params.ssid),
                        ))
                    }
                    Some(wlan) => {
                        if Self::wlan_needs_update(&payload, wlan) {
                            let updated = match scope {
                                WlanScope::Org(org) => {
                                    self.client.update_org_wlan(org, wlan.id, &payload).await?
                                }
                                WlanScope::Site(site) => {
                                    self.client.update_site_wlan(site, wlan.id, &payload).await?
                                }
                            };
                            info!("Updated wlan {} ({})", updated.ssid, updated.id);
                            Ok(ModuleResult::changed(
                                Some(serde_json::to_value(&updated)?),
                                format!("wlan '{}' updated", params.ssid),
                            ))
                        } else {
                            debug!("WLAN {} already up to date", wlan.ssid);
                            Ok(ModuleResult::unchanged(
                                Some(serde_json::to_value(wlan)?),
                                format!("wlan '{}' already up to date", params.ssid),
                            ))
                        }
                    }
                }
            }
        }
    }
}
