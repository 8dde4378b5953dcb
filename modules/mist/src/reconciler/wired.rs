//! Wired switch reconciler
//!
//! Matches a switch by name in the org inventory and pushes its declarative
//! configuration. The inventory listing does not return the pushed
//! port/network configuration, so there is no same-read diff here: a matched
//! switch always receives the config push.

use super::{find_unique, ModuleResult, Reconciler};
use crate::error::ModuleError;
use crate::params::WiredParams;
use mist_client::{PortProfile, SwitchConfig, SwitchNetwork, SwitchPortConfig};
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

impl Reconciler {
    /// Translate the list-shaped options into the map-shaped payload the API
    /// expects: `networks` and `port_config` keyed by name, `port_usages`
    /// keyed by profile name.
    fn switch_config(params: &WiredParams) -> SwitchConfig {
        let networks = params.networks.as_ref().map(|networks| {
            networks
                .iter()
                .map(|n| {
                    (
                        n.name.clone(),
                        SwitchNetwork {
                            vlan_id: n.vlan_id.clone(),
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>()
        });

        let port_config = params.port_config.as_ref().map(|ports| {
            ports
                .iter()
                .map(|p| {
                    (
                        p.name.clone(),
                        SwitchPortConfig {
                            usage: p.profile.clone(),
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>()
        });

        let port_usages = params.port_profiles.as_ref().map(|profiles| {
            profiles
                .iter()
                .map(|profile| {
                    // validate() guarantees every profile carries a name
                    let key = profile.name.clone().unwrap_or_default();
                    (key, profile.clone())
                })
                .collect::<BTreeMap<String, PortProfile>>()
        });

        SwitchConfig {
            name: Some(params.name.clone()),
            role: params.role.clone(),
            notes: params.notes.clone(),
            disable_auto_config: params.disable_auto_config,
            additional_config_cmds: params.additional_config_cmds.clone(),
            ip_config: params.ip_config.clone(),
            oob_ip_config: params.oob_ip_config.clone(),
            networks,
            port_config,
            port_usages,
        }
    }

    /// Resolve the target site, translating `site_name` into a site id when
    /// needed.
    async fn wired_site(&self, params: &WiredParams, org_id: Uuid) -> Result<Uuid, ModuleError> {
        if let Some(site_id) = params.site_id {
            return Ok(site_id);
        }
        // validate() guarantees site_name is present here
        let site_name = params.site_name.as_deref().ok_or_else(|| {
            ModuleError::InvalidParams("either site_id or site_name is required".into())
        })?;
        let sites = self.client.list_sites(org_id).await?;
        let site = find_unique(&sites, site_name, "site", |s| Some(s.name.as_str()))?
            .ok_or_else(|| ModuleError::SiteNotFound(site_name.to_string()))?;
        Ok(site.id)
    }

    /// Reconcile one wired switch definition against the org inventory.
    pub async fn reconcile_wired(
        &self,
        params: &WiredParams,
        org_id: Uuid,
    ) -> Result<ModuleResult, ModuleError> {
        let inventory = self.client.list_inventory(org_id).await?;
        let switches: Vec<_> = inventory
            .iter()
            .filter(|d| d.device_type.as_deref() == Some("switch"))
            .collect();

        let existing = find_unique(&switches, &params.name, "switch", |d| d.name.as_deref())?;

        let Some(device) = existing else {
            debug!("Switch {} not in inventory, nothing to do", params.name);
            return Ok(ModuleResult::unchanged(
                None,
                format!("switch '{}' was not found in the inventory", params.name),
            ));
        };

        let device_id = device.id.ok_or_else(|| {
            ModuleError::Reconciliation(format!(
                "switch '{}' is in the inventory but has no device id yet",
                params.name
            ))
        })?;

        let site_id = self.wired_site(params, org_id).await?;
        let config = Self::switch_config(params);
        let pushed = self
            .client
            .update_device_config(site_id, device_id, &config)
            .await?;
        info!(
            "Pushed configuration to switch {} ({})",
            params.name, device_id
        );

        Ok(ModuleResult::changed(
            Some(pushed),
            format!("configuration pushed to switch '{}'", params.name),
        ))
    }
}
