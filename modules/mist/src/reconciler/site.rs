//! Site reconciler

use super::{find_unique, ModuleResult, Reconciler};
use crate::error::ModuleError;
use crate::params::{SiteParams, State};
use mist_client::{Site, SiteData};
use tracing::{debug, info};
use uuid::Uuid;

impl Reconciler {
    /// Compare the declared site attributes with the existing resource.
    ///
    /// Fields the caller left out of the document are not part of the diff.
    fn site_needs_update(
        params: &SiteParams,
        existing: &Site,
        desired_groups: Option<&[Uuid]>,
    ) -> bool {
        if let Some(address) = &params.address {
            if existing.address.as_deref() != Some(address) {
                debug!("Site address changed");
                return true;
            }
        }

        if let Some(alarmtemplate_id) = &params.alarmtemplate_id {
            if existing.alarmtemplate_id.as_deref() != Some(alarmtemplate_id) {
                debug!("Site alarmtemplate_id changed");
                return true;
            }
        }

        if let Some(country_code) = &params.country_code {
            if existing.country_code.as_deref() != Some(country_code) {
                debug!("Site country_code changed");
                return true;
            }
        }

        if let Some(latlng) = &params.latlng {
            if existing.latlng.as_ref() != Some(latlng) {
                debug!(
                    "Site latlng changed: {:?} -> {:?}",
                    existing.latlng, latlng
                );
                return true;
            }
        }

        if let Some(notes) = &params.notes {
            if existing.notes.as_deref() != Some(notes) {
                debug!("Site notes changed");
                return true;
            }
        }

        if let Some(rftemplate_id) = &params.rftemplate_id {
            if existing.rftemplate_id.as_deref() != Some(rftemplate_id) {
                debug!("Site rftemplate_id changed");
                return true;
            }
        }

        if let Some(secpolicy_id) = &params.secpolicy_id {
            if existing.secpolicy_id.as_deref() != Some(secpolicy_id) {
                debug!("Site secpolicy_id changed");
                return true;
            }
        }

        if let Some(timezone) = &params.timezone {
            if existing.timezone.as_deref() != Some(timezone) {
                debug!("Site timezone changed");
                return true;
            }
        }

        if let Some(groups) = desired_groups {
            if existing.sitegroup_ids.as_deref() != Some(groups) {
                debug!(
                    "Site group membership changed: {:?} -> {:?}",
                    existing.sitegroup_ids, groups
                );
                return true;
            }
        }

        false // No changes needed
    }

    /// Build the create/update payload from the declared attributes.
    fn site_payload(params: &SiteParams, sitegroup_ids: Option<Vec<Uuid>>) -> SiteData {
        SiteData {
            name: params.name.clone(),
            address: params.address.clone(),
            alarmtemplate_id: params.alarmtemplate_id.clone(),
            country_code: params.country_code.clone(),
            latlng: params.latlng.clone(),
            notes: params.notes.clone(),
            rftemplate_id: params.rftemplate_id.clone(),
            secpolicy_id: params.secpolicy_id.clone(),
            sitegroup_ids,
            timezone: params.timezone.clone(),
        }
    }

    /// Translate friendly site-group names into ids.
    ///
    /// A name with no matching site group is a validation failure, surfaced
    /// before any mutation.
    async fn resolve_site_groups(
        &self,
        org_id: Uuid,
        names: &[String],
    ) -> Result<Vec<Uuid>, ModuleError> {
        let groups = self.client.list_site_groups(org_id).await?;
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let group = find_unique(&groups, name, "site group", |g| Some(g.name.as_str()))?
                .ok_or_else(|| {
                    ModuleError::InvalidParams(format!("site group '{}' does not exist", name))
                })?;
            ids.push(group.id);
        }
        Ok(ids)
    }

    /// Reconcile one site definition against the organization.
    pub async fn reconcile_site(
        &self,
        params: &SiteParams,
        org_id: Uuid,
    ) -> Result<ModuleResult, ModuleError> {
        let sites = self.client.list_sites(org_id).await?;
        let existing = find_unique(&sites, &params.name, "site", |s| Some(s.name.as_str()))?;

        match params.state {
            State::Absent => match existing {
                Some(site) => {
                    self.client.delete_site(site.id).await?;
                    info!("Deleted site {} ({})", site.name, site.id);
                    Ok(ModuleResult::changed(
                        Some(serde_json::to_value(site)?),
                        format!("site '{}' deleted", params.name),
                    ))
                }
                None => Ok(ModuleResult::unchanged(
                    None,
                    format!("site '{}' does not exist", params.name),
                )),
            },
            State::Present => {
                let sitegroup_ids = match &params.sitegroups {
                    Some(names) => Some(self.resolve_site_groups(org_id, names).await?),
                    None => None,
                };

                match existing {
                    None => {
                        let payload = Self::site_payload(params, sitegroup_ids);
                        let created = self.client.create_site(org_id, &payload).await?;
                        info!("Created site {} ({})", created.name, created.id);
                        Ok(ModuleResult::changed(
                            Some(serde_json::to_value(&created)?),
                            format!("site '{}' created", params.name),
                        ))
                    }
                    Some(site) => {
                        if Self::site_needs_update(params, site, sitegroup_ids.as_deref()) {
                            let payload = Self::site_payload(params, sitegroup_ids);
                            let updated = self.client.update_site(site.id, &payload).await?;
                            info!("Updated site {} ({})", updated.name, updated.id);
                            Ok(ModuleResult::changed(
                                Some(serde_json::to_value(&updated)?),
                                format!("site '{}' updated", params.name),
                            ))
                        } else {
                            debug!("Site {} already up to date", site.name);
                            Ok(ModuleResult::unchanged(
                                Some(serde_json::to_value(site)?),
                                format!("site '{}' already up to date", params.name),
                            ))
                        }
                    }
                }
            }
        }
    }
}
