//! Site group reconciler

use super::{find_unique, ModuleResult, Reconciler};
use crate::error::ModuleError;
use crate::params::{SiteGroupParams, State};
use mist_client::{SiteGroup, SiteGroupData};
use tracing::{debug, info};
use uuid::Uuid;

impl Reconciler {
    /// Compare the declared site-group attributes with the existing resource.
    fn site_group_needs_update(params: &SiteGroupParams, existing: &SiteGroup) -> bool {
        if let Some(site_ids) = &params.site_ids {
            if existing.site_ids.as_deref() != Some(site_ids.as_slice()) {
                debug!(
                    "Site group membership changed: {:?} -> {:?}",
                    existing.site_ids, site_ids
                );
                return true;
            }
        }

        false // No changes needed
    }

    fn site_group_payload(params: &SiteGroupParams) -> SiteGroupData {
        SiteGroupData {
            name: params.name.clone(),
            site_ids: params.site_ids.clone(),
        }
    }

    /// Reconcile one site-group definition against the organization.
    pub async fn reconcile_site_group(
        &self,
        params: &SiteGroupParams,
        org_id: Uuid,
    ) -> Result<ModuleResult, ModuleError> {
        let groups = self.client.list_site_groups(org_id).await?;
        let existing = find_unique(&groups, &params.name, "site group", |g| {
            Some(g.name.as_str())
        })?;

        match params.state {
            State::Absent => match existing {
                Some(group) => {
                    self.client.delete_site_group(org_id, group.id).await?;
                    info!("Deleted site group {} ({})", group.name, group.id);
                    Ok(ModuleResult::changed(
                        Some(serde_json::to_value(group)?),
                        format!("site group '{}' deleted", params.name),
                    ))
                }
                None => Ok(ModuleResult::unchanged(
                    None,
                    format!("site group '{}' does not exist", params.name),
                )),
            },
            State::Present => match existing {
                None => {
                    let payload = Self::site_group_payload(params);
                    let created = self.client.create_site_group(org_id, &payload).await?;
                    info!("Created site group {} ({})", created.name, created.id);
                    Ok(ModuleResult::changed(
                        Some(serde_json::to_value(&created)?),
                        format!("site group '{}' created", params.name),
                    ))
                }
                Some(group) => {
                    if Self::site_group_needs_update(params, group) {
                        let payload = Self::site_group_payload(params);
                        let updated = self
                            .client
                            .update_site_group(org_id, group.id, &payload)
                            .await?;
                        info!("Updated site group {} ({})", updated.name, updated.id);
                        Ok(ModuleResult::changed(
                            Some(serde_json::to_value(&updated)?),
                            format!("site group '{}' updated", params.name),
                        ))
                    } else {
                        debug!("Site group {} already up to date", group.name);
                        Ok(ModuleResult::unchanged(
                            Some(serde_json::to_value(group)?),
                            format!("site group '{}' already up to date", params.name),
                        ))
                    }
                }
            },
        }
    }
}
