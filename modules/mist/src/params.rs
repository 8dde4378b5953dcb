//! Typed parameter documents for the Mist modules.
//!
//! Each module accepts a JSON or YAML document deserialized into one of the
//! structs below. Unknown keys are rejected at deserialization time
//! (`deny_unknown_fields`), and `validate()` runs the cross-field rules
//! before any network call is made.

use crate::error::ModuleError;
use mist_client::{IpConfig, LatLng, PortProfile, WlanAuth, RadiusServer};
use serde::Deserialize;
use uuid::Uuid;

/// Environment variables accepted for the API token, in precedence order
pub const API_TOKEN_ENV_VARS: [&str; 2] = ["MIST_API_KEY", "MIST_API_TOKEN"];

/// Environment variable accepted for the organization id
pub const ORG_ID_ENV_VAR: &str = "MIST_ORG_ID";

/// Allowed WLAN authentication types
const WLAN_AUTH_TYPES: [&str; 6] = ["open", "psk", "wep", "eap", "psk-tkip", "psk-wpa2-tkip"];

/// Desired state of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Present,
    Absent,
}

/// Scope of a WLAN definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WlanLevel {
    #[default]
    Org,
    Site,
}

/// Resolve the API token: explicit value, then the environment fallbacks.
pub fn resolve_api_token(explicit: Option<&str>) -> Result<String, ModuleError> {
    if let Some(token) = explicit {
        return Ok(token.to_string());
    }
    for var in API_TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(var) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
    }
    Err(ModuleError::MissingCredentials(format!(
        "api_token was not supplied and neither {} nor {} is set",
        API_TOKEN_ENV_VARS[0], API_TOKEN_ENV_VARS[1]
    )))
}

/// Resolve the organization id: explicit value, then the environment fallback.
pub fn resolve_org_id(explicit: Option<Uuid>) -> Result<Uuid, ModuleError> {
    if let Some(org_id) = explicit {
        return Ok(org_id);
    }
    match std::env::var(ORG_ID_ENV_VAR) {
        Ok(raw) if !raw.is_empty() => raw.parse().map_err(|e| {
            ModuleError::InvalidParams(format!("{} is not a valid UUID: {}", ORG_ID_ENV_VAR, e))
        }),
        _ => Err(ModuleError::MissingCredentials(format!(
            "org_id was not supplied and {} is not set",
            ORG_ID_ENV_VAR
        ))),
    }
}

/// Parameters of the `site` module
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteParams {
    pub api_token: Option<String>,
    pub org_id: Option<Uuid>,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
    pub state: State,

    /// Natural key: the site's name, unique within the organization
    pub name: String,
    pub address: Option<String>,
    pub alarmtemplate_id: Option<String>,
    pub country_code: Option<String>,
    pub latlng: Option<LatLng>,
    pub notes: Option<String>,
    pub rftemplate_id: Option<String>,
    pub secpolicy_id: Option<String>,
    /// Friendly site-group names, translated to ids before the payload is built
    pub sitegroups: Option<Vec<String>>,
    pub timezone: Option<String>,
}

impl SiteParams {
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.name.is_empty() {
            return Err(ModuleError::InvalidParams("name must not be empty".into()));
        }
        if let Some(latlng) = &self.latlng {
            if !(-90.0..=90.0).contains(&latlng.lat) {
                return Err(ModuleError::InvalidParams(format!(
                    "latlng.lat {} is out of range [-90, 90]",
                    latlng.lat
                )));
            }
            if !(-180.0..=180.0).contains(&latlng.lng) {
                return Err(ModuleError::InvalidParams(format!(
                    "latlng.lng {} is out of range [-180, 180]",
                    latlng.lng
                )));
            }
        }
        Ok(())
    }
}

/// Parameters of the `site_group` module
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteGroupParams {
    pub api_token: Option<String>,
    pub org_id: Option<Uuid>,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
    pub state: State,

    /// Natural key: the site group's name, unique within the organization
    pub name: String,
    pub site_ids: Option<Vec<Uuid>>,
}

impl SiteGroupParams {
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.name.is_empty() {
            return Err(ModuleError::InvalidParams("name must not be empty".into()));
        }
        Ok(())
    }
}

/// Parameters of the `wlan` module
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WlanParams {
    pub api_token: Option<String>,
    pub org_id: Option<Uuid>,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
    pub state: State,

    /// Natural key: the SSID, unique within its org or site scope
    pub ssid: String,
    /// Whether the WLAN lives at the org or at a site
    #[serde(default)]
    pub level: WlanLevel,
    /// Target site (site level only); faster than `site_name`
    pub site_id: Option<Uuid>,
    /// Target site by name (site level only); costs one extra lookup
    pub site_name: Option<String>,

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
}

impl WlanParams {
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.ssid.is_empty() {
            return Err(ModuleError::InvalidParams("ssid must not be empty".into()));
        }
        if self.level == WlanLevel::Site && self.site_id.is_none() && self.site_name.is_none() {
            return Err(ModuleError::InvalidParams(
                "site-level wlan requires either site_id or site_name".into(),
            ));
        }
        if let Some(auth) = &self.auth {
            if let Some(auth_type) = &auth.auth_type {
                if !WLAN_AUTH_TYPES.contains(&auth_type.as_str()) {
                    return Err(ModuleError::InvalidParams(format!(
                        "auth.type '{}' is not one of {:?}",
                        auth_type, WLAN_AUTH_TYPES
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One VLAN definition for the `wired` module
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkParam {
    pub name: String,
    pub vlan_id: String,
}

/// One interface-to-profile binding for the `wired` module
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortConfigParam {
    /// Interface or interface range, e.g. `ge-0/0/0-23`
    pub name: String,
    /// Port profile applied to the interface(s)
    pub profile: String,
}

/// Parameters of the `wired` module
///
/// There is no `state` field: switch inventory lifecycle (claim/release) is
/// owned by the Mist adoption workflow, this module only pushes configuration
/// to switches that are already in the inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WiredParams {
    pub api_token: Option<String>,
    pub org_id: Option<Uuid>,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,

    /// Natural key: the switch name in the org inventory
    pub name: String,
    /// Target site; faster than `site_name`
    pub site_id: Option<Uuid>,
    /// Target site by name; costs one extra lookup
    pub site_name: Option<String>,

    pub role: Option<String>,
    pub notes: Option<String>,
    pub disable_auto_config: Option<bool>,
    /// Junos configuration in "set" format
    pub additional_config_cmds: Option<Vec<String>>,
    pub ip_config: Option<IpConfig>,
    pub oob_ip_config: Option<IpConfig>,
    pub networks: Option<Vec<NetworkParam>>,
    pub port_config: Option<Vec<PortConfigParam>>,
    pub port_profiles: Option<Vec<PortProfile>>,
}

impl WiredParams {
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.name.is_empty() {
            return Err(ModuleError::InvalidParams("name must not be empty".into()));
        }
        if self.site_id.is_none() && self.site_name.is_none() {
            return Err(ModuleError::InvalidParams(
                "either site_id or site_name is required".into(),
            ));
        }
        if let Some(profiles) = &self.port_profiles {
            for profile in profiles {
                if profile.name.as_deref().unwrap_or_default().is_empty() {
                    return Err(ModuleError::InvalidParams(
                        "every port_profiles entry requires a name".into(),
                    ));
                }
                if let Some(mode) = &profile.mode {
                    if mode != "access" && mode != "trunk" {
                        return Err(ModuleError::InvalidParams(format!(
                            "port profile mode '{}' must be 'access' or 'trunk'",
                            mode
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env-var tests share process state; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in API_TOKEN_ENV_VARS {
            std::env::remove_var(var);
        }
        std::env::remove_var(ORG_ID_ENV_VAR);
    }

    #[test]
    fn token_explicit_value_wins_over_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("MIST_API_KEY", "from-env");

        let token = resolve_api_token(Some("explicit")).unwrap();
        assert_eq!(token, "explicit");
        clear_env();
    }

    #[test]
    fn token_falls_back_through_both_env_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("MIST_API_TOKEN", "legacy");
        assert_eq!(resolve_api_token(None).unwrap(), "legacy");

        // MIST_API_KEY takes precedence over MIST_API_TOKEN
        std::env::set_var("MIST_API_KEY", "current");
        assert_eq!(resolve_api_token(None).unwrap(), "current");
        clear_env();
    }

    #[test]
    fn token_missing_everywhere_is_an_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let err = resolve_api_token(None).unwrap_err();
        assert!(matches!(err, ModuleError::MissingCredentials(_)));
    }

    #[test]
    fn org_id_env_fallback_and_parse_failure() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var(ORG_ID_ENV_VAR, "9777c1a0-6ef6-11eb-9439-0242ac130002");
        let org_id = resolve_org_id(None).unwrap();
        assert_eq!(
            org_id.to_string(),
            "9777c1a0-6ef6-11eb-9439-0242ac130002"
        );

        std::env::set_var(ORG_ID_ENV_VAR, "not-a-uuid");
        assert!(matches!(
            resolve_org_id(None),
            Err(ModuleError::InvalidParams(_))
        ));
        clear_env();
    }

    #[test]
    fn site_params_reject_unknown_fields() {
        let doc = r#"{"name": "katy", "state": "present", "bogus": 1}"#;
        let result: Result<SiteParams, _> = serde_json::from_str(doc);
        assert!(result.is_err());
    }

    #[test]
    fn site_params_latlng_out_of_range() {
        let doc = r#"{"name": "katy", "state": "present", "latlng": {"lat": 91.0, "lng": 0.0}}"#;
        let params: SiteParams = serde_json::from_str(doc).unwrap();
        assert!(matches!(
            params.validate(),
            Err(ModuleError::InvalidParams(_))
        ));
    }

    #[test]
    fn wlan_params_site_level_requires_a_site() {
        let doc = r#"{"ssid": "corp", "state": "present", "level": "site"}"#;
        let params: WlanParams = serde_json::from_str(doc).unwrap();
        assert!(matches!(
            params.validate(),
            Err(ModuleError::InvalidParams(_))
        ));
    }

    #[test]
    fn wlan_params_reject_unknown_auth_type() {
        let doc = r#"{"ssid": "corp", "state": "present", "auth": {"type": "wpa9"}}"#;
        let params: WlanParams = serde_json::from_str(doc).unwrap();
        assert!(matches!(
            params.validate(),
            Err(ModuleError::InvalidParams(_))
        ));
    }

    #[test]
    fn wired_params_require_a_site_reference() {
        let doc = r#"{"name": "Katy-SW1"}"#;
        let params: WiredParams = serde_json::from_str(doc).unwrap();
        assert!(matches!(
            params.validate(),
            Err(ModuleError::InvalidParams(_))
        ));
    }
}
