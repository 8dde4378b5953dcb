//! Unit tests for the wired switch reconciler

use crate::error::ModuleError;
use crate::params::{NetworkParam, PortConfigParam};
use crate::reconciler::Reconciler;
use crate::test_utils::*;
use mist_client::{MockMistClient, PortProfile};
use uuid::Uuid;

#[tokio::test]
async fn matched_switch_receives_the_config_push() {
    let mock = MockMistClient::new("http://mock");
    let switch = inventory_switch("Katy-SW1");
    let device_id = switch.id.unwrap();
    mock.add_inventory_device(switch);

    let reconciler = Reconciler::new(mock.clone());
    let site_id = Uuid::new_v4();
    let mut params = wired_params("Katy-SW1", site_id);
    params.role = Some("access".to_string());

    let result = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    let pushed = mock.device_config(device_id).unwrap();
    assert_eq!(pushed.name.as_deref(), Some("Katy-SW1"));
    assert_eq!(pushed.role.as_deref(), Some("access"));
}

#[tokio::test]
async fn list_shaped_options_become_map_shaped_payload() {
    let mock = MockMistClient::new("http://mock");
    let switch = inventory_switch("Katy-SW1");
    let device_id = switch.id.unwrap();
    mock.add_inventory_device(switch);

    let reconciler = Reconciler::new(mock.clone());
    let mut params = wired_params("Katy-SW1", Uuid::new_v4());
    params.networks = Some(vec![
        NetworkParam {
            name: "corp".to_string(),
            vlan_id: "120".to_string(),
        },
        NetworkParam {
            name: "voice".to_string(),
            vlan_id: "130".to_string(),
        },
    ]);
    params.port_config = Some(vec![PortConfigParam {
        name: "ge-0/0/0-23".to_string(),
        profile: "desktops".to_string(),
    }]);
    params.port_profiles = Some(vec![PortProfile {
        name: Some("desktops".to_string()),
        mode: Some("access".to_string()),
        port_network: Some("corp".to_string()),
        voip_network: Some("voice".to_string()),
        stp_edge: Some(true),
        ..Default::default()
    }]);

    reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap();

    let pushed = mock.device_config(device_id).unwrap();

    let networks = pushed.networks.unwrap();
    assert_eq!(networks["corp"].vlan_id, "120");
    assert_eq!(networks["voice"].vlan_id, "130");

    let port_config = pushed.port_config.unwrap();
    assert_eq!(port_config["ge-0/0/0-23"].usage, "desktops");

    let port_usages = pushed.port_usages.unwrap();
    assert_eq!(port_usages["desktops"].mode.as_deref(), Some("access"));
    assert_eq!(
        port_usages["desktops"].voip_network.as_deref(),
        Some("voice")
    );
}

#[tokio::test]
async fn unmatched_switch_is_a_noop() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());
    let params = wired_params("Katy-SW1", Uuid::new_v4());

    let result = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap();

    assert!(!result.changed);
    assert!(result.resource.is_none());
}

#[tokio::test]
async fn non_switch_inventory_entries_are_ignored() {
    let mock = MockMistClient::new("http://mock");
    let mut ap = inventory_switch("Katy-SW1");
    ap.device_type = Some("ap".to_string());
    mock.add_inventory_device(ap);

    let reconciler = Reconciler::new(mock.clone());
    let params = wired_params("Katy-SW1", Uuid::new_v4());

    let result = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap();

    assert!(!result.changed);
}

#[tokio::test]
async fn switch_without_a_device_id_is_an_error() {
    let mock = MockMistClient::new("http://mock");
    let mut switch = inventory_switch("Katy-SW1");
    switch.id = None;
    mock.add_inventory_device(switch);

    let reconciler = Reconciler::new(mock.clone());
    let params = wired_params("Katy-SW1", Uuid::new_v4());

    let err = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap_err();

    assert!(matches!(err, ModuleError::Reconciliation(_)));
}

#[tokio::test]
async fn site_name_is_resolved_to_a_site_id() {
    let mock = MockMistClient::new("http://mock");
    let switch = inventory_switch("Katy-SW1");
    let device_id = switch.id.unwrap();
    mock.add_inventory_device(switch);
    mock.add_site(remote_site("katy"));

    let reconciler = Reconciler::new(mock.clone());
    let mut params = wired_params("Katy-SW1", Uuid::new_v4());
    params.site_id = None;
    params.site_name = Some("katy".to_string());

    let result = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert!(mock.device_config(device_id).is_some());
}

#[tokio::test]
async fn duplicate_switch_names_are_an_error() {
    let mock = MockMistClient::new("http://mock");
    mock.add_inventory_device(inventory_switch("dup"));
    mock.add_inventory_device(inventory_switch("dup"));

    let reconciler = Reconciler::new(mock.clone());
    let params = wired_params("dup", Uuid::new_v4());

    let err = reconciler
        .reconcile_wired(&params, test_org_id())
        .await
        .unwrap_err();

    assert!(matches!(err, ModuleError::AmbiguousMatch(_)));
}
