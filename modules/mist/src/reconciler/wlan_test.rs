//! Unit tests for the WLAN reconciler

use crate::error::ModuleError;
use crate::params::{State, WlanLevel};
use crate::reconciler::Reconciler;
use crate::test_utils::*;
use mist_client::{MockMistClient, WlanAuth};

#[tokio::test]
async fn present_without_match_creates_an_org_wlan() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());

    let mut params = wlan_params("corp", State::Present);
    params.enabled = Some(true);
    params.auth = Some(WlanAuth {
        auth_type: Some("psk".to_string()),
        psk: Some("hunter22".to_string()),
        ..Default::default()
    });

    let result = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(mock.org_wlan_count(), 1);
    let wlan = mock.org_wlan_by_ssid("corp").unwrap();
    assert_eq!(
        wlan.auth.as_ref().unwrap().auth_type.as_deref(),
        Some("psk")
    );
}

#[tokio::test]
async fn running_twice_reports_changed_then_unchanged() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());

    let mut params = wlan_params("corp", State::Present);
    params.enabled = Some(true);
    params.vlan_id = Some(120);
    params.auth = Some(WlanAuth {
        auth_type: Some("psk".to_string()),
        psk: Some("hunter22".to_string()),
        ..Default::default()
    });

    let first = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();
    let second = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(mock.org_wlan_count(), 1);
}

#[tokio::test]
async fn declaring_a_vlan_id_implies_vlan_tagging() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());

    let mut params = wlan_params("corp", State::Present);
    params.vlan_id = Some(120);

    reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    let wlan = mock.org_wlan_by_ssid("corp").unwrap();
    assert_eq!(wlan.vlan_enabled, Some(true));
    assert_eq!(wlan.vlan_id, Some(120));
}

#[tokio::test]
async fn drifted_psk_triggers_an_update() {
    let mock = MockMistClient::new("http://mock");
    let mut wlan = remote_wlan("corp");
    wlan.auth = Some(WlanAuth {
        auth_type: Some("psk".to_string()),
        psk: Some("old-secret".to_string()),
        ..Default::default()
    });
    mock.add_org_wlan(wlan);

    let reconciler = Reconciler::new(mock.clone());
    let mut params = wlan_params("corp", State::Present);
    params.auth = Some(WlanAuth {
        auth_type: Some("psk".to_string()),
        psk: Some("new-secret".to_string()),
        ..Default::default()
    });

    let result = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    let stored = mock.org_wlan_by_ssid("corp").unwrap();
    assert_eq!(
        stored.auth.as_ref().unwrap().psk.as_deref(),
        Some("new-secret")
    );
}

#[tokio::test]
async fn absent_with_match_deletes_the_wlan() {
    let mock = MockMistClient::new("http://mock");
    mock.add_org_wlan(remote_wlan("corp"));

    let reconciler = Reconciler::new(mock.clone());
    let params = wlan_params("corp", State::Absent);

    let result = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(mock.org_wlan_count(), 0);
}

#[tokio::test]
async fn absent_without_match_is_a_noop() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());
    let params = wlan_params("corp", State::Absent);

    let result = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(!result.changed);
}

#[tokio::test]
async fn site_level_wlan_resolves_the_site_by_name() {
    let mock = MockMistClient::new("http://mock");
    mock.add_site(remote_site("katy"));

    let reconciler = Reconciler::new(mock.clone());
    let mut params = wlan_params("guest", State::Present);
    params.level = WlanLevel::Site;
    params.site_name = Some("katy".to_string());

    let result = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(mock.site_wlan_count(), 1);
    assert_eq!(mock.org_wlan_count(), 0);
}

#[tokio::test]
async fn site_level_wlan_with_unknown_site_name_fails() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());

    let mut params = wlan_params("guest", State::Present);
    params.level = WlanLevel::Site;
    params.site_name = Some("nowhere".to_string());

    let err = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap_err();

    assert!(matches!(err, ModuleError::SiteNotFound(_)));
    assert_eq!(mock.site_wlan_count(), 0);
}

#[tokio::test]
async fn duplicate_ssids_in_the_collection_are_an_error() {
    let mock = MockMistClient::new("http://mock");
    mock.add_org_wlan(remote_wlan("dup"));
    mock.add_org_wlan(remote_wlan("dup"));

    let reconciler = Reconciler::new(mock.clone());
    let params = wlan_params("dup", State::Present);

    let err = reconciler
        .reconcile_wlan(&params, test_org_id())
        .await
        .unwrap_err();

    assert!(matches!(err, ModuleError::AmbiguousMatch(_)));
}
