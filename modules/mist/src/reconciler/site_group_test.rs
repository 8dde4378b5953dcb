//! Unit tests for the site group reconciler

use crate::error::ModuleError;
use crate::params::State;
use crate::reconciler::Reconciler;
use crate::test_utils::*;
use mist_client::MockMistClient;
use uuid::Uuid;

#[tokio::test]
async fn present_without_match_creates_the_group() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());
    let params = site_group_params("texas", State::Present);

    let result = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(mock.site_group_count(), 1);
    assert!(mock.site_group_by_name("texas").is_some());
}

#[tokio::test]
async fn running_twice_reports_changed_then_unchanged() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());

    let mut params = site_group_params("texas", State::Present);
    params.site_ids = Some(vec![Uuid::new_v4()]);

    let first = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();
    let second = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(mock.site_group_count(), 1);
}

#[tokio::test]
async fn membership_drift_triggers_an_update() {
    let mock = MockMistClient::new("http://mock");
    let mut group = remote_site_group("texas");
    group.site_ids = Some(vec![Uuid::new_v4()]);
    mock.add_site_group(group);

    let reconciler = Reconciler::new(mock.clone());
    let desired = vec![Uuid::new_v4(), Uuid::new_v4()];
    let mut params = site_group_params("texas", State::Present);
    params.site_ids = Some(desired.clone());

    let result = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        mock.site_group_by_name("texas").unwrap().site_ids,
        Some(desired)
    );
}

#[tokio::test]
async fn matching_membership_is_a_noop() {
    let mock = MockMistClient::new("http://mock");
    let site_id = Uuid::new_v4();
    let mut group = remote_site_group("texas");
    group.site_ids = Some(vec![site_id]);
    mock.add_site_group(group);

    let reconciler = Reconciler::new(mock.clone());
    let mut params = site_group_params("texas", State::Present);
    params.site_ids = Some(vec![site_id]);

    let result = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(!result.changed);
}

#[tokio::test]
async fn absent_with_match_deletes_the_group() {
    let mock = MockMistClient::new("http://mock");
    mock.add_site_group(remote_site_group("texas"));

    let reconciler = Reconciler::new(mock.clone());
    let params = site_group_params("texas", State::Absent);

    let result = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(mock.site_group_count(), 0);
}

#[tokio::test]
async fn absent_without_match_is_a_noop() {
    let mock = MockMistClient::new("http://mock");
    let reconciler = Reconciler::new(mock.clone());
    let params = site_group_params("texas", State::Absent);

    let result = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap();

    assert!(!result.changed);
}

#[tokio::test]
async fn duplicate_names_in_the_collection_are_an_error() {
    let mock = MockMistClient::new("http://mock");
    mock.add_site_group(remote_site_group("dup"));
    mock.add_site_group(remote_site_group("dup"));

    let reconciler = Reconciler::new(mock.clone());
    let params = site_group_params("dup", State::Present);

    let err = reconciler
        .reconcile_site_group(&params, test_org_id())
        .await
        .unwrap_err();

    assert!(matches!(err, ModuleError::AmbiguousMatch(_)));
}
