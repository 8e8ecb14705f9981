//! Notification emission through the change feed

use crate::common::*;

#[test]
fn upload_success_transition_emits_one_notification() {
    let t = create_test_pipeline();
    let id = create(&t, draft_with_flavor("1.2.3", Flavor::Full));

    t.pipeline
        .update_status(id, ReleaseStatus::Success, Some(30.0), None)
        .unwrap();

    assert_eq!(t.mirror.notification_count(), 1);
    let n = t.mirror.get_notification(&id).unwrap().unwrap();
    assert_eq!(n.release_id, id);
    assert_eq!(n.status, ReleaseStatus::Success);
    assert_eq!(n.message, "Full 1.2.3 uploaded successfully");
    assert_eq!(n.developer_id, DEFAULT_DEVELOPER_ID);

    // A later update that does not change status emits nothing new.
    t.pipeline
        .update_status(id, ReleaseStatus::Success, Some(31.0), None)
        .unwrap();
    assert_eq!(t.mirror.notification_count(), 1);
}

#[test]
fn no_notification_without_status_change() {
    let t = create_test_pipeline();
    let id = create(&t, draft("1.0.0"));

    t.pipeline
        .update_status(id, ReleaseStatus::Uploading, None, None)
        .unwrap();
    assert_eq!(t.mirror.notification_count(), 0);
}

#[test]
fn creation_alone_emits_nothing() {
    let t = create_test_pipeline();
    let mut d = draft("1.0.0");
    // Even a release created directly in a terminal status does not
    // notify: only an update transition fires the feed.
    d.status = Some(ReleaseStatus::Success);
    t.pipeline
        .create_release(d, CallerIdentity::default())
        .unwrap();
    assert_eq!(t.mirror.notification_count(), 0);
}

#[test]
fn failed_transition_carries_error_detail() {
    let t = create_test_pipeline();
    let id = create(&t, draft_with_flavor("2.0.0", Flavor::Lite));

    t.pipeline
        .update_status(
            id,
            ReleaseStatus::Failed,
            Some(12.0),
            Some("upload quota exceeded".to_string()),
        )
        .unwrap();

    let n = t.mirror.get_notification(&id).unwrap().unwrap();
    assert_eq!(n.message, "Lite 2.0.0 upload failed");
    assert_eq!(n.error.as_deref(), Some("upload quota exceeded"));
}

#[test]
fn mark_uploaded_with_live_status_notifies_live() {
    let t = create_test_pipeline();
    let id = create(&t, draft("3.0.0"));

    t.pipeline
        .mark_uploaded(id, 60.0, Track::Production, Some(ReleaseStatus::Live))
        .unwrap();

    let n = t.mirror.get_notification(&id).unwrap().unwrap();
    assert_eq!(n.status, ReleaseStatus::Live);
    assert_eq!(n.message, "Full 3.0.0 is now live");
    assert_eq!(n.track, Track::Production);
}

#[test]
fn terminal_to_terminal_transition_notifies_again() {
    let t = create_test_pipeline();
    let id = create(&t, draft("4.0.0"));

    t.pipeline
        .update_status(id, ReleaseStatus::Success, None, None)
        .unwrap();
    t.pipeline
        .update_status(id, ReleaseStatus::Live, None, None)
        .unwrap();

    // One slot per release: the live event replaced the success event.
    assert_eq!(t.mirror.notification_count(), 1);
    let n = t.mirror.get_notification(&id).unwrap().unwrap();
    assert_eq!(n.status, ReleaseStatus::Live);
}

#[test]
fn notification_snapshot_matches_release_fields() {
    let t = create_test_pipeline();
    let mut d = draft_with_flavor("5.1.0", Flavor::Lite);
    d.track = Track::Beta;
    d.version_code = 510;
    let id = create(&t, d);

    t.pipeline
        .update_status(id, ReleaseStatus::Success, None, None)
        .unwrap();

    let n = t.mirror.get_notification(&id).unwrap().unwrap();
    assert_eq!(n.flavor, Flavor::Lite);
    assert_eq!(n.track, Track::Beta);
    assert_eq!(n.version_name, "5.1.0");
    assert_eq!(n.version_code, 510);
}
