//! Windowed stats aggregation

use crate::common::*;
use shiplog::{FlavorFilter, StatsQuery};

/// Fixture of 10 releases: 6 success, 3 failed, 1 uploading, mixed
/// flavors and tracks, 4 with durations [10, 20, 30, 40].
fn build_fixture(t: &TestPipeline) {
    let flavors = [
        Flavor::Full,
        Flavor::Lite,
        Flavor::Full,
        Flavor::Full,
        Flavor::Lite,
        Flavor::Full,
        Flavor::Lite,
        Flavor::Full,
        Flavor::Full,
        Flavor::Lite,
    ];
    let tracks = [
        Track::Internal,
        Track::Alpha,
        Track::Beta,
        Track::Production,
        Track::Internal,
        Track::Beta,
        Track::Alpha,
        Track::Production,
        Track::Beta,
        Track::Internal,
    ];
    let durations = [
        Some(10.0),
        Some(20.0),
        Some(30.0),
        Some(40.0),
        None,
        None,
        None,
        None,
        None,
        None,
    ];

    for i in 0..10 {
        let mut d = draft_with_flavor(&format!("1.0.{i}"), flavors[i]);
        d.track = tracks[i];
        let id = create(t, d);
        // 0-5 succeed, 6-8 fail, 9 stays uploading.
        if i < 6 {
            t.pipeline
                .update_status(id, ReleaseStatus::Success, durations[i], None)
                .unwrap();
        } else if i < 9 {
            t.pipeline
                .update_status(id, ReleaseStatus::Failed, durations[i], None)
                .unwrap();
        }
    }
}

#[test]
fn fixture_aggregates_match() {
    let t = create_test_pipeline();
    build_fixture(&t);

    let response = t.pipeline.get_stats(StatsQuery::default()).unwrap();
    assert!(response.success);

    let stats = &response.stats;
    assert_eq!(stats.total, 10);
    assert_eq!(stats.success, 6);
    assert_eq!(stats.failed, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.avg_duration, 25.0);
    assert_eq!(stats.by_flavor.full + stats.by_flavor.lite, 10);
    assert_eq!(
        stats.by_track.internal + stats.by_track.alpha + stats.by_track.beta
            + stats.by_track.production,
        10
    );
    assert_eq!(response.releases.len(), 10);
}

#[test]
fn flavor_filter_restricts_counts_and_releases() {
    let t = create_test_pipeline();
    build_fixture(&t);

    let baseline = t.pipeline.get_stats(StatsQuery::default()).unwrap();
    let filtered = t
        .pipeline
        .get_stats(StatsQuery {
            flavor: FlavorFilter::Only(Flavor::Full),
            ..StatsQuery::default()
        })
        .unwrap();

    assert_eq!(filtered.stats.total, baseline.stats.by_flavor.full);
    assert_eq!(filtered.stats.by_flavor.lite, 0);
    assert!(filtered.stats.by_flavor.full > 0);
    assert!(filtered
        .releases
        .iter()
        .all(|r| r.flavor == Flavor::Full));
    // The unfiltered baseline does see lite releases in range.
    assert!(baseline.stats.by_flavor.lite > 0);
}

#[test]
fn other_developer_sees_nothing() {
    let t = create_test_pipeline();
    build_fixture(&t);

    let response = t
        .pipeline
        .get_stats(StatsQuery {
            developer_id: "someone-else".to_string(),
            ..StatsQuery::default()
        })
        .unwrap();
    assert_eq!(response.stats.total, 0);
    assert!(response.releases.is_empty());
    assert_eq!(response.stats.avg_duration, 0.0);
}

#[test]
fn zero_day_window_selects_nothing_already_created() {
    let t = create_test_pipeline();
    build_fixture(&t);

    // The cutoff of a zero-day window is the query instant itself;
    // everything in the fixture was created before it.
    let response = t
        .pipeline
        .get_stats(StatsQuery {
            days: 0,
            ..StatsQuery::default()
        })
        .unwrap();
    assert_eq!(response.stats.total, 0);
}

#[test]
fn releases_are_returned_oldest_first() {
    let t = create_test_pipeline();
    for i in 0..5 {
        create(&t, draft(&format!("2.0.{i}")));
    }
    let response = t.pipeline.get_stats(StatsQuery::default()).unwrap();
    let times: Vec<_> = response.releases.iter().map(|r| r.created_at).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}
