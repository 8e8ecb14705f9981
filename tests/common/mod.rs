//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a
//! suite's main.rs.

#![allow(dead_code)]

use std::sync::{Arc, Once};

pub use shiplog::{
    CallerIdentity, Error, Flavor, MemoryMirrorStore, MemoryRecordStore, MirrorStore, Pipeline,
    RecordStore, ReleaseDraft, ReleaseId, ReleaseStatus, Track, DEFAULT_DEVELOPER_ID,
};

static INIT_TRACING: Once = Once::new();

fn ensure_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Test pipeline wrapper keeping concrete handles to both stores.
pub struct TestPipeline {
    pub pipeline: Pipeline,
    pub records: Arc<MemoryRecordStore>,
    pub mirror: Arc<MemoryMirrorStore>,
}

/// Create a pipeline over fresh in-memory stores.
pub fn create_test_pipeline() -> TestPipeline {
    ensure_tracing();
    let records = Arc::new(MemoryRecordStore::new());
    let mirror = Arc::new(MemoryMirrorStore::new());
    TestPipeline {
        pipeline: Pipeline::new(records.clone(), mirror.clone()),
        records,
        mirror,
    }
}

/// Draft with sensible defaults for tests.
pub fn draft(version_name: &str) -> ReleaseDraft {
    ReleaseDraft {
        developer_id: None,
        flavor: Flavor::Full,
        track: Track::Internal,
        version_name: version_name.to_string(),
        version_code: 100,
        status: None,
    }
}

/// Draft with an explicit flavor.
pub fn draft_with_flavor(version_name: &str, flavor: Flavor) -> ReleaseDraft {
    ReleaseDraft {
        flavor,
        ..draft(version_name)
    }
}

/// Create a release and return its id.
pub fn create(t: &TestPipeline, d: ReleaseDraft) -> ReleaseId {
    t.pipeline
        .create_release(d, CallerIdentity::default())
        .unwrap()
        .id
}
