//! Shiplog - release lifecycle tracking and notification pipeline
//!
//! Shiplog records the lifecycle of a software release (creation,
//! upload, status transitions), keeps an authoritative record store
//! synchronized with a low-latency mirror used for push-style
//! notification, emits one notification event per terminal status
//! transition, and answers windowed statistics queries.
//!
//! # Quick Start
//!
//! ```ignore
//! use shiplog::{in_memory, CallerIdentity, Flavor, ReleaseDraft, Track};
//!
//! let pipeline = in_memory();
//!
//! let ack = pipeline.create_release(
//!     ReleaseDraft {
//!         developer_id: None,
//!         flavor: Flavor::Full,
//!         track: Track::Internal,
//!         version_name: "1.4.0".into(),
//!         version_code: 140,
//!         status: None,
//!     },
//!     CallerIdentity::default(),
//! )?;
//!
//! pipeline.mark_uploaded(ack.id, 42.0, Track::Beta, None)?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Pipeline`], an explicitly
//! constructed context holding both store handles. The record store is
//! the source of truth; mirror and notification writes are post-commit
//! effects that never fail the triggering call.

use std::sync::Arc;

pub use shiplog_core::{
    CallerIdentity, ChangeObserver, Error, Flavor, MirrorStore, Notification, RecordStore,
    Release, ReleaseDraft, ReleaseId, ReleasePatch, ReleaseQuery, ReleaseStatus, ReleaseUpdate,
    Result, Track, DEFAULT_DEVELOPER_ID,
};
pub use shiplog_engine::{
    AccessPolicy, CreateReleaseAck, FlavorCounts, FlavorFilter, OperationAck, Pipeline,
    ReleaseStats, StatsQuery, StatsResponse, TrackCounts, TransitionNotifier,
};
pub use shiplog_store::{MemoryMirrorStore, MemoryRecordStore};

/// Create a pipeline over fresh in-memory stores.
pub fn in_memory() -> Pipeline {
    Pipeline::new(
        Arc::new(MemoryRecordStore::new()),
        Arc::new(MemoryMirrorStore::new()),
    )
}
