//! Store and change-feed traits
//!
//! This module defines the two store abstractions the engine writes
//! through, so backends can be swapped without touching upper layers.
//!
//! The record store is the source of truth: durable, queryable, and
//! atomic per record. The mirror store is a low-latency denormalized
//! copy used for push-style consumption. No lock or transaction spans
//! the two; they are eventually, not atomically, consistent.

use crate::error::Result;
use crate::types::{Notification, Release, ReleaseId, ReleasePatch, ReleaseQuery, ReleaseUpdate};
use std::sync::Arc;

/// Observer invoked once per committed update to a release record
///
/// Receives immutable before/after snapshots after the write has
/// committed and the store's critical section has been released.
/// Implementations handle their own failures; nothing propagates back
/// to the writer. Inserts do not fire observers, only updates.
pub trait ChangeObserver: Send + Sync {
    /// React to one committed update.
    fn on_release_updated(&self, update: &ReleaseUpdate);
}

/// Authoritative store of release records
///
/// Thread safety: all methods must be safe to call concurrently.
/// Concurrent updates to the same record resolve last-write-wins;
/// the store performs no version check (see DESIGN.md).
pub trait RecordStore: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    /// Returns `StoreWrite` if the record cannot be inserted, including
    /// when the id is already present.
    fn insert(&self, release: Release) -> Result<()>;

    /// Fetch a record by id.
    ///
    /// # Errors
    /// Returns an error if the read fails; an absent id is `Ok(None)`.
    fn get(&self, id: &ReleaseId) -> Result<Option<Release>>;

    /// Apply a patch to an existing record and return both snapshots.
    ///
    /// Registered observers fire exactly once after the update commits.
    ///
    /// # Errors
    /// Returns `NotFound` when the id is absent, `StoreWrite` when the
    /// write fails.
    fn update(&self, id: &ReleaseId, patch: ReleasePatch) -> Result<ReleaseUpdate>;

    /// Select records matching a windowed query, ordered by creation
    /// time (oldest first).
    ///
    /// # Errors
    /// Returns an error if the scan fails.
    fn query(&self, query: &ReleaseQuery) -> Result<Vec<Release>>;

    /// Register an observer on the change feed.
    fn subscribe(&self, observer: Arc<dyn ChangeObserver>);
}

/// Low-latency mirror holding denormalized releases and notifications
pub trait MirrorStore: Send + Sync {
    /// Write the full denormalized copy of a release.
    ///
    /// # Errors
    /// Returns `MirrorWrite` if the write fails.
    fn put_release(&self, release: &Release) -> Result<()>;

    /// Merge a patch into the mirrored copy of a release.
    ///
    /// # Errors
    /// Returns `MirrorWrite` if the write fails or no mirrored copy
    /// exists to merge into.
    fn merge_release(&self, id: &ReleaseId, patch: &ReleasePatch) -> Result<()>;

    /// Fetch the mirrored copy of a release.
    ///
    /// # Errors
    /// Returns an error if the read fails; an absent id is `Ok(None)`.
    fn get_release(&self, id: &ReleaseId) -> Result<Option<Release>>;

    /// Write a notification event, keyed by its release id.
    ///
    /// # Errors
    /// Returns `Notify` if the write fails.
    fn put_notification(&self, notification: &Notification) -> Result<()>;

    /// Fetch the notification for a release, if one was emitted.
    ///
    /// # Errors
    /// Returns an error if the read fails; an absent id is `Ok(None)`.
    fn get_notification(&self, release_id: &ReleaseId) -> Result<Option<Notification>>;
}
