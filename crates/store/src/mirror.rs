//! MemoryMirrorStore: denormalized mirror backend
//!
//! Implements the MirrorStore trait using `DashMap` for lock-free
//! reads and sharded writes, matching the mirror's role as the
//! read/subscribe-heavy side of the pipeline.
//!
//! # Design Notes
//!
//! - Releases and notifications live in separate maps, both keyed by
//!   release id. A notification is write-once per terminal transition;
//!   a later transition overwrites the previous event, matching the
//!   one-slot-per-release layout of the push channel.
//! - `merge_release` requires an existing mirrored copy. The copy is
//!   absent only when the creation-time mirror write failed, in which
//!   case the merge reports `MirrorWrite` and the caller logs it; the
//!   next full `put_release` repairs the mirror.

use dashmap::DashMap;
use shiplog_core::{
    Error, MirrorStore, Notification, Release, ReleaseId, ReleasePatch, Result,
};

/// In-memory mirror store holding denormalized releases and
/// notification events
#[derive(Default)]
pub struct MemoryMirrorStore {
    releases: DashMap<ReleaseId, Release>,
    notifications: DashMap<ReleaseId, Notification>,
}

impl MemoryMirrorStore {
    /// Create a new empty mirror
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mirrored releases
    pub fn release_count(&self) -> usize {
        self.releases.len()
    }

    /// Number of notification events currently held
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}

impl MirrorStore for MemoryMirrorStore {
    fn put_release(&self, release: &Release) -> Result<()> {
        self.releases.insert(release.id, release.clone());
        Ok(())
    }

    fn merge_release(&self, id: &ReleaseId, patch: &ReleasePatch) -> Result<()> {
        match self.releases.get_mut(id) {
            Some(mut mirrored) => {
                patch.apply(mirrored.value_mut());
                Ok(())
            }
            None => Err(Error::MirrorWrite(format!(
                "no mirrored copy of release {id} to merge into"
            ))),
        }
    }

    fn get_release(&self, id: &ReleaseId) -> Result<Option<Release>> {
        Ok(self.releases.get(id).map(|r| r.value().clone()))
    }

    fn put_notification(&self, notification: &Notification) -> Result<()> {
        self.notifications
            .insert(notification.release_id, notification.clone());
        Ok(())
    }

    fn get_notification(&self, release_id: &ReleaseId) -> Result<Option<Notification>> {
        Ok(self.notifications.get(release_id).map(|n| n.value().clone()))
    }
}
