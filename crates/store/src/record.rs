//! MemoryRecordStore: authoritative record store backend
//!
//! Implements the RecordStore trait using:
//! - `HashMap<ReleaseId, Release>` behind `parking_lot::RwLock`
//! - An observer list forming the change feed
//!
//! # Design Notes
//!
//! - **Per-record atomicity**: A patch is applied under the write lock,
//!   so readers never see a half-applied update.
//! - **Observers fire outside the lock**: Snapshots are cloned under
//!   the lock; observers run after it is released, so an observer may
//!   itself read the store without deadlocking.
//! - **Last-write-wins**: No version check on update. Two concurrent
//!   patches to the same record commit in lock-acquisition order and
//!   the later one wins field by field.

use parking_lot::RwLock;
use shiplog_core::{
    ChangeObserver, Error, RecordStore, Release, ReleaseId, ReleasePatch, ReleaseQuery,
    ReleaseUpdate, Result,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// In-memory record store with a post-commit change feed
#[derive(Default)]
pub struct MemoryRecordStore {
    releases: RwLock<HashMap<ReleaseId, Release>>,
    observers: RwLock<Vec<Arc<dyn ChangeObserver>>>,
}

impl MemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.releases.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.releases.read().is_empty()
    }

    fn dispatch(&self, update: &ReleaseUpdate) {
        let observers: Vec<_> = self.observers.read().iter().cloned().collect();
        for observer in observers {
            observer.on_release_updated(update);
        }
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert(&self, release: Release) -> Result<()> {
        let mut releases = self.releases.write();
        if releases.contains_key(&release.id) {
            return Err(Error::StoreWrite(format!(
                "release {} already exists",
                release.id
            )));
        }
        trace!(release_id = %release.id, "record inserted");
        releases.insert(release.id, release);
        Ok(())
    }

    fn get(&self, id: &ReleaseId) -> Result<Option<Release>> {
        Ok(self.releases.read().get(id).cloned())
    }

    fn update(&self, id: &ReleaseId, patch: ReleasePatch) -> Result<ReleaseUpdate> {
        let update = {
            let mut releases = self.releases.write();
            let release = releases.get_mut(id).ok_or(Error::NotFound(*id))?;
            let before = release.clone();
            patch.apply(release);
            ReleaseUpdate {
                before,
                after: release.clone(),
            }
        };
        trace!(release_id = %id, status = %update.after.status, "record updated");
        self.dispatch(&update);
        Ok(update)
    }

    fn query(&self, query: &ReleaseQuery) -> Result<Vec<Release>> {
        let releases = self.releases.read();
        let mut matched: Vec<Release> = releases
            .values()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(matched)
    }

    fn subscribe(&self, observer: Arc<dyn ChangeObserver>) {
        self.observers.write().push(observer);
    }
}
