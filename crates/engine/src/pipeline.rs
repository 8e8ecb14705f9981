//! Pipeline context object
//!
//! Holds the store handles and wires the transition notifier onto the
//! record store's change feed. Constructed once at startup and passed
//! into every operation; there is no ambient global state.

use crate::notifier::TransitionNotifier;
use shiplog_core::{MirrorStore, RecordStore};
use std::sync::Arc;

/// Release pipeline over an authoritative record store and a
/// best-effort mirror
///
/// Cloning is cheap; all clones share the same stores.
#[derive(Clone)]
pub struct Pipeline {
    records: Arc<dyn RecordStore>,
    mirror: Arc<dyn MirrorStore>,
}

impl Pipeline {
    /// Create a pipeline over the given stores.
    ///
    /// Registers the transition notifier on the record store's change
    /// feed; from this point every committed update is diffed for
    /// terminal status transitions.
    pub fn new(records: Arc<dyn RecordStore>, mirror: Arc<dyn MirrorStore>) -> Self {
        let notifier = Arc::new(TransitionNotifier::new(Arc::clone(&mirror)));
        records.subscribe(notifier);
        Self { records, mirror }
    }

    /// Handle to the authoritative record store
    pub fn records(&self) -> &Arc<dyn RecordStore> {
        &self.records
    }

    /// Handle to the mirror store
    pub fn mirror(&self) -> &Arc<dyn MirrorStore> {
        &self.mirror
    }
}
