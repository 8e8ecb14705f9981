//! Transition notifier
//!
//! Change-feed observer that diffs the before/after status of every
//! committed update and, on entry into a terminal status from a
//! different prior value, writes exactly one notification event to the
//! mirror store.
//!
//! By the time the notifier runs, the triggering update is already
//! committed in the record store; a failed notification write is
//! logged and never reaches the caller of the triggering operation.

use crate::effects::{run_logged, MirrorEffect};
use chrono::{DateTime, Utc};
use shiplog_core::{
    ChangeObserver, Flavor, MirrorStore, Notification, Release, ReleaseStatus, ReleaseUpdate,
};
use std::sync::Arc;
use tracing::debug;

/// Observer emitting one notification per terminal status transition
pub struct TransitionNotifier {
    mirror: Arc<dyn MirrorStore>,
}

impl TransitionNotifier {
    /// Create a notifier writing to the given mirror store
    pub fn new(mirror: Arc<dyn MirrorStore>) -> Self {
        Self { mirror }
    }
}

impl ChangeObserver for TransitionNotifier {
    fn on_release_updated(&self, update: &ReleaseUpdate) {
        let before = &update.before;
        let after = &update.after;

        if before.status == after.status || !after.status.is_terminal() {
            return;
        }

        let notification = build_notification(after, Utc::now());
        debug!(
            release_id = %after.id,
            from = %before.status,
            to = %after.status,
            "terminal transition, emitting notification"
        );
        run_logged(
            &[MirrorEffect::Notify(&notification)],
            self.mirror.as_ref(),
        );
    }
}

/// Human-readable message for a status, derived deterministically from
/// status, flavor, and version name.
pub fn status_message(status: ReleaseStatus, flavor: Flavor, version_name: &str) -> String {
    let label = flavor.label();
    match status {
        ReleaseStatus::Success => format!("{label} {version_name} uploaded successfully"),
        ReleaseStatus::Failed => format!("{label} {version_name} upload failed"),
        ReleaseStatus::Live => format!("{label} {version_name} is now live"),
        other => format!("{label} {version_name} — status: {other}"),
    }
}

fn build_notification(after: &Release, timestamp: DateTime<Utc>) -> Notification {
    Notification {
        release_id: after.id,
        developer_id: after.developer_id.clone(),
        status: after.status,
        flavor: after.flavor,
        track: after.track,
        version_name: after.version_name.clone(),
        version_code: after.version_code,
        message: status_message(after.status, after.flavor, &after.version_name),
        timestamp,
        error: after.error.clone(),
    }
}
