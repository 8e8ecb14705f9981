//! Post-commit mirror effects
//!
//! The mirror write of an ingestion call and the notification write of
//! the transition notifier are independent, unsynchronized writers to
//! the mirror store. Both are expressed as effects executed after the
//! authoritative write: a failed effect is logged and swallowed, never
//! surfaced to the caller, and the mirror stays stale until a later
//! write repairs it. Centralizing them here keeps the door open for
//! retry/backoff without touching the operation contracts.

use shiplog_core::{MirrorStore, Notification, Release, ReleaseId, ReleasePatch, Result};
use tracing::warn;

/// One deferred write against the mirror store
pub(crate) enum MirrorEffect<'a> {
    /// Write the full denormalized release copy
    Put(&'a Release),
    /// Merge a patch into the mirrored copy
    Merge(&'a ReleaseId, &'a ReleasePatch),
    /// Write a notification event
    Notify(&'a Notification),
}

impl MirrorEffect<'_> {
    fn describe(&self) -> &'static str {
        match self {
            MirrorEffect::Put(_) => "mirror put",
            MirrorEffect::Merge(..) => "mirror merge",
            MirrorEffect::Notify(_) => "notification write",
        }
    }

    fn run(&self, mirror: &dyn MirrorStore) -> Result<()> {
        match self {
            MirrorEffect::Put(release) => mirror.put_release(release),
            MirrorEffect::Merge(id, patch) => mirror.merge_release(id, patch),
            MirrorEffect::Notify(notification) => mirror.put_notification(notification),
        }
    }
}

/// Run each effect in order, logging failures instead of propagating.
pub(crate) fn run_logged(effects: &[MirrorEffect<'_>], mirror: &dyn MirrorStore) {
    for effect in effects {
        if let Err(err) = effect.run(mirror) {
            warn!(
                effect = effect.describe(),
                kind = err.kind(),
                error = %err,
                "post-commit effect failed; mirror may lag until the next write"
            );
        }
    }
}
