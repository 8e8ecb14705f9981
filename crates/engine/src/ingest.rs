//! Ingestion operations
//!
//! The three caller-facing write operations. Each validates its input,
//! performs the authoritative record-store write, then mirrors the
//! change as a post-commit effect. A record-store failure fails the
//! call; a mirror failure is logged and the call still succeeds.
//!
//! Operations are synchronous and idempotent at the field-update
//! level only: replaying a call re-applies the same field writes, it
//! does not deduplicate whole calls.

use crate::effects::{run_logged, MirrorEffect};
use crate::pipeline::Pipeline;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shiplog_core::{
    CallerIdentity, Error, ReleaseDraft, ReleaseId, ReleasePatch, ReleaseStatus, Result, Track,
};
use tracing::info;

/// Acknowledgement returned by `create_release`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReleaseAck {
    /// Always true on the Ok path
    pub success: bool,
    /// Id assigned to the new release
    pub id: ReleaseId,
    /// Human-readable confirmation
    pub message: String,
}

/// Acknowledgement returned by the update operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationAck {
    /// Always true on the Ok path
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}

fn validate_draft(draft: &ReleaseDraft) -> Result<()> {
    if draft.version_name.trim().is_empty() {
        return Err(Error::Validation("version_name is required".to_string()));
    }
    if draft.version_code <= 0 {
        return Err(Error::Validation(format!(
            "version_code must be positive, got {}",
            draft.version_code
        )));
    }
    Ok(())
}

fn validate_duration(duration: f64) -> Result<()> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(Error::Validation(format!(
            "duration must be a non-negative number of seconds, got {duration}"
        )));
    }
    Ok(())
}

impl Pipeline {
    /// Record a new release submission.
    ///
    /// Assigns the id and server-side fields (`created_at ==
    /// updated_at`, `needs_upload = true`, caller provenance), inserts
    /// into the record store, then mirrors the full record keyed by
    /// the new id.
    ///
    /// # Errors
    /// `Validation` on missing required fields, `StoreWrite` when the
    /// record-store insert fails. Mirror failure does not fail the
    /// call.
    pub fn create_release(
        &self,
        draft: ReleaseDraft,
        caller: CallerIdentity,
    ) -> Result<CreateReleaseAck> {
        validate_draft(&draft)?;

        let id = ReleaseId::new();
        let now = Utc::now();
        let release = draft.into_release(id, &caller, now);

        self.records().insert(release.clone())?;
        info!(
            release_id = %id,
            version = %release.version_name,
            flavor = %release.flavor,
            track = %release.track,
            uid = %release.uid,
            "release created"
        );

        run_logged(&[MirrorEffect::Put(&release)], self.mirror().as_ref());

        Ok(CreateReleaseAck {
            success: true,
            id,
            message: format!("Release {} registered", release.version_name),
        })
    }

    /// Mark a release's upload as finished.
    ///
    /// Sets `status` (default `Success`), `uploaded_at`, `duration`,
    /// `track`, and clears `needs_upload`.
    ///
    /// # Errors
    /// `Validation` on a malformed duration, `NotFound` when the
    /// release does not exist, `StoreWrite` when the record-store
    /// update fails.
    pub fn mark_uploaded(
        &self,
        release_id: ReleaseId,
        duration: f64,
        track: Track,
        final_status: Option<ReleaseStatus>,
    ) -> Result<OperationAck> {
        validate_duration(duration)?;

        let status = final_status.unwrap_or(ReleaseStatus::Success);
        let now = Utc::now();
        let patch = ReleasePatch {
            status: Some(status),
            track: Some(track),
            duration: Some(duration),
            needs_upload: Some(false),
            uploaded_at: Some(now),
            ..ReleasePatch::at(now)
        };

        self.records().update(&release_id, patch.clone())?;
        info!(release_id = %release_id, status = %status, "release marked uploaded");

        run_logged(
            &[MirrorEffect::Merge(&release_id, &patch)],
            self.mirror().as_ref(),
        );

        Ok(OperationAck {
            success: true,
            message: format!("Release {release_id} updated to {status}"),
        })
    }

    /// Update a release's lifecycle status.
    ///
    /// Sets `status` and optionally `duration` and `error`. An absent
    /// `error` leaves any previously recorded error untouched.
    ///
    /// # Errors
    /// `Validation` on a malformed duration, `NotFound` when the
    /// release does not exist, `StoreWrite` when the record-store
    /// update fails.
    pub fn update_status(
        &self,
        release_id: ReleaseId,
        status: ReleaseStatus,
        duration: Option<f64>,
        error: Option<String>,
    ) -> Result<OperationAck> {
        if let Some(duration) = duration {
            validate_duration(duration)?;
        }

        let now = Utc::now();
        let patch = ReleasePatch {
            status: Some(status),
            duration,
            error,
            ..ReleasePatch::at(now)
        };

        self.records().update(&release_id, patch.clone())?;
        info!(release_id = %release_id, status = %status, "release status updated");

        run_logged(
            &[MirrorEffect::Merge(&release_id, &patch)],
            self.mirror().as_ref(),
        );

        Ok(OperationAck {
            success: true,
            message: format!("Status updated to {status}"),
        })
    }
}
