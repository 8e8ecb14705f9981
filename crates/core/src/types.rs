//! Core types for the release pipeline
//!
//! This module defines the foundational types:
//! - ReleaseId: unique identifier assigned on creation
//! - Flavor / Track / ReleaseStatus: closed enums over the wire vocabulary
//! - Release: one submitted build artifact with its lifecycle state
//! - ReleasePatch: field-level update applied by the record store
//! - Notification: event derived from a terminal status transition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Developer account used when a caller does not supply one.
///
/// Matches the fixed system account id the stats and notification
/// paths default to.
pub const DEFAULT_DEVELOPER_ID: &str = "8729530839422072366";

/// Caller uid recorded when the request carries no authenticated identity.
pub const SYSTEM_UID: &str = "system";

/// Unique identifier for a release record
///
/// A ReleaseId is a wrapper around a UUID v4, assigned by the record
/// store path on creation and immutable afterwards. The same id keys
/// the denormalized copy in the mirror store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseId(Uuid);

impl ReleaseId {
    /// Create a new random ReleaseId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a ReleaseId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReleaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build flavor of a release artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Full build
    Full,
    /// Lite build
    Lite,
}

impl Flavor {
    /// Wire name of this flavor
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Full => "full",
            Flavor::Lite => "lite",
        }
    }

    /// Human-facing label used in notification messages
    pub fn label(&self) -> &'static str {
        match self {
            Flavor::Full => "Full",
            Flavor::Lite => "Lite",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distribution track a release targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Internal testing track
    Internal,
    /// Alpha track
    Alpha,
    /// Beta track
    Beta,
    /// Production track
    Production,
}

impl Track {
    /// Wire name of this track
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Internal => "internal",
            Track::Alpha => "alpha",
            Track::Beta => "beta",
            Track::Production => "production",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a release
///
/// `Uploading` is the sole initial state. `Success`, `Failed`, and
/// `Live` are terminal for notification purposes: entering one of them
/// from a different prior status fires a notification. The store still
/// permits transitions among terminal states; only the entry fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// Upload in progress (initial state)
    Uploading,
    /// Upload completed successfully
    Success,
    /// Upload failed
    Failed,
    /// Artifact is live on its track
    Live,
}

impl ReleaseStatus {
    /// Wire name of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Uploading => "uploading",
            ReleaseStatus::Success => "success",
            ReleaseStatus::Failed => "failed",
            ReleaseStatus::Live => "live",
        }
    }

    /// Whether entering this status fires a notification
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReleaseStatus::Success | ReleaseStatus::Failed | ReleaseStatus::Live
        )
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the caller invoking an ingestion operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Authenticated uid, if any
    pub uid: Option<String>,
    /// Request origin address, if known
    pub ip: Option<String>,
}

impl CallerIdentity {
    /// The uid recorded on the release: the authenticated uid, or
    /// [`SYSTEM_UID`] when the call carries no identity.
    pub fn resolved_uid(&self) -> String {
        self.uid.clone().unwrap_or_else(|| SYSTEM_UID.to_string())
    }
}

/// One submitted build artifact with its lifecycle state
///
/// The record store holds the authoritative copy; the mirror store
/// holds a denormalized copy under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Unique id, assigned on creation, immutable
    pub id: ReleaseId,
    /// Owning developer account
    pub developer_id: String,
    /// Build flavor
    pub flavor: Flavor,
    /// Distribution track
    pub track: Track,
    /// Display version, caller-supplied, opaque
    pub version_name: String,
    /// Ordering version, caller-supplied, opaque
    pub version_code: i64,
    /// Current lifecycle status
    pub status: ReleaseStatus,
    /// True from creation until the upload completes
    pub needs_upload: bool,
    /// Upload duration in seconds, set on completion
    pub duration: Option<f64>,
    /// Failure detail; only ever set, never implicitly cleared
    pub error: Option<String>,
    /// Uid of the creating caller
    pub uid: String,
    /// Address of the creating caller
    pub ip: Option<String>,
    /// Creation time, immutable
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write
    pub updated_at: DateTime<Utc>,
    /// Set once when the upload completes
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for creating a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDraft {
    /// Owning developer account; [`DEFAULT_DEVELOPER_ID`] when absent
    pub developer_id: Option<String>,
    /// Build flavor
    pub flavor: Flavor,
    /// Distribution track
    pub track: Track,
    /// Display version
    pub version_name: String,
    /// Ordering version
    pub version_code: i64,
    /// Initial status; `Uploading` when absent
    pub status: Option<ReleaseStatus>,
}

impl ReleaseDraft {
    /// Materialize a full record from this draft.
    ///
    /// Assigns the id and server-side fields: `created_at == updated_at`,
    /// `needs_upload = true`, uid/ip from the caller.
    pub fn into_release(self, id: ReleaseId, caller: &CallerIdentity, now: DateTime<Utc>) -> Release {
        Release {
            id,
            developer_id: self
                .developer_id
                .unwrap_or_else(|| DEFAULT_DEVELOPER_ID.to_string()),
            flavor: self.flavor,
            track: self.track,
            version_name: self.version_name,
            version_code: self.version_code,
            status: self.status.unwrap_or(ReleaseStatus::Uploading),
            needs_upload: true,
            duration: None,
            error: None,
            uid: caller.resolved_uid(),
            ip: caller.ip.clone(),
            created_at: now,
            updated_at: now,
            uploaded_at: None,
        }
    }
}

/// Field-level update applied to a release record
///
/// Every patch refreshes `updated_at`. All other fields are applied
/// only when present; in particular `error` is only ever set by a
/// patch, never cleared by its absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleasePatch {
    /// New status, if changing
    pub status: Option<ReleaseStatus>,
    /// New track, if changing
    pub track: Option<Track>,
    /// Upload duration in seconds
    pub duration: Option<f64>,
    /// Failure detail; applied only when supplied
    pub error: Option<String>,
    /// New needs_upload flag
    pub needs_upload: Option<bool>,
    /// Completion time
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Write time; always applied
    pub updated_at: DateTime<Utc>,
}

impl ReleasePatch {
    /// Empty patch stamped at `now`; combine with struct update syntax.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            status: None,
            track: None,
            duration: None,
            error: None,
            needs_upload: None,
            uploaded_at: None,
            updated_at: now,
        }
    }

    /// Apply this patch to a release in place.
    pub fn apply(&self, release: &mut Release) {
        if let Some(status) = self.status {
            release.status = status;
        }
        if let Some(track) = self.track {
            release.track = track;
        }
        if let Some(duration) = self.duration {
            release.duration = Some(duration);
        }
        if let Some(ref error) = self.error {
            release.error = Some(error.clone());
        }
        if let Some(needs_upload) = self.needs_upload {
            release.needs_upload = needs_upload;
        }
        if let Some(uploaded_at) = self.uploaded_at {
            release.uploaded_at = Some(uploaded_at);
        }
        release.updated_at = self.updated_at;
    }
}

/// Immutable before/after snapshot pair for one committed update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseUpdate {
    /// Record as it was before the patch
    pub before: Release,
    /// Record as committed
    pub after: Release,
}

/// Selection criteria for windowed release queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseQuery {
    /// Owning developer account to match
    pub developer_id: String,
    /// Lower bound (inclusive) on `created_at`
    pub created_after: DateTime<Utc>,
    /// Restrict to one flavor; None selects all
    pub flavor: Option<Flavor>,
}

impl ReleaseQuery {
    /// Whether a release satisfies this query.
    pub fn matches(&self, release: &Release) -> bool {
        release.developer_id == self.developer_id
            && release.created_at >= self.created_after
            && self.flavor.map_or(true, |f| release.flavor == f)
    }
}

/// Event derived from a terminal status transition
///
/// Written once per transition by the notifier, never updated or
/// deleted by this subsystem. Consumers read and retire independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Release this event refers to (foreign reference, not owning)
    pub release_id: ReleaseId,
    /// Owning developer account of the release
    pub developer_id: String,
    /// The new terminal status
    pub status: ReleaseStatus,
    /// Flavor of the release
    pub flavor: Flavor,
    /// Track of the release
    pub track: Track,
    /// Display version of the release
    pub version_name: String,
    /// Ordering version of the release
    pub version_code: i64,
    /// Human-readable message derived from status, flavor, version
    pub message: String,
    /// Emission time
    pub timestamp: DateTime<Utc>,
    /// Failure detail carried over from the release, if any
    pub error: Option<String>,
}
