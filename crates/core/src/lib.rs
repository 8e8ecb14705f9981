//! Core types for the shiplog release pipeline
//!
//! This crate defines the foundational pieces shared by every layer:
//! - Release entity, its closed status/flavor/track enums, and patch types
//! - Notification events derived from terminal status transitions
//! - The error taxonomy used across the pipeline
//! - Store traits that decouple the engine from concrete backends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{ChangeObserver, MirrorStore, RecordStore};
pub use types::{
    CallerIdentity, Flavor, Notification, Release, ReleaseDraft, ReleaseId, ReleasePatch,
    ReleaseQuery, ReleaseStatus, ReleaseUpdate, Track, DEFAULT_DEVELOPER_ID,
};
