//! In-memory store backends for the release pipeline
//!
//! This crate provides the reference implementations of the two store
//! traits defined in `shiplog-core`:
//! - [`MemoryRecordStore`]: authoritative record store with a
//!   post-commit change feed
//! - [`MemoryMirrorStore`]: low-latency denormalized mirror
//!
//! Both are process-local and intended for embedding and testing; a
//! deployment backs the same traits with real storage services.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mirror;
pub mod record;

pub use mirror::MemoryMirrorStore;
pub use record::MemoryRecordStore;
