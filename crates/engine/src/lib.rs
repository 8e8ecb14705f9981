//! Pipeline engine for release lifecycle tracking
//!
//! This crate orchestrates the two stores behind one context object:
//! - Pipeline: store handles plus notifier wiring, passed into every
//!   operation instead of living as ambient global state
//! - Ingestion: create_release, mark_uploaded, update_status
//! - Transition notifier: change-feed observer emitting one
//!   notification per terminal status transition
//! - Stats aggregator: windowed, read-only counts and averages
//! - Access policy: the declarative rules text the store layer enforces
//!
//! The engine is the only component that knows about both stores. The
//! record store write is authoritative; mirror and notification writes
//! are post-commit effects that never fail the triggering call.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod effects;
pub mod ingest;
pub mod notifier;
pub mod pipeline;
pub mod policy;
pub mod stats;

pub use ingest::{CreateReleaseAck, OperationAck};
pub use notifier::TransitionNotifier;
pub use pipeline::Pipeline;
pub use policy::AccessPolicy;
pub use stats::{FlavorCounts, FlavorFilter, ReleaseStats, StatsQuery, StatsResponse, TrackCounts};
