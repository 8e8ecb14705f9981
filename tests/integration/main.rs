//! Integration tests
//!
//! Cross-layer tests of the full pipeline over in-memory stores,
//! organized by concern:
//! - lifecycle: create/update round-trips and field semantics
//! - notifications: terminal-transition emission through the change feed
//! - stats: windowed aggregation

#[path = "../common/mod.rs"]
mod common;

mod notifications;
mod stats;
