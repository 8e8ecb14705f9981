//! Declarative access policy
//!
//! The pipeline does not enforce access control itself; the store
//! layer does. This module exposes the policy text as static data so
//! callers and deployment tooling can read the contract: who may read
//! and write release records, and that notification events are only
//! ever written by the transition notifier.

use serde::Serialize;

use crate::pipeline::Pipeline;

/// Rules enforced by the record store
pub const RECORD_STORE_RULES: &str = "\
release records:
  read:   allow if caller is authenticated
  create: allow if caller is authenticated
  update: allow if caller is authenticated and caller.uid == record.uid
  delete: deny
";

/// Rules enforced by the mirror store
pub const MIRROR_STORE_RULES: &str = "\
releases/:
  read:  allow if caller is authenticated
  write: allow if caller is authenticated
notifications/:
  read:  allow if caller is authenticated
  write: deny (transition notifier only)
";

/// Access rules for both stores, as declarative text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessPolicy {
    /// Rules for the authoritative record store
    pub records: &'static str,
    /// Rules for the mirror store
    pub mirror: &'static str,
}

impl Pipeline {
    /// The static access policy for both stores.
    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy {
            records: RECORD_STORE_RULES,
            mirror: MIRROR_STORE_RULES,
        }
    }
}
