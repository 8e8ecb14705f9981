//! Stats aggregator
//!
//! Read-only, side-effect-free aggregate query over the record store:
//! windowed counts, partitions by flavor and track, and the mean
//! upload duration. Callers are expected to bound `days` to keep
//! result sets small; no caching or pagination is provided.

use crate::pipeline::Pipeline;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use shiplog_core::{Error, Flavor, Release, ReleaseQuery, ReleaseStatus, Result, Track,
    DEFAULT_DEVELOPER_ID};

/// Flavor restriction for a stats query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlavorFilter {
    /// Include every flavor
    All,
    /// Restrict to one flavor
    Only(Flavor),
}

impl FlavorFilter {
    fn as_option(self) -> Option<Flavor> {
        match self {
            FlavorFilter::All => None,
            FlavorFilter::Only(flavor) => Some(flavor),
        }
    }
}

/// Parameters of a stats query, with the same defaults the wire
/// interface applies: 30 days, all flavors, the system developer
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsQuery {
    /// Size of the sliding window in days
    pub days: i64,
    /// Flavor restriction
    pub flavor: FlavorFilter,
    /// Developer account to aggregate over
    pub developer_id: String,
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            days: 30,
            flavor: FlavorFilter::All,
            developer_id: DEFAULT_DEVELOPER_ID.to_string(),
        }
    }
}

/// Counts partitioned by flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorCounts {
    /// Releases with the full flavor
    pub full: usize,
    /// Releases with the lite flavor
    pub lite: usize,
}

/// Counts partitioned by track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCounts {
    /// Releases on the internal track
    pub internal: usize,
    /// Releases on the alpha track
    pub alpha: usize,
    /// Releases on the beta track
    pub beta: usize,
    /// Releases on the production track
    pub production: usize,
}

/// Aggregates over a selected release set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseStats {
    /// Size of the selected set
    pub total: usize,
    /// Releases with status `success`
    pub success: usize,
    /// Releases with status `failed`
    pub failed: usize,
    /// Releases still in status `uploading`; the wire name `pending`
    /// predates the status vocabulary and is kept
    pub pending: usize,
    /// Partition by flavor
    pub by_flavor: FlavorCounts,
    /// Partition by track
    pub by_track: TrackCounts,
    /// Mean of `duration` over releases that have one; 0 when none do
    pub avg_duration: f64,
}

impl ReleaseStats {
    /// Compute aggregates over a release set.
    pub fn compute(releases: &[Release]) -> Self {
        let mut stats = Self {
            total: releases.len(),
            success: 0,
            failed: 0,
            pending: 0,
            by_flavor: FlavorCounts::default(),
            by_track: TrackCounts::default(),
            avg_duration: 0.0,
        };

        let mut duration_sum = 0.0;
        let mut duration_count = 0usize;

        for release in releases {
            match release.status {
                ReleaseStatus::Success => stats.success += 1,
                ReleaseStatus::Failed => stats.failed += 1,
                ReleaseStatus::Uploading => stats.pending += 1,
                ReleaseStatus::Live => {}
            }
            match release.flavor {
                Flavor::Full => stats.by_flavor.full += 1,
                Flavor::Lite => stats.by_flavor.lite += 1,
            }
            match release.track {
                Track::Internal => stats.by_track.internal += 1,
                Track::Alpha => stats.by_track.alpha += 1,
                Track::Beta => stats.by_track.beta += 1,
                Track::Production => stats.by_track.production += 1,
            }
            if let Some(duration) = release.duration {
                duration_sum += duration;
                duration_count += 1;
            }
        }

        if duration_count > 0 {
            stats.avg_duration = duration_sum / duration_count as f64;
        }
        stats
    }
}

/// Aggregates plus the matching release list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Always true on the Ok path
    pub success: bool,
    /// Computed aggregates
    pub stats: ReleaseStats,
    /// The full selected set, oldest first
    pub releases: Vec<Release>,
}

impl Pipeline {
    /// Aggregate releases created in the last `query.days` days for
    /// one developer account, optionally restricted to one flavor.
    ///
    /// # Errors
    /// `Query` on an invalid window or when the underlying scan fails.
    pub fn get_stats(&self, query: StatsQuery) -> Result<StatsResponse> {
        if query.days < 0 {
            return Err(Error::Query(format!(
                "window must be non-negative, got {} days",
                query.days
            )));
        }

        let cutoff = Utc::now() - Duration::days(query.days);
        let releases = self
            .records()
            .query(&ReleaseQuery {
                developer_id: query.developer_id,
                created_after: cutoff,
                flavor: query.flavor.as_option(),
            })
            .map_err(|e| Error::Query(e.to_string()))?;

        Ok(StatsResponse {
            success: true,
            stats: ReleaseStats::compute(&releases),
            releases,
        })
    }
}
