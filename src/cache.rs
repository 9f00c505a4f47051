//! Single-slot memo for the live match list.

use chrono::{DateTime, Utc};

use crate::model::Fixture;

/// Validity window for a cached list, in seconds.
pub const CACHE_TTL_SECS: i64 = 180;

/// One-slot advisory cache for the live match list.
///
/// A read is served only while `now - stamp < TTL`; after that the caller
/// must re-fetch and overwrite the slot. There is no per-competition
/// granularity and no partial invalidation. Overlapping refreshes are not
/// serialized; the later `set` wins.
#[derive(Debug, Default)]
pub struct MatchCache {
    slot: Option<(Vec<Fixture>, DateTime<Utc>)>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, if it is still inside the TTL window at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&[Fixture]> {
        self.slot.as_ref().and_then(|(data, stamp)| {
            ((now - *stamp).num_seconds() < CACHE_TTL_SECS).then_some(data.as_slice())
        })
    }

    /// Overwrite the slot with a freshly fetched list.
    pub fn set(&mut self, data: Vec<Fixture>, now: DateTime<Utc>) {
        self.slot = Some((data, now));
    }

    /// Drop the slot, forcing the next read to fetch.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
