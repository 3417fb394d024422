// src/scoring/rank.rs

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How long the UI shows rank-change badges before clearing them.
///
/// Timing is the caller's job: the diff below is a pure function, and the
/// presentation layer schedules the clear (see [`RankChangeDisplay`]).
pub const RANK_CHANGE_DISPLAY_MS: i64 = 4000;

/// A listing's position delta between two ranking passes. Positions are
/// 1-based (rank 1 is the best listing). Short-lived UI feedback, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankChange {
    pub listing_id: String,
    pub old_position: usize,
    pub new_position: usize,
    pub direction: RankDirection,
}

/// Whether a listing moved toward the front or the back. Listings that did
/// not move are not reported at all, so there is no "same" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
    Up,
    Down,
}

/// Diffs two successive rankings (best first) into per-listing changes.
///
/// Only listings present in both orders with a changed position are
/// reported. Listings appearing for the first time in `new_order` have no
/// previous position and are skipped, and an empty `previous_order` (first
/// load) always yields an empty map.
pub fn diff_rankings(
    previous_order: &[String],
    new_order: &[String],
) -> HashMap<String, RankChange> {
    let previous_positions: HashMap<&str, usize> = previous_order
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx + 1))
        .collect();

    let mut changes = HashMap::new();
    for (idx, id) in new_order.iter().enumerate() {
        let new_position = idx + 1;
        let Some(&old_position) = previous_positions.get(id.as_str()) else {
            continue;
        };
        if old_position == new_position {
            continue;
        }

        let direction = if old_position > new_position {
            RankDirection::Up
        } else {
            RankDirection::Down
        };
        changes.insert(
            id.clone(),
            RankChange {
                listing_id: id.clone(),
                old_position,
                new_position,
                direction,
            },
        );
    }
    changes
}

/// A diff result stamped with the instant it was computed.
///
/// The engine owns no timers, so expiry is checked against a `now` the
/// caller supplies. Typical flow: compute a diff on refresh, wrap it here,
/// render [`RankChangeDisplay::visible_at`] until [`RankChangeDisplay::is_expired`],
/// then drop the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RankChangeDisplay {
    changes: HashMap<String, RankChange>,
    computed_at: DateTime<Utc>,
}

impl RankChangeDisplay {
    pub fn new(changes: HashMap<String, RankChange>, computed_at: DateTime<Utc>) -> Self {
        RankChangeDisplay {
            changes,
            computed_at,
        }
    }

    /// True once the display window has elapsed (or the clock went
    /// backwards, in which case the stale snapshot is also discarded).
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age = now - self.computed_at;
        age < Duration::zero() || age >= Duration::milliseconds(RANK_CHANGE_DISPLAY_MS)
    }

    /// The changes to render at `now`: the full diff while the window is
    /// open, nothing afterwards.
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&HashMap<String, RankChange>> {
        if self.is_expired(now) {
            None
        } else {
            Some(&self.changes)
        }
    }
}
