// src/scoring/score.rs

use crate::domain::Reaction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Score derived from one listing's reactions. Recomputed from scratch on
/// every pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentScore {
    pub listing_id: String,
    pub total_score: i64,
    pub negative_count: usize,
    pub reaction_count: usize,
}

/// Scores the reactions for a single listing.
///
/// The caller scopes the slice (one listing, and usually one group); this
/// function only aggregates. For an empty slice the returned `listing_id`
/// is empty — batch callers go through [`score_all`], which keys scores by
/// listing id and so produces well-formed zero scores for listings nobody
/// has reacted to yet.
pub fn score_of(reactions: &[Reaction]) -> ApartmentScore {
    let listing_id = reactions
        .first()
        .map(|r| r.listing_id.clone())
        .unwrap_or_default();

    ApartmentScore {
        listing_id,
        total_score: reactions.iter().map(|r| r.kind.points()).sum(),
        negative_count: reactions.iter().filter(|r| r.kind.is_negative()).count(),
        reaction_count: reactions.len(),
    }
}

/// Scores every listing in an already-assembled reactions map.
///
/// The map key always wins as the `listing_id`, so a listing with zero
/// reactions still gets a score entry keyed by its id. Output order follows
/// the map's iteration order; callers sort with [`sort_by_score`].
pub fn score_all(reactions_by_listing: &HashMap<String, Vec<Reaction>>) -> Vec<ApartmentScore> {
    reactions_by_listing
        .iter()
        .map(|(listing_id, reactions)| ApartmentScore {
            listing_id: listing_id.clone(),
            ..score_of(reactions)
        })
        .collect()
}

/// Ranking comparator, strict priority order:
/// 1. higher total score first;
/// 2. on tie, fewer rejections first;
/// 3. on further tie, more total engagement first.
pub fn rank_cmp(a: &ApartmentScore, b: &ApartmentScore) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| a.negative_count.cmp(&b.negative_count))
        .then_with(|| b.reaction_count.cmp(&a.reaction_count))
}

/// Returns a fresh ranking of `scores`, best first.
///
/// The sort is stable, so scores tied on all three criteria keep their
/// input-relative order. The caller's slice is left untouched.
pub fn sort_by_score(scores: &[ApartmentScore]) -> Vec<ApartmentScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(rank_cmp);
    sorted
}

/// Orders a display set of listing ids by their scores.
///
/// Ids with a score entry come first, ranked by [`rank_cmp`]; ids with no
/// entry at all (no scoring pass has covered them yet) are demoted after
/// every scored id, keeping their original relative order so they are still
/// shown.
pub fn order_listings(ids: &[String], scores: &[ApartmentScore]) -> Vec<String> {
    let by_id: HashMap<&str, &ApartmentScore> = scores
        .iter()
        .map(|s| (s.listing_id.as_str(), s))
        .collect();

    let mut scored: Vec<&String> = Vec::new();
    let mut unscored: Vec<&String> = Vec::new();
    for id in ids {
        if by_id.contains_key(id.as_str()) {
            scored.push(id);
        } else {
            unscored.push(id);
        }
    }

    scored.sort_by(|a, b| rank_cmp(by_id[a.as_str()], by_id[b.as_str()]));
    scored.into_iter().chain(unscored).cloned().collect()
}
