// src/domain/reaction.rs

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One member's sentiment vote on one listing within one group.
///
/// The data layer guarantees at most one reaction per
/// (listing, group, member) triple — a later vote replaces the earlier one.
/// The engine trusts that invariant and does not deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub listing_id: String,
    pub group_id: String,
    pub member_id: String,
    pub kind: ReactionKind,
}

/// The closed set of reaction kinds, in descending point order.
///
/// Any string outside this set is invalid input and is rejected at the
/// parsing boundary; silently accepting unknown kinds would corrupt the
/// ranking undetectably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Love,
    Like,
    Unsure,
    Dislike,
    Hate,
}

impl ReactionKind {
    /// Fixed point value contributed to a listing's total score.
    pub fn points(self) -> i64 {
        match self {
            ReactionKind::Love => 2,
            ReactionKind::Like => 1,
            ReactionKind::Unsure => 0,
            ReactionKind::Dislike => -1,
            ReactionKind::Hate => -2,
        }
    }

    /// Whether this kind counts as a rejection for tie-breaking.
    pub fn is_negative(self) -> bool {
        matches!(self, ReactionKind::Dislike | ReactionKind::Hate)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Love => "love",
            ReactionKind::Like => "like",
            ReactionKind::Unsure => "unsure",
            ReactionKind::Dislike => "dislike",
            ReactionKind::Hate => "hate",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "love" => Ok(ReactionKind::Love),
            "like" => Ok(ReactionKind::Like),
            "unsure" => Ok(ReactionKind::Unsure),
            "dislike" => Ok(ReactionKind::Dislike),
            "hate" => Ok(ReactionKind::Hate),
            other => Err(EngineError::InvalidReactionKind(other.to_string())),
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values_match_the_fixed_table() {
        assert_eq!(ReactionKind::Love.points(), 2);
        assert_eq!(ReactionKind::Like.points(), 1);
        assert_eq!(ReactionKind::Unsure.points(), 0);
        assert_eq!(ReactionKind::Dislike.points(), -1);
        assert_eq!(ReactionKind::Hate.points(), -2);
    }

    #[test]
    fn test_only_dislike_and_hate_are_negative() {
        assert!(ReactionKind::Dislike.is_negative());
        assert!(ReactionKind::Hate.is_negative());
        assert!(!ReactionKind::Love.is_negative());
        assert!(!ReactionKind::Like.is_negative());
        assert!(!ReactionKind::Unsure.is_negative());
    }

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in [
            ReactionKind::Love,
            ReactionKind::Like,
            ReactionKind::Unsure,
            ReactionKind::Dislike,
            ReactionKind::Hate,
        ] {
            assert_eq!(kind.as_str().parse::<ReactionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_fails_fast() {
        let err = "meh".parse::<ReactionKind>().unwrap_err();
        assert_eq!(err, EngineError::InvalidReactionKind("meh".to_string()));
    }

    #[test]
    fn test_serde_rejects_unknown_kind() {
        let parsed: Result<ReactionKind, _> = serde_json::from_str("\"shrug\"");
        assert!(parsed.is_err());
    }
}
