// src/domain/listing.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An apartment listing as handed to the engine by the data layer.
///
/// Read-only to this crate: the persistence layer owns creation and
/// mutation, the engine only filters, sorts, and scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,

    // Numeric attributes
    pub price: i64,
    pub area: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub parking_spaces: i64,
    pub condominium_fee: i64,

    // Categorical attributes
    pub city: String,
    pub neighborhood: String,
    pub is_public: bool,

    pub created_at: NaiveDateTime,

    /// Groups this listing has been shared into (one-to-many).
    #[serde(default)]
    pub group_ids: Vec<String>,
}

/// Listing visibility as selectable in the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// The variant a listing's `is_public` flag maps to.
    pub fn of(listing: &Listing) -> Visibility {
        if listing.is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}
