use crate::domain::{Listing, Reaction, ReactionKind};
use chrono::NaiveDate;

/// Builds a listing with the given id, price and area; everything else gets
/// fixed, unremarkable values tests override as needed.
pub fn listing(id: &str, price: i64, area: i64) -> Listing {
    Listing {
        id: id.to_string(),
        price,
        area,
        bedrooms: 2,
        bathrooms: 1,
        parking_spaces: 1,
        condominium_fee: 350,
        city: "lisbon".to_string(),
        neighborhood: "alvalade".to_string(),
        is_public: true,
        created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        group_ids: vec!["g1".to_string()],
    }
}

/// One reaction per kind in `kinds`, each from a distinct member, all on
/// the same listing within the same group.
pub fn reactions_for(listing_id: &str, kinds: &[ReactionKind]) -> Vec<Reaction> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| Reaction {
            listing_id: listing_id.to_string(),
            group_id: "g1".to_string(),
            member_id: format!("member-{i}"),
            kind,
        })
        .collect()
}
