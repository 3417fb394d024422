// src/filters/pipeline.rs

use crate::domain::{Listing, Visibility};
use crate::filters::spec::{FilterSpec, SortDirection, SortField};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Applies a [`FilterSpec`] to a listing collection: every clause must pass
/// (logical AND), then the survivors are sorted if the spec names a sort
/// field, otherwise they keep their input-relative order.
///
/// Total function: never panics for any well-formed spec. A degenerate
/// range (min above max) simply matches nothing.
pub fn apply_filters(listings: &[Listing], spec: &FilterSpec) -> Vec<Listing> {
    let mut matched: Vec<Listing> = listings
        .iter()
        .filter(|listing| passes(listing, spec))
        .cloned()
        .collect();

    if let Some(field) = spec.sort_field {
        // Stable sort keeps ties in filtered-relative order.
        matched.sort_by(|a, b| compare_on(field, spec.sort_direction, a, b));
    }
    matched
}

fn passes(listing: &Listing, spec: &FilterSpec) -> bool {
    spec.price.contains(listing.price)
        && spec.area.contains(listing.area)
        && set_allows(&spec.bedrooms, &listing.bedrooms)
        && set_allows(&spec.bathrooms, &listing.bathrooms)
        && set_allows(&spec.parking_spaces, &listing.parking_spaces)
        && set_allows(&spec.cities, &listing.city)
        && set_allows(&spec.neighborhoods, &listing.neighborhood)
        && in_accepted_group(listing, &spec.group_ids)
        && visibility_allows(listing, &spec.visibility)
}

/// Empty accepted-set means the clause is unconstrained.
fn set_allows<T: Ord>(accepted: &BTreeSet<T>, value: &T) -> bool {
    accepted.is_empty() || accepted.contains(value)
}

/// A listing passes if it belongs to at least one accepted group.
fn in_accepted_group(listing: &Listing, accepted: &BTreeSet<String>) -> bool {
    accepted.is_empty() || listing.group_ids.iter().any(|g| accepted.contains(g))
}

/// Accepting both variants converges to "show all", same as the empty set.
fn visibility_allows(listing: &Listing, accepted: &BTreeSet<Visibility>) -> bool {
    accepted.is_empty() || accepted.contains(&Visibility::of(listing))
}

fn compare_on(field: SortField, direction: SortDirection, a: &Listing, b: &Listing) -> Ordering {
    let ordering = match field {
        SortField::Price => a.price.cmp(&b.price),
        SortField::Area => a.area.cmp(&b.area),
        SortField::CondominiumFee => a.condominium_fee.cmp(&b.condominium_fee),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
