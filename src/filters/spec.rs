// src/filters/spec.rs

use crate::domain::Visibility;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Default price bounds for a cleared filter, in whole currency units.
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (0, 2_000_000);
/// Default area bounds for a cleared filter, in square meters.
pub const DEFAULT_AREA_RANGE: (i64, i64) = (0, 500);

/// The complete filter/sort criteria for one listing grid.
///
/// This is a fully-replaceable value object: the UI supplies the whole spec
/// on every change, there is no partial-update surface. "Unconstrained" is
/// spelled with a sentinel rather than `Option`s — an empty set passes
/// every listing, and the default ranges span every plausible value — so
/// the pipeline stays free of null checks.
///
/// The serde boundary matches what the state holder sends: unknown extra
/// fields are ignored, missing fields fall back to their
/// [`default_filter_spec`] values, and an unrecognized sort field name
/// quietly becomes "no sort requested".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub price: RangeFilter,
    pub area: RangeFilter,

    pub bedrooms: BTreeSet<i64>,
    pub bathrooms: BTreeSet<i64>,
    pub parking_spaces: BTreeSet<i64>,

    pub cities: BTreeSet<String>,
    pub neighborhoods: BTreeSet<String>,
    pub group_ids: BTreeSet<String>,

    /// Accepting both variants (or neither) shows every listing.
    pub visibility: BTreeSet<Visibility>,

    #[serde(deserialize_with = "lenient_sort_field")]
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
}

impl Default for FilterSpec {
    fn default() -> Self {
        default_filter_spec()
    }
}

/// The canonical "no constraints" spec used to reset the filter UI: full
/// ranges, empty sets, newest listings first.
pub fn default_filter_spec() -> FilterSpec {
    FilterSpec {
        price: RangeFilter::new(DEFAULT_PRICE_RANGE.0, DEFAULT_PRICE_RANGE.1),
        area: RangeFilter::new(DEFAULT_AREA_RANGE.0, DEFAULT_AREA_RANGE.1),
        bedrooms: BTreeSet::new(),
        bathrooms: BTreeSet::new(),
        parking_spaces: BTreeSet::new(),
        cities: BTreeSet::new(),
        neighborhoods: BTreeSet::new(),
        group_ids: BTreeSet::new(),
        visibility: BTreeSet::new(),
        sort_field: Some(SortField::CreatedAt),
        sort_direction: SortDirection::Desc,
    }
}

/// An inclusive numeric range clause.
///
/// A range with `min > max` matches nothing. The filter sliders in the UI
/// prevent that ordering, but it can arrive transiently and must not be an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: i64,
    pub max: i64,
}

impl RangeFilter {
    pub fn new(min: i64, max: i64) -> Self {
        RangeFilter { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    Area,
    CondominiumFee,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortField::Price),
            "area" => Ok(SortField::Area),
            "condominiumFee" => Ok(SortField::CondominiumFee),
            "createdAt" => Ok(SortField::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

/// Maps an unrecognized sort field name to `None` instead of failing, so a
/// stale or misspelled field in stored UI state degrades to "no sort".
fn lenient_sort_field<'de, D>(deserializer: D) -> Result<Option<SortField>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
