//! Decision-engine core for the group apartment-hunting app.
//!
//! Three pure components, consumed by the data-fetching and presentation
//! layers that live outside this crate:
//!
//! - [`scoring::score`]: turn per-member reactions into listing scores and
//!   rank them (total points, then fewest rejections, then most engagement).
//! - [`scoring::rank`]: diff two successive rankings into transient
//!   up/down badges for the UI.
//! - [`filters`]: apply a declarative [`filters::FilterSpec`] over a listing
//!   collection and sort the survivors.
//!
//! Everything here is synchronous and side-effect free: callers pass in the
//! current snapshot (reactions, orderings, listings) and get a new value
//! back. Persistence, fetching, and timers belong to the callers.

pub mod domain;
pub mod errors;
pub mod filters;
pub mod scoring;

#[cfg(test)]
mod tests;
