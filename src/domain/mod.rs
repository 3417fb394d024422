pub mod listing;
pub mod reaction;

pub use listing::{Listing, Visibility};
pub use reaction::{Reaction, ReactionKind};
