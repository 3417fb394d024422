pub mod rank;
pub mod score;

pub use rank::{diff_rankings, RankChange, RankChangeDisplay, RankDirection};
pub use score::{order_listings, rank_cmp, score_all, score_of, sort_by_score, ApartmentScore};
