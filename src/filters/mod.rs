pub mod pipeline;
pub mod spec;

pub use pipeline::apply_filters;
pub use spec::{default_filter_spec, FilterSpec, RangeFilter, SortDirection, SortField};
