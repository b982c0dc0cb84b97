//! The list-query pipeline and its surrounding types

pub mod config;
pub mod criteria;
pub mod pipeline;
pub mod state;

pub use config::{ListConfig, ToggleRule};
pub use criteria::{DateRange, FilterCriteria, Page, SortDirection, SortSpec};
pub use pipeline::{Paged, derive_counts, filter, move_item, paginate, sort};
pub use state::{ListQuery, ListView};
