// Ranking and presentation of search results.
// Sorts heterogeneous records by a chosen field and renders field projections.

pub mod compare;
pub mod format;

pub use compare::{DEFAULT_SORT_FIELD, SortSpec, compare, sort_records};
pub use format::{DEFAULT_FIELDS, Listing, NOT_AVAILABLE, render};
