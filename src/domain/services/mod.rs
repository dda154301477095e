//! Pure domain services.

pub mod dates;
pub mod listing;

pub use listing::{CATEGORY_ALL, Categorized, Dated, ListingView};
