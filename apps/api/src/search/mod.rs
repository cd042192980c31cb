//! Listing search: composable predicates over in-memory listings.

pub mod filter;

pub use filter::{matches_text, ListingFilter};
