//! Client-side filter and search pipeline for listing pages.
//!
//! # Modules
//!
//! - [`controller`]: Per-page state holding source records, filters and the filtered view
//! - [`filters`]: Facet selections and the filter set of one page
//! - [`facets`]: Distinct facet values derived from loaded records
//! - [`listable`]: Which attributes each record kind exposes to search and facets
//! - [`search`]: Case-insensitive substring matching and highlight ranges

pub mod controller;
pub mod facets;
pub mod filters;
pub mod listable;
pub mod search;

pub use controller::{ListingController, ListingHandle, LoadStatus};
pub use facets::distinct_facets;
pub use filters::{FacetFilter, ListingFilters, ALL};
pub use listable::Listable;
pub use search::{highlight_ranges, matches_any};
