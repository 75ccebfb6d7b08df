//! Property catalog engine for a real-estate listings site: filtering,
//! sorting and paging of listings, plus the saved-search model.

pub mod catalog;
pub mod config;
pub mod models;
pub mod searches;
pub mod sources;

pub use catalog::{apply, CatalogResults, FilterSet, SortKey};
pub use models::{Modality, Property, PropertyType, Zone};
pub use searches::{SavedSearch, SavedSearchError, SavedSearchStore};
