pub mod store;
pub mod types;

pub use store::SavedSearchStore;
pub use types::{validate_name, SavedSearch, SavedSearchError, MAX_NAME_LEN};
