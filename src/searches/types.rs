use crate::catalog::FilterSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest name a saved search may carry, in characters
pub const MAX_NAME_LEN: usize = 50;

/// Named snapshot of a filter set, with its alert preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub filters: FilterSet,
    pub alert_active: bool,
}

impl SavedSearch {
    /// Filter groups captured by this search, for the "N filtros" badge
    pub fn filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SavedSearchError {
    #[error("saved search name is empty")]
    EmptyName,

    #[error("saved search name is {len} characters, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("saved search id {0} appears more than once")]
    DuplicateId(String),
}

/// Trim `raw` and check it fits the name limit
pub fn validate_name(raw: &str) -> Result<String, SavedSearchError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SavedSearchError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(SavedSearchError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}
