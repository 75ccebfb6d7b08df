use super::types::{validate_name, SavedSearch, SavedSearchError};
use crate::catalog::FilterSet;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// In-memory collection of a user's saved searches, kept in creation order.
///
/// Operations on an unknown id return `None` instead of failing; persisting
/// the collection is left to whoever owns the store. It persists as a plain
/// list, and reloading a list re-checks names and id uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SavedSearch>", into = "Vec<SavedSearch>")]
pub struct SavedSearchStore {
    searches: Vec<SavedSearch>,
}

impl TryFrom<Vec<SavedSearch>> for SavedSearchStore {
    type Error = SavedSearchError;

    fn try_from(searches: Vec<SavedSearch>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(searches.len());
        let mut checked = Vec::with_capacity(searches.len());

        for mut search in searches {
            if !seen.insert(search.id.clone()) {
                return Err(SavedSearchError::DuplicateId(search.id));
            }
            search.name = validate_name(&search.name)?;
            checked.push(search);
        }

        Ok(Self { searches: checked })
    }
}

impl From<SavedSearchStore> for Vec<SavedSearch> {
    fn from(store: SavedSearchStore) -> Self {
        store.searches
    }
}

impl SavedSearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `filters` under `name`.
    ///
    /// The filter set is copied, so later edits to the live filters leave
    /// the stored search alone.
    pub fn create(
        &mut self,
        name: &str,
        filters: &FilterSet,
        alert_active: bool,
    ) -> Result<SavedSearch, SavedSearchError> {
        let search = SavedSearch {
            id: Uuid::new_v4().to_string(),
            name: validate_name(name)?,
            created_at: Utc::now(),
            filters: filters.clone(),
            alert_active,
        };

        debug!("Saved search {} ({})", search.id, search.name);
        self.searches.push(search.clone());
        Ok(search)
    }

    /// Delete a search, handing back what was removed
    pub fn remove(&mut self, id: &str) -> Option<SavedSearch> {
        let index = self.searches.iter().position(|s| s.id == id)?;
        Some(self.searches.remove(index))
    }

    /// Flip the alert flag and return its new value
    pub fn toggle_alert(&mut self, id: &str) -> Option<bool> {
        let search = self.searches.iter_mut().find(|s| s.id == id)?;
        search.alert_active = !search.alert_active;
        Some(search.alert_active)
    }

    /// Copy of the stored filters, ready to become the active filter set
    pub fn load(&self, id: &str) -> Option<FilterSet> {
        self.get(id).map(|search| search.filters.clone())
    }

    pub fn get(&self, id: &str) -> Option<&SavedSearch> {
        self.searches.iter().find(|s| s.id == id)
    }

    pub fn list(&self) -> &[SavedSearch] {
        &self.searches
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }
}
