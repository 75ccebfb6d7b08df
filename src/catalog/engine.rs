use super::filters::FilterSet;
use super::sort::SortKey;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered subset of the catalog to display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResults {
    pub properties: Vec<Property>,
    pub total: usize,
}

impl CatalogResults {
    /// Zero matches, as opposed to results not computed yet
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// "1 propiedad encontrada" / "N propiedades encontradas"
    pub fn count_label(&self) -> String {
        if self.total == 1 {
            "1 propiedad encontrada".to_string()
        } else {
            format!("{} propiedades encontradas", self.total)
        }
    }
}

/// Narrow `properties` by `filters` and order the survivors.
///
/// The input is never touched; matching records are cloned into a fresh
/// vector. Passing `None` as the sort keeps catalog order.
pub fn apply(
    properties: &[Property],
    filters: &FilterSet,
    sort: impl Into<Option<SortKey>>,
) -> CatalogResults {
    let mut matched: Vec<Property> = properties
        .iter()
        .filter(|property| filters.matches(property))
        .cloned()
        .collect();

    let sort = sort.into();
    if let Some(key) = sort {
        key.sort(&mut matched);
    }

    debug!(
        "Filtered {} of {} properties ({} active groups, sort {:?})",
        matched.len(),
        properties.len(),
        filters.active_filter_count(),
        sort
    );

    CatalogResults {
        total: matched.len(),
        properties: matched,
    }
}
