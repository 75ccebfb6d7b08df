pub mod engine;
pub mod filters;
pub mod labels;
pub mod map;
pub mod pagination;
pub mod sort;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{apply, CatalogResults};
pub use filters::{active_filter_count, FilterGroup, FilterSet};
pub use map::{project_markers, MapMarker};
pub use pagination::{page_items, paginate, Page, PageItem};
pub use sort::{SortKey, UnknownSortKey};
