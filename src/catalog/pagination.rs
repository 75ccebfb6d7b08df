use super::engine::CatalogResults;
use crate::models::Property;
use serde::{Deserialize, Serialize};

/// One page of results plus the numbers the pager needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub properties: Vec<Property>,
    /// 1-based
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Entry of the pager strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Slice `results` down to page `page`. Out-of-range pages are clamped to
/// the nearest valid one; a zero page size is treated as one.
pub fn paginate(results: &CatalogResults, page: usize, per_page: usize) -> Page {
    let per_page = per_page.max(1);
    let total = results.properties.len();
    let total_pages = total.div_ceil(per_page);
    let current_page = page.clamp(1, total_pages.max(1));

    let start = (current_page - 1) * per_page;
    let properties = results
        .properties
        .iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    Page {
        properties,
        current_page,
        per_page,
        total,
        total_pages,
    }
}

/// Pager strip: first page, current page with its neighbours, last page,
/// and an ellipsis wherever pages are skipped. Empty for a single page.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let mut items = vec![PageItem::Page(1)];

    let range_start = current.saturating_sub(1).max(2);
    let range_end = (current + 1).min(total_pages - 1);

    if range_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((range_start..=range_end).map(PageItem::Page));
    if range_end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.current_page, self.total_pages)
    }
}
