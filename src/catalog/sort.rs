use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering criterion for displayed results
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    #[serde(rename = "recientes")]
    MostRecent,
    #[serde(rename = "destacados")]
    FeaturedFirst,
    #[serde(rename = "precio-asc")]
    PriceAscending,
    #[serde(rename = "precio-desc")]
    PriceDescending,
    #[serde(rename = "area-desc")]
    AreaDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::MostRecent,
        SortKey::FeaturedFirst,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::AreaDescending,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortKey::MostRecent => "recientes",
            SortKey::FeaturedFirst => "destacados",
            SortKey::PriceAscending => "precio-asc",
            SortKey::PriceDescending => "precio-desc",
            SortKey::AreaDescending => "area-desc",
        }
    }

    /// Label shown in the sort dropdown
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::MostRecent => "Más recientes",
            SortKey::FeaturedFirst => "Destacados",
            SortKey::PriceAscending => "Menor precio",
            SortKey::PriceDescending => "Mayor precio",
            SortKey::AreaDescending => "Mayor área",
        }
    }

    /// Compare two properties under this key. Ties compare equal so a
    /// stable sort keeps their incoming order.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortKey::MostRecent => b.published_at.cmp(&a.published_at),
            SortKey::FeaturedFirst => b.is_featured.cmp(&a.is_featured),
            SortKey::PriceAscending => a.price.cmp(&b.price),
            SortKey::PriceDescending => b.price.cmp(&a.price),
            SortKey::AreaDescending => b.area.total_cmp(&a.area),
        }
    }

    /// Stable in-place sort
    pub fn sort(&self, properties: &mut [Property]) {
        properties.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raised when a sort id is not one of the known catalog orderings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::property;
    use chrono::{TimeZone, Utc};

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn ids_parse_back_to_keys() {
        for key in SortKey::ALL {
            assert_eq!(key.id().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(
            "precio".parse::<SortKey>(),
            Err(UnknownSortKey("precio".into()))
        );
    }

    #[test]
    fn most_recent_puts_newest_first() {
        let mut old = property("old");
        old.published_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut new = property("new");
        new.published_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut list = vec![old, new];
        SortKey::MostRecent.sort(&mut list);
        assert_eq!(ids(&list), ["new", "old"]);
    }

    #[test]
    fn featured_first_keeps_ties_in_input_order() {
        let a = property("a");
        let mut b = property("b");
        b.is_featured = true;
        let c = property("c");
        let mut d = property("d");
        d.is_featured = true;

        let mut list = vec![a, b, c, d];
        SortKey::FeaturedFirst.sort(&mut list);
        assert_eq!(ids(&list), ["b", "d", "a", "c"]);
    }

    #[test]
    fn price_orders_both_ways() {
        let mut cheap = property("cheap");
        cheap.price = 1;
        let mut dear = property("dear");
        dear.price = 2;

        let mut list = vec![dear.clone(), cheap.clone()];
        SortKey::PriceAscending.sort(&mut list);
        assert_eq!(ids(&list), ["cheap", "dear"]);

        SortKey::PriceDescending.sort(&mut list);
        assert_eq!(ids(&list), ["dear", "cheap"]);
    }
}
