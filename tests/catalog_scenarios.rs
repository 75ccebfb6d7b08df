use chrono::{DateTime, TimeZone, Utc};
use housing_catalog::catalog::{active_filter_count, apply, paginate, FilterSet, SortKey};
use housing_catalog::models::{Coordinates, Currency, Modality, Property, PropertyType, Zone};
use housing_catalog::sources::{CatalogSource, JsonFileSource};
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn zone(id: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: id.to_uppercase(),
        locality: "Usaquén".to_string(),
        postal_code: "110111".to_string(),
        stratum: "4".to_string(),
        description: None,
    }
}

fn listing(
    id: &str,
    price: i64,
    area: f64,
    kind: PropertyType,
    featured: bool,
    published: DateTime<Utc>,
) -> Property {
    Property {
        id: id.to_string(),
        title: id.to_string(),
        property_type: kind,
        modality: Modality::Sale,
        price,
        currency: Currency::Cop,
        area,
        bedrooms: Some(2),
        bathrooms: 1,
        parking: false,
        floor: None,
        zone: zone("a"),
        address: String::new(),
        postal_code: "110111".to_string(),
        coordinates: Coordinates {
            lat: 4.7,
            lng: -74.03,
        },
        short_description: String::new(),
        full_description: String::new(),
        main_image: String::new(),
        images: Vec::new(),
        is_new: false,
        is_featured: featured,
        published_at: published,
        features: Vec::new(),
    }
}

fn pair() -> Vec<Property> {
    vec![
        listing(
            "p1",
            100_000_000,
            50.0,
            PropertyType::Apartment,
            false,
            date(2024, 1, 1),
        ),
        listing(
            "p2",
            300_000_000,
            80.0,
            PropertyType::House,
            true,
            date(2024, 6, 1),
        ),
    ]
}

fn ids(properties: &[Property]) -> Vec<&str> {
    properties.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn type_filter_with_price_sort() {
    let filters = FilterSet {
        types: Some(vec![PropertyType::Apartment]),
        ..Default::default()
    };
    let results = apply(&pair(), &filters, SortKey::PriceAscending);
    assert_eq!(ids(&results.properties), ["p1"]);
    assert_eq!(results.total, 1);
}

#[test]
fn empty_filters_sorted_by_area() {
    let results = apply(&pair(), &FilterSet::default(), SortKey::AreaDescending);
    assert_eq!(ids(&results.properties), ["p2", "p1"]);
}

#[test]
fn null_bedrooms_excluded_by_minimum() {
    let mut studio = pair().remove(0);
    studio.bedrooms = None;

    let filters = FilterSet {
        bedrooms_min: Some(2),
        types: Some(vec![PropertyType::Apartment]),
        ..Default::default()
    };
    assert!(apply(&[studio], &filters, SortKey::MostRecent).is_empty());
}

#[test]
fn and_across_fields() {
    let house = listing(
        "h",
        500,
        70.0,
        PropertyType::House,
        false,
        date(2024, 1, 1),
    );
    let input = [house];

    let matching = FilterSet {
        zone_ids: Some(vec!["a".to_string()]),
        types: Some(vec![PropertyType::House]),
        ..Default::default()
    };
    assert_eq!(apply(&input, &matching, None).total, 1);

    let too_cheap = FilterSet {
        price_min: Some(600),
        ..matching
    };
    assert_eq!(apply(&input, &too_cheap, None).total, 0);
}

#[test]
fn featured_first_is_stable_without_featured_listings() {
    let first = listing("p1", 1, 1.0, PropertyType::House, false, date(2024, 1, 1));
    let second = listing("p2", 1, 1.0, PropertyType::House, false, date(2024, 2, 1));

    let results = apply(&[first, second], &FilterSet::default(), SortKey::FeaturedFirst);
    assert_eq!(ids(&results.properties), ["p1", "p2"]);
}

#[test]
fn results_are_a_subset_and_repeatable() {
    let input = pair();
    let filters = FilterSet {
        price_max: Some(200_000_000),
        ..Default::default()
    };

    let once = apply(&input, &filters, SortKey::MostRecent);
    let twice = apply(&input, &filters, SortKey::MostRecent);
    assert_eq!(once, twice);
    assert!(once.total <= input.len());
    assert!(once.properties.iter().all(|p| input.contains(p)));

    let reapplied = apply(&once.properties, &FilterSet::default(), SortKey::MostRecent);
    assert_eq!(reapplied, once);
}

#[test]
fn range_counts_once() {
    let filters = FilterSet {
        price_min: Some(100),
        price_max: Some(200),
        bedrooms_min: Some(2),
        ..Default::default()
    };
    assert_eq!(active_filter_count(&filters), 2);
}

#[tokio::test]
async fn bundled_catalog_loads_and_filters() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.json");
    let catalog = JsonFileSource::new(path).load().await.unwrap();
    assert_eq!(catalog.properties.len(), 6);
    assert_eq!(catalog.zone_name("cedritos"), Some("Cedritos"));

    let rentals_with_balcony = FilterSet {
        modality: Some(Modality::Rent),
        features: Some(vec!["balcón".to_string()]),
        ..Default::default()
    };
    let results = apply(&catalog.properties, &rentals_with_balcony, SortKey::PriceAscending);
    assert_eq!(ids(&results.properties), ["prop-006", "prop-002"]);

    let newest = apply(&catalog.properties, &FilterSet::default(), SortKey::MostRecent);
    assert_eq!(newest.properties[0].id, "prop-004");

    let page = paginate(&newest, 2, 4);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.properties.len(), 2);
}
