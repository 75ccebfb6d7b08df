use crate::models::{Coordinates, Currency, Modality, Property, PropertyType, Zone};
use chrono::{TimeZone, Utc};

/// A plain two-bedroom apartment for sale in Chapinero
pub(crate) fn property(id: &str) -> Property {
    Property {
        id: id.to_string(),
        title: format!("Apartamento {id}"),
        property_type: PropertyType::Apartment,
        modality: Modality::Sale,
        price: 350_000_000,
        currency: Currency::Cop,
        area: 65.0,
        bedrooms: Some(2),
        bathrooms: 2,
        parking: true,
        floor: Some(4),
        zone: Zone {
            id: "chapinero".to_string(),
            name: "Chapinero Alto".to_string(),
            locality: "Chapinero".to_string(),
            postal_code: "110231".to_string(),
            stratum: "5".to_string(),
            description: None,
        },
        address: "Calle 60 # 4-20".to_string(),
        postal_code: "110231".to_string(),
        coordinates: Coordinates {
            lat: 4.6486,
            lng: -74.0608,
        },
        short_description: String::new(),
        full_description: String::new(),
        main_image: String::new(),
        images: Vec::new(),
        is_new: false,
        is_featured: false,
        published_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        features: vec!["Balcón".to_string()],
    }
}
