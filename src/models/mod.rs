use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of real estate being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    #[serde(rename = "apartamento")]
    Apartment,
    #[serde(rename = "apartaestudio")]
    StudioApartment,
    #[serde(rename = "casa")]
    House,
    #[serde(rename = "local")]
    CommercialUnit,
}

impl PropertyType {
    /// Catalog id used in filters and data files
    pub fn id(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartamento",
            PropertyType::StudioApartment => "apartaestudio",
            PropertyType::House => "casa",
            PropertyType::CommercialUnit => "local",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamento",
            PropertyType::StudioApartment => "Apartaestudio",
            PropertyType::House => "Casa",
            PropertyType::CommercialUnit => "Local",
        }
    }

    /// Plural label used when naming a search
    pub fn plural_label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamentos",
            PropertyType::StudioApartment => "Apartaestudios",
            PropertyType::House => "Casas",
            PropertyType::CommercialUnit => "Locales",
        }
    }
}

/// Whether a listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Modality {
    #[serde(rename = "venta")]
    Sale,
    #[serde(rename = "arriendo")]
    Rent,
}

impl Modality {
    pub fn id(&self) -> &'static str {
        match self {
            Modality::Sale => "venta",
            Modality::Rent => "arriendo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Modality::Sale => "Venta",
            Modality::Rent => "Arriendo",
        }
    }
}

/// Listing prices are always quoted in Colombian pesos
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    #[default]
    #[serde(rename = "COP")]
    Cop,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Neighborhood-level area that properties belong to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub locality: String,
    pub postal_code: String,
    pub stratum: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Core property listing as it appears in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub property_type: PropertyType,
    pub modality: Modality,
    pub price: i64,
    #[serde(default)]
    pub currency: Currency,
    /// Floor area in square meters
    pub area: f64,
    /// `None` for studios and commercial units
    pub bedrooms: Option<u32>,
    pub bathrooms: u32,
    pub parking: bool,
    pub floor: Option<i32>,
    pub zone: Zone,
    #[serde(default)]
    pub address: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(with = "publication_date")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Publication dates come either as RFC 3339 timestamps or as bare
/// `YYYY-MM-DD` dates, which are read as midnight UTC.
pub mod publication_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid publication date: {raw}")))
    }
}
