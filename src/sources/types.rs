use crate::models::{Property, Zone};
use serde::{Deserialize, Serialize};

/// Properties plus the zones they can be filtered by
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Catalog {
    /// Display name for a zone id, if the zone is known
    pub fn zone_name(&self, id: &str) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.id == id)
            .map(|zone| zone.name.as_str())
    }

    /// Parse a catalog document, filling in zones from the properties when
    /// the document does not list them
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(raw)?;
        if catalog.zones.is_empty() {
            for property in &catalog.properties {
                if !catalog.zones.iter().any(|zone| zone.id == property.zone.id) {
                    catalog.zones.push(property.zone.clone());
                }
            }
        }
        Ok(catalog)
    }
}
