use crate::models::{Modality, Property, PropertyType};
use serde::{Deserialize, Serialize};

/// Active search constraints over the property catalog.
///
/// Every field is independently optional. A property matches when it
/// satisfies every populated field; list fields match when the property
/// hits any entry of the list. An empty list or empty postal code behaves
/// the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<PropertyType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<bool>,
    /// Each requested tag must appear, case-insensitively, inside some
    /// feature of the property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Logical group of a [`FilterSet`], the unit the filter badge counts and
/// the filter chips remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterGroup {
    Zones,
    PostalCode,
    Types,
    Modality,
    PriceRange,
    AreaRange,
    BedroomsMin,
    BathroomsMin,
    Parking,
    Features,
}

impl FilterGroup {
    pub const ALL: [FilterGroup; 10] = [
        FilterGroup::Zones,
        FilterGroup::PostalCode,
        FilterGroup::Types,
        FilterGroup::Modality,
        FilterGroup::PriceRange,
        FilterGroup::AreaRange,
        FilterGroup::BedroomsMin,
        FilterGroup::BathroomsMin,
        FilterGroup::Parking,
        FilterGroup::Features,
    ];
}

/// Returns the list only when it actually narrows the search
pub(crate) fn populated<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

pub(crate) fn populated_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl FilterSet {
    /// Check a single property against every populated constraint
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(zone_ids) = populated(&self.zone_ids) {
            if !zone_ids.iter().any(|id| *id == property.zone.id) {
                return false;
            }
        }

        if let Some(postal_code) = populated_str(&self.postal_code) {
            if property.postal_code != postal_code {
                return false;
            }
        }

        if let Some(types) = populated(&self.types) {
            if !types.contains(&property.property_type) {
                return false;
            }
        }

        if let Some(modality) = self.modality {
            if property.modality != modality {
                return false;
            }
        }

        // Bounds are applied literally, so min > max simply matches nothing
        if self.price_min.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| property.price > max) {
            return false;
        }
        if self.area_min.is_some_and(|min| property.area < min) {
            return false;
        }
        if self.area_max.is_some_and(|max| property.area > max) {
            return false;
        }

        if let Some(min) = self.bedrooms_min {
            match property.bedrooms {
                Some(bedrooms) if i64::from(bedrooms) >= min => {}
                _ => return false,
            }
        }

        if self
            .bathrooms_min
            .is_some_and(|min| i64::from(property.bathrooms) < min)
        {
            return false;
        }

        if self.parking.is_some_and(|parking| property.parking != parking) {
            return false;
        }

        if let Some(wanted) = populated(&self.features) {
            let owned: Vec<String> = property
                .features
                .iter()
                .map(|feature| feature.to_lowercase())
                .collect();
            let all_found = wanted.iter().all(|tag| {
                let tag = tag.to_lowercase();
                owned.iter().any(|feature| feature.contains(&tag))
            });
            if !all_found {
                return false;
            }
        }

        true
    }

    /// Whether `group` currently narrows the search. A range group is
    /// active when either bound is set.
    pub fn is_active(&self, group: FilterGroup) -> bool {
        match group {
            FilterGroup::Zones => populated(&self.zone_ids).is_some(),
            FilterGroup::PostalCode => populated_str(&self.postal_code).is_some(),
            FilterGroup::Types => populated(&self.types).is_some(),
            FilterGroup::Modality => self.modality.is_some(),
            FilterGroup::PriceRange => self.price_min.is_some() || self.price_max.is_some(),
            FilterGroup::AreaRange => self.area_min.is_some() || self.area_max.is_some(),
            FilterGroup::BedroomsMin => self.bedrooms_min.is_some(),
            FilterGroup::BathroomsMin => self.bathrooms_min.is_some(),
            FilterGroup::Parking => self.parking.is_some(),
            FilterGroup::Features => populated(&self.features).is_some(),
        }
    }

    /// Drop every field belonging to `group`
    pub fn clear(&mut self, group: FilterGroup) {
        match group {
            FilterGroup::Zones => self.zone_ids = None,
            FilterGroup::PostalCode => self.postal_code = None,
            FilterGroup::Types => self.types = None,
            FilterGroup::Modality => self.modality = None,
            FilterGroup::PriceRange => {
                self.price_min = None;
                self.price_max = None;
            }
            FilterGroup::AreaRange => {
                self.area_min = None;
                self.area_max = None;
            }
            FilterGroup::BedroomsMin => self.bedrooms_min = None,
            FilterGroup::BathroomsMin => self.bathrooms_min = None,
            FilterGroup::Parking => self.parking = None,
            FilterGroup::Features => self.features = None,
        }
    }

    /// Populated groups, in filter bar order
    pub fn active_groups(&self) -> impl Iterator<Item = FilterGroup> + '_ {
        FilterGroup::ALL
            .into_iter()
            .filter(move |group| self.is_active(*group))
    }

    /// Number of populated filter groups, as shown on the filter badge.
    ///
    /// Price and area ranges each count once no matter how many bounds are
    /// set, and a zone selection counts once regardless of its size.
    pub fn active_filter_count(&self) -> usize {
        self.active_groups().count()
    }

    /// True when no group narrows the catalog
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}

/// Free-function form of [`FilterSet::active_filter_count`]
pub fn active_filter_count(filters: &FilterSet) -> usize {
    filters.active_filter_count()
}
