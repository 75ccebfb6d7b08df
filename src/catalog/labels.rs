//! Display strings for prices, filter chips and saved searches, formatted
//! for the es-CO locale.

use super::filters::{populated, populated_str, FilterGroup, FilterSet};
use crate::models::{Modality, Zone};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Group digits by thousands with `.` as es-CO does
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

fn rent_suffix(modality: Option<Modality>) -> &'static str {
    match modality {
        Some(Modality::Rent) => "/mes",
        _ => "",
    }
}

/// Trim a trailing `.0` so whole numbers print without decimals
fn trim_number(value: f64) -> String {
    let formatted = format!("{value:.1}");
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// `$1.250.000`, with `/mes` appended for rentals
pub fn format_price(price: i64, modality: Modality) -> String {
    format!("${}{}", group_thousands(price), rent_suffix(Some(modality)))
}

/// Short price for map pins and filter chips: `$1.5 mil M` from a billion
/// up, `$350 M` from a million up, the full amount below that. Without a
/// modality no rent suffix is added.
pub fn format_price_compact(price: i64, modality: Option<Modality>) -> String {
    if price >= 1_000_000_000 {
        let billions = (price as f64 / 1e8).round() / 10.0;
        return format!("${} mil M", trim_number(billions));
    }
    if price >= 1_000_000 {
        let millions = (price as f64 / 1e6).round();
        return format!("${millions:.0} M{}", rent_suffix(modality));
    }
    format!("${}{}", group_thousands(price), rent_suffix(modality))
}

/// `15 ene 2024`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        timestamp.day(),
        MONTHS[timestamp.month0() as usize],
        timestamp.year()
    )
}

/// Removable label describing one populated filter group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub group: FilterGroup,
    pub label: String,
}

fn bound_label<T>(bound: Option<T>, fallback: &str, fmt: impl Fn(T) -> String) -> String {
    bound.map(fmt).unwrap_or_else(|| fallback.to_string())
}

/// Chips for the active filters, in filter bar order. Zone ids are shown by
/// zone name; ids missing from `zones` are left out of the label, unless
/// none of them resolve, in which case the raw ids are shown.
pub fn filter_chips(filters: &FilterSet, zones: &[Zone]) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    let mut push = |group, label: String| chips.push(FilterChip { group, label });

    if let Some(zone_ids) = populated(&filters.zone_ids) {
        let mut names: Vec<&str> = zone_ids
            .iter()
            .filter_map(|id| zones.iter().find(|zone| zone.id == *id))
            .map(|zone| zone.name.as_str())
            .collect();
        if names.is_empty() {
            names = zone_ids.iter().map(String::as_str).collect();
        }
        push(FilterGroup::Zones, format!("Zonas: {}", names.join(", ")));
    }

    if let Some(postal_code) = populated_str(&filters.postal_code) {
        push(FilterGroup::PostalCode, format!("CP {postal_code}"));
    }

    if let Some(modality) = filters.modality {
        push(FilterGroup::Modality, modality.label().to_string());
    }

    if let Some(types) = populated(&filters.types) {
        let labels: Vec<&str> = types.iter().map(|kind| kind.label()).collect();
        push(FilterGroup::Types, labels.join(", "));
    }

    if filters.is_active(FilterGroup::PriceRange) {
        let min = bound_label(filters.price_min, "Min", |v| format_price_compact(v, None));
        let max = bound_label(filters.price_max, "Max", |v| format_price_compact(v, None));
        push(FilterGroup::PriceRange, format!("Precio: {min} - {max}"));
    }

    if let Some(min) = filters.bedrooms_min {
        push(FilterGroup::BedroomsMin, format!("{min}+ Hab."));
    }

    if let Some(min) = filters.bathrooms_min {
        push(FilterGroup::BathroomsMin, format!("{min}+ Baños"));
    }

    if let Some(parking) = filters.parking {
        let label = if parking {
            "Con parqueadero"
        } else {
            "Sin parqueadero"
        };
        push(FilterGroup::Parking, label.to_string());
    }

    if filters.is_active(FilterGroup::AreaRange) {
        let min = bound_label(filters.area_min, "Min", trim_number);
        let max = bound_label(filters.area_max, "Max", trim_number);
        push(FilterGroup::AreaRange, format!("{min} - {max} m²"));
    }

    if let Some(features) = populated(&filters.features) {
        push(FilterGroup::Features, features.join(", "));
    }

    chips
}

/// One-line description of a filter set for the save-search dialog
pub fn filter_summary(filters: &FilterSet) -> String {
    let mut parts = Vec::new();

    if let Some(modality) = filters.modality {
        parts.push(modality.label().to_string());
    }
    if let Some(types) = populated(&filters.types) {
        let ids: Vec<&str> = types.iter().map(|kind| kind.id()).collect();
        parts.push(ids.join(", "));
    }
    if let Some(zone_ids) = populated(&filters.zone_ids) {
        let plural = if zone_ids.len() > 1 { "s" } else { "" };
        parts.push(format!("{} zona{plural}", zone_ids.len()));
    }
    if filters.is_active(FilterGroup::PriceRange) {
        parts.push("rango de precio".to_string());
    }
    if let Some(min) = filters.bedrooms_min {
        parts.push(format!("{min}+ hab."));
    }
    if let Some(min) = filters.bathrooms_min {
        parts.push(format!("{min}+ baños"));
    }

    if parts.is_empty() {
        "Sin filtros específicos".to_string()
    } else {
        parts.join(" • ")
    }
}

/// Name proposed when the user saves the current filters
pub fn suggested_search_name(filters: &FilterSet) -> String {
    let mut parts = Vec::new();

    match populated(&filters.types) {
        Some([kind]) => parts.push(kind.plural_label().to_string()),
        Some(_) => parts.push("Inmuebles".to_string()),
        None => {}
    }

    if let Some(modality) = filters.modality {
        parts.push(format!("en {}", modality.id()));
    }

    match populated(&filters.zone_ids) {
        Some([_]) => parts.push("en zona seleccionada".to_string()),
        Some(zone_ids) => parts.push(format!("en {} zonas", zone_ids.len())),
        None => {}
    }

    if parts.is_empty() {
        "Mi búsqueda".to_string()
    } else {
        parts.join(" ")
    }
}
