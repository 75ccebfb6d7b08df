//! Placeholder map projection.
//!
//! There is no tile provider behind the catalog map; markers are laid out by
//! projecting coordinates linearly into the bounding box of the result set.

use crate::models::Property;
use serde::{Deserialize, Serialize};

const BOX_PADDING_RATIO: f64 = 0.2;
const MIN_PADDING_DEGREES: f64 = 0.01;
const MARGIN_PERCENT: f64 = 10.0;
const SPAN_PERCENT: f64 = 80.0;

/// Marker position as percentages of the map viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub property_id: String,
    /// Left offset, 10..=90
    pub x: f64,
    /// Top offset, 10..=90; north is up
    pub y: f64,
}

fn padding(span: f64) -> f64 {
    let padded = span * BOX_PADDING_RATIO;
    if padded == 0.0 {
        MIN_PADDING_DEGREES
    } else {
        padded
    }
}

/// Project every property onto the placeholder map
pub fn project_markers(properties: &[Property]) -> Vec<MapMarker> {
    if properties.is_empty() {
        return Vec::new();
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
    for property in properties {
        let c = property.coordinates;
        min_lat = min_lat.min(c.lat);
        max_lat = max_lat.max(c.lat);
        min_lng = min_lng.min(c.lng);
        max_lng = max_lng.max(c.lng);
    }

    let lat_pad = padding(max_lat - min_lat);
    let lng_pad = padding(max_lng - min_lng);
    let (west, east) = (min_lng - lng_pad, max_lng + lng_pad);
    let (south, north) = (min_lat - lat_pad, max_lat + lat_pad);

    properties
        .iter()
        .map(|property| {
            let c = property.coordinates;
            MapMarker {
                property_id: property.id.clone(),
                x: (c.lng - west) / (east - west) * SPAN_PERCENT + MARGIN_PERCENT,
                y: (north - c.lat) / (north - south) * SPAN_PERCENT + MARGIN_PERCENT,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::property;
    use crate::models::Coordinates;

    fn at(id: &str, lat: f64, lng: f64) -> Property {
        let mut p = property(id);
        p.coordinates = Coordinates { lat, lng };
        p
    }

    #[test]
    fn lone_marker_sits_in_the_middle() {
        let markers = project_markers(&[at("a", 4.65, -74.05)]);
        assert_eq!(markers.len(), 1);
        assert!((markers[0].x - 50.0).abs() < 1e-9);
        assert!((markers[0].y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let markers = project_markers(&[at("sw", 4.60, -74.10), at("ne", 4.70, -74.00)]);
        let (sw, ne) = (&markers[0], &markers[1]);
        assert!(ne.x > sw.x);
        assert!(ne.y < sw.y);
        for m in &markers {
            assert!((10.0..=90.0).contains(&m.x));
            assert!((10.0..=90.0).contains(&m.y));
        }
    }

    #[test]
    fn no_properties_no_markers() {
        assert!(project_markers(&[]).is_empty());
    }
}
