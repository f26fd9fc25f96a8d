//! Spot model for a single point of interest

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value the accessibility rating scale allows
pub const MAX_RATING: f64 = 5.0;

/// Stable identifier of a spot within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u32);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A tourist location with its accessibility attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub description: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    pub wheelchair_accessible: bool,
    pub accessible_restroom: bool,
    /// Rating on a 0 to 5 scale
    pub accessibility_rating: f64,
    pub sensory_aids: bool,
    pub parking_info: String,
}

impl Spot {
    /// Both wheelchair access and an accessible restroom are available
    #[must_use]
    pub fn is_accessible_friendly(&self) -> bool {
        self.wheelchair_accessible && self.accessible_restroom
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.lat,
            longitude: self.lng,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }

    /// Rating line shown in both sidebars and the popup
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("Accessibility Rating: {} / 5", self.accessibility_rating)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Harbour Walk",
            "description": "Flat boardwalk along the water",
            "lat": -33.8568,
            "lng": 151.2153,
            "wheelchairAccessible": true,
            "accessibleRestroom": false,
            "accessibilityRating": 4.5,
            "sensoryAids": true,
            "parkingInfo": "Accessible bays on Macquarie St"
        }"#;
        let spot: Spot = serde_json::from_str(json).unwrap();
        assert_eq!(spot.id, SpotId(7));
        assert!(spot.wheelchair_accessible);
        assert!(!spot.accessible_restroom);
        assert!(!spot.is_accessible_friendly());
        assert_eq!(spot.accessibility_rating, 4.5);
        assert_eq!(spot.parking_info, "Accessible bays on Macquarie St");
    }

    #[test]
    fn test_rating_label() {
        let spot = fixtures::spot(1, 3.5, true, true);
        assert_eq!(spot.rating_label(), "Accessibility Rating: 3.5 / 5");

        let spot = fixtures::spot(2, 4.0, true, true);
        assert_eq!(spot.rating_label(), "Accessibility Rating: 4 / 5");
    }

    #[test]
    fn test_format_coordinates() {
        let mut spot = fixtures::spot(1, 3.0, true, true);
        spot.lat = -33.856_784;
        spot.lng = 151.215_297;
        assert_eq!(spot.format_coordinates(), "-33.8568, 151.2153");
    }
}
