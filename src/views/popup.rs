//! Point-of-interest detail popup, taken straight from the spot record

use crate::models::Spot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotPopup {
    pub name: String,
    pub description: String,
    pub wheelchair: &'static str,
    pub restroom: &'static str,
    pub rating: String,
    pub sensory_aids: &'static str,
    pub parking: String,
}

impl From<&Spot> for SpotPopup {
    fn from(spot: &Spot) -> Self {
        Self {
            name: spot.name.clone(),
            description: spot.description.clone(),
            wheelchair: if spot.wheelchair_accessible {
                "Wheelchair Accessible"
            } else {
                "Not Wheelchair Accessible"
            },
            restroom: if spot.accessible_restroom {
                "Accessible Restroom Available"
            } else {
                "No Accessible Restroom"
            },
            rating: spot.rating_label(),
            sensory_aids: if spot.sensory_aids {
                "Sensory Aids Available"
            } else {
                "No Sensory Aids"
            },
            parking: format!("Parking: {}", spot.parking_info),
        }
    }
}

impl SpotPopup {
    /// Body lines below the title, in display order
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.wheelchair,
            self.restroom,
            self.rating.as_str(),
            self.sensory_aids,
            self.parking.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::spot::fixtures::spot;

    #[test]
    fn test_popup_attribute_lines() {
        let mut s = spot(4, 4.9, true, false);
        s.sensory_aids = true;
        let popup = SpotPopup::from(&s);

        assert_eq!(popup.name, "Spot 4");
        assert_eq!(
            popup.lines(),
            vec![
                "Description of spot 4",
                "Wheelchair Accessible",
                "No Accessible Restroom",
                "Accessibility Rating: 4.9 / 5",
                "Sensory Aids Available",
                "Parking: Street parking",
            ]
        );
    }

    #[test]
    fn test_popup_negative_attributes() {
        let popup = SpotPopup::from(&spot(1, 1.0, false, true));
        assert_eq!(popup.wheelchair, "Not Wheelchair Accessible");
        assert_eq!(popup.restroom, "Accessible Restroom Available");
        assert_eq!(popup.sensory_aids, "No Sensory Aids");
    }
}
