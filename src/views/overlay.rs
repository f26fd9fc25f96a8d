//! Finalization overlay content
//!
//! Itinerary generation is not implemented; the overlay shows placeholder copy
//! plus a straight-line summary of the selected stops.

use crate::models::{Spot, SpotId};
use crate::session::SpotSession;
use serde::Serialize;

pub const FINALIZATION_TITLE: &str = "Travel Plan Finalisation";
pub const FINALIZATION_BODY: &str = "This would go to a page that finalises and provides a curated plan along with pdf download option, offering discounts and optimised itineraries based on your trip duration.";

/// Straight-line hop between two consecutive stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanLeg {
    pub from: SpotId,
    pub to: SpotId,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizationView {
    pub title: &'static str,
    pub body: &'static str,
    pub stops: Vec<String>,
    pub legs: Vec<PlanLeg>,
    pub total_distance_km: f64,
}

/// Great-circle distance between two spots in kilometres
#[must_use]
pub fn distance_km(from: &Spot, to: &Spot) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: from.lat,
            longitude: from.lng,
        },
        haversine::Location {
            latitude: to.lat,
            longitude: to.lng,
        },
        haversine::Units::Kilometers,
    )
}

/// Overlay content while it is open; None while closed
#[must_use]
pub fn finalization_view(session: &SpotSession) -> Option<FinalizationView> {
    if !session.finalization().is_open() {
        return None;
    }

    let stops = session.plan().spots();
    let legs: Vec<PlanLeg> = stops
        .windows(2)
        .map(|pair| PlanLeg {
            from: pair[0].id,
            to: pair[1].id,
            distance_km: distance_km(&pair[0], &pair[1]),
        })
        .collect();
    let total_distance_km = legs.iter().fold(0.0, |total, leg| total + leg.distance_km);

    Some(FinalizationView {
        title: FINALIZATION_TITLE,
        body: FINALIZATION_BODY,
        stops: stops.iter().map(|spot| spot.name.clone()).collect(),
        legs,
        total_distance_km,
    })
}
