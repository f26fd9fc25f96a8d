//! Map markers and the fit-to-bounds directive

use crate::models::{Coordinates, Spot, SpotId};
use crate::session::{MarkerVariant, SpotSession};
use crate::views::popup::SpotPopup;
use serde::Serialize;

/// Axis-aligned box around a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl MapBounds {
    /// Smallest box containing every spot, or None for an empty set
    #[must_use]
    pub fn around<'a, I>(spots: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Spot>,
    {
        spots.into_iter().fold(None, |bounds, spot| {
            let point = spot.coordinates();
            Some(match bounds {
                None => Self {
                    south_west: point,
                    north_east: point,
                },
                Some(b) => b.extend(point),
            })
        })
    }

    #[must_use]
    pub fn extend(self, point: Coordinates) -> Self {
        Self {
            south_west: Coordinates {
                latitude: self.south_west.latitude.min(point.latitude),
                longitude: self.south_west.longitude.min(point.longitude),
            },
            north_east: Coordinates {
                latitude: self.north_east.latitude.max(point.latitude),
                longitude: self.north_east.longitude.max(point.longitude),
            },
        }
    }

    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: SpotId,
    pub position: Coordinates,
    pub variant: MarkerVariant,
    pub z_index_offset: i32,
    pub popup: SpotPopup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// Viewport to fit; absent when nothing passes the filters
    pub fit_bounds: Option<MapBounds>,
}

#[must_use]
pub fn map_view(session: &SpotSession) -> MapView {
    let filtered = session.filtered();
    let markers = filtered
        .iter()
        .map(|spot| {
            let variant = session.marker_variant(spot.id);
            MapMarker {
                id: spot.id,
                position: spot.coordinates(),
                variant,
                z_index_offset: variant.z_index_offset(),
                popup: SpotPopup::from(*spot),
            }
        })
        .collect();

    MapView {
        markers,
        fit_bounds: MapBounds::around(filtered.iter().copied()),
    }
}

/// Remembers the last filtered id set so the viewport is refit only when it changes
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    last: Option<Vec<SpotId>>,
}

impl ViewportTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New bounds to fit, if the filtered set differs from the previous call
    pub fn update(&mut self, view: &MapView) -> Option<MapBounds> {
        let ids: Vec<SpotId> = view.markers.iter().map(|m| m.id).collect();
        if self.last.as_ref() == Some(&ids) {
            return None;
        }
        self.last = Some(ids);
        view.fit_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpotCatalog;
    use crate::models::spot::fixtures::spot;
    use std::time::Instant;

    fn session() -> SpotSession {
        let mut far = spot(3, 3.0, true, true);
        far.lat = -34.5;
        far.lng = 150.9;
        SpotSession::new(
            SpotCatalog::new(vec![spot(1, 4.0, true, true), spot(2, 2.0, false, true), far])
                .unwrap(),
        )
    }

    #[test]
    fn test_bounds_cover_every_marker() {
        let session = session();
        let view = map_view(&session);
        let bounds = view.fit_bounds.unwrap();

        assert_eq!(bounds.south_west.latitude, -34.5);
        assert_eq!(bounds.south_west.longitude, 150.9);
        for marker in &view.markers {
            assert!(bounds.contains(marker.position));
        }
    }

    #[test]
    fn test_no_bounds_when_nothing_matches() {
        let mut session = session();
        session.set_min_rating(5.0);
        let view = map_view(&session);
        assert!(view.markers.is_empty());
        assert!(view.fit_bounds.is_none());
    }

    #[test]
    fn test_selected_marker_variant_and_priority() {
        let mut session = session();
        let _ = session.add_id_to_plan(SpotId(1), Instant::now()).unwrap();

        let view = map_view(&session);
        let selected = view.markers.iter().find(|m| m.id == SpotId(1)).unwrap();
        let other = view.markers.iter().find(|m| m.id == SpotId(2)).unwrap();

        assert_eq!(selected.variant, MarkerVariant::Selected);
        assert_eq!(selected.z_index_offset, 1000);
        assert_eq!(other.variant, MarkerVariant::Default);
        assert_eq!(other.z_index_offset, 0);
        assert_eq!(selected.popup.name, "Spot 1");
    }

    #[test]
    fn test_viewport_refit_only_on_change() {
        let mut session = session();
        let mut tracker = ViewportTracker::new();

        assert!(tracker.update(&map_view(&session)).is_some());
        // selection changes markers but not the filtered set
        let _ = session.add_id_to_plan(SpotId(1), Instant::now()).unwrap();
        assert!(tracker.update(&map_view(&session)).is_none());

        session.set_accessible_only(true);
        let bounds = tracker.update(&map_view(&session)).unwrap();
        assert!(bounds.contains(Coordinates {
            latitude: -34.5,
            longitude: 150.9
        }));

        session.set_min_rating(5.0);
        assert!(tracker.update(&map_view(&session)).is_none());
    }
}
