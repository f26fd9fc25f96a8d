//! View models handed to rendering collaborators
//!
//! Each builder is a pure function of the session; nothing here mutates state
//! or knows how the output is drawn.

pub mod list;
pub mod map;
pub mod overlay;
pub mod popup;

pub use list::{ListEntry, PlanEntry, PlanView, list_view, plan_view};
pub use map::{MapBounds, MapMarker, MapView, ViewportTracker, map_view};
pub use overlay::{FinalizationView, PlanLeg, finalization_view};
pub use popup::SpotPopup;
