//! Filter & selection state for one browsing session
//!
//! `SpotSession` owns the read-only catalog together with everything the user
//! can change: filter criteria, the travel plan, the notification slot and the
//! finalization overlay flag. Derived views are recomputed on every call.
//! Time is passed in explicitly so the session never needs a runtime.

pub mod filter;
pub mod finalization;
pub mod notification;
pub mod plan;

pub use filter::{FilterCriteria, compute_filtered};
pub use finalization::FinalizationState;
pub use notification::{DEFAULT_DISMISS_AFTER, Notification, NotificationSlot};
pub use plan::{AddOutcome, TravelPlan};

use crate::catalog::SpotCatalog;
use crate::models::{Spot, SpotId};
use crate::{Result, SpotsError};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// z-index offset that lifts selected markers above the rest
pub const SELECTED_Z_INDEX_OFFSET: i32 = 1000;

/// Which marker icon a spot renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerVariant {
    Default,
    Selected,
}

impl MarkerVariant {
    #[must_use]
    pub fn for_selection(selected: bool) -> Self {
        if selected { Self::Selected } else { Self::Default }
    }

    /// Display priority hint for overlapping markers
    #[must_use]
    pub fn z_index_offset(self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Selected => SELECTED_Z_INDEX_OFFSET,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotSession {
    catalog: SpotCatalog,
    criteria: FilterCriteria,
    plan: TravelPlan,
    notification: NotificationSlot,
    finalization: FinalizationState,
}

impl SpotSession {
    #[must_use]
    pub fn new(catalog: SpotCatalog) -> Self {
        Self::with_dismiss_after(catalog, DEFAULT_DISMISS_AFTER)
    }

    #[must_use]
    pub fn with_dismiss_after(catalog: SpotCatalog, dismiss_after: Duration) -> Self {
        info!("Starting session with {} spots", catalog.len());
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            plan: TravelPlan::new(),
            notification: NotificationSlot::new(dismiss_after),
            finalization: FinalizationState::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &SpotCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn plan(&self) -> &TravelPlan {
        &self.plan
    }

    #[must_use]
    pub fn finalization(&self) -> FinalizationState {
        self.finalization
    }

    // -- filters --

    pub fn set_accessible_only(&mut self, accessible_only: bool) -> bool {
        let changed = self.criteria.set_accessible_only(accessible_only);
        debug!(accessible_only, changed, "Accessible-only toggle set");
        changed
    }

    pub fn set_min_rating(&mut self, value: f64) -> bool {
        let changed = self.criteria.set_min_rating(value);
        debug!(
            requested = value,
            min_rating = self.criteria.min_rating(),
            changed,
            "Minimum rating set"
        );
        changed
    }

    pub fn set_min_rating_input(&mut self, input: &str) -> Result<bool> {
        let changed = self.criteria.set_min_rating_input(input)?;
        debug!(min_rating = self.criteria.min_rating(), changed, "Minimum rating parsed");
        Ok(changed)
    }

    pub fn nudge_min_rating(&mut self, delta: f64) -> bool {
        let changed = self.criteria.nudge_min_rating(delta);
        debug!(min_rating = self.criteria.min_rating(), changed, "Minimum rating nudged");
        changed
    }

    pub fn reset_filters(&mut self) -> bool {
        let changed = self.criteria.reset();
        debug!(changed, "Filters reset");
        changed
    }

    /// Catalog spots passing the current criteria, in catalog order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Spot> {
        compute_filtered(&self.catalog, &self.criteria)
    }

    // -- plan --

    /// Add `spot` to the plan. A duplicate leaves the plan untouched and
    /// raises a notification naming the spot.
    pub fn add_to_plan(&mut self, spot: &Spot, now: Instant) -> AddOutcome {
        let outcome = self.plan.add(spot);
        match outcome {
            AddOutcome::Added => {
                debug!(id = %spot.id, plan_len = self.plan.len(), "Added spot to plan");
            }
            AddOutcome::AlreadyInPlan => {
                debug!(id = %spot.id, "Spot already in plan");
                self.notification
                    .raise(format!("{} is already in your travel plan.", spot.name), now);
            }
        }
        outcome
    }

    /// Look `id` up in the catalog, then `add_to_plan`
    pub fn add_id_to_plan(&mut self, id: SpotId, now: Instant) -> Result<AddOutcome> {
        let spot = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| SpotsError::validation(format!("no spot with id {id}")))?;
        Ok(self.add_to_plan(&spot, now))
    }

    pub fn remove_from_plan(&mut self, id: SpotId) -> bool {
        let removed = self.plan.remove(id).is_some();
        debug!(%id, removed, "Remove from plan");
        self.close_finalization_if_empty();
        removed
    }

    pub fn clear_plan(&mut self) -> bool {
        let changed = self.plan.clear();
        debug!(changed, "Plan cleared");
        self.close_finalization_if_empty();
        changed
    }

    // the overlay only makes sense over a non-empty plan
    fn close_finalization_if_empty(&mut self) {
        if self.plan.is_empty() && self.finalization.close() {
            debug!("Plan emptied, finalization closed");
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: SpotId) -> bool {
        self.plan.contains(id)
    }

    #[must_use]
    pub fn marker_variant(&self, id: SpotId) -> MarkerVariant {
        MarkerVariant::for_selection(self.is_selected(id))
    }

    // -- notification --

    #[must_use]
    pub fn notification(&self, now: Instant) -> Option<&str> {
        self.notification.active(now)
    }

    #[must_use]
    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notification.deadline()
    }

    pub fn dismiss_expired_notification(&mut self, now: Instant) -> bool {
        self.notification.dismiss_expired(now)
    }

    // -- finalization --

    /// Open the finalization overlay. No-op while the plan is empty.
    pub fn request_finalization(&mut self) -> bool {
        let changed = self.finalization.request(self.plan.len());
        debug!(changed, plan_len = self.plan.len(), "Finalization requested");
        changed
    }

    pub fn close_finalization(&mut self) -> bool {
        let changed = self.finalization.close();
        debug!(changed, "Finalization closed");
        changed
    }
}
