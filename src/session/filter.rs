//! Filter criteria and the filtered view of the catalog

use crate::models::Spot;
use crate::models::spot::MAX_RATING;
use crate::{Result, SpotsError};
use serde::Serialize;

/// Accessibility-only toggle plus minimum rating threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterCriteria {
    accessible_only: bool,
    min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            accessible_only: false,
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    #[must_use]
    pub fn new(accessible_only: bool, min_rating: f64) -> Self {
        let mut criteria = Self::default();
        criteria.set_accessible_only(accessible_only);
        criteria.set_min_rating(min_rating);
        criteria
    }

    #[must_use]
    pub fn accessible_only(&self) -> bool {
        self.accessible_only
    }

    #[must_use]
    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Returns true when the toggle changed
    pub fn set_accessible_only(&mut self, accessible_only: bool) -> bool {
        let changed = self.accessible_only != accessible_only;
        self.accessible_only = accessible_only;
        changed
    }

    /// Replace the threshold, clamped to 0..=5. NaN resets it to 0.
    /// Returns true when the stored threshold changed.
    pub fn set_min_rating(&mut self, value: f64) -> bool {
        let clamped = if value.is_nan() {
            0.0
        } else {
            // `+ 0.0` folds -0.0 into 0.0
            value.clamp(0.0, MAX_RATING) + 0.0
        };
        let changed = self.min_rating != clamped;
        self.min_rating = clamped;
        changed
    }

    /// Parse raw text from the rating control. An empty field means 0.
    pub fn set_min_rating_input(&mut self, input: &str) -> Result<bool> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(self.set_min_rating(0.0));
        }

        let value: f64 = trimmed.parse().map_err(|_| {
            SpotsError::validation(format!("'{trimmed}' is not a valid rating"))
        })?;
        Ok(self.set_min_rating(value))
    }

    /// Move the threshold by `delta`, rounded to one decimal like the rating control
    pub fn nudge_min_rating(&mut self, delta: f64) -> bool {
        let next = ((self.min_rating + delta) * 10.0).round() / 10.0;
        self.set_min_rating(next)
    }

    /// Back to the defaults in one step. Returns true when anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        changed
    }

    #[must_use]
    pub fn matches(&self, spot: &Spot) -> bool {
        (!self.accessible_only || spot.is_accessible_friendly())
            && spot.accessibility_rating >= self.min_rating
    }
}

/// Subsequence of `spots` that passes `criteria`, in input order
pub fn compute_filtered<'a, I>(spots: I, criteria: &FilterCriteria) -> Vec<&'a Spot>
where
    I: IntoIterator<Item = &'a Spot>,
{
    spots
        .into_iter()
        .filter(|spot| criteria.matches(spot))
        .collect()
}
