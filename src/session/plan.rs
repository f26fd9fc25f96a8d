//! Travel plan: the user's ordered, duplicate-free selection of spots

use crate::models::{Spot, SpotId};

/// Result of trying to add a spot to the plan
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyInPlan,
}

/// Ordered selection of spots. Ids are unique; `add` is the only way in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelPlan {
    entries: Vec<Spot>,
}

impl TravelPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `spot` unless an entry with the same id is already present
    pub fn add(&mut self, spot: &Spot) -> AddOutcome {
        if self.contains(spot.id) {
            AddOutcome::AlreadyInPlan
        } else {
            self.entries.push(spot.clone());
            AddOutcome::Added
        }
    }

    /// Remove the entry with `id`. Returns the removed spot, if any.
    pub fn remove(&mut self, id: SpotId) -> Option<Spot> {
        let index = self.entries.iter().position(|spot| spot.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Empty the plan. Returns true when there was anything to remove.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }

    #[must_use]
    pub fn contains(&self, id: SpotId) -> bool {
        self.entries.iter().any(|spot| spot.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.entries.iter()
    }

    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
