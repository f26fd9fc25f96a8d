//! Two-state finalization overlay: closed until the user signals they are done

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalizationState {
    #[default]
    Closed,
    Open,
}

impl FinalizationState {
    /// closed -> open, only when the plan has at least one entry.
    /// Returns true when the state changed.
    pub fn request(&mut self, plan_len: usize) -> bool {
        if plan_len == 0 || *self == Self::Open {
            return false;
        }
        *self = Self::Open;
        true
    }

    /// open -> closed, unconditionally
    pub fn close(&mut self) -> bool {
        let changed = *self == Self::Open;
        *self = Self::Closed;
        changed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        *self == Self::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_guarded_by_empty_plan() {
        let mut state = FinalizationState::default();
        assert!(!state.request(0));
        assert_eq!(state, FinalizationState::Closed);

        assert!(state.request(2));
        assert!(state.is_open());
        assert!(!state.request(2));
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut state = FinalizationState::Closed;
        assert!(!state.close());
        assert_eq!(state, FinalizationState::Closed);

        state.request(1);
        assert!(state.close());
        assert!(!state.is_open());
    }
}
