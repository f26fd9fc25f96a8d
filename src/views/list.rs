//! Sidebar lists: filtered spots on the left, the travel plan on the right

use crate::models::SpotId;
use crate::session::SpotSession;
use serde::Serialize;

pub const EMPTY_PLAN_HINT: &str = "Add spots to your itinerary to get an estimated travel time and optimise your travel plan for the best experience.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: SpotId,
    pub name: String,
    pub rating_label: String,
    /// Rendered with the highlighted style
    pub in_plan: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub id: SpotId,
    pub name: String,
    pub rating_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    pub entries: Vec<PlanEntry>,
    /// Shown instead of the entries while the plan is empty
    pub empty_hint: Option<&'static str>,
    /// Whether the "Done" action is offered
    pub can_finalize: bool,
}

#[must_use]
pub fn list_view(session: &SpotSession) -> Vec<ListEntry> {
    session
        .filtered()
        .into_iter()
        .map(|spot| ListEntry {
            id: spot.id,
            name: spot.name.clone(),
            rating_label: spot.rating_label(),
            in_plan: session.is_selected(spot.id),
        })
        .collect()
}

#[must_use]
pub fn plan_view(session: &SpotSession) -> PlanView {
    let plan = session.plan();
    PlanView {
        entries: plan
            .iter()
            .map(|spot| PlanEntry {
                id: spot.id,
                name: spot.name.clone(),
                rating_label: spot.rating_label(),
            })
            .collect(),
        empty_hint: plan.is_empty().then_some(EMPTY_PLAN_HINT),
        can_finalize: !plan.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpotCatalog;
    use crate::models::spot::fixtures::spot;
    use std::time::Instant;

    fn session() -> SpotSession {
        SpotSession::new(
            SpotCatalog::new(vec![spot(1, 4.0, true, true), spot(2, 2.0, false, true)]).unwrap(),
        )
    }

    #[test]
    fn test_list_view_marks_plan_members() {
        let mut session = session();
        let _ = session.add_id_to_plan(SpotId(2), Instant::now()).unwrap();

        let entries = list_view(&session);
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].in_plan);
        assert!(entries[1].in_plan);
        assert_eq!(entries[1].rating_label, "Accessibility Rating: 2 / 5");
    }

    #[test]
    fn test_list_view_follows_filters() {
        let mut session = session();
        session.set_min_rating(3.0);
        let entries = list_view(&session);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, SpotId(1));
    }

    #[test]
    fn test_empty_plan_view() {
        let view = plan_view(&session());
        assert!(view.entries.is_empty());
        assert_eq!(view.empty_hint, Some(EMPTY_PLAN_HINT));
        assert!(!view.can_finalize);
    }

    #[test]
    fn test_plan_view_in_insertion_order() {
        let mut session = session();
        let now = Instant::now();
        let _ = session.add_id_to_plan(SpotId(2), now).unwrap();
        let _ = session.add_id_to_plan(SpotId(1), now).unwrap();

        let view = plan_view(&session);
        let ids: Vec<SpotId> = view.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![SpotId(2), SpotId(1)]);
        assert!(view.empty_hint.is_none());
        assert!(view.can_finalize);
    }
}
