use super::*;
use crate::net::types::{ApprovalStatus, LockState, SurveyStatus};
use crate::util::geo::Geometry;

fn feature(id: i64) -> PointFeature {
    PointFeature {
        geometry: Geometry::Point { coordinates: [118.0, -2.0] },
        properties: PointProperties {
            id,
            status: LockState::Open,
            survey_status: SurveyStatus::Draft,
            approval_status: ApprovalStatus::None,
            assigned_count: 0,
            max_surveyors: 5,
            assigned_ids: Vec::new(),
            assigned_names: Vec::new(),
            latitude: -2.0,
            longitude: 118.0,
            total_biomass: 0.0,
            start_date: None,
            end_date: None,
            survey_date: None,
            description: None,
            plot_radius_m: None,
            created_at: None,
        },
    }
}

#[test]
fn replace_swaps_the_collection_wholesale() {
    let mut state = PointsState::default();
    state.replace(vec![feature(1), feature(2)]);
    state.replace(vec![feature(3)]);
    // Nothing from the earlier sync survives.
    assert!(state.get(1).is_none());
    assert!(state.get(2).is_none());
    assert!(state.get(3).is_some());
    assert_eq!(state.features.len(), 1);
}

#[test]
fn replace_keeps_selection_of_surviving_point() {
    let mut state = PointsState::default();
    state.replace(vec![feature(1), feature(2)]);
    state.selected = Some(2);
    state.replace(vec![feature(2)]);
    assert_eq!(state.selected, Some(2));
    assert_eq!(state.selected_point().map(|p| p.id), Some(2));
}

#[test]
fn replace_drops_selection_of_removed_point() {
    let mut state = PointsState::default();
    state.replace(vec![feature(1)]);
    state.selected = Some(1);
    state.replace(Vec::new());
    assert!(state.selected.is_none());
    assert!(state.selected_point().is_none());
}

#[test]
fn clear_empties_everything() {
    let mut state = PointsState::default();
    state.replace(vec![feature(1)]);
    state.selected = Some(1);
    state.loading = true;
    state.clear();
    assert!(state.features.is_empty());
    assert!(state.selected.is_none());
    assert!(!state.loading);
}
