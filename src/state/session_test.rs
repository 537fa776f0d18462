use super::*;
use crate::util::geo::geometry_bounds;

fn project(id: Uuid, name: &str) -> Project {
    Project {
        id,
        name: name.to_owned(),
        year: 2026,
        status: None,
        aoi: square_around(LatLng::new(-2.0, 118.0), 0.01),
        center: None,
    }
}

fn session_with_project() -> (SessionState, Uuid) {
    let id = Uuid::new_v4();
    let mut s = SessionState::default();
    s.projects.insert(id, project(id, "Hutan A"));
    (s, id)
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_adopts_the_projects_aoi_as_confirmed() {
    let (mut s, id) = session_with_project();
    assert!(s.select(id).is_some());
    assert_eq!(s.current_project_id, Some(id));
    assert!(matches!(s.aoi, AoiState::Confirmed { .. }));
    assert!(s.is_update());
}

#[test]
fn select_unknown_project_changes_nothing() {
    let (mut s, _) = session_with_project();
    assert!(s.select(Uuid::new_v4()).is_none());
    assert!(s.current_project_id.is_none());
    assert_eq!(s.aoi, AoiState::NoAoi);
}

// =============================================================
// New project
// =============================================================

#[test]
fn start_new_requires_a_search_marker() {
    let mut s = SessionState::default();
    assert!(s.start_new().is_none());
    assert_eq!(s.aoi, AoiState::NoAoi);
}

#[test]
fn start_new_builds_a_square_and_enters_edit() {
    let mut s = SessionState::default();
    s.search_marker = Some(LatLng::new(1.0, 100.0));
    let square = s.start_new().unwrap();
    assert!(s.aoi.is_editing());
    assert!(s.current_project_id.is_none());
    let ((south, west), (north, east)) = geometry_bounds(&square).unwrap();
    assert!((north - south - 2.0 * DEFAULT_AOI_HALF_DEG).abs() < 1e-12);
    assert!((east - west - 2.0 * DEFAULT_AOI_HALF_DEG).abs() < 1e-12);
}

#[test]
fn start_new_clears_the_previous_selection() {
    let (mut s, id) = session_with_project();
    s.select(id);
    s.search_marker = Some(LatLng::new(1.0, 100.0));
    s.start_new().unwrap();
    assert!(s.current_project_id.is_none());
    assert!(!s.is_update());
}

// =============================================================
// AOI edit machine
// =============================================================

#[test]
fn begin_edit_only_from_confirmed() {
    let mut s = SessionState::default();
    assert!(!s.begin_edit());

    let (mut s, id) = session_with_project();
    s.select(id);
    assert!(s.begin_edit());
    assert!(s.aoi.is_editing());
    // Re-entrant begin while editing is rejected.
    assert!(!s.begin_edit());
}

#[test]
fn end_edit_confirms_the_edited_polygon() {
    let (mut s, id) = session_with_project();
    s.select(id);
    s.begin_edit();
    let edited = square_around(LatLng::new(0.0, 99.0), 0.02);
    s.end_edit(edited.clone());
    assert_eq!(s.aoi, AoiState::Confirmed { geometry: edited });
}

#[test]
fn reset_restores_the_original_polygon() {
    let (mut s, id) = session_with_project();
    s.select(id);
    let before = s.aoi.geometry().cloned().unwrap();
    s.begin_edit();
    let restored = s.reset_edit().unwrap();
    assert_eq!(restored, before);
    assert_eq!(s.aoi, AoiState::Confirmed { geometry: before });
}

#[test]
fn reset_outside_edit_is_a_no_op() {
    let (mut s, id) = session_with_project();
    s.select(id);
    assert!(s.reset_edit().is_none());
}

// =============================================================
// Save preconditions
// =============================================================

#[test]
fn save_blocked_without_aoi() {
    let s = SessionState::default();
    assert_eq!(s.save_block("Hutan A"), Some(SaveBlock::NoAoi));
}

#[test]
fn save_blocked_while_editing() {
    let (mut s, id) = session_with_project();
    s.select(id);
    s.begin_edit();
    assert_eq!(s.save_block("Hutan A"), Some(SaveBlock::EditingActive));
}

#[test]
fn save_blocked_on_empty_or_whitespace_name() {
    let (mut s, id) = session_with_project();
    s.select(id);
    assert_eq!(s.save_block(""), Some(SaveBlock::EmptyName));
    assert_eq!(s.save_block("   "), Some(SaveBlock::EmptyName));
}

#[test]
fn save_allowed_when_confirmed_with_name() {
    let (mut s, id) = session_with_project();
    s.select(id);
    assert_eq!(s.save_block("Hutan A"), None);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_drops_all_project_scoped_state() {
    let (mut s, id) = session_with_project();
    s.select(id);
    s.search_marker = Some(LatLng::new(1.0, 100.0));
    s.manual_mode = true;
    s.clear();
    assert!(s.current_project_id.is_none());
    assert!(s.projects.is_empty());
    assert_eq!(s.aoi, AoiState::NoAoi);
    assert!(s.search_marker.is_none());
    assert!(!s.manual_mode);
}
