use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.sampling_mode, SamplingMode::Grid);
    assert_eq!(state.modal, Modal::None);
    assert!(!state.sentinel_visible);
    assert!(!state.status.is_empty());
}

#[test]
fn sampling_mode_default_is_grid() {
    assert_eq!(SamplingMode::default(), SamplingMode::Grid);
}

#[test]
fn modal_slot_holds_one_dialog() {
    let mut state = UiState::default();
    state.modal = Modal::Assign { point_id: 3 };
    state.modal = Modal::SurveySetup { point_id: 3, edit: true };
    assert_eq!(state.modal, Modal::SurveySetup { point_id: 3, edit: true });
    state.close_modal();
    assert_eq!(state.modal, Modal::None);
}

#[test]
fn set_status_replaces_the_line() {
    let mut state = UiState::default();
    state.set_status("Active project: Hutan A");
    assert_eq!(state.status, "Active project: Hutan A");
}
