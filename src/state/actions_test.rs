use super::*;
use crate::net::types::ApprovalStatus;
use uuid::Uuid;

fn admin() -> User {
    User { id: Uuid::new_v4(), name: "Admin".to_owned(), role: Role::Admin }
}

fn surveyor() -> User {
    User { id: Uuid::new_v4(), name: "Sari".to_owned(), role: Role::Surveyor }
}

fn point(status: SurveyStatus) -> PointProperties {
    PointProperties {
        id: 1,
        status: LockState::Open,
        survey_status: status,
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
    }
}

// =============================================================
// Lock rule
// =============================================================

#[test]
fn approved_point_offers_no_actions_to_anyone() {
    let mut p = point(SurveyStatus::Submitted);
    p.approval_status = ApprovalStatus::Approved;
    assert!(available_actions(&admin(), &p).is_empty());
    assert!(available_actions(&surveyor(), &p).is_empty());
}

#[test]
fn expired_point_offers_no_actions_to_anyone() {
    let p = point(SurveyStatus::Expired);
    assert!(available_actions(&admin(), &p).is_empty());
    assert!(available_actions(&surveyor(), &p).is_empty());
}

#[test]
fn no_mutating_action_survives_the_lock_rule() {
    // Exhaustive over the lock-triggering combinations in the data model.
    let mut approved = point(SurveyStatus::Ready);
    approved.approval_status = ApprovalStatus::Approved;
    for p in [approved, point(SurveyStatus::Expired)] {
        for user in [admin(), surveyor()] {
            assert!(
                available_actions(&user, &p).iter().all(|a| !a.is_mutating()),
                "mutating action rendered on locked point"
            );
        }
    }
}

// =============================================================
// Admin gating
// =============================================================

#[test]
fn admin_sees_review_actions_only_when_submitted() {
    let actions = available_actions(&admin(), &point(SurveyStatus::Submitted));
    assert!(actions.contains(&PointAction::Approve));
    assert!(actions.contains(&PointAction::Reject));

    for status in [SurveyStatus::Draft, SurveyStatus::Ready, SurveyStatus::Rejected] {
        let actions = available_actions(&admin(), &point(status));
        assert!(!actions.contains(&PointAction::Approve), "approve on {status:?}");
        assert!(!actions.contains(&PointAction::Reject), "reject on {status:?}");
    }
}

#[test]
fn draft_point_offers_setup_and_delete() {
    let actions = available_actions(&admin(), &point(SurveyStatus::Draft));
    assert!(actions.contains(&PointAction::SetupSurvey));
    assert!(actions.contains(&PointAction::DeletePoint));
    assert!(!actions.contains(&PointAction::EditSurvey));
    assert!(!actions.contains(&PointAction::ManageSurveyors));
}

#[test]
fn non_draft_point_offers_edit_and_assignment() {
    let actions = available_actions(&admin(), &point(SurveyStatus::Ready));
    assert!(actions.contains(&PointAction::EditSurvey));
    assert!(actions.contains(&PointAction::ManageSurveyors));
    assert!(!actions.contains(&PointAction::SetupSurvey));
    assert!(!actions.contains(&PointAction::DeletePoint));
}

#[test]
fn lock_toggle_follows_the_backend_lock_state() {
    let open = point(SurveyStatus::Ready);
    let actions = available_actions(&admin(), &open);
    assert!(actions.contains(&PointAction::Lock));
    assert!(!actions.contains(&PointAction::Unlock));

    let mut locked = point(SurveyStatus::Ready);
    locked.status = LockState::Locked;
    let actions = available_actions(&admin(), &locked);
    assert!(actions.contains(&PointAction::Unlock));
    assert!(!actions.contains(&PointAction::Lock));
}

#[test]
fn review_actions_are_admin_only() {
    let actions = available_actions(&surveyor(), &point(SurveyStatus::Submitted));
    assert!(!actions.contains(&PointAction::Approve));
    assert!(!actions.contains(&PointAction::Reject));
}

// =============================================================
// Surveyor gating
// =============================================================

#[test]
fn assigned_surveyor_gets_leave_and_input_never_join() {
    let user = surveyor();
    let mut p = point(SurveyStatus::Ready);
    p.assigned_ids.push(user.id);
    p.assigned_count = 1;

    let actions = available_actions(&user, &p);
    assert_eq!(actions, vec![PointAction::Leave, PointAction::InputMeasurement]);
}

#[test]
fn unassigned_surveyor_gets_join_when_capacity_remains() {
    let mut p = point(SurveyStatus::Ready);
    p.assigned_count = 3;
    assert_eq!(available_actions(&surveyor(), &p), vec![PointAction::Join]);
}

#[test]
fn full_point_offers_neither_join_nor_leave_to_outsiders() {
    let mut p = point(SurveyStatus::Ready);
    p.assigned_count = 5;
    assert!(available_actions(&surveyor(), &p).is_empty());
}
