//! Capability checks for the point detail panel.
//!
//! One function decides which controls a point offers a given user; both the
//! admin and the surveyor renderers consume it instead of re-deriving the
//! role/lock rules per view.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::types::{LockState, PointProperties, Role, SurveyStatus, User};

/// An action button the detail panel can render for a sampling point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointAction {
    ViewTrees,
    Approve,
    Reject,
    SetupSurvey,
    EditSurvey,
    DeletePoint,
    ManageSurveyors,
    Lock,
    Unlock,
    Join,
    Leave,
    InputMeasurement,
}

impl PointAction {
    /// Read-only actions stay available on locked points for admins; every
    /// mutating action is suppressed there.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::ViewTrees)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewTrees => "View Trees",
            Self::Approve => "Approve Survey",
            Self::Reject => "Reject Survey",
            Self::SetupSurvey => "Setup Survey",
            Self::EditSurvey => "Edit Survey",
            Self::DeletePoint => "Delete Sampling Point",
            Self::ManageSurveyors => "Manage Surveyors",
            Self::Lock => "Lock Point",
            Self::Unlock => "Unlock Point",
            Self::Join => "Join",
            Self::Leave => "Leave",
            Self::InputMeasurement => "Input Measurement",
        }
    }
}

/// Actions available to `user` on `point`, in render order.
///
/// Locked points (approved or expired) offer nothing at all; the panel shows
/// a "survey locked" note instead. The backend re-checks every rule — this
/// only keeps futile requests out of the UI.
pub fn available_actions(user: &User, point: &PointProperties) -> Vec<PointAction> {
    if point.is_locked() {
        return Vec::new();
    }
    match user.role {
        Role::Admin => admin_actions(point),
        Role::Surveyor => surveyor_actions(user, point),
    }
}

fn admin_actions(point: &PointProperties) -> Vec<PointAction> {
    let mut actions = vec![PointAction::ViewTrees];

    match point.survey_status {
        SurveyStatus::Submitted => {
            actions.push(PointAction::Approve);
            actions.push(PointAction::Reject);
        }
        SurveyStatus::Draft => {
            actions.push(PointAction::SetupSurvey);
            actions.push(PointAction::DeletePoint);
        }
        _ => {}
    }

    if point.survey_status != SurveyStatus::Draft {
        actions.push(PointAction::EditSurvey);
        actions.push(PointAction::ManageSurveyors);
    }

    match point.status {
        LockState::Open => actions.push(PointAction::Lock),
        LockState::Locked => actions.push(PointAction::Unlock),
    }

    actions
}

fn surveyor_actions(user: &User, point: &PointProperties) -> Vec<PointAction> {
    if point.is_assigned(user.id) {
        vec![PointAction::Leave, PointAction::InputMeasurement]
    } else if point.is_full() {
        Vec::new()
    } else {
        vec![PointAction::Join]
    }
}
