use super::*;
use crate::net::types::{ApprovalStatus, LockState};

fn point(status: SurveyStatus, assigned: u32, max: u32) -> PointProperties {
    PointProperties {
        id: 1,
        status: LockState::Open,
        survey_status: status,
        approval_status: ApprovalStatus::None,
        assigned_count: assigned,
        max_surveyors: max,
        assigned_ids: Vec::new(),
        assigned_names: Vec::new(),
        latitude: 0.0,
        longitude: 0.0,
        total_biomass: 0.0,
        start_date: None,
        end_date: None,
        survey_date: None,
        description: None,
        plot_radius_m: None,
        created_at: None,
    }
}

#[test]
fn draft_is_blue() {
    assert_eq!(marker_color(&point(SurveyStatus::Draft, 0, 5)), COLOR_DRAFT);
}

#[test]
fn ready_shades_by_assignment_fill() {
    assert_eq!(marker_color(&point(SurveyStatus::Ready, 0, 5)), COLOR_READY_UNASSIGNED);
    assert_eq!(marker_color(&point(SurveyStatus::Ready, 3, 5)), COLOR_READY_PARTIAL);
    assert_eq!(marker_color(&point(SurveyStatus::Ready, 5, 5)), COLOR_READY_FULL);
}

#[test]
fn terminal_statuses_have_fixed_colors() {
    assert_eq!(marker_color(&point(SurveyStatus::Submitted, 2, 5)), COLOR_SUBMITTED);
    assert_eq!(marker_color(&point(SurveyStatus::Approved, 2, 5)), COLOR_APPROVED);
    assert_eq!(marker_color(&point(SurveyStatus::Rejected, 2, 5)), COLOR_REJECTED);
}

#[test]
fn everything_else_is_gray() {
    assert_eq!(marker_color(&point(SurveyStatus::Expired, 0, 5)), COLOR_OTHER);
    assert_eq!(marker_color(&point(SurveyStatus::Unknown, 0, 5)), COLOR_OTHER);
}

#[test]
fn icon_html_embeds_the_color() {
    let html = marker_icon_html(COLOR_READY_PARTIAL);
    assert!(html.contains("background:#fd7e14"));
    assert!(html.contains("border-radius:50%"));
}
