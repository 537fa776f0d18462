//! Marker and layer styling.
//!
//! Marker color is a pure function of the point's status fields so the layer
//! can be redrawn from scratch on every sync.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::net::types::{PointProperties, SurveyStatus};

pub const COLOR_DRAFT: &str = "#0d6efd";
pub const COLOR_READY_UNASSIGNED: &str = "#8B5A2B";
pub const COLOR_READY_PARTIAL: &str = "#fd7e14";
pub const COLOR_READY_FULL: &str = "#6f42c1";
pub const COLOR_SUBMITTED: &str = "#dc3545";
pub const COLOR_APPROVED: &str = "#198754";
pub const COLOR_REJECTED: &str = "#ffc107";
pub const COLOR_OTHER: &str = "#6c757d";

/// AOI draft layer (blue) and selected-project layer (red, dashed).
pub const AOI_DRAFT_COLOR: &str = "#0d6efd";
pub const AOI_PROJECT_COLOR: &str = "#dc3545";

/// Marker fill color for a sampling point.
pub fn marker_color(p: &PointProperties) -> &'static str {
    match p.survey_status {
        SurveyStatus::Draft => COLOR_DRAFT,
        SurveyStatus::Ready => {
            if p.assigned_count == 0 {
                COLOR_READY_UNASSIGNED
            } else if p.assigned_count < p.max_surveyors {
                COLOR_READY_PARTIAL
            } else {
                COLOR_READY_FULL
            }
        }
        SurveyStatus::Submitted => COLOR_SUBMITTED,
        SurveyStatus::Approved => COLOR_APPROVED,
        SurveyStatus::Rejected => COLOR_REJECTED,
        SurveyStatus::Expired | SurveyStatus::Unknown => COLOR_OTHER,
    }
}

/// Inner HTML of the `divIcon` used for sampling markers.
pub fn marker_icon_html(color: &str) -> String {
    format!(
        "<div style=\"background:{color};width:14px;height:14px;\
         border-radius:50%;border:2px solid white;\"></div>"
    )
}
