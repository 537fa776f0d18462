//! Sampling point commands: grid generation, manual placement, review,
//! locking, and the central layer sync every mutation funnels through.

#[cfg(test)]
#[path = "sampling_test.rs"]
mod sampling_test;

use leptos::prelude::*;

use crate::map;
use crate::net::api;
use crate::net::types::SurveySetup;
use crate::state::AppCtx;
use crate::state::ui::{Modal, SamplingMode};
use crate::util::dialog;
use crate::util::geo::LatLng;

/// Minimum grid spacing the client will even ask the backend for.
pub const MIN_SPACING_M: u32 = 10;

pub fn spacing_valid(spacing: u32) -> bool {
    spacing >= MIN_SPACING_M
}

/// Parse a spacing field; `None` means the value is rejected locally and no
/// request may be issued.
pub fn parse_spacing(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|s| spacing_valid(*s))
}

/// Preview line shown under the mode selector.
pub fn mode_hint(mode: SamplingMode) -> &'static str {
    match mode {
        SamplingMode::Grid => "Not calculated yet",
        SamplingMode::Manual => "Click the map to add points",
        SamplingMode::Count => "This mode is not available yet",
    }
}

/// Re-fetch the active project's point collection and redraw the layer.
/// The authoritative resync every mutating command ends with.
pub async fn sync_points(ctx: AppCtx) {
    let Some(project_id) = ctx.session.get_untracked().current_project_id else {
        return;
    };
    ctx.points.update(|p| p.loading = true);
    match api::fetch_points(project_id).await {
        Ok(collection) => {
            ctx.points.update(|p| p.replace(collection.features));
            map::redraw_points(ctx, &ctx.points.get_untracked().features);
        }
        Err(message) => {
            ctx.points.update(|p| p.loading = false);
            dialog::alert(&message);
        }
    }
}

/// Switch placement mode. Manual mode needs an active project and arms the
/// map click handler; anything else disarms it.
pub fn set_mode(ctx: AppCtx, mode: SamplingMode) {
    if mode == SamplingMode::Manual && ctx.session.get_untracked().current_project_id.is_none() {
        dialog::alert("Select a project first");
        ctx.ui.update(|ui| {
            ui.sampling_mode = SamplingMode::Grid;
            ui.preview_text = mode_hint(SamplingMode::Grid).to_owned();
        });
        ctx.session.update(|s| s.manual_mode = false);
        return;
    }
    ctx.ui.update(|ui| {
        ui.sampling_mode = mode;
        ui.preview_text = mode_hint(mode).to_owned();
    });
    ctx.session.update(|s| s.manual_mode = mode == SamplingMode::Manual);
}

/// Generate the sampling grid, replacing existing unlocked points.
pub async fn generate_grid(ctx: AppCtx, spacing_raw: String) {
    let Some(project_id) = ctx.session.get_untracked().current_project_id else {
        dialog::alert("Select a project first");
        return;
    };
    if ctx.ui.get_untracked().sampling_mode != SamplingMode::Grid {
        dialog::alert("This mode is not available yet");
        return;
    }
    let Some(spacing) = parse_spacing(&spacing_raw) else {
        dialog::alert("Spacing is too small");
        return;
    };
    if !dialog::confirm("Generate sampling grid?\nOpen points will be replaced, locked points stay.")
    {
        return;
    }

    ctx.set_status("Generating sampling grid...");
    match api::generate_grid(project_id, spacing).await {
        Ok(()) => {
            sync_points(ctx).await;
            ctx.set_status("Sampling grid generated");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Failed to generate sampling grid.");
        }
    }
}

/// Estimate the grid point count without mutating anything.
pub async fn preview_grid(ctx: AppCtx, spacing_raw: String) {
    let Some(project_id) = ctx.session.get_untracked().current_project_id else {
        dialog::alert("Select a project first");
        return;
    };
    let Some(spacing) = parse_spacing(&spacing_raw) else {
        dialog::alert("Spacing is too small");
        return;
    };

    ctx.ui.update(|ui| ui.preview_text = "Calculating...".to_owned());
    let text = match api::preview_grid(project_id, spacing).await {
        Ok(preview) => format!("Estimated points: {}", preview.count),
        Err(_) => "Failed to estimate".to_owned(),
    };
    ctx.ui.update(|ui| ui.preview_text = text);
}

/// Create a draft point at a clicked map location (manual mode).
pub async fn manual_add(ctx: AppCtx, at: LatLng) {
    let session = ctx.session.get_untracked();
    if !session.manual_mode {
        return;
    }
    let Some(project_id) = session.current_project_id else {
        return;
    };
    if !dialog::confirm("Add a sampling point at this location?") {
        return;
    }

    ctx.set_status("Saving manual point...");
    match api::add_manual_point(project_id, at).await {
        Ok(()) => {
            sync_points(ctx).await;
            ctx.set_status("Manual point added");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Failed to save manual point.");
        }
    }
}

/// Persist a dragged draft marker's new position. On failure the layer is
/// resynced so the marker snaps back to its authoritative location.
pub async fn move_point(ctx: AppCtx, point_id: i64, at: LatLng) {
    match api::move_point(point_id, at).await {
        Ok(()) => ctx.set_status("Point moved"),
        Err(message) => {
            dialog::alert(&message);
            sync_points(ctx).await;
        }
    }
}

pub async fn delete_point(ctx: AppCtx, point_id: i64) {
    if !dialog::confirm("Delete this point?") {
        return;
    }
    match api::delete_point(point_id).await {
        Ok(()) => sync_points(ctx).await,
        Err(message) => dialog::alert(&message),
    }
}

/// Delete every unlocked point in the active project.
pub async fn remove_all_points(ctx: AppCtx) {
    let Some(project_id) = ctx.session.get_untracked().current_project_id else {
        dialog::alert("Select a project first");
        return;
    };
    if !dialog::confirm(
        "Delete ALL sampling points in this project?\n\nLocked or approved points may remain.",
    ) {
        return;
    }

    ctx.set_status("Removing all sampling points...");
    match api::remove_all_points(project_id).await {
        Ok(()) => {
            sync_points(ctx).await;
            ctx.set_status("All sampling points removed.");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Failed to remove sampling points.");
        }
    }
}

/// Approve or reject a submitted survey.
pub async fn review_point(ctx: AppCtx, point_id: i64, approve: bool) {
    let (question, action) = if approve {
        ("Approve this survey?", "approved")
    } else {
        ("Reject this survey?", "rejected")
    };
    if !dialog::confirm(question) {
        return;
    }
    match api::review_point(point_id, action).await {
        Ok(()) => sync_points(ctx).await,
        Err(message) => dialog::alert(&message),
    }
}

pub async fn set_point_lock(ctx: AppCtx, point_id: i64, lock: bool) {
    let question = if lock { "Lock this point?" } else { "Unlock this point?" };
    if !dialog::confirm(question) {
        return;
    }
    match api::set_point_lock(point_id, lock).await {
        Ok(()) => sync_points(ctx).await,
        Err(message) => dialog::alert(&message),
    }
}

/// Persist the survey window, capacity, and plot radius for a point.
pub async fn save_setup(ctx: AppCtx, point_id: i64, setup: SurveySetup) {
    match api::setup_point(point_id, &setup).await {
        Ok(()) => {
            ctx.ui.update(|ui| {
                if matches!(ui.modal, Modal::SurveySetup { .. }) {
                    ui.close_modal();
                }
            });
            dialog::alert("Survey setup saved");
            sync_points(ctx).await;
        }
        Err(message) => dialog::alert(&message),
    }
}
