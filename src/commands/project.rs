//! Project commands: listing, selection, AOI authoring, save/delete, and
//! the location search that seeds a new project.

use leptos::prelude::*;
use uuid::Uuid;

use crate::commands::{forms, sampling};
use crate::map;
use crate::net::api::{self, ProjectPayload};
use crate::state::AppCtx;
use crate::util::dialog;
use crate::util::geo::LatLng;
use crate::util::storage;

/// Load the project list and re-select the project remembered in storage,
/// if it still exists.
pub async fn load_projects(ctx: AppCtx) {
    match api::fetch_projects().await {
        Ok(projects) => {
            ctx.session.update(|s| {
                s.projects = projects.into_iter().map(|p| (p.id, p)).collect();
            });
            if let Some(saved) = storage::read_current_project() {
                if ctx.session.get_untracked().projects.contains_key(&saved) {
                    select_project(ctx, saved).await;
                } else {
                    storage::clear_current_project();
                }
            }
        }
        Err(message) => dialog::alert(&message),
    }
}

/// Switch the session to an already-loaded project: adopt its AOI, remember
/// the choice, redraw the map, and pull its points.
pub async fn select_project(ctx: AppCtx, id: Uuid) {
    let selected = ctx.session.try_update(|s| s.select(id).cloned()).flatten();
    let Some(project) = selected else { return };

    storage::write_current_project(id);
    map::clear_draft_aoi();
    map::clear_sentinel();
    map::show_project_aoi(&project.aoi);
    ctx.ui.update(|ui| ui.sentinel_visible = true);
    ctx.set_status(format!("Project \"{}\" selected.", project.name));

    sampling::sync_points(ctx).await;
}

/// Begin a new project around the searched location: a default square AOI
/// dropped straight into edit mode.
pub fn start_new_project(ctx: AppCtx) {
    let square = ctx.session.try_update(|s| s.start_new()).flatten();
    let Some(square) = square else {
        dialog::alert("Search for a location first");
        return;
    };

    storage::clear_current_project();
    ctx.points.update(crate::state::points::PointsState::clear);
    map::clear_project_layers();
    map::show_draft_aoi(&square);
    map::begin_edit();
    ctx.ui.update(|ui| ui.sentinel_visible = false);
    ctx.set_status("Adjust the project area, then finish editing and save.");
}

/// Toggle the AOI editor. Entering requires a confirmed AOI; leaving reads
/// the edited polygon back out and confirms it.
pub fn toggle_aoi_edit(ctx: AppCtx) {
    if ctx.session.get_untracked().aoi.is_editing() {
        let edited = map::end_edit();
        ctx.session.update(|s| {
            if let Some(geometry) = edited.clone() {
                s.end_edit(geometry);
            } else if let Some(original) = s.reset_edit() {
                map::show_draft_aoi(&original);
            }
        });
        if let Some(geometry) = edited {
            map::show_draft_aoi(&geometry);
        }
        ctx.ui.update(|ui| ui.sentinel_visible = true);
        ctx.set_status("Project area confirmed.");
    } else {
        let entered = ctx.session.try_update(|s| s.begin_edit()).unwrap_or(false);
        if !entered {
            dialog::alert("Draw a project area first");
            return;
        }
        if let Some(geometry) = ctx.session.get_untracked().aoi.geometry().cloned() {
            map::clear_project_aoi();
            map::show_draft_aoi(&geometry);
        }
        map::begin_edit();
        ctx.ui.update(|ui| ui.sentinel_visible = false);
        ctx.set_status("Editing project area. Drag the corners, then finish.");
    }
}

/// Discard in-progress AOI edits and restore the last-confirmed polygon.
pub fn reset_aoi(ctx: AppCtx) {
    let restored = ctx.session.try_update(|s| s.reset_edit()).flatten();
    let Some(geometry) = restored else { return };
    map::end_edit();
    map::show_draft_aoi(&geometry);
    ctx.ui.update(|ui| ui.sentinel_visible = true);
    ctx.set_status("Project area restored.");
}

/// Create or update the current project from the panel's form fields.
pub async fn save_project(
    ctx: AppCtx,
    name: String,
    year_raw: String,
    months_raw: String,
    cloud_raw: String,
) {
    let session = ctx.session.get_untracked();
    if let Some(block) = session.save_block(&name) {
        dialog::alert(block.user_message());
        return;
    }
    // save_block guarantees a confirmed geometry.
    let Some(geometry) = session.aoi.geometry().cloned() else {
        return;
    };

    let payload = ProjectPayload {
        name: name.trim().to_owned(),
        geometry,
        year: forms::parse_year(&year_raw),
        months: forms::parse_months(&months_raw),
        cloud: forms::parse_cloud(&cloud_raw),
    };
    let existing = session.current_project_id;

    ctx.set_status("Saving project...");
    match api::save_project(existing, &payload).await {
        Ok(saved) => {
            storage::write_current_project(saved.id);
            load_projects(ctx).await;
            ctx.set_status("Project saved.");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Failed to save project.");
        }
    }
}

/// Delete the current project and everything scoped to it.
pub async fn delete_project(ctx: AppCtx) {
    let Some(id) = ctx.session.get_untracked().current_project_id else {
        dialog::alert("Select a project first");
        return;
    };
    if !dialog::confirm("Delete this project and all of its sampling points?") {
        return;
    }

    match api::delete_project(id).await {
        Ok(()) => {
            storage::clear_current_project();
            ctx.session.update(crate::state::session::SessionState::clear);
            ctx.points.update(crate::state::points::PointsState::clear);
            ctx.ui.update(|ui| ui.sentinel_visible = false);
            map::clear_project_layers();
            map::reset_view();
            load_projects(ctx).await;
            ctx.set_status("Project deleted.");
        }
        Err(message) => dialog::alert(&message),
    }
}

/// Nominatim forward geocoding; the first hit becomes the search marker.
pub async fn search(ctx: AppCtx, query: String) {
    let query = query.trim().to_owned();
    if query.is_empty() {
        return;
    }

    ctx.set_status("Searching...");
    match api::search_location(&query).await {
        Ok(places) => {
            let Some(at) = places.first().and_then(|p| p.latlng()) else {
                dialog::alert("Location not found");
                ctx.set_status("Location not found.");
                return;
            };
            let label = places
                .first()
                .map(|p| p.display_name.clone())
                .unwrap_or_default();
            ctx.session.update(|s| s.search_marker = Some(LatLng::new(at.lat, at.lng)));
            map::place_search_marker(at, &label);
            ctx.set_status("Location found. You can start a new project here.");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Location search failed.");
        }
    }
}
