//! Surveyor assignment commands.
//!
//! One pair of assign/unassign handlers serves both the admin's roster modal
//! and the surveyor's join/leave buttons; only the surveyor id differs.

#[cfg(test)]
#[path = "assign_test.rs"]
mod assign_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::commands::sampling;
use crate::net::api;
use crate::net::types::Surveyor;
use crate::state::AppCtx;
use crate::util::dialog;

/// The full roster for the assignment modal: everyone already on the point,
/// and everyone who could still be added.
pub struct Roster {
    pub assigned: Vec<Surveyor>,
    pub available: Vec<Surveyor>,
}

/// Surveyors not yet assigned to the point.
pub fn available_pool(all: Vec<Surveyor>, assigned: &[Surveyor]) -> Vec<Surveyor> {
    all.into_iter()
        .filter(|s| !assigned.iter().any(|a| a.id == s.id))
        .collect()
}

/// Fetch both halves of the roster for one point.
pub async fn load_roster(point_id: i64) -> Result<Roster, String> {
    let assigned = api::fetch_assigned(point_id).await?;
    let all = api::fetch_surveyors().await?;
    let available = available_pool(all, &assigned);
    Ok(Roster { assigned, available })
}

/// Assign one surveyor to a point. Returns whether the roster changed.
pub async fn assign(ctx: AppCtx, point_id: i64, surveyor_id: Uuid) -> bool {
    match api::assign_surveyor(point_id, surveyor_id).await {
        Ok(()) => {
            sampling::sync_points(ctx).await;
            true
        }
        Err(message) => {
            dialog::alert(&message);
            false
        }
    }
}

/// Remove one surveyor from a point. Returns whether the roster changed.
pub async fn unassign(ctx: AppCtx, point_id: i64, surveyor_id: Uuid) -> bool {
    match api::unassign_surveyor(point_id, surveyor_id).await {
        Ok(()) => {
            sampling::sync_points(ctx).await;
            true
        }
        Err(message) => {
            dialog::alert(&message);
            false
        }
    }
}

/// A surveyor joins the point themselves.
pub async fn join(ctx: AppCtx, point_id: i64) {
    let Some(user_id) = ctx.auth.get_untracked().user.map(|u| u.id) else {
        return;
    };
    if !dialog::confirm("Join this sampling point?") {
        return;
    }
    if assign(ctx, point_id, user_id).await {
        ctx.set_status("Joined sampling point.");
    }
}

/// A surveyor leaves the point themselves.
pub async fn leave(ctx: AppCtx, point_id: i64) {
    let Some(user_id) = ctx.auth.get_untracked().user.map(|u| u.id) else {
        return;
    };
    if !dialog::confirm("Leave this sampling point?") {
        return;
    }
    if unassign(ctx, point_id, user_id).await {
        ctx.set_status("Left sampling point.");
    }
}
