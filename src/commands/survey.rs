//! Tree measurement submission (surveyor side).

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::commands::{forms, sampling};
use crate::net::api;
use crate::net::types::{Species, TreeMeasurement};
use crate::state::AppCtx;
use crate::state::ui::Modal;
use crate::util::dialog;
use crate::util::geo::LatLng;

/// Raw form fields from the measurement modal.
#[derive(Clone, Debug, Default)]
pub struct MeasurementForm {
    pub species_id: Option<i64>,
    pub latitude: String,
    pub longitude: String,
    pub dbh: String,
    pub height: String,
    pub notes: String,
}

/// Validate the form into a submittable measurement. Coordinates default to
/// the sampling point's own location when left blank.
pub fn build_measurement(
    surveyor_id: Uuid,
    point_at: LatLng,
    form: &MeasurementForm,
) -> Result<TreeMeasurement, &'static str> {
    let species_id = form.species_id.ok_or("Select a species")?;
    let dbh = forms::parse_positive(&form.dbh).ok_or("DBH must be a positive number")?;
    let height = if form.height.trim().is_empty() {
        None
    } else {
        Some(forms::parse_positive(&form.height).ok_or("Height must be a positive number")?)
    };
    let latitude = if form.latitude.trim().is_empty() {
        point_at.lat
    } else {
        form.latitude.trim().parse().map_err(|_| "Latitude is not a number")?
    };
    let longitude = if form.longitude.trim().is_empty() {
        point_at.lng
    } else {
        form.longitude.trim().parse().map_err(|_| "Longitude is not a number")?
    };

    Ok(TreeMeasurement {
        surveyor_id,
        latitude,
        longitude,
        species_id,
        dbh,
        height,
        notes: form.notes.trim().to_owned(),
    })
}

pub async fn load_species() -> Result<Vec<Species>, String> {
    api::fetch_species().await
}

/// Submit one tree from the measurement modal.
pub async fn submit_measurement(ctx: AppCtx, point_id: i64, form: MeasurementForm) {
    let Some(user) = ctx.auth.get_untracked().user else {
        return;
    };
    let Some(point_at) = ctx
        .points
        .with_untracked(|p| p.get(point_id).map(crate::net::types::PointProperties::latlng))
    else {
        return;
    };

    let measurement = match build_measurement(user.id, point_at, &form) {
        Ok(m) => m,
        Err(message) => {
            dialog::alert(message);
            return;
        }
    };

    match api::submit_tree(point_id, &measurement).await {
        Ok(()) => {
            ctx.ui.update(|ui| {
                if matches!(ui.modal, Modal::Measurement { .. }) {
                    ui.close_modal();
                }
            });
            ctx.set_status("Tree measurement saved.");
            sampling::sync_points(ctx).await;
        }
        Err(message) => dialog::alert(&message),
    }
}
