//! Sentinel-2 imagery preview for the confirmed project area.

use leptos::prelude::*;

use crate::commands::forms;
use crate::map;
use crate::net::api;
use crate::net::types::SentinelRequest;
use crate::state::AppCtx;
use crate::util::dialog;

/// Request imagery tiles for the confirmed AOI and overlay them on the map.
pub async fn load_preview(ctx: AppCtx, year_raw: String, months_raw: String, cloud_raw: String) {
    let session = ctx.session.get_untracked();
    if session.aoi.is_editing() {
        dialog::alert("Finish editing the area first");
        return;
    }
    let Some(geometry) = session.aoi.geometry().cloned() else {
        dialog::alert("Draw a project area first");
        return;
    };

    let request = SentinelRequest {
        geometry,
        year: forms::parse_year(&year_raw),
        months: forms::parse_months(&months_raw),
        cloud: forms::parse_cloud(&cloud_raw),
    };

    ctx.set_status("Loading Sentinel imagery...");
    match api::sentinel_preview(&request).await {
        Ok(preview) => {
            map::show_sentinel(&preview);
            ctx.set_status("Sentinel imagery loaded.");
        }
        Err(message) => {
            dialog::alert(&message);
            ctx.set_status("Failed to load Sentinel imagery.");
        }
    }
}

pub fn clear(ctx: AppCtx) {
    map::clear_sentinel();
    ctx.set_status("Sentinel imagery removed.");
}
