//! REST helpers for the survey backend.
//!
//! Browser builds make real HTTP calls via `gloo-net`; native builds (unit
//! tests) get inert stubs, so nothing here panics off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Mutating calls return `Result<T, String>` where the error string is the
//! server's `detail` field when the body parses, otherwise a caller-supplied
//! fallback. Callers surface it in a dialog and abort; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{
    LoginResponse, NominatimPlace, PointCollection, PreviewCount, Project, SentinelPreview,
    SentinelRequest, Species, Surveyor, SurveySetup, TreeMeasurement, TreeRecord,
};
use crate::util::geo::{Geometry, LatLng};

// ------------------------------------------------------------------
// Endpoint paths
// ------------------------------------------------------------------

#[cfg(any(test, feature = "browser"))]
fn project_endpoint(id: Uuid) -> String {
    format!("/projects/{id}")
}

#[cfg(any(test, feature = "browser"))]
fn points_endpoint(project_id: Uuid) -> String {
    format!("/sampling/points/{project_id}")
}

#[cfg(any(test, feature = "browser"))]
fn generate_endpoint(project_id: Uuid, spacing_m: u32) -> String {
    format!("/sampling/generate/{project_id}?spacing_m={spacing_m}")
}

#[cfg(any(test, feature = "browser"))]
fn preview_endpoint(project_id: Uuid, spacing: u32) -> String {
    format!("/sampling/preview/{project_id}?spacing={spacing}")
}

#[cfg(any(test, feature = "browser"))]
fn manual_endpoint(project_id: Uuid) -> String {
    format!("/sampling/manual/{project_id}")
}

#[cfg(any(test, feature = "browser"))]
fn move_endpoint(point_id: i64) -> String {
    format!("/sampling/{point_id}/move")
}

#[cfg(any(test, feature = "browser"))]
fn review_endpoint(point_id: i64) -> String {
    format!("/sampling/review/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn setup_endpoint(point_id: i64) -> String {
    format!("/sampling/setup/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn point_endpoint(point_id: i64) -> String {
    format!("/sampling/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn project_points_endpoint(project_id: Uuid) -> String {
    format!("/sampling/project/{project_id}")
}

#[cfg(any(test, feature = "browser"))]
fn lock_endpoint(point_id: i64) -> String {
    format!("/sampling/lock/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn unlock_endpoint(point_id: i64) -> String {
    format!("/sampling/unlock/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn assign_endpoint(point_id: i64) -> String {
    format!("/sampling/assign/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn unassign_endpoint(point_id: i64, surveyor_id: Uuid) -> String {
    format!("/sampling/assign/{point_id}/{surveyor_id}")
}

#[cfg(any(test, feature = "browser"))]
fn assigned_endpoint(point_id: i64) -> String {
    format!("/sampling/assigned/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn submit_tree_endpoint(point_id: i64) -> String {
    format!("/survey/submit-tree/{point_id}")
}

#[cfg(any(test, feature = "browser"))]
fn trees_endpoint(point_id: i64) -> String {
    format!("/survey/trees/{point_id}")
}

/// Extract the server's `detail` message from an error body, or fall back.
#[cfg(any(test, feature = "browser"))]
fn detail_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| fallback.to_owned())
}

// ------------------------------------------------------------------
// Browser plumbing
// ------------------------------------------------------------------

#[cfg(feature = "browser")]
async fn expect_ok(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<gloo_net::http::Response, String> {
    if resp.ok() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        let message = detail_message(&body, fallback);
        log::warn!("request failed ({}): {message}", resp.status());
        Err(message)
    }
}

#[cfg(feature = "browser")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, fallback: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp, fallback)
        .await?
        .json::<T>()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "browser"))]
fn offline<T>() -> Result<T, String> {
    Err("not available outside the browser".to_owned())
}

// ------------------------------------------------------------------
// Auth & users
// ------------------------------------------------------------------

/// `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "browser")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Invalid credentials")
            .await?
            .json()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (email, password);
        offline()
    }
}

/// `GET /users?role=surveyor` — the assignable surveyor pool.
pub async fn fetch_surveyors() -> Result<Vec<Surveyor>, String> {
    #[cfg(feature = "browser")]
    {
        get_json("/users?role=surveyor", "Failed to load surveyors").await
    }
    #[cfg(not(feature = "browser"))]
    {
        offline()
    }
}

// ------------------------------------------------------------------
// Projects
// ------------------------------------------------------------------

/// Project create/update request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub geometry: Geometry,
    pub year: i32,
    pub months: Vec<u32>,
    pub cloud: u32,
}

/// Create/update response: the saved project's identity.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SavedProject {
    pub id: Uuid,
}

/// `GET /projects`.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "browser")]
    {
        get_json("/projects", "Failed to load projects").await
    }
    #[cfg(not(feature = "browser"))]
    {
        offline()
    }
}

/// `POST /projects` or `PUT /projects/{id}` depending on `existing`.
pub async fn save_project(
    existing: Option<Uuid>,
    payload: &ProjectPayload,
) -> Result<SavedProject, String> {
    #[cfg(feature = "browser")]
    {
        let request = match existing {
            Some(id) => gloo_net::http::Request::put(&project_endpoint(id)),
            None => gloo_net::http::Request::post("/projects"),
        };
        let resp = request
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to save project")
            .await?
            .json()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (existing, payload);
        offline()
    }
}

/// `DELETE /projects/{id}`.
pub async fn delete_project(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::delete(&project_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to delete project").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = id;
        offline()
    }
}

// ------------------------------------------------------------------
// Sampling points
// ------------------------------------------------------------------

/// `GET /sampling/points/{project_id}` — the full point collection.
pub async fn fetch_points(project_id: Uuid) -> Result<PointCollection, String> {
    #[cfg(feature = "browser")]
    {
        get_json(&points_endpoint(project_id), "Failed to load sampling points").await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = project_id;
        offline()
    }
}

/// `POST /sampling/generate/{project_id}?spacing_m=`.
pub async fn generate_grid(project_id: Uuid, spacing_m: u32) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(&generate_endpoint(project_id, spacing_m))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to generate sampling grid").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (project_id, spacing_m);
        offline()
    }
}

/// `GET /sampling/preview/{project_id}?spacing=` — estimated count only.
pub async fn preview_grid(project_id: Uuid, spacing: u32) -> Result<PreviewCount, String> {
    #[cfg(feature = "browser")]
    {
        get_json(&preview_endpoint(project_id, spacing), "Failed to estimate").await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (project_id, spacing);
        offline()
    }
}

/// `POST /sampling/manual/{project_id}` with clicked coordinates.
pub async fn add_manual_point(project_id: Uuid, at: LatLng) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let body = serde_json::json!({ "lat": at.lat, "lng": at.lng });
        let resp = gloo_net::http::Request::post(&manual_endpoint(project_id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to save point").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (project_id, at);
        offline()
    }
}

/// `PUT /sampling/{point_id}/move`.
pub async fn move_point(point_id: i64, at: LatLng) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let body = serde_json::json!({ "lat": at.lat, "lng": at.lng });
        let resp = gloo_net::http::Request::put(&move_endpoint(point_id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to move point").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, at);
        offline()
    }
}

/// `DELETE /sampling/{point_id}`.
pub async fn delete_point(point_id: i64) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::delete(&point_endpoint(point_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Cannot delete point (it may be locked)").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = point_id;
        offline()
    }
}

/// `DELETE /sampling/project/{project_id}` — every unlocked point.
pub async fn remove_all_points(project_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::delete(&project_points_endpoint(project_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to remove sampling points").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = project_id;
        offline()
    }
}

/// `POST /sampling/review/{point_id}` with `{"action": ...}`.
pub async fn review_point(point_id: i64, action: &str) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let body = serde_json::json!({ "action": action });
        let resp = gloo_net::http::Request::post(&review_endpoint(point_id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to submit review").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, action);
        offline()
    }
}

/// `POST /sampling/lock/{point_id}` / `POST /sampling/unlock/{point_id}`.
pub async fn set_point_lock(point_id: i64, lock: bool) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let url = if lock { lock_endpoint(point_id) } else { unlock_endpoint(point_id) };
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let fallback = if lock { "Failed to lock point" } else { "Failed to unlock point" };
        expect_ok(resp, fallback).await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, lock);
        offline()
    }
}

/// `PUT /sampling/setup/{point_id}` — survey window and capacity.
pub async fn setup_point(point_id: i64, setup: &SurveySetup) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::put(&setup_endpoint(point_id))
            .json(setup)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to save survey setup").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, setup);
        offline()
    }
}

// ------------------------------------------------------------------
// Assignments
// ------------------------------------------------------------------

/// `GET /sampling/assigned/{point_id}`.
pub async fn fetch_assigned(point_id: i64) -> Result<Vec<Surveyor>, String> {
    #[cfg(feature = "browser")]
    {
        get_json(&assigned_endpoint(point_id), "Failed to load assignments").await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = point_id;
        offline()
    }
}

/// `POST /sampling/assign/{point_id}` with `{"surveyor_id": ...}`.
pub async fn assign_surveyor(point_id: i64, surveyor_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let body = serde_json::json!({ "surveyor_id": surveyor_id });
        let resp = gloo_net::http::Request::post(&assign_endpoint(point_id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to assign surveyor").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, surveyor_id);
        offline()
    }
}

/// `DELETE /sampling/assign/{point_id}/{surveyor_id}`.
pub async fn unassign_surveyor(point_id: i64, surveyor_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::delete(&unassign_endpoint(point_id, surveyor_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to remove surveyor").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, surveyor_id);
        offline()
    }
}

// ------------------------------------------------------------------
// Surveys & species
// ------------------------------------------------------------------

/// `GET /tree-species`.
pub async fn fetch_species() -> Result<Vec<Species>, String> {
    #[cfg(feature = "browser")]
    {
        get_json("/tree-species", "Failed to load species list").await
    }
    #[cfg(not(feature = "browser"))]
    {
        offline()
    }
}

/// `GET /survey/trees/{point_id}` — trees submitted for a point.
pub async fn fetch_trees(point_id: i64) -> Result<Vec<TreeRecord>, String> {
    #[cfg(feature = "browser")]
    {
        get_json(&trees_endpoint(point_id), "Failed to load trees").await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = point_id;
        offline()
    }
}

/// `POST /survey/submit-tree/{point_id}` — one tree measurement.
pub async fn submit_tree(point_id: i64, measurement: &TreeMeasurement) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(&submit_tree_endpoint(point_id))
            .json(measurement)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to save measurement").await.map(|_| ())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (point_id, measurement);
        offline()
    }
}

// ------------------------------------------------------------------
// Imagery & geocoding
// ------------------------------------------------------------------

/// `POST /sentinel/preview` — tile URLs for the confirmed AOI.
pub async fn sentinel_preview(request: &SentinelRequest) -> Result<SentinelPreview, String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post("/sentinel/preview")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp, "Failed to load Sentinel preview")
            .await?
            .json()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = request;
        offline()
    }
}

/// Nominatim forward geocoding, first match only.
pub async fn search_location(query: &str) -> Result<Vec<NominatimPlace>, String> {
    #[cfg(feature = "browser")]
    {
        let encoded: String = js_sys::encode_uri_component(query).into();
        let url =
            format!("https://nominatim.openstreetmap.org/search?format=json&limit=1&q={encoded}");
        get_json(&url, "Location search failed").await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = query;
        offline()
    }
}
