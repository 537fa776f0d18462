//! Wire types shared with the survey backend.
//!
//! Everything here is a transient projection: deserialized from a response,
//! rendered, and replaced wholesale by the next fetch. The backend owns the
//! entities and all validation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::geo::{Geometry, LatLng};

/// Account role. Drives which page a user lands on and which actions the
/// point detail panel offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Surveyor,
}

/// The authenticated user, as persisted in durable storage at login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// A survey project with its area of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub status: Option<String>,
    pub aoi: Geometry,
    #[serde(default)]
    pub center: Option<Geometry>,
}

/// Lifecycle stage of a sampling point's survey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Ready,
    Submitted,
    Approved,
    Rejected,
    Expired,
    #[serde(other)]
    Unknown,
}

/// Administrative review outcome, independent of [`SurveyStatus`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    None,
    Submitted,
    Approved,
    Rejected,
}

/// Backend lock flag on a point row. Distinct from the derived lock rule in
/// [`PointProperties::is_locked`], which also covers approved/expired points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    #[default]
    Open,
    Locked,
}

/// Feature properties of one sampling point, as returned by
/// `GET /sampling/points/{project_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointProperties {
    pub id: i64,
    #[serde(default)]
    pub status: LockState,
    #[serde(default)]
    pub survey_status: SurveyStatus,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub assigned_count: u32,
    #[serde(default)]
    pub max_surveyors: u32,
    #[serde(default)]
    pub assigned_ids: Vec<Uuid>,
    #[serde(default)]
    pub assigned_names: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub total_biomass: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub survey_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plot_radius_m: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PointProperties {
    /// A point is immutable once its survey is approved or expired. The
    /// backend is the authority; this mirror only suppresses futile requests.
    pub fn is_locked(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
            || self.survey_status == SurveyStatus::Expired
    }

    /// Whether the assigned surveyor count has reached capacity.
    pub fn is_full(&self) -> bool {
        self.assigned_count >= self.max_surveyors
    }

    /// Whether the given surveyor already joined this point.
    pub fn is_assigned(&self, surveyor_id: Uuid) -> bool {
        self.assigned_ids.contains(&surveyor_id)
    }

    pub fn latlng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// One GeoJSON feature in the sampling point collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    pub geometry: Geometry,
    pub properties: PointProperties,
}

/// `GET /sampling/points/{project_id}` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCollection {
    #[serde(default)]
    pub features: Vec<PointFeature>,
}

/// `GET /sampling/preview/{project_id}` response.
#[derive(Clone, Debug, Deserialize)]
pub struct PreviewCount {
    pub count: u64,
}

/// A surveyor in the available/assigned lists of the assignment panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surveyor {
    pub id: Uuid,
    pub name: String,
}

/// A tree species option in the measurement form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub latin_name: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `PUT /sampling/setup/{point_id}` request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SurveySetup {
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub max_surveyors: u32,
    pub plot_radius_m: f64,
}

/// One submitted tree, as listed by `GET /survey/trees/{point_id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TreeRecord {
    pub id: i64,
    #[serde(default)]
    pub species_name: Option<String>,
    pub dbh: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub biomass: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub surveyor_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /survey/submit-tree/{point_id}` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeMeasurement {
    pub surveyor_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub species_id: i64,
    pub dbh: f64,
    pub height: Option<f64>,
    pub notes: String,
}

/// `POST /sentinel/preview` request body.
#[derive(Clone, Debug, Serialize)]
pub struct SentinelRequest {
    pub geometry: Geometry,
    pub year: i32,
    pub months: Vec<u32>,
    pub cloud: u32,
}

/// `POST /sentinel/preview` response: tile URL templates for the imagery
/// layers rendered by the map.
#[derive(Clone, Debug, Deserialize)]
pub struct SentinelPreview {
    pub true_color_url: String,
    pub ndvi_url: String,
}

/// One result row from the Nominatim location search. Coordinates arrive as
/// strings and are parsed before use.
#[derive(Clone, Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl NominatimPlace {
    pub fn latlng(&self) -> Option<LatLng> {
        Some(LatLng::new(self.lat.parse().ok()?, self.lon.parse().ok()?))
    }
}
