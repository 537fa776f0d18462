//! GeoJSON geometry projections and the small amount of spatial math the
//! client does itself (default AOI squares, bounds for map fitting).
//!
//! All real geometry processing (grids, containment, centroids) happens
//! server-side; these types exist to carry geometry over the wire and to
//! position the map.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair, latitude first to match Leaflet conventions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// GeoJSON geometry. Coordinates are `[lng, lat]` per the spec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

/// `((south, west), (north, east))` in degrees.
pub type Bounds = ((f64, f64), (f64, f64));

/// Half-width in degrees of the default AOI drawn around a searched location.
pub const DEFAULT_AOI_HALF_DEG: f64 = 0.01;

/// Build the default square AOI centered on a searched location. The ring is
/// closed (first coordinate repeated last) as GeoJSON requires.
pub fn square_around(center: LatLng, half: f64) -> Geometry {
    let LatLng { lat, lng } = center;
    Geometry::Polygon {
        coordinates: vec![vec![
            [lng - half, lat - half],
            [lng + half, lat - half],
            [lng + half, lat + half],
            [lng - half, lat + half],
            [lng - half, lat - half],
        ]],
    }
}

/// Bounding box of a geometry, or `None` when it has no coordinates.
pub fn geometry_bounds(geometry: &Geometry) -> Option<Bounds> {
    let mut acc = BoundsAcc::default();
    match geometry {
        Geometry::Point { coordinates } => acc.push(*coordinates),
        Geometry::Polygon { coordinates } => {
            for ring in coordinates {
                for c in ring {
                    acc.push(*c);
                }
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for poly in coordinates {
                for ring in poly {
                    for c in ring {
                        acc.push(*c);
                    }
                }
            }
        }
    }
    acc.finish()
}

/// Bounding box of a set of point coordinates given as `(lat, lng)` pairs.
pub fn points_bounds(points: impl IntoIterator<Item = LatLng>) -> Option<Bounds> {
    let mut acc = BoundsAcc::default();
    for p in points {
        acc.push([p.lng, p.lat]);
    }
    acc.finish()
}

/// Extract the first geometry from a GeoJSON value that may be a bare
/// geometry, a `Feature`, or a `FeatureCollection`. The map editor's layer
/// export comes back in any of the three shapes.
pub fn feature_geometry(value: &serde_json::Value) -> Option<Geometry> {
    if let Some(features) = value.get("features").and_then(|f| f.as_array()) {
        return serde_json::from_value(features.first()?.get("geometry")?.clone()).ok();
    }
    if let Some(geometry) = value.get("geometry") {
        return serde_json::from_value(geometry.clone()).ok();
    }
    serde_json::from_value(value.clone()).ok()
}

#[derive(Default)]
struct BoundsAcc {
    bounds: Option<Bounds>,
}

impl BoundsAcc {
    fn push(&mut self, [lng, lat]: [f64; 2]) {
        match &mut self.bounds {
            None => self.bounds = Some(((lat, lng), (lat, lng))),
            Some(((s, w), (n, e))) => {
                *s = s.min(lat);
                *w = w.min(lng);
                *n = n.max(lat);
                *e = e.max(lng);
            }
        }
    }

    fn finish(self) -> Option<Bounds> {
        self.bounds
    }
}
