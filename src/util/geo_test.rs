use super::*;

#[test]
fn square_around_closes_its_ring() {
    let Geometry::Polygon { coordinates } =
        square_around(LatLng::new(-2.0, 118.0), DEFAULT_AOI_HALF_DEG)
    else {
        panic!("expected a polygon");
    };
    let ring = &coordinates[0];
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn square_around_spans_twice_the_half_width() {
    let geom = square_around(LatLng::new(1.0, 10.0), 0.01);
    let ((s, w), (n, e)) = geometry_bounds(&geom).unwrap();
    assert!((n - s - 0.02).abs() < 1e-12);
    assert!((e - w - 0.02).abs() < 1e-12);
    assert!((s - 0.99).abs() < 1e-12);
    assert!((w - 9.99).abs() < 1e-12);
}

#[test]
fn geometry_bounds_of_point_is_degenerate() {
    let geom = Geometry::Point { coordinates: [118.0, -2.0] };
    assert_eq!(geometry_bounds(&geom), Some(((-2.0, 118.0), (-2.0, 118.0))));
}

#[test]
fn points_bounds_covers_all_points() {
    let bounds = points_bounds(vec![
        LatLng::new(-1.0, 100.0),
        LatLng::new(2.0, 103.0),
        LatLng::new(0.5, 99.0),
    ]);
    assert_eq!(bounds, Some(((-1.0, 99.0), (2.0, 103.0))));
}

#[test]
fn points_bounds_of_nothing_is_none() {
    assert_eq!(points_bounds(Vec::new()), None);
}

#[test]
fn feature_geometry_handles_all_three_export_shapes() {
    let geom = square_around(LatLng::new(-2.0, 118.0), 0.01);
    let bare = serde_json::to_value(&geom).unwrap();
    let feature = serde_json::json!({ "type": "Feature", "geometry": bare });
    let collection = serde_json::json!({ "type": "FeatureCollection", "features": [feature] });

    assert_eq!(feature_geometry(&bare), Some(geom.clone()));
    assert_eq!(
        feature_geometry(&serde_json::json!({ "type": "Feature", "geometry": bare })),
        Some(geom.clone())
    );
    assert_eq!(feature_geometry(&collection), Some(geom));
}

#[test]
fn feature_geometry_rejects_empty_collections() {
    let empty = serde_json::json!({ "type": "FeatureCollection", "features": [] });
    assert_eq!(feature_geometry(&empty), None);
}

#[test]
fn polygon_geometry_round_trips_geojson() {
    let geom = square_around(LatLng::new(-2.0, 118.0), 0.01);
    let json = serde_json::to_value(&geom).unwrap();
    assert_eq!(json["type"], "Polygon");
    let back: Geometry = serde_json::from_value(json).unwrap();
    assert_eq!(back, geom);
}
