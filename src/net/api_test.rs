use super::*;

const PID: &str = "5f0c1e7a-1111-4f6e-9a63-0e2b6f1a2b3c";

fn pid() -> Uuid {
    PID.parse().unwrap()
}

#[test]
fn project_endpoints_embed_the_id() {
    assert_eq!(project_endpoint(pid()), format!("/projects/{PID}"));
    assert_eq!(points_endpoint(pid()), format!("/sampling/points/{PID}"));
    assert_eq!(project_points_endpoint(pid()), format!("/sampling/project/{PID}"));
}

#[test]
fn grid_endpoints_carry_spacing_queries() {
    assert_eq!(
        generate_endpoint(pid(), 50),
        format!("/sampling/generate/{PID}?spacing_m=50")
    );
    assert_eq!(preview_endpoint(pid(), 25), format!("/sampling/preview/{PID}?spacing=25"));
}

#[test]
fn point_endpoints_format_expected_paths() {
    assert_eq!(move_endpoint(12), "/sampling/12/move");
    assert_eq!(review_endpoint(12), "/sampling/review/12");
    assert_eq!(setup_endpoint(12), "/sampling/setup/12");
    assert_eq!(point_endpoint(12), "/sampling/12");
    assert_eq!(lock_endpoint(12), "/sampling/lock/12");
    assert_eq!(unlock_endpoint(12), "/sampling/unlock/12");
    assert_eq!(submit_tree_endpoint(12), "/survey/submit-tree/12");
    assert_eq!(trees_endpoint(12), "/survey/trees/12");
}

#[test]
fn assignment_endpoints_format_expected_paths() {
    assert_eq!(assign_endpoint(3), "/sampling/assign/3");
    assert_eq!(unassign_endpoint(3, pid()), format!("/sampling/assign/3/{PID}"));
    assert_eq!(assigned_endpoint(3), "/sampling/assigned/3");
}

#[test]
fn detail_message_prefers_server_detail() {
    let body = r#"{"detail": "Titik berada di luar area fokus"}"#;
    assert_eq!(detail_message(body, "fallback"), "Titik berada di luar area fokus");
}

#[test]
fn detail_message_falls_back_on_other_bodies() {
    assert_eq!(detail_message("", "fallback"), "fallback");
    assert_eq!(detail_message("<html>502</html>", "fallback"), "fallback");
    assert_eq!(detail_message(r#"{"error": "x"}"#, "fallback"), "fallback");
    // Non-string detail values are not trusted.
    assert_eq!(detail_message(r#"{"detail": {"k": 1}}"#, "fallback"), "fallback");
}

#[test]
fn project_payload_serializes_geojson_geometry() {
    let payload = ProjectPayload {
        name: "Hutan A".to_owned(),
        geometry: crate::util::geo::square_around(crate::util::geo::LatLng::new(-2.0, 118.0), 0.01),
        year: 2026,
        months: vec![6, 7, 8],
        cloud: 20,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["geometry"]["type"], "Polygon");
    assert_eq!(json["months"], serde_json::json!([6, 7, 8]));
}
