use super::*;

fn ready_point(assigned: u32, max: u32) -> PointProperties {
    PointProperties {
        id: 7,
        status: LockState::Open,
        survey_status: SurveyStatus::Ready,
        approval_status: ApprovalStatus::None,
        assigned_count: assigned,
        max_surveyors: max,
        assigned_ids: Vec::new(),
        assigned_names: Vec::new(),
        latitude: -2.0,
        longitude: 118.0,
        total_biomass: 0.0,
        start_date: None,
        end_date: None,
        survey_date: None,
        description: None,
        plot_radius_m: None,
        created_at: None,
    }
}

#[test]
fn approved_approval_locks_the_point() {
    let mut p = ready_point(0, 5);
    p.approval_status = ApprovalStatus::Approved;
    assert!(p.is_locked());
}

#[test]
fn expired_survey_locks_the_point() {
    let mut p = ready_point(0, 5);
    p.survey_status = SurveyStatus::Expired;
    assert!(p.is_locked());
}

#[test]
fn submitted_point_is_not_locked() {
    let mut p = ready_point(0, 5);
    p.survey_status = SurveyStatus::Submitted;
    p.approval_status = ApprovalStatus::Submitted;
    assert!(!p.is_locked());
}

#[test]
fn capacity_check_counts_assignments() {
    assert!(!ready_point(3, 5).is_full());
    assert!(ready_point(5, 5).is_full());
    assert!(ready_point(6, 5).is_full());
}

#[test]
fn point_collection_deserializes_backend_shape() {
    let json = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [118.0, -2.0] },
            "properties": {
                "id": 12,
                "status": "open",
                "survey_status": "ready",
                "assigned_count": 1,
                "max_surveyors": 5,
                "assigned_ids": ["5f0c1e7a-1111-4f6e-9a63-0e2b6f1a2b3c"],
                "assigned_names": ["Ani"],
                "latitude": -2.0,
                "longitude": 118.0,
                "total_biomass": 12.5,
                "start_date": "2026-01-01",
                "end_date": null,
                "description": "riverside plot",
                "created_at": "2026-01-01T00:00:00"
            }
        }]
    });

    let coll: PointCollection = serde_json::from_value(json).unwrap();
    assert_eq!(coll.features.len(), 1);
    let p = &coll.features[0].properties;
    assert_eq!(p.id, 12);
    assert_eq!(p.survey_status, SurveyStatus::Ready);
    // Not present in the payload: defaults apply.
    assert_eq!(p.approval_status, ApprovalStatus::None);
    assert_eq!(p.assigned_names, vec!["Ani".to_owned()]);
    assert!((p.total_biomass - 12.5).abs() < f64::EPSILON);
}

#[test]
fn unknown_survey_status_falls_back() {
    let p: SurveyStatus = serde_json::from_value(serde_json::json!("archived")).unwrap();
    assert_eq!(p, SurveyStatus::Unknown);
}

#[test]
fn role_deserializes_lowercase() {
    assert_eq!(serde_json::from_value::<Role>(serde_json::json!("admin")).unwrap(), Role::Admin);
    assert_eq!(
        serde_json::from_value::<Role>(serde_json::json!("surveyor")).unwrap(),
        Role::Surveyor
    );
}

#[test]
fn nominatim_coordinates_parse_from_strings() {
    let place = NominatimPlace {
        lat: "-6.2".to_owned(),
        lon: "106.8".to_owned(),
        display_name: "Jakarta".to_owned(),
    };
    let ll = place.latlng().unwrap();
    assert!((ll.lat + 6.2).abs() < 1e-9);
    assert!((ll.lng - 106.8).abs() < 1e-9);

    let bad = NominatimPlace {
        lat: "n/a".to_owned(),
        lon: "106.8".to_owned(),
        display_name: String::new(),
    };
    assert!(bad.latlng().is_none());
}
