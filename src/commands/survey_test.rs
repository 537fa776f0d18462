use uuid::Uuid;

use super::{build_measurement, MeasurementForm};
use crate::util::geo::LatLng;

fn base_form() -> MeasurementForm {
    MeasurementForm {
        species_id: Some(7),
        latitude: String::new(),
        longitude: String::new(),
        dbh: "32.5".to_owned(),
        height: "18".to_owned(),
        notes: "  leaning north  ".to_owned(),
    }
}

fn point() -> LatLng {
    LatLng::new(-2.5, 118.25)
}

#[test]
fn blank_coordinates_default_to_the_point() {
    let m = build_measurement(Uuid::new_v4(), point(), &base_form()).unwrap();
    assert!((m.latitude - -2.5).abs() < f64::EPSILON);
    assert!((m.longitude - 118.25).abs() < f64::EPSILON);
}

#[test]
fn explicit_coordinates_win() {
    let mut form = base_form();
    form.latitude = "-2.6".to_owned();
    form.longitude = "118.3".to_owned();
    let m = build_measurement(Uuid::new_v4(), point(), &form).unwrap();
    assert!((m.latitude - -2.6).abs() < f64::EPSILON);
    assert!((m.longitude - 118.3).abs() < f64::EPSILON);
}

#[test]
fn missing_species_is_rejected() {
    let mut form = base_form();
    form.species_id = None;
    assert_eq!(
        build_measurement(Uuid::new_v4(), point(), &form),
        Err("Select a species")
    );
}

#[test]
fn non_positive_dbh_is_rejected() {
    for dbh in ["0", "-3", "abc", ""] {
        let mut form = base_form();
        form.dbh = dbh.to_owned();
        assert!(build_measurement(Uuid::new_v4(), point(), &form).is_err(), "dbh {dbh:?}");
    }
}

#[test]
fn height_is_optional_but_must_be_positive_when_given() {
    let mut form = base_form();
    form.height = String::new();
    let m = build_measurement(Uuid::new_v4(), point(), &form).unwrap();
    assert_eq!(m.height, None);

    form.height = "-1".to_owned();
    assert!(build_measurement(Uuid::new_v4(), point(), &form).is_err());
}

#[test]
fn notes_are_trimmed() {
    let m = build_measurement(Uuid::new_v4(), point(), &base_form()).unwrap();
    assert_eq!(m.notes, "leaning north");
}
