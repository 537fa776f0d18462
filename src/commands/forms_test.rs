use super::*;

#[test]
fn parse_months_drops_malformed_entries() {
    assert_eq!(parse_months("6,7,8"), vec![6, 7, 8]);
    assert_eq!(parse_months(" 1 , 2 ,x, 12 "), vec![1, 2, 12]);
    assert_eq!(parse_months(""), Vec::<u32>::new());
}

#[test]
fn year_and_cloud_fall_back_to_defaults() {
    assert_eq!(parse_year("2026"), 2026);
    assert_eq!(parse_year("abc"), DEFAULT_YEAR);
    assert_eq!(parse_cloud(" 35 "), 35);
    assert_eq!(parse_cloud(""), DEFAULT_CLOUD);
}

#[test]
fn parse_positive_rejects_zero_and_garbage() {
    assert_eq!(parse_positive("12.5"), Some(12.5));
    assert_eq!(parse_positive("0"), None);
    assert_eq!(parse_positive("-3"), None);
    assert_eq!(parse_positive("tall"), None);
}
