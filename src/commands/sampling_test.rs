use super::{mode_hint, parse_spacing, spacing_valid, MIN_SPACING_M};
use crate::state::ui::SamplingMode;

// ============================================================================
// Spacing validation
// ============================================================================

#[test]
fn spacing_at_minimum_is_valid() {
    assert!(spacing_valid(MIN_SPACING_M));
}

#[test]
fn spacing_below_minimum_is_rejected() {
    assert!(!spacing_valid(9));
    assert!(!spacing_valid(0));
}

#[test]
fn parse_spacing_accepts_trimmed_numbers() {
    assert_eq!(parse_spacing(" 25 "), Some(25));
    assert_eq!(parse_spacing("10"), Some(10));
}

#[test]
fn parse_spacing_rejects_small_and_malformed_input() {
    assert_eq!(parse_spacing("9"), None);
    assert_eq!(parse_spacing("-5"), None);
    assert_eq!(parse_spacing("abc"), None);
    assert_eq!(parse_spacing(""), None);
}

// ============================================================================
// Mode hints
// ============================================================================

#[test]
fn mode_hint_matches_mode() {
    assert_eq!(mode_hint(SamplingMode::Grid), "Not calculated yet");
    assert_eq!(mode_hint(SamplingMode::Manual), "Click the map to add points");
    assert_eq!(mode_hint(SamplingMode::Count), "This mode is not available yet");
}
