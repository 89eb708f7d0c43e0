// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn carousel_defaults_form_valid_ranges() {
    assert!(CAROUSEL_RADIUS_PX > 0.0);
    assert!(CAROUSEL_MIN_SCALE > 0.0 && CAROUSEL_MIN_SCALE <= CAROUSEL_MAX_SCALE);
    assert!(CAROUSEL_MAX_SCALE <= 1.0);
    assert!(CAROUSEL_MIN_OPACITY >= 0.0 && CAROUSEL_MIN_OPACITY <= CAROUSEL_MAX_OPACITY);
    assert!(CAROUSEL_MAX_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn active_window_is_narrower_than_visibility_window() {
    // a card stops being active before neighbours get confused for it
    assert!(CAROUSEL_ACTIVE_WINDOW_FACTOR > 0.5 && CAROUSEL_ACTIVE_WINDOW_FACTOR < 1.0);
    assert!(CAROUSEL_VISIBILITY_WINDOW_STEPS > CAROUSEL_ACTIVE_WINDOW_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn section_thresholds_are_sane() {
    assert!(SECTION_MIN_ACTIVE_RATIO > 0.0 && SECTION_MIN_ACTIVE_RATIO < 1.0);
    assert!(SECTION_OBSERVER_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(SECTION_OBSERVER_THRESHOLDS.first(), Some(&0.0));
    assert_eq!(SECTION_OBSERVER_THRESHOLDS.last(), Some(&1.0));
    assert!(INITIAL_ACTIVE_BOTTOM_FRACTION < INITIAL_ACTIVE_TOP_FRACTION);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_and_timing_are_positive() {
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(SIDEBAR_EDGE_REVEAL_PX > 0.0 && SIDEBAR_TOP_ZONE_PX > 0.0);
    assert!(HERO_PARALLAX_FACTOR > 0.0 && HERO_PARALLAX_FACTOR < 1.0);
    assert!(RESIZE_DEBOUNCE_MS > 0 && INITIAL_HASH_DELAY_MS > 0);
    assert!(SMOOTH_SCROLL_DURATION_MS > 0.0);
}
