// Host-side tests for the scroll-driven carousel mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
}

fn three_cards() -> CarouselGeometryConfig {
    CarouselGeometryConfig::new(3, 600.0, 120.0, 0.5, 1.0, 0.2, 1.0).unwrap()
}

#[test]
fn angle_step_spreads_rotation_over_gaps() {
    assert_close(three_cards().angle_step(), 60.0);
    let five = CarouselGeometryConfig::with_card_count(5).unwrap();
    assert_close(five.angle_step(), 30.0);
}

#[test]
fn single_card_uses_full_rotation_as_step() {
    let config = CarouselGeometryConfig::new(1, 600.0, 120.0, 0.5, 1.0, 0.2, 1.0).unwrap();
    assert_close(config.angle_step(), 120.0);
    let frame = compute_frame(0.5, &config, &CarouselTuning::default());
    assert_eq!(frame.len(), 1);
    assert!(frame[0].x.is_finite() && frame[0].z.is_finite());
    assert_close(frame[0].current_angle_deg, -60.0);
}

#[test]
fn front_card_at_rest() {
    let frame = compute_frame(0.0, &three_cards(), &CarouselTuning::default());
    let c0 = &frame[0];
    assert_close(c0.current_angle_deg, 0.0);
    assert!(c0.x.abs() < EPS);
    assert!(c0.z.abs() < EPS);
    assert_close(c0.scale, 1.0);
    assert_close(c0.opacity, 1.0);
    assert_close(c0.blur_px, 0.0);
    assert_eq!(c0.stack_order, 100);
    assert!(c0.is_active);
}

#[test]
fn worked_example_second_card() {
    let frame = compute_frame(0.0, &three_cards(), &CarouselTuning::default());
    let c1 = &frame[1];
    assert_close(c1.current_angle_deg, 60.0);
    assert!((c1.x - 519.6).abs() < 0.05);
    assert_close(c1.z, -300.0);
    assert_close(c1.scale, 0.75);
    // 60 from centre over a 120 window
    assert_close(c1.opacity, 0.6);
    assert_close(c1.blur_px, 1.0);
    assert_eq!(c1.stack_order, 50);
    assert!(!c1.is_active);
    assert_close(c1.rotation_deg, -60.0);
}

#[test]
fn full_progress_rotates_every_card_by_max_rotation() {
    let config = three_cards();
    let tuning = CarouselTuning::default();
    let start = compute_frame(0.0, &config, &tuning);
    let end = compute_frame(1.0, &config, &tuning);
    for (a, b) in start.iter().zip(&end) {
        assert_close(a.current_angle_deg - b.current_angle_deg, config.max_rotation_deg());
    }
    // last card ends up in front
    assert!(end[2].is_active);
    assert_close(end[2].scale, 1.0);
}

#[test]
fn angle_decreases_monotonically_with_progress() {
    let config = three_cards();
    let tuning = CarouselTuning::default();
    for i in 0..config.card_count() {
        let mut prev = f64::INFINITY;
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            let angle = compute_card(i, p, &config, &tuning).current_angle_deg;
            assert!(angle < prev);
            prev = angle;
        }
    }
}

#[test]
fn exactly_one_card_active_at_card_positions() {
    let config = CarouselGeometryConfig::with_card_count(4).unwrap();
    let tuning = CarouselTuning::default();
    for k in 0..4 {
        let p = k as f64 / 3.0;
        let frame = compute_frame(p, &config, &tuning);
        let active: Vec<usize> = frame.iter().filter(|t| t.is_active).map(|t| t.index).collect();
        assert_eq!(active, vec![k]);
    }
}

#[test]
fn styling_stays_within_configured_ranges() {
    let config = CarouselGeometryConfig::with_card_count(6).unwrap();
    let tuning = CarouselTuning::default();
    for step in 0..=50 {
        let p = step as f64 / 50.0;
        for t in compute_frame(p, &config, &tuning) {
            assert!(t.scale >= config.min_scale() - EPS && t.scale <= config.max_scale() + EPS);
            assert!(t.opacity >= config.min_opacity() - EPS && t.opacity <= config.max_opacity() + EPS);
            assert!(t.blur_px >= 0.0 && t.blur_px <= tuning.blur_max_px + EPS);
            assert!((0..=100).contains(&t.stack_order));
        }
    }
}

#[test]
fn progress_is_clamped() {
    let config = three_cards();
    let tuning = CarouselTuning::default();
    assert_eq!(
        compute_frame(-0.5, &config, &tuning),
        compute_frame(0.0, &config, &tuning)
    );
    assert_eq!(
        compute_frame(1.7, &config, &tuning),
        compute_frame(1.0, &config, &tuning)
    );
    assert_eq!(
        compute_frame(f64::NAN, &config, &tuning),
        compute_frame(0.0, &config, &tuning)
    );
}

#[test]
fn tuning_constants_are_configurable() {
    let config = three_cards();
    let tuning = CarouselTuning {
        blur_max_px: 6.0,
        stack_order_scale: 10.0,
        active_window_factor: 1.1,
        visibility_window_steps: 1.0,
    };
    let c1 = compute_card(1, 0.0, &config, &tuning);
    assert_close(c1.blur_px, 3.0);
    assert_eq!(c1.stack_order, 5);
    assert!(c1.is_active);
    // one step away with a one-step window fades fully
    assert_close(c1.opacity, config.min_opacity());
}

#[test]
fn invalid_configs_are_rejected() {
    assert_eq!(
        CarouselGeometryConfig::new(0, 600.0, 120.0, 0.5, 1.0, 0.2, 1.0),
        Err(ConfigError::NoCards)
    );
    assert!(matches!(
        CarouselGeometryConfig::new(3, 0.0, 120.0, 0.5, 1.0, 0.2, 1.0),
        Err(ConfigError::Radius(_))
    ));
    assert!(matches!(
        CarouselGeometryConfig::new(3, f64::NAN, 120.0, 0.5, 1.0, 0.2, 1.0),
        Err(ConfigError::Radius(_))
    ));
    assert!(matches!(
        CarouselGeometryConfig::new(3, 600.0, f64::INFINITY, 0.5, 1.0, 0.2, 1.0),
        Err(ConfigError::Rotation(_))
    ));
    assert!(matches!(
        CarouselGeometryConfig::new(3, 600.0, 120.0, 0.0, 1.0, 0.2, 1.0),
        Err(ConfigError::ScaleRange { .. })
    ));
    assert!(matches!(
        CarouselGeometryConfig::new(3, 600.0, 120.0, 0.8, 0.6, 0.2, 1.0),
        Err(ConfigError::ScaleRange { .. })
    ));
    assert!(matches!(
        CarouselGeometryConfig::new(3, 600.0, 120.0, 0.5, 1.0, 0.2, 1.5),
        Err(ConfigError::OpacityRange { .. })
    ));
}

#[test]
fn css_strings_use_display_precision() {
    let frame = compute_frame(0.0, &three_cards(), &CarouselTuning::default());
    assert_eq!(
        frame[1].css_transform(),
        "translate(-50%, -50%) translate3d(519.6px, 0, -300.0px) rotateY(-60.0deg) scale(0.750)"
    );
    assert_eq!(frame[1].css_opacity(), "0.600");
    assert_eq!(frame[1].css_filter(), "blur(1.0px)");
    assert_eq!(
        initial_css_transform(&three_cards()),
        "translate(-50%, -50%) translateZ(-600px) scale(0.5)"
    );
}
