use super::constants::*;
use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("carousel needs at least one card")]
    NoCards,
    #[error("radius must be a positive finite length, got {0}")]
    Radius(f64),
    #[error("max rotation must be finite, got {0}")]
    Rotation(f64),
    #[error("scale range must satisfy 0 < min <= max <= 1, got {min}..{max}")]
    ScaleRange { min: f64, max: f64 },
    #[error("opacity range must satisfy 0 <= min <= max <= 1, got {min}..{max}")]
    OpacityRange { min: f64, max: f64 },
}

/// Validated, immutable carousel geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselGeometryConfig {
    card_count: usize,
    radius: f64,
    max_rotation_deg: f64,
    min_scale: f64,
    max_scale: f64,
    min_opacity: f64,
    max_opacity: f64,
    angle_step: f64,
}

impl CarouselGeometryConfig {
    pub fn new(
        card_count: usize,
        radius: f64,
        max_rotation_deg: f64,
        min_scale: f64,
        max_scale: f64,
        min_opacity: f64,
        max_opacity: f64,
    ) -> Result<Self, ConfigError> {
        if card_count == 0 {
            return Err(ConfigError::NoCards);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::Radius(radius));
        }
        if !max_rotation_deg.is_finite() {
            return Err(ConfigError::Rotation(max_rotation_deg));
        }
        if !(min_scale > 0.0 && min_scale <= max_scale && max_scale <= 1.0) {
            return Err(ConfigError::ScaleRange {
                min: min_scale,
                max: max_scale,
            });
        }
        if !(min_opacity >= 0.0 && min_opacity <= max_opacity && max_opacity <= 1.0) {
            return Err(ConfigError::OpacityRange {
                min: min_opacity,
                max: max_opacity,
            });
        }
        let angle_step = max_rotation_deg / card_count.saturating_sub(1).max(1) as f64;
        Ok(Self {
            card_count,
            radius,
            max_rotation_deg,
            min_scale,
            max_scale,
            min_opacity,
            max_opacity,
            angle_step,
        })
    }

    /// Default site geometry for `card_count` cards.
    pub fn with_card_count(card_count: usize) -> Result<Self, ConfigError> {
        Self::new(
            card_count,
            CAROUSEL_RADIUS_PX,
            CAROUSEL_MAX_ROTATION_DEG,
            CAROUSEL_MIN_SCALE,
            CAROUSEL_MAX_SCALE,
            CAROUSEL_MIN_OPACITY,
            CAROUSEL_MAX_OPACITY,
        )
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn max_rotation_deg(&self) -> f64 {
        self.max_rotation_deg
    }
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }
    pub fn min_opacity(&self) -> f64 {
        self.min_opacity
    }
    pub fn max_opacity(&self) -> f64 {
        self.max_opacity
    }
    /// Angular spacing between neighbouring cards, in degrees.
    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }
}

/// Stylistic knobs applied on top of the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselTuning {
    pub blur_max_px: f64,
    pub stack_order_scale: f64,
    /// A card is active within this fraction of one angle step from the front.
    pub active_window_factor: f64,
    /// Opacity fades to its minimum over this many angle steps from the front.
    pub visibility_window_steps: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            blur_max_px: CAROUSEL_BLUR_MAX_PX,
            stack_order_scale: CAROUSEL_STACK_ORDER_SCALE,
            active_window_factor: CAROUSEL_ACTIVE_WINDOW_FACTOR,
            visibility_window_steps: CAROUSEL_VISIBILITY_WINDOW_STEPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardTransform {
    pub index: usize,
    pub current_angle_deg: f64,
    pub x: f64,
    pub z: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub stack_order: i32,
    pub is_active: bool,
}

impl CardTransform {
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate3d({:.1}px, 0, {:.1}px) rotateY({:.1}deg) scale({:.3})",
            self.x, self.z, self.rotation_deg, self.scale
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn css_filter(&self) -> String {
        format!("blur({:.1}px)", self.blur_px)
    }
}

/// Placeholder transform applied before the first frame so cards do not flash
/// at full size.
pub fn initial_css_transform(config: &CarouselGeometryConfig) -> String {
    format!(
        "translate(-50%, -50%) translateZ(-{}px) scale({})",
        config.radius, config.min_scale
    )
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Transform for card `index` at scroll `progress` (clamped to `[0, 1]`).
pub fn compute_card(
    index: usize,
    progress: f64,
    config: &CarouselGeometryConfig,
    tuning: &CarouselTuning,
) -> CardTransform {
    let progress = clamp_progress(progress);
    let step = config.angle_step;
    let base_angle = index as f64 * step;
    let current_angle = base_angle - progress * config.max_rotation_deg;

    let (sin, cos) = current_angle.to_radians().sin_cos();
    let pos = DVec2::new(sin, cos - 1.0) * config.radius;

    // Past a quarter turn the arc dips below -radius; keep depth-driven
    // styling inside its configured ranges.
    let normalized_z = ((pos.y + config.radius) / config.radius).clamp(0.0, 1.0);
    let scale = lerp(config.min_scale, config.max_scale, normalized_z);

    let angle_from_center = current_angle.abs();
    let visibility_window = step.abs() * tuning.visibility_window_steps;
    let opacity_factor = if visibility_window > 0.0 {
        (1.0 - angle_from_center / visibility_window).max(0.0)
    } else if angle_from_center == 0.0 {
        1.0
    } else {
        0.0
    };
    let opacity = lerp(config.min_opacity, config.max_opacity, opacity_factor);

    CardTransform {
        index,
        current_angle_deg: current_angle,
        x: pos.x,
        z: pos.y,
        rotation_deg: -current_angle,
        scale,
        opacity,
        blur_px: (1.0 - normalized_z) * tuning.blur_max_px,
        stack_order: (normalized_z * tuning.stack_order_scale).round() as i32,
        is_active: angle_from_center < step.abs() * tuning.active_window_factor,
    }
}

/// One transform per card, in index order.
pub fn compute_frame(
    progress: f64,
    config: &CarouselGeometryConfig,
    tuning: &CarouselTuning,
) -> Vec<CardTransform> {
    (0..config.card_count)
        .map(|i| compute_card(i, progress, config, tuning))
        .collect()
}
