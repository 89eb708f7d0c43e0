/// Scroll, navigation and carousel tuning constants.
///
/// These express intended behavior (thresholds, breakpoints, timing) and keep
/// magic numbers out of the DOM glue.
// Minimum intersection ratio a section needs before its nav item lights up
pub const SECTION_MIN_ACTIVE_RATIO: f64 = 0.12;

// Section observer thresholds and bottom margin (only the top half of the viewport counts)
pub const SECTION_OBSERVER_THRESHOLDS: [f64; 7] = [0.0, 0.05, 0.1, 0.25, 0.5, 0.75, 1.0];
pub const SECTION_OBSERVER_ROOT_MARGIN: &str = "0px 0px -50% 0px";

// Page-load heuristic: a section is initially active when its top is above
// this fraction of the viewport and its bottom is below the second one.
pub const INITIAL_ACTIVE_TOP_FRACTION: f64 = 0.5;
pub const INITIAL_ACTIVE_BOTTOM_FRACTION: f64 = 0.25;

// Carousel geometry defaults
pub const CAROUSEL_RADIUS_PX: f64 = 600.0;
pub const CAROUSEL_MAX_ROTATION_DEG: f64 = 120.0;
pub const CAROUSEL_MIN_SCALE: f64 = 0.5;
pub const CAROUSEL_MAX_SCALE: f64 = 1.0;
pub const CAROUSEL_MIN_OPACITY: f64 = 0.2;
pub const CAROUSEL_MAX_OPACITY: f64 = 1.0;

// Carousel styling
pub const CAROUSEL_BLUR_MAX_PX: f64 = 2.0; // blur of a card at the very back
pub const CAROUSEL_STACK_ORDER_SCALE: f64 = 100.0; // normalized depth -> z-index
pub const CAROUSEL_ACTIVE_WINDOW_FACTOR: f64 = 0.7; // fraction of one step
pub const CAROUSEL_VISIBILITY_WINDOW_STEPS: f64 = 2.0; // steps until min opacity

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const NAV_SCROLL_OFFSET_PX: f64 = 50.0;

// Sidebar auto-hide
pub const SIDEBAR_TOP_ZONE_PX: f64 = 20.0;
pub const SIDEBAR_EDGE_REVEAL_PX: f64 = 48.0;

// Hero parallax: content drifts at this fraction of the scroll distance
pub const HERO_PARALLAX_FACTOR: f64 = 0.2;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.08;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_TRANSITION: &str =
    "opacity 700ms cubic-bezier(0.22,1,0.36,1), transform 700ms cubic-bezier(0.22,1,0.36,1)";

// Timing (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 100;
pub const INITIAL_HASH_DELAY_MS: i32 = 80;
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 800.0;
