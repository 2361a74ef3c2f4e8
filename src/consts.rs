//! Shared numeric and style defaults for the drawing surface.

// ── Animation ───────────────────────────────────────────────────

/// Points revealed per millisecond when animating a history change.
pub const DEFAULT_ANIMATION_SPEED: f64 = 2.0;

/// Factor applied to one point's worth of time when priming a new
/// animation, so the very first frame reveals at least one point.
pub const ANIMATION_PRIME_FACTOR: f64 = 1.01;

// ── Brush ───────────────────────────────────────────────────────

/// Distance the brush trails behind the pointer, in CSS pixels.
pub const DEFAULT_LAZY_RADIUS: f64 = 12.0;

/// Brush radius in pixels; strokes are drawn twice this wide.
pub const DEFAULT_BRUSH_RADIUS: f64 = 10.0;

pub const DEFAULT_BRUSH_COLOR: &str = "#444";
pub const DEFAULT_CATENARY_COLOR: &str = "#0a0302";
pub const DEFAULT_GRID_COLOR: &str = "rgba(150,150,150,0.17)";

// ── Interface layer ─────────────────────────────────────────────

/// Radius of the dot drawn under the raw pointer.
pub const POINTER_DOT_RADIUS: f64 = 4.0;

/// Radius of the dot drawn at the centre of the brush preview.
pub const BRUSH_DOT_RADIUS: f64 = 2.0;

/// Line width of the catenary connector.
pub const CATENARY_WIDTH: f64 = 2.0;

/// Dash pattern (on, off) of the catenary connector.
pub const CATENARY_DASH: [f64; 2] = [2.0, 4.0];

/// Number of straight segments used to approximate a slack catenary.
pub const CATENARY_SEGMENTS: usize = 50;

// ── Grid layer ──────────────────────────────────────────────────

/// Spacing between grid lines in pixels.
pub const GRID_SIZE: f64 = 25.0;

/// Grid line width in pixels.
pub const GRID_LINE_WIDTH: f64 = 0.5;
