// Tuning defaults for the orbit motion model. Front-ends override these through
// `OrbitConfig`; keeping them here keeps magic numbers out of the code.

// Ring layout: radius as a fraction of the stage's shorter side, speed in rad/s
pub const OUTER_RADIUS: f64 = 0.53;
pub const OUTER_AUTO_SPEED: f64 = 0.108;
pub const MIDDLE_RADIUS: f64 = 0.38;
pub const MIDDLE_AUTO_SPEED: f64 = 0.144;
pub const INNER_RADIUS: f64 = 0.24;
pub const INNER_AUTO_SPEED: f64 = 0.18;
pub const INNER_DRAG_MULTIPLIER: f64 = 0.8; // inner ring lags the pointer slightly

pub const FALLBACK_RING: &str = "outer";

// Drag and inertia
pub const DRAG_SENSITIVITY: f64 = 1.2;
pub const INERTIA_DECAY: f64 = 0.92; // per reference frame
pub const MIN_VELOCITY: f64 = 0.03; // rad/s, below this inertia snaps to zero
pub const MIN_DRAG_DT_SEC: f64 = 1.0 / 240.0; // floor for pointer sample spacing
pub const MAX_DRAG_VELOCITY: f64 = 12.0; // rad/s, flick cap
pub const RELEASE_HOLD_SEC: f64 = 0.1; // pointer still this long before release: no fling

// Frame timing
pub const REFERENCE_FRAME_SEC: f64 = 1.0 / 60.0;
pub const MAX_FRAME_DT_SEC: f64 = 0.25; // stalls longer than this are not replayed

// Depth parallax (z = sin(angle) in [-1, 1])
pub const BASE_SCALE: f32 = 0.8;
pub const SCALE_SPAN: f32 = 0.2;
pub const BASE_OPACITY: f32 = 0.65;
pub const OPACITY_SPAN: f32 = 0.35;
pub const BASE_Z_INDEX: i32 = 50;
pub const Z_INDEX_SPAN: f32 = 50.0;
