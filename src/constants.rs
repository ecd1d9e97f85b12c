/// Markup and styling contract for the orbit widget.
///
/// Selectors, data attributes and CSS values the front-end depends on live
/// here so the page template and the code stay in one place.
// Elements
pub const STAGE_SELECTOR: &str = ".orbit-stage";
pub const ITEM_SELECTOR: &str = ".orbit-item";

// Per-item dataset keys (`data-ring`, `data-index`, `data-count`)
pub const DATA_RING: &str = "ring";
pub const DATA_INDEX: &str = "index";
pub const DATA_COUNT: &str = "count";

// Per-stage overrides (`data-drag-sensitivity`, `data-inertia-decay`)
pub const DATA_DRAG_SENSITIVITY: &str = "dragSensitivity";
pub const DATA_INERTIA_DECAY: &str = "inertiaDecay";

// Platform preference checked before starting
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Items are anchored at the stage centre and moved with a transform
pub const ITEM_ANCHOR: &str = "50%";
// Stage suppresses browser pan/zoom so drags are not stolen
pub const STAGE_TOUCH_ACTION: &str = "none";
