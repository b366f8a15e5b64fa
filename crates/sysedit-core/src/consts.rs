/// Smallest zoom factor the editor viewport allows.
pub const MIN_ZOOM: f64 = 0.25;

/// Largest zoom factor the editor viewport allows.
pub const MAX_ZOOM: f64 = 2.5;

/// Zoom step used at or above 1x (strictly above 1x when zooming out).
pub const ZOOM_STEP_COARSE: f64 = 0.5;

/// Zoom step used below 1x.
pub const ZOOM_STEP_FINE: f64 = 0.25;

/// A press released sooner than this (ms) counts as quick.
pub const DEFAULT_DRAG_TIME_THRESHOLD_MS: u64 = 300;

/// A press that accumulated less movement than this (px) counts as still.
pub const DEFAULT_MOVE_THRESHOLD_PX: f64 = 10.0;

/// Screen-space radius around an object's centre that picks it on click.
pub const DEFAULT_PICK_RADIUS_PX: f64 = 15.0;

/// Scroll distance (points) that counts as one wheel notch.
pub const WHEEL_NOTCH_PX: f64 = 50.0;

/// Fallback host display size when the host cannot report one.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1280;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 800;

/// Status code handed back to scripts on success.
pub const SCRIPT_STATUS_OK: i32 = 0;

/// Status code handed back to scripts on failure.
pub const SCRIPT_STATUS_FAILED: i32 = -1;
