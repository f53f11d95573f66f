// Shared tuning constants for the ambient controllers.

// Parallax
pub const HORIZONTAL_DRIFT_FACTOR: f32 = 0.04; // fraction of speed-scaled scroll turned into sideways drift

// Section wash
pub const DEFAULT_SECTION: &str = "home";
pub const VISIBILITY_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Section palette used when the page does not supply its own.
pub const DEFAULT_SECTION_COLORS: [(&str, &str); 6] = [
    ("home", "#10B981"),
    ("archive", "#4F46E5"),
    ("insights", "#F59E0B"),
    ("methods", "#64748B"),
    ("submit", "#06B6D4"),
    ("not-found", "#7F1D1D"),
];

// Pointer tilt
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TILT_BASE_SHADOW: f32 = 0.06;
pub const TILT_ACTIVE_SHADOW: f32 = 0.18;

// Story crossfade
pub const CROSSFADE_SNAP_POINT: f32 = 0.5; // static mode snaps to the nearer pane around this value
pub const PANE_INTERACTIVE_OPACITY: f32 = 0.4;
pub const PANE_HIDDEN_WHEN_OTHER_ABOVE: f32 = 0.6;
pub const PANE_HIDDEN_OPACITY: f32 = 0.05;
