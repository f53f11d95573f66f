// Markup hooks and style variables shared between the page and the wasm module.

// Discovery
pub const PARALLAX_LAYER_SELECTOR: &str = "[data-parallax-layer]";
pub const SECTION_SELECTOR: &str = ".section-root";
pub const TILT_PANEL_SELECTOR: &str = "[data-tilt]";
pub const CROSSFADE_SELECTOR: &str = "[data-crossfade]";
pub const CROSSFADE_INPUT_SELECTOR: &str = "[data-crossfade-input]";
pub const HOPEFUL_PANE_SELECTOR: &str = "[data-pane=\"hopeful\"]";
pub const CAUTIONARY_PANE_SELECTOR: &str = "[data-pane=\"cautionary\"]";

// Dataset keys (camelCase form of the data-* attributes)
pub const SECTION_ID_KEY: &str = "section"; // data-section
pub const TILT_KEY_PREFIX: &str = "tilt"; // data-tilt-max-deg -> tiltMaxDeg

// Outputs
pub const WASH_COLOR_VAR: &str = "--wash-color";
pub const TILT_X_VAR: &str = "--tilt-x";
pub const TILT_Y_VAR: &str = "--tilt-y";
pub const TILT_SHADOW_VAR: &str = "--tilt-shadow-strength";
pub const MASK_POSITION_VAR: &str = "--mask-position";
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

// Preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
