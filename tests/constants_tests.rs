// Host-side tests for markup hooks and style variable names.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn style_variables_are_custom_properties() {
    for var in [
        WASH_COLOR_VAR,
        TILT_X_VAR,
        TILT_Y_VAR,
        TILT_SHADOW_VAR,
        MASK_POSITION_VAR,
    ] {
        assert!(var.starts_with("--"), "{} is not a custom property", var);
    }
}

#[test]
fn dataset_keys_have_no_dashes() {
    assert!(!SECTION_ID_KEY.contains('-'));
    assert!(!TILT_KEY_PREFIX.contains('-'));
}

#[test]
fn reduced_motion_query_targets_reduce() {
    assert_eq!(REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
}

#[test]
fn selectors_are_distinct() {
    let selectors = [
        PARALLAX_LAYER_SELECTOR,
        SECTION_SELECTOR,
        TILT_PANEL_SELECTOR,
        CROSSFADE_SELECTOR,
        CROSSFADE_INPUT_SELECTOR,
        HOPEFUL_PANE_SELECTOR,
        CAUTIONARY_PANE_SELECTOR,
    ];
    for (i, a) in selectors.iter().enumerate() {
        for b in &selectors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
