// Host-side tests for style string formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use ambient_core::{LayerTransform, Rgb, TiltState};
use glam::Vec2;
use style::*;

#[test]
fn layer_transform_is_translate_then_scale() {
    let t = LayerTransform {
        translate: Vec2::new(0.0, -340.0),
        scale: 1.4,
    };
    assert_eq!(layer_transform(&t), "translate3d(0px, -340px, 0) scale(1.4)");

    let t = LayerTransform {
        translate: Vec2::new(10.5, 20.0),
        scale: 0.75,
    };
    assert_eq!(layer_transform(&t), "translate3d(10.5px, 20px, 0) scale(0.75)");
}

#[test]
fn tilt_angles_use_two_decimals() {
    let (x, y, shadow) = tilt_vars(&TiltState {
        rotate_x: 2.5,
        rotate_y: -5.0,
        shadow: 0.18,
    });
    assert_eq!(x, "2.50deg");
    assert_eq!(y, "-5.00deg");
    assert_eq!(shadow, "0.18");
}

#[test]
fn rest_tilt_is_zero_degrees() {
    let (x, y, shadow) = tilt_vars(&TiltState {
        rotate_x: 0.0,
        rotate_y: 0.0,
        shadow: 0.06,
    });
    assert_eq!((x.as_str(), y.as_str(), shadow.as_str()), ("0.00deg", "0.00deg", "0.06"));
}

#[test]
fn wash_color_is_lowercase_hex() {
    assert_eq!(wash_color(Rgb::new(0x10, 0xB9, 0x81)), "#10b981");
}

#[test]
fn mask_position_is_percent_offset() {
    assert_eq!(mask_position(0), "0% 0");
    assert_eq!(mask_position(75), "75% 0");
}

#[test]
fn dataset_keys_are_camel_cased() {
    assert_eq!(dataset_key("tilt", "maxDeg"), "tiltMaxDeg");
    assert_eq!(dataset_key("tilt", "baseShadow"), "tiltBaseShadow");
    assert_eq!(dataset_key("tilt", ""), "tilt");
}
