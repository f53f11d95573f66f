use ambient_core::{LayerTransform, Rgb, TiltState};

/// CSS `transform` value for a parallax layer.
#[inline]
pub fn layer_transform(t: &LayerTransform) -> String {
    format!(
        "translate3d({}px, {}px, 0) scale({})",
        t.translate.x, t.translate.y, t.scale
    )
}

/// `(--tilt-x, --tilt-y, --tilt-shadow-strength)` values.
#[inline]
pub fn tilt_vars(state: &TiltState) -> (String, String, String) {
    (
        format!("{:.2}deg", state.rotate_x),
        format!("{:.2}deg", state.rotate_y),
        format!("{}", state.shadow),
    )
}

#[inline]
pub fn wash_color(color: Rgb) -> String {
    color.to_hex()
}

#[inline]
pub fn mask_position(percent: u32) -> String {
    format!("{}% 0", percent)
}

/// Dataset key for a prefixed attribute: (`tilt`, `maxDeg`) -> `tiltMaxDeg`.
pub fn dataset_key(prefix: &str, name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_ascii_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}
