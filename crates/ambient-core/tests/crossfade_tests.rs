use ambient_core::{Crossfade, MotionMode};

#[test]
fn blend_is_rounded_and_clamped() {
    let mut fade = Crossfade::new();
    assert_eq!(fade.set_blend(0.456), 0.46);
    assert_eq!(fade.set_blend(1.7), 1.0);
    assert_eq!(fade.set_blend(-0.2), 0.0);
    assert_eq!(fade.set_blend(f32::NAN), 0.0);
}

#[test]
fn static_mode_snaps_to_nearer_pane() {
    let mut fade = Crossfade::new();
    fade.set_blend(0.5);
    assert_eq!(fade.effective(MotionMode::Static), 1.0);
    assert_eq!(fade.effective(MotionMode::Animated), 0.5);
    fade.set_blend(0.45);
    assert_eq!(fade.effective(MotionMode::Static), 0.0);
    assert_eq!(fade.mask_percent(MotionMode::Static), 0);
}

#[test]
fn pane_visibility_thresholds() {
    let mut fade = Crossfade::new();
    let (hopeful, cautionary) = fade.panes(MotionMode::Animated);
    assert_eq!(hopeful.opacity, 1.0);
    assert!(hopeful.interactive && !hopeful.hidden);
    assert!(!cautionary.interactive && cautionary.hidden);

    fade.set_blend(0.75);
    let (hopeful, cautionary) = fade.panes(MotionMode::Animated);
    assert!(!hopeful.interactive && hopeful.hidden);
    assert!(cautionary.interactive && !cautionary.hidden);
    assert_eq!(fade.mask_percent(MotionMode::Animated), 75);
}
