// Host-side tests for the pointer tilt controller.

use ambient_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Panel(Rc<RefCell<Vec<TiltState>>>);

impl Panel {
    fn last(&self) -> TiltState {
        *self.0.borrow().last().expect("panel was never written")
    }
    fn writes(&self) -> usize {
        self.0.borrow().len()
    }
}

impl TiltSurface for Panel {
    fn apply_tilt(&mut self, state: &TiltState) {
        self.0.borrow_mut().push(*state);
    }
}

const RECT: PanelRect = PanelRect {
    left: 100.0,
    top: 50.0,
    width: 400.0,
    height: 200.0,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn moved(
    tilt: &mut TiltController<Panel>,
    frames: &mut QueuedFrames,
    x: f32,
    y: f32,
) -> TiltState {
    tilt.pointer_move(RECT, Vec2::new(x, y), frames);
    for _ in frames.drain() {
        tilt.run_frame();
    }
    tilt.state()
}

#[test]
fn starts_at_rest() {
    let panel = Panel::default();
    let tilt = TiltController::new(panel.clone(), TiltConfig::default(), MotionMode::Animated);
    assert_eq!(panel.writes(), 1);
    assert_eq!(panel.last(), TiltState::rest(&TiltConfig::default()));
    assert!(approx(tilt.state().shadow, 0.06));
}

#[test]
fn pointer_position_maps_to_angles() {
    let panel = Panel::default();
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(panel.clone(), TiltConfig::default(), MotionMode::Animated);

    let center = moved(&mut tilt, &mut frames, 300.0, 150.0);
    assert_eq!((center.rotate_x, center.rotate_y), (0.0, 0.0));
    assert!(approx(center.shadow, 0.18));

    let top_right = moved(&mut tilt, &mut frames, 500.0, 50.0);
    assert!(approx(top_right.rotate_y, 5.0));
    assert!(approx(top_right.rotate_x, 5.0));

    let bottom_left = moved(&mut tilt, &mut frames, 100.0, 250.0);
    assert!(approx(bottom_left.rotate_y, -5.0));
    assert!(approx(bottom_left.rotate_x, -5.0));
    assert_eq!(panel.last(), bottom_left);
}

#[test]
fn ratios_outside_the_panel_are_not_clamped() {
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(Panel::default(), TiltConfig::default(), MotionMode::Animated);
    let state = moved(&mut tilt, &mut frames, 700.0, 150.0);
    assert!(approx(state.rotate_y, 10.0));
}

#[test]
fn leave_resets_exactly() {
    let panel = Panel::default();
    let mut frames = QueuedFrames::new();
    let config = TiltConfig {
        max_deg: 12.0,
        base_shadow: 0.1,
        active_shadow: 0.4,
    };
    let mut tilt = TiltController::new(panel.clone(), config, MotionMode::Animated);
    moved(&mut tilt, &mut frames, 480.0, 60.0);

    tilt.pointer_leave(&mut frames);
    let state = panel.last();
    assert_eq!(state.rotate_x, 0.0);
    assert_eq!(state.rotate_y, 0.0);
    assert_eq!(state.shadow, 0.1);
}

#[test]
fn leave_drops_a_queued_move() {
    let panel = Panel::default();
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(panel.clone(), TiltConfig::default(), MotionMode::Animated);

    assert!(tilt.pointer_move(RECT, Vec2::new(480.0, 60.0), &mut frames));
    assert!(!tilt.pointer_move(RECT, Vec2::new(490.0, 70.0), &mut frames));
    tilt.pointer_leave(&mut frames);
    assert_eq!(frames.pending(), 0);

    tilt.run_frame();
    assert_eq!(panel.last(), TiltState::rest(tilt.config()));
}

#[test]
fn static_mode_ignores_pointer() {
    let panel = Panel::default();
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(panel.clone(), TiltConfig::default(), MotionMode::Static);
    assert!(!tilt.wants_signals());
    assert!(!tilt.pointer_move(RECT, Vec2::new(480.0, 60.0), &mut frames));
    assert_eq!(frames.requested_total(), 0);
    assert_eq!(panel.writes(), 1);
}

#[test]
fn switching_to_static_resets_a_tilted_panel() {
    let panel = Panel::default();
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(panel.clone(), TiltConfig::default(), MotionMode::Animated);
    moved(&mut tilt, &mut frames, 480.0, 60.0);

    assert!(tilt.set_mode(MotionMode::Static, &mut frames));
    assert_eq!(panel.last(), TiltState::rest(tilt.config()));
    assert!(tilt.set_mode(MotionMode::Animated, &mut frames));
    assert!(tilt.wants_signals());
}

#[test]
fn degenerate_panel_tilts_nowhere() {
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(Panel::default(), TiltConfig::default(), MotionMode::Animated);
    tilt.pointer_move(PanelRect::new(0.0, 0.0, 0.0, 0.0), Vec2::new(30.0, 30.0), &mut frames);
    for _ in frames.drain() {
        tilt.run_frame();
    }
    assert_eq!((tilt.state().rotate_x, tilt.state().rotate_y), (0.0, 0.0));
}

#[test]
fn stop_detaches() {
    let mut frames = QueuedFrames::new();
    let mut tilt = TiltController::new(Panel::default(), TiltConfig::default(), MotionMode::Animated);
    tilt.pointer_move(RECT, Vec2::new(480.0, 60.0), &mut frames);
    tilt.stop(&mut frames);
    tilt.stop(&mut frames);
    assert_eq!(frames.pending(), 0);
    assert!(!tilt.wants_signals());
}

#[test]
fn config_reads_attributes() {
    let config = TiltConfig::from_attributes(|name| match name {
        "maxDeg" => Some("8".to_string()),
        "activeShadow" => Some(" 0.3 ".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.max_deg, 8.0);
    assert_eq!(config.base_shadow, 0.06);
    assert_eq!(config.active_shadow, 0.3);

    assert!(TiltConfig::from_attributes(|_| Some("steep".to_string())).is_err());
}
