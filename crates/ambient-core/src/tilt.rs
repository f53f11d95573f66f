//! Pointer-driven 3D tilt for a single panel.

use crate::constants::{TILT_ACTIVE_SHADOW, TILT_BASE_SHADOW, TILT_MAX_DEG};
use crate::error::{AmbientError, AmbientResult};
use crate::motion::MotionMode;
use crate::schedule::{FrameScheduler, FrameTicket};
use crate::surface::TiltSurface;
use glam::Vec2;

/// Tilt tuning. Out-of-range values are accepted as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_deg: f32,
    pub base_shadow: f32,
    pub active_shadow: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_deg: TILT_MAX_DEG,
            base_shadow: TILT_BASE_SHADOW,
            active_shadow: TILT_ACTIVE_SHADOW,
        }
    }
}

impl TiltConfig {
    /// Read `maxDeg`, `baseShadow` and `activeShadow`; missing ones keep
    /// their defaults.
    pub fn from_attributes<F>(lookup: F) -> AmbientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let fields: [(&'static str, &mut f32); 3] = [
            ("maxDeg", &mut config.max_deg),
            ("baseShadow", &mut config.base_shadow),
            ("activeShadow", &mut config.active_shadow),
        ];
        for (name, slot) in fields {
            if let Some(raw) = lookup(name).filter(|raw| !raw.trim().is_empty()) {
                *slot = raw
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| AmbientError::InvalidAttribute { name, value: raw })?;
            }
        }
        Ok(config)
    }
}

/// Rotation in degrees about each axis plus shadow strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub shadow: f32,
}

impl TiltState {
    pub fn rest(config: &TiltConfig) -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            shadow: config.base_shadow,
        }
    }
}

/// Panel bounds in the same coordinate space as pointer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position as a fraction of the panel, unclamped.
    /// A degenerate panel reports its center.
    pub fn normalize(&self, pointer: Vec2) -> Vec2 {
        if self.width > 0.0 && self.height > 0.0 {
            Vec2::new(
                (pointer.x - self.left) / self.width,
                (pointer.y - self.top) / self.height,
            )
        } else {
            Vec2::splat(0.5)
        }
    }
}

/// Tilt toward `pointer`: right of center turns about Y, above center
/// turns about X.
pub fn tilt_for_pointer(rect: &PanelRect, pointer: Vec2, config: &TiltConfig) -> TiltState {
    let ratio = rect.normalize(pointer);
    TiltState {
        rotate_x: (0.5 - ratio.y) * config.max_deg * 2.0,
        rotate_y: (ratio.x - 0.5) * config.max_deg * 2.0,
        shadow: config.active_shadow,
    }
}

pub struct TiltController<S> {
    surface: S,
    config: TiltConfig,
    mode: MotionMode,
    state: TiltState,
    pending: Option<(PanelRect, Vec2)>,
    frame: FrameTicket,
    active: bool,
}

impl<S: TiltSurface> TiltController<S> {
    /// Attach to `surface`; the panel starts at rest.
    pub fn new(surface: S, config: TiltConfig, mode: MotionMode) -> Self {
        let mut controller = Self {
            surface,
            config,
            mode,
            state: TiltState::rest(&config),
            pending: None,
            frame: FrameTicket::new(),
            active: true,
        };
        controller.reset();
        controller
    }

    /// True when pointer listeners should be attached.
    #[inline]
    pub fn wants_signals(&self) -> bool {
        self.active && !self.mode.is_static()
    }

    pub fn pointer_move(
        &mut self,
        rect: PanelRect,
        pointer: Vec2,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if !self.wants_signals() {
            return false;
        }
        self.pending = Some((rect, pointer));
        self.frame.schedule(scheduler)
    }

    pub fn run_frame(&mut self) {
        if !self.frame.complete() || !self.wants_signals() {
            return;
        }
        if let Some((rect, pointer)) = self.pending.take() {
            self.state = tilt_for_pointer(&rect, pointer, &self.config);
            self.surface.apply_tilt(&self.state);
        }
    }

    /// Pointer left or was cancelled: drop any queued move and rest.
    pub fn pointer_leave(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.frame.cancel(scheduler);
        self.pending = None;
        self.reset();
    }

    pub fn set_mode(&mut self, mode: MotionMode, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.frame.cancel(scheduler);
        self.pending = None;
        self.reset();
        true
    }

    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.frame.cancel(scheduler);
        self.pending = None;
        self.active = false;
    }

    #[inline]
    pub fn state(&self) -> TiltState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn reset(&mut self) {
        self.state = TiltState::rest(&self.config);
        self.surface.apply_tilt(&self.state);
    }
}
