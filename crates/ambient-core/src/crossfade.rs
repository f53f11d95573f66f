//! Slider-driven crossfade between the two narrative panes of a story card.

use crate::constants::{
    CROSSFADE_SNAP_POINT, PANE_HIDDEN_OPACITY, PANE_HIDDEN_WHEN_OTHER_ABOVE,
    PANE_INTERACTIVE_OPACITY,
};
use crate::motion::MotionMode;

/// Presentation of one pane at a given blend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneState {
    pub opacity: f32,
    pub interactive: bool,
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Crossfade {
    blend: f32,
}

impl Crossfade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a slider value, rounded to two decimals and clamped to [0, 1].
    pub fn set_blend(&mut self, value: f32) -> f32 {
        let rounded = (value * 100.0).round() / 100.0;
        self.blend = if rounded.is_nan() {
            0.0
        } else {
            rounded.clamp(0.0, 1.0)
        };
        self.blend
    }

    #[inline]
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Blend actually shown: static mode snaps to whichever pane is nearer.
    pub fn effective(&self, mode: MotionMode) -> f32 {
        match mode {
            MotionMode::Static if self.blend >= CROSSFADE_SNAP_POINT => 1.0,
            MotionMode::Static => 0.0,
            MotionMode::Animated => self.blend,
        }
    }

    /// `(hopeful, cautionary)` pane states.
    pub fn panes(&self, mode: MotionMode) -> (PaneState, PaneState) {
        let cautionary = self.effective(mode);
        let hopeful = 1.0 - cautionary;
        (
            PaneState {
                opacity: hopeful,
                interactive: hopeful >= PANE_INTERACTIVE_OPACITY,
                hidden: cautionary > PANE_HIDDEN_WHEN_OTHER_ABOVE,
            },
            PaneState {
                opacity: cautionary,
                interactive: cautionary > PANE_INTERACTIVE_OPACITY,
                hidden: cautionary <= PANE_HIDDEN_OPACITY,
            },
        )
    }

    /// Horizontal mask position, in percent, for the cautionary pane.
    pub fn mask_percent(&self, mode: MotionMode) -> u32 {
        (self.effective(mode) * 100.0).round() as u32
    }
}
