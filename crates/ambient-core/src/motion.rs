/// Whether a controller animates continuously or holds a snapped state.
///
/// `Static` is selected by the reduced-motion preference. Switching modes
/// re-initializes a controller's output instead of animating between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Animated,
    Static,
}

impl MotionMode {
    #[inline]
    pub fn from_reduced_motion(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            MotionMode::Static
        } else {
            MotionMode::Animated
        }
    }

    #[inline]
    pub fn is_static(self) -> bool {
        matches!(self, MotionMode::Static)
    }
}
