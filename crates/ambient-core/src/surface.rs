//! Output seams between the controllers and whatever renders them.

use crate::color::Rgb;
use crate::parallax::LayerTransform;
use crate::tilt::TiltState;
use std::cell::Cell;
use std::rc::Rc;

/// A renderable layer that accepts a combined translate + scale transform.
pub trait LayerSurface {
    fn apply_transform(&mut self, transform: &LayerTransform);
}

/// A panel that exposes tilt angles and shadow strength to its styling.
pub trait TiltSurface {
    fn apply_tilt(&mut self, state: &TiltState);
}

/// Destination of the blended ambient color.
pub trait AmbientOutput {
    fn write_color(&mut self, color: Rgb);
    /// Mirror the reduced-motion preference as a document-level flag.
    fn set_reduced_motion_flag(&mut self, reduced: bool);
}

/// Shared ambient state owned by the page shell and handed to the blender.
///
/// Cloning yields another handle onto the same slot. Readers may call
/// [`AmbientSlot::color`] at any time; the blender is the only writer.
#[derive(Clone, Debug, Default)]
pub struct AmbientSlot {
    inner: Rc<SlotInner>,
}

#[derive(Debug, Default)]
struct SlotInner {
    color: Cell<Option<Rgb>>,
    reduced_motion: Cell<bool>,
    writes: Cell<u64>,
}

impl AmbientSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written color, `None` before the first blend.
    pub fn color(&self) -> Option<Rgb> {
        self.inner.color.get()
    }

    pub fn reduced_motion_flag(&self) -> bool {
        self.inner.reduced_motion.get()
    }

    pub fn write_count(&self) -> u64 {
        self.inner.writes.get()
    }
}

impl AmbientOutput for AmbientSlot {
    fn write_color(&mut self, color: Rgb) {
        self.inner.color.set(Some(color));
        self.inner.writes.set(self.inner.writes.get() + 1);
    }

    fn set_reduced_motion_flag(&mut self, reduced: bool) {
        self.inner.reduced_motion.set(reduced);
    }
}
