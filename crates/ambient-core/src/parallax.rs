//! Depth layers that drift, slide and shrink as the page scrolls.

use crate::constants::HORIZONTAL_DRIFT_FACTOR;
use crate::error::{AmbientError, AmbientResult};
use crate::motion::MotionMode;
use crate::schedule::{FrameScheduler, FrameTicket};
use crate::surface::LayerSurface;
use glam::Vec2;

/// Per-layer configuration.
///
/// Values are not validated: a `min_scale` above `scale` or a negative scale
/// produces whatever transform the arithmetic yields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerDescriptor {
    /// Fraction of the scroll offset fed into sideways drift.
    pub speed: f32,
    pub scale: f32,
    pub min_scale: f32,
    /// Vertical offsets in px at the top and the bottom of the page.
    pub start_offset: f32,
    pub end_offset: f32,
}

impl Default for LayerDescriptor {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl LayerDescriptor {
    pub fn new(speed: f32, scale: f32) -> Self {
        Self {
            speed,
            scale,
            min_scale: scale,
            start_offset: 0.0,
            end_offset: 0.0,
        }
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_offsets(mut self, start_offset: f32, end_offset: f32) -> Self {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    /// Read a descriptor from markup attributes (`speed`, `scale`,
    /// `minScale`, `startOffset`, `endOffset`).
    ///
    /// Missing attributes fall back the way the markup implies: `minScale`
    /// to `scale`, `endOffset` to `startOffset`. Empty strings count as
    /// missing.
    pub fn from_attributes<F>(lookup: F) -> AmbientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| -> AmbientResult<Option<f32>> {
            match lookup(name) {
                Some(raw) if !raw.trim().is_empty() => raw
                    .trim()
                    .parse::<f32>()
                    .map(Some)
                    .map_err(|_| AmbientError::InvalidAttribute { name, value: raw }),
                _ => Ok(None),
            }
        };
        let speed = read("speed")?.unwrap_or(0.0);
        let scale = read("scale")?.unwrap_or(1.0);
        let min_scale = read("minScale")?.unwrap_or(scale);
        let start_offset = read("startOffset")?.unwrap_or(0.0);
        let end_offset = read("endOffset")?.unwrap_or(start_offset);
        Ok(Self {
            speed,
            scale,
            min_scale,
            start_offset,
            end_offset,
        })
    }

    /// Sideways drift bound: half of the overscan the larger scale leaves
    /// on a viewport of `viewport_width`. Never negative.
    pub fn max_horizontal(&self, viewport_width: f32) -> f32 {
        let reference_scale = self.scale.max(self.min_scale);
        ((reference_scale - 1.0) * viewport_width).max(0.0) / 2.0
    }

    /// Transform used before any scroll and whenever motion is static.
    pub fn rest_transform(&self) -> LayerTransform {
        LayerTransform {
            translate: Vec2::new(0.0, self.start_offset),
            scale: self.scale,
        }
    }

    /// Transform for the given scroll snapshot.
    pub fn transform_at(&self, max_horizontal: f32, scroll: ScrollMetrics) -> LayerTransform {
        let progress = scroll.progress();
        let drift = scroll.scroll_y * self.speed * HORIZONTAL_DRIFT_FACTOR;
        // min/max instead of clamp: a malformed bound must not panic
        let horizontal = drift.max(-max_horizontal).min(max_horizontal);
        let vertical = if progress >= 1.0 {
            self.end_offset
        } else {
            self.start_offset + (self.end_offset - self.start_offset) * progress
        };
        let scale = self
            .min_scale
            .max(self.scale - (self.scale - self.min_scale) * progress);
        LayerTransform {
            translate: Vec2::new(horizontal, vertical),
            scale,
        }
    }
}

/// Translation in px followed by a uniform scale around the layer center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translate: Vec2,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One consistent reading of the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f32,
    /// Document height minus viewport height, floored at 0.
    pub max_scroll: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f32, document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y,
            max_scroll: (document_height - viewport_height).max(0.0),
        }
    }

    /// Scroll progress in [0, 1]; 0 when the page cannot scroll.
    pub fn progress(&self) -> f32 {
        if self.max_scroll > 0.0 {
            (self.scroll_y / self.max_scroll).max(0.0).min(1.0)
        } else {
            0.0
        }
    }
}

struct LayerSlot<S> {
    surface: Option<S>,
    descriptor: LayerDescriptor,
    max_horizontal: f32,
}

/// Registry of depth layers plus the scroll/resize driven recomputation.
///
/// Slots are addressed by registration index; vacating a slot never shifts
/// the others. The host forwards scroll and resize signals while
/// [`ParallaxController::wants_signals`] is true, and calls the matching
/// `run_*_frame` method when a requested frame fires.
pub struct ParallaxController<S> {
    slots: Vec<Option<LayerSlot<S>>>,
    mode: MotionMode,
    viewport: Viewport,
    scroll: ScrollMetrics,
    last_scroll_y: Option<f32>,
    scroll_frame: FrameTicket,
    resize_frame: FrameTicket,
    running: bool,
}

impl<S: LayerSurface> ParallaxController<S> {
    pub fn new(mode: MotionMode, viewport: Viewport) -> Self {
        Self {
            slots: Vec::new(),
            mode,
            viewport,
            scroll: ScrollMetrics::default(),
            last_scroll_y: None,
            scroll_frame: FrameTicket::new(),
            resize_frame: FrameTicket::new(),
            running: false,
        }
    }

    /// Bind `surface` at `index`. `None` vacates the slot. Repeating the same
    /// call leaves the registry in the same state.
    pub fn register_layer(&mut self, index: usize, surface: Option<S>, descriptor: LayerDescriptor) {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        let previous_bound = self.slots[index]
            .as_ref()
            .map(|slot| slot.max_horizontal)
            .unwrap_or(0.0);
        let mut slot = LayerSlot {
            surface,
            descriptor,
            max_horizontal: previous_bound,
        };
        if let Some(surface) = slot.surface.as_mut() {
            slot.max_horizontal = descriptor.max_horizontal(self.viewport.width);
            surface.apply_transform(&descriptor.rest_transform());
            log::debug!(
                "[parallax] layer {} registered speed={} scale={}..{}",
                index,
                descriptor.speed,
                descriptor.min_scale,
                descriptor.scale
            );
        } else {
            log::debug!("[parallax] layer {} vacated", index);
        }
        self.slots[index] = Some(slot);
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.slot(index).is_some_and(|slot| slot.surface.is_some())
    }

    pub fn descriptor(&self, index: usize) -> Option<LayerDescriptor> {
        self.slot(index).map(|slot| slot.descriptor)
    }

    pub fn max_horizontal(&self, index: usize) -> Option<f32> {
        self.slot(index).map(|slot| slot.max_horizontal)
    }

    pub fn surface(&self, index: usize) -> Option<&S> {
        self.slot(index).and_then(|slot| slot.surface.as_ref())
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True when scroll and resize listeners should be attached.
    #[inline]
    pub fn wants_signals(&self) -> bool {
        self.running && !self.mode.is_static()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.scroll_frame.is_pending() || self.resize_frame.is_pending()
    }

    /// Begin driving the layers. In animated mode bounds are derived and a
    /// forced recomputation runs immediately; in static mode layers snap.
    pub fn start(&mut self, scroll: ScrollMetrics, viewport: Viewport) {
        self.running = true;
        self.scroll = scroll;
        self.viewport = viewport;
        self.last_scroll_y = None;
        self.enter_mode();
        log::debug!("[parallax] started mode={:?}", self.mode);
    }

    /// Record a scroll signal. Returns true when a new frame was requested.
    pub fn on_scroll(&mut self, scroll: ScrollMetrics, scheduler: &mut dyn FrameScheduler) -> bool {
        if !self.wants_signals() {
            return false;
        }
        self.scroll = scroll;
        if self.last_scroll_y == Some(scroll.scroll_y) {
            return false;
        }
        self.scroll_frame.schedule(scheduler)
    }

    /// Record a viewport change. Bounds are rederived inside the frame.
    pub fn on_resize(
        &mut self,
        viewport: Viewport,
        scroll: ScrollMetrics,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        self.viewport = viewport;
        if !self.wants_signals() {
            return false;
        }
        self.scroll = scroll;
        self.resize_frame.schedule(scheduler)
    }

    /// Body of the scroll frame. A stale frame (already cancelled) is a no-op.
    pub fn run_scroll_frame(&mut self) {
        if !self.scroll_frame.complete() || !self.wants_signals() {
            return;
        }
        self.apply(false);
    }

    /// Body of the resize frame: rederive bounds, then recompute regardless
    /// of whether the scroll offset moved.
    pub fn run_resize_frame(&mut self) {
        if !self.resize_frame.complete() || !self.wants_signals() {
            return;
        }
        self.update_bounds();
        self.apply(true);
    }

    /// Refresh the stored signals without scheduling anything, e.g. before
    /// a mode switch after a period without listeners.
    pub fn sync_metrics(&mut self, scroll: ScrollMetrics, viewport: Viewport) {
        self.scroll = scroll;
        self.viewport = viewport;
    }

    /// Switch between animated and static output. Returns true on change.
    pub fn set_mode(&mut self, mode: MotionMode, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.mode == mode {
            return false;
        }
        self.cancel_frames(scheduler);
        self.mode = mode;
        self.last_scroll_y = None;
        if self.running {
            self.enter_mode();
        }
        log::debug!("[parallax] mode -> {:?}", mode);
        true
    }

    /// Cancel outstanding frames and stop reacting to signals. Idempotent.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cancel_frames(scheduler);
        if self.running {
            log::debug!("[parallax] stopped");
        }
        self.running = false;
    }

    fn enter_mode(&mut self) {
        match self.mode {
            MotionMode::Static => self.snap_all(),
            MotionMode::Animated => {
                self.update_bounds();
                self.apply(true);
            }
        }
    }

    fn cancel_frames(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.scroll_frame.cancel(scheduler);
        self.resize_frame.cancel(scheduler);
    }

    fn slot(&self, index: usize) -> Option<&LayerSlot<S>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn occupied_mut(&mut self) -> impl Iterator<Item = &mut LayerSlot<S>> {
        self.slots
            .iter_mut()
            .flatten()
            .filter(|slot| slot.surface.is_some())
    }

    fn update_bounds(&mut self) {
        let width = self.viewport.width;
        for slot in self.occupied_mut() {
            slot.max_horizontal = slot.descriptor.max_horizontal(width);
        }
    }

    fn snap_all(&mut self) {
        for slot in self.occupied_mut() {
            let rest = slot.descriptor.rest_transform();
            if let Some(surface) = slot.surface.as_mut() {
                surface.apply_transform(&rest);
            }
        }
    }

    fn apply(&mut self, force: bool) {
        let scroll = self.scroll;
        if !force && self.last_scroll_y == Some(scroll.scroll_y) {
            return;
        }
        self.last_scroll_y = Some(scroll.scroll_y);
        for slot in self.occupied_mut() {
            let transform = slot.descriptor.transform_at(slot.max_horizontal, scroll);
            if let Some(surface) = slot.surface.as_mut() {
                surface.apply_transform(&transform);
            }
        }
    }
}
