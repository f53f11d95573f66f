//! Ambient backdrop color derived from which page sections are on screen.

use crate::color::{mix, Rgb};
use crate::motion::MotionMode;
use crate::palette::Palette;
use crate::schedule::{FrameScheduler, FrameTicket};
use crate::surface::AmbientOutput;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Host-assigned identity of an observed section element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionKey(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub id: String,
    /// Visible fraction of the section, in [0, 1].
    pub ratio: f32,
}

impl VisibilityEntry {
    pub fn new(id: impl Into<String>, ratio: f32) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }
}

/// Resolve the ambient color for a set of entries.
///
/// The two most visible sections are blended by their relative visibility;
/// ties keep iteration order. With nothing visible the palette's default
/// section wins outright. Static mode never blends.
pub fn resolve_ambient<'a, I>(entries: I, palette: &Palette, mode: MotionMode) -> Rgb
where
    I: IntoIterator<Item = &'a VisibilityEntry>,
{
    let mut visible: SmallVec<[&VisibilityEntry; 8]> =
        entries.into_iter().filter(|e| e.ratio > 0.0).collect();
    // stable: equal ratios stay in report order
    visible.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));

    let (primary_id, primary_ratio) = match visible.first() {
        Some(entry) => (entry.id.as_str(), entry.ratio),
        None => (palette.default_id(), 1.0),
    };
    let color = palette.color(primary_id);

    match visible.get(1) {
        Some(secondary) if !mode.is_static() => {
            let total = primary_ratio + secondary.ratio;
            let weight = if total == 0.0 {
                0.0
            } else {
                secondary.ratio / total
            };
            let other = if palette.contains(&secondary.id) {
                palette.color(&secondary.id)
            } else {
                color
            };
            mix(color, other, weight)
        }
        _ => color,
    }
}

/// Tracks section visibility and writes the blended color, at most once
/// per frame, to its [`AmbientOutput`].
pub struct SectionBlender<O> {
    output: O,
    palette: Palette,
    mode: MotionMode,
    observed: FnvHashMap<SectionKey, String>,
    entries: Vec<(SectionKey, VisibilityEntry)>,
    index: FnvHashMap<SectionKey, usize>,
    frame: FrameTicket,
    active: bool,
}

impl<O: AmbientOutput> SectionBlender<O> {
    pub fn new(output: O, palette: Palette, mode: MotionMode) -> Self {
        Self {
            output,
            palette,
            mode,
            observed: FnvHashMap::default(),
            entries: Vec::new(),
            index: FnvHashMap::default(),
            frame: FrameTicket::new(),
            active: false,
        }
    }

    /// Raise the document flag and schedule the first blend.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.active = true;
        self.output.set_reduced_motion_flag(self.mode.is_static());
        self.frame.schedule(scheduler);
        log::debug!("[wash] started mode={:?}", self.mode);
    }

    pub fn observe(&mut self, key: SectionKey, section_id: impl Into<String>) {
        self.observed.insert(key, section_id.into());
    }

    /// Stop tracking `key`. Its last entry stays in the set.
    pub fn unobserve(&mut self, key: SectionKey) {
        self.observed.remove(&key);
    }

    pub fn is_observing(&self, key: SectionKey) -> bool {
        self.observed.contains_key(&key)
    }

    /// Apply a batch of `(section, ratio)` reports and schedule a blend.
    /// Reports for sections that are not observed are ignored.
    pub fn report<I>(&mut self, batch: I, scheduler: &mut dyn FrameScheduler) -> bool
    where
        I: IntoIterator<Item = (SectionKey, f32)>,
    {
        if !self.active {
            return false;
        }
        for (key, ratio) in batch {
            let Some(id) = self.observed.get(&key) else {
                continue;
            };
            let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
            match self.index.get(&key) {
                Some(&i) => {
                    let entry = &mut self.entries[i].1;
                    entry.id.clone_from(id);
                    entry.ratio = ratio;
                }
                None => {
                    self.index.insert(key, self.entries.len());
                    self.entries.push((key, VisibilityEntry::new(id.clone(), ratio)));
                }
            }
        }
        self.frame.schedule(scheduler)
    }

    /// Body of the blend frame. Returns the color written, if any.
    pub fn run_frame(&mut self) -> Option<Rgb> {
        if !self.frame.complete() || !self.active {
            return None;
        }
        let color = self.current_color();
        self.output.write_color(color);
        log::trace!("[wash] ambient {}", color);
        Some(color)
    }

    /// The color the next frame would write.
    pub fn current_color(&self) -> Rgb {
        resolve_ambient(self.entries.iter().map(|(_, e)| e), &self.palette, self.mode)
    }

    pub fn entry(&self, key: SectionKey) -> Option<&VisibilityEntry> {
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    pub fn entries(&self) -> impl Iterator<Item = &VisibilityEntry> {
        self.entries.iter().map(|(_, e)| e)
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Switch modes; the output is re-derived on the next frame.
    pub fn set_mode(&mut self, mode: MotionMode, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        if self.active {
            self.output.set_reduced_motion_flag(mode.is_static());
            self.frame.schedule(scheduler);
        }
        log::debug!("[wash] mode -> {:?}", mode);
        true
    }

    /// Drop every observation, cancel the pending blend and clear the
    /// document flag. Safe to call repeatedly.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.frame.cancel(scheduler);
        self.observed.clear();
        if self.active {
            self.output.set_reduced_motion_flag(false);
            log::debug!("[wash] stopped");
        }
        self.active = false;
    }
}
