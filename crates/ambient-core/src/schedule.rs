//! Frame-coalesced scheduling.
//!
//! A controller owns one [`FrameTicket`] per kind of deferred work. Signals
//! call [`FrameTicket::schedule`]; while a frame is outstanding further calls
//! are dropped and the pending frame reads whatever state is current when it
//! runs. The host invokes the controller when the frame fires, and the
//! controller clears the ticket with [`FrameTicket::complete`].

use smallvec::SmallVec;

/// Host handle for a requested frame (`requestAnimationFrame` id on the web).
pub type FrameId = i32;

/// Host seam for paint-aligned callbacks.
///
/// Frame ids are host-wide: any scheduler of the same host may cancel an id
/// another one issued.
pub trait FrameScheduler {
    /// Request one callback on the next frame. `None` when the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    /// Cancel a previously requested frame. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Nullable handle for at most one outstanding frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameTicket {
    pending: Option<FrameId>,
}

impl FrameTicket {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Request a frame unless one is already outstanding.
    /// Returns true only when a new frame was requested.
    pub fn schedule(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.pending.is_some() {
            log::trace!("[frame] coalesced into pending frame");
            return false;
        }
        self.pending = scheduler.request_frame();
        self.pending.is_some()
    }

    /// Clear the ticket from inside the frame callback.
    /// Returns false when nothing was pending (a stale or cancelled frame).
    #[inline]
    pub fn complete(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn pending_id(&self) -> Option<FrameId> {
        self.pending
    }
}

/// Deterministic scheduler for native hosts and tests: frames are queued
/// and only "fire" when the host drains them.
#[derive(Debug, Default)]
pub struct QueuedFrames {
    next_id: FrameId,
    queued: SmallVec<[FrameId; 4]>,
    requested_total: usize,
    refuse: bool,
}

impl QueuedFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent requests fail, as a host without a frame source would.
    pub fn refuse_requests(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    pub fn requested_total(&self) -> usize {
        self.requested_total
    }

    pub fn is_queued(&self, id: FrameId) -> bool {
        self.queued.contains(&id)
    }

    /// Remove and return every queued frame id in request order.
    pub fn drain(&mut self) -> Vec<FrameId> {
        self.queued.drain(..).collect()
    }
}

impl FrameScheduler for QueuedFrames {
    fn request_frame(&mut self) -> Option<FrameId> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested_total += 1;
        self.queued.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queued.retain(|q| *q != id);
    }
}
