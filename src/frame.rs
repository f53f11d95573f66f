use ambient_core::{FrameId, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` bound to a single callback.
///
/// One scheduler serves one kind of deferred work; the owning controller's
/// frame ticket keeps at most one request outstanding. Cancel before drop:
/// a frame firing after the callback is freed would throw.
pub struct RafScheduler {
    window: web::Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(window: web::Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(move |_ts: f64| on_frame()) as Box<dyn FnMut(f64)>);
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id);
    }
}
