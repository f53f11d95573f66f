use crate::constants::REDUCED_MOTION_QUERY;
use crate::events::Listener;
use ambient_core::MotionMode;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live view of the `prefers-reduced-motion` media query.
pub struct MotionPreference {
    query: Option<web::MediaQueryList>,
    listener: Option<Listener>,
}

impl MotionPreference {
    /// Hosts without `matchMedia` report animated motion.
    pub fn new(window: &web::Window) -> Self {
        let query = match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("[motion] matchMedia failed: {:?}", e);
                None
            }
        };
        Self {
            query,
            listener: None,
        }
    }

    pub fn mode(&self) -> MotionMode {
        MotionMode::from_reduced_motion(self.query.as_ref().is_some_and(|q| q.matches()))
    }

    /// Call `on_change` with the new mode whenever the preference flips.
    pub fn watch(&mut self, mut on_change: impl FnMut(MotionMode) + 'static) -> anyhow::Result<()> {
        let query = self
            .query
            .as_ref()
            .ok_or_else(|| anyhow!("reduced-motion query unavailable"))?;
        let listener = Listener::new(query, "change", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MediaQueryListEvent>() {
                let mode = MotionMode::from_reduced_motion(ev.matches());
                log::info!("[motion] preference changed -> {:?}", mode);
                on_change(mode);
            }
        })?;
        self.listener = Some(listener);
        Ok(())
    }

    pub fn unwatch(&mut self) {
        self.listener = None;
    }
}
