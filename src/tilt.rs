use crate::constants::{TILT_KEY_PREFIX, TILT_PANEL_SELECTOR, TILT_SHADOW_VAR, TILT_X_VAR, TILT_Y_VAR};
use crate::dom;
use crate::events::Listener;
use crate::frame::RafScheduler;
use crate::style;
use ambient_core::{MotionMode, PanelRect, TiltConfig, TiltController, TiltState, TiltSurface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PanelElement(web::HtmlElement);

impl TiltSurface for PanelElement {
    fn apply_tilt(&mut self, state: &TiltState) {
        let (x, y, shadow) = style::tilt_vars(state);
        dom::set_style(&self.0, TILT_X_VAR, &x);
        dom::set_style(&self.0, TILT_Y_VAR, &y);
        dom::set_style(&self.0, TILT_SHADOW_VAR, &shadow);
    }
}

type Controller = Rc<RefCell<TiltController<PanelElement>>>;

pub struct TiltPanel {
    element: web::HtmlElement,
    controller: Controller,
    frames: Rc<RefCell<RafScheduler>>,
    listeners: Vec<Listener>,
}

impl TiltPanel {
    pub fn new(window: web::Window, element: web::HtmlElement, mode: MotionMode) -> Self {
        let config = TiltConfig::from_attributes(|name| {
            dom::dataset_value(&element, &style::dataset_key(TILT_KEY_PREFIX, name))
        })
        .unwrap_or_else(|e| {
            log::warn!("[tilt] {}; using defaults", e);
            TiltConfig::default()
        });
        let controller: Controller = Rc::new(RefCell::new(TiltController::new(
            PanelElement(element.clone()),
            config,
            mode,
        )));
        let c = controller.clone();
        let frames = RafScheduler::new(window, move || c.borrow_mut().run_frame());
        Self {
            element,
            controller,
            frames: Rc::new(RefCell::new(frames)),
            listeners: Vec::new(),
        }
    }

    pub fn set_mode(&mut self, mode: MotionMode) -> anyhow::Result<()> {
        self.controller
            .borrow_mut()
            .set_mode(mode, &mut *self.frames.borrow_mut());
        self.sync_listeners()
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.controller
            .borrow_mut()
            .stop(&mut *self.frames.borrow_mut());
    }

    /// Pointer listeners exist only while the panel animates.
    pub fn sync_listeners(&mut self) -> anyhow::Result<()> {
        if !self.controller.borrow().wants_signals() {
            self.listeners.clear();
            return Ok(());
        }
        if !self.listeners.is_empty() {
            return Ok(());
        }

        let element = self.element.clone();
        let controller = self.controller.clone();
        let frames = self.frames.clone();
        let on_move = Listener::new(&self.element, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let r = element.get_bounding_client_rect();
            let rect = PanelRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32);
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            controller
                .borrow_mut()
                .pointer_move(rect, pointer, &mut *frames.borrow_mut());
        })?;

        let mut listeners = vec![on_move];
        for kind in ["pointerleave", "pointercancel"] {
            let controller = self.controller.clone();
            let frames = self.frames.clone();
            listeners.push(Listener::new(&self.element, kind, move |_ev| {
                controller
                    .borrow_mut()
                    .pointer_leave(&mut *frames.borrow_mut());
            })?);
        }
        self.listeners = listeners;
        Ok(())
    }
}

/// One tilt panel per `[data-tilt]` element under `root`.
pub fn mount_panels(window: &web::Window, root: &web::Element, mode: MotionMode) -> Vec<TiltPanel> {
    dom::query_all::<web::HtmlElement>(root, TILT_PANEL_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let mut panel = TiltPanel::new(window.clone(), el, mode);
            match panel.sync_listeners() {
                Ok(()) => Some(panel),
                Err(e) => {
                    log::warn!("[tilt] panel skipped: {:?}", e);
                    None
                }
            }
        })
        .collect()
}

impl Drop for TiltPanel {
    fn drop(&mut self) {
        self.stop();
    }
}
