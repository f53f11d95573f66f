use crate::constants::PARALLAX_LAYER_SELECTOR;
use crate::dom;
use crate::events::Listener;
use crate::frame::RafScheduler;
use crate::style;
use ambient_core::{LayerDescriptor, LayerSurface, LayerTransform, MotionMode, ParallaxController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Background image element driven by the parallax controller.
pub struct LayerElement(web::HtmlElement);

impl LayerSurface for LayerElement {
    fn apply_transform(&mut self, transform: &LayerTransform) {
        dom::set_style(&self.0, "transform", &style::layer_transform(transform));
    }
}

type Controller = Rc<RefCell<ParallaxController<LayerElement>>>;

pub struct ParallaxWiring {
    window: web::Window,
    document: web::Document,
    controller: Controller,
    scroll_frames: Rc<RefCell<RafScheduler>>,
    resize_frames: Rc<RefCell<RafScheduler>>,
    listeners: Vec<Listener>,
}

impl ParallaxWiring {
    pub fn new(window: web::Window, document: web::Document, mode: MotionMode) -> Self {
        let controller: Controller = Rc::new(RefCell::new(ParallaxController::new(
            mode,
            dom::viewport(&window),
        )));
        let c = controller.clone();
        let scroll_frames = RafScheduler::new(window.clone(), move || c.borrow_mut().run_scroll_frame());
        let c = controller.clone();
        let resize_frames = RafScheduler::new(window.clone(), move || c.borrow_mut().run_resize_frame());
        Self {
            window,
            document,
            controller,
            scroll_frames: Rc::new(RefCell::new(scroll_frames)),
            resize_frames: Rc::new(RefCell::new(resize_frames)),
            listeners: Vec::new(),
        }
    }

    /// Register every layer element under `root`, indexed in document order.
    /// Layers with unreadable attributes leave their slot vacant.
    pub fn register_layers(&mut self, root: &web::Element) -> usize {
        let elements: Vec<web::HtmlElement> = dom::query_all(root, PARALLAX_LAYER_SELECTOR);
        let mut controller = self.controller.borrow_mut();
        let mut registered = 0;
        for (index, el) in elements.into_iter().enumerate() {
            match LayerDescriptor::from_attributes(|key| dom::dataset_value(&el, key)) {
                Ok(descriptor) => {
                    dom::set_style(&el, "will-change", "transform");
                    dom::set_style(&el, "transform-origin", "50% 50%");
                    controller.register_layer(index, Some(LayerElement(el)), descriptor);
                    registered += 1;
                }
                Err(e) => {
                    log::warn!("[parallax] layer {} skipped: {}", index, e);
                    controller.register_layer(index, None, LayerDescriptor::default());
                }
            }
        }
        registered
    }

    pub fn start(&mut self) -> anyhow::Result<()> {
        let scroll = dom::scroll_metrics(&self.window, &self.document);
        self.controller
            .borrow_mut()
            .start(scroll, dom::viewport(&self.window));
        self.sync_listeners()
    }

    pub fn set_mode(&mut self, mode: MotionMode) -> anyhow::Result<()> {
        let scroll = dom::scroll_metrics(&self.window, &self.document);
        {
            let mut controller = self.controller.borrow_mut();
            controller.sync_metrics(scroll, dom::viewport(&self.window));
            // frame ids are window-global, so either scheduler can cancel both tickets
            controller.set_mode(mode, &mut *self.scroll_frames.borrow_mut());
        }
        self.sync_listeners()
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.controller
            .borrow_mut()
            .stop(&mut *self.scroll_frames.borrow_mut());
    }

    /// Scroll and resize listeners exist only while the controller animates.
    fn sync_listeners(&mut self) -> anyhow::Result<()> {
        let wants = self.controller.borrow().wants_signals();
        if !wants {
            if !self.listeners.is_empty() {
                log::info!("[parallax] listeners detached");
            }
            self.listeners.clear();
            return Ok(());
        }
        if !self.listeners.is_empty() {
            return Ok(());
        }

        let (window, document) = (self.window.clone(), self.document.clone());
        let controller = self.controller.clone();
        let frames = self.scroll_frames.clone();
        let on_scroll = Listener::passive(&self.window, "scroll", move |_ev| {
            let metrics = dom::scroll_metrics(&window, &document);
            controller
                .borrow_mut()
                .on_scroll(metrics, &mut *frames.borrow_mut());
        })?;

        let (window, document) = (self.window.clone(), self.document.clone());
        let controller = self.controller.clone();
        let frames = self.resize_frames.clone();
        let on_resize = Listener::new(&self.window, "resize", move |_ev| {
            let metrics = dom::scroll_metrics(&window, &document);
            controller.borrow_mut().on_resize(
                dom::viewport(&window),
                metrics,
                &mut *frames.borrow_mut(),
            );
        })?;

        self.listeners = vec![on_scroll, on_resize];
        log::info!("[parallax] listeners attached");
        Ok(())
    }
}

impl Drop for ParallaxWiring {
    fn drop(&mut self) {
        self.stop();
    }
}
