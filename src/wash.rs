use crate::constants::{REDUCE_MOTION_CLASS, SECTION_ID_KEY, SECTION_SELECTOR, WASH_COLOR_VAR};
use crate::dom;
use crate::frame::RafScheduler;
use crate::style;
use ambient_core::constants::{DEFAULT_SECTION, VISIBILITY_THRESHOLDS};
use ambient_core::{AmbientOutput, AmbientSlot, MotionMode, Palette, Rgb, SectionBlender, SectionKey};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Root-element sink for the ambient color, mirrored into the shared slot.
pub struct DocumentAmbient {
    root: web::HtmlElement,
    slot: AmbientSlot,
}

impl AmbientOutput for DocumentAmbient {
    fn write_color(&mut self, color: Rgb) {
        dom::set_style(&self.root, WASH_COLOR_VAR, &style::wash_color(color));
        self.slot.write_color(color);
    }

    fn set_reduced_motion_flag(&mut self, reduced: bool) {
        _ = self
            .root
            .class_list()
            .toggle_with_force(REDUCE_MOTION_CLASS, reduced);
        self.slot.set_reduced_motion_flag(reduced);
    }
}

type Blender = Rc<RefCell<SectionBlender<DocumentAmbient>>>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

pub struct WashWiring {
    blender: Blender,
    frames: Rc<RefCell<RafScheduler>>,
    sections: Rc<Vec<web::Element>>,
    observer: Option<web::IntersectionObserver>,
    callback: Option<ObserverCallback>,
}

impl WashWiring {
    pub fn new(
        window: web::Window,
        root: web::HtmlElement,
        slot: AmbientSlot,
        palette: Palette,
        mode: MotionMode,
    ) -> Self {
        let blender: Blender = Rc::new(RefCell::new(SectionBlender::new(
            DocumentAmbient { root, slot },
            palette,
            mode,
        )));
        let b = blender.clone();
        let frames = RafScheduler::new(window, move || {
            b.borrow_mut().run_frame();
        });
        Self {
            blender,
            frames: Rc::new(RefCell::new(frames)),
            sections: Rc::new(Vec::new()),
            observer: None,
            callback: None,
        }
    }

    /// Observe every section under `root`; keys follow document order.
    /// The observer is built before the first blend frame is requested.
    pub fn start(&mut self, root: &web::Element) -> anyhow::Result<()> {
        let sections: Vec<web::Element> = dom::query_all(root, SECTION_SELECTOR);
        self.sections = Rc::new(sections);

        let blender = self.blender.clone();
        let frames = self.frames.clone();
        let sections = self.sections.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let i = sections.iter().position(|s| *s == target)?;
                        Some((SectionKey(i as u32), entry.intersection_ratio() as f32))
                    })
                    .collect::<Vec<_>>();
                blender
                    .borrow_mut()
                    .report(batch, &mut *frames.borrow_mut());
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let thresholds = VISIBILITY_THRESHOLDS
            .iter()
            .map(|t| wasm_bindgen::JsValue::from_f64(*t))
            .collect::<js_sys::Array>();
        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&thresholds);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;

        {
            let mut blender = self.blender.borrow_mut();
            for (i, section) in self.sections.iter().enumerate() {
                let id = section
                    .dyn_ref::<web::HtmlElement>()
                    .and_then(|el| dom::dataset_value(el, SECTION_ID_KEY))
                    .unwrap_or_else(|| DEFAULT_SECTION.to_string());
                blender.observe(SectionKey(i as u32), id);
                observer.observe(section);
            }
            blender.start(&mut *self.frames.borrow_mut());
        }
        log::info!("[wash] observing {} sections", self.sections.len());
        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    /// Stop observing the section at document index `index`.
    pub fn release_section(&mut self, index: usize) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        if let Some(observer) = &self.observer {
            observer.unobserve(section);
        }
        self.blender
            .borrow_mut()
            .unobserve(SectionKey(index as u32));
    }

    pub fn set_mode(&mut self, mode: MotionMode) {
        self.blender
            .borrow_mut()
            .set_mode(mode, &mut *self.frames.borrow_mut());
    }

    pub fn stop(&mut self) {
        for i in 0..self.sections.len() {
            self.release_section(i);
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
        self.blender
            .borrow_mut()
            .stop(&mut *self.frames.borrow_mut());
    }
}

impl Drop for WashWiring {
    fn drop(&mut self) {
        self.stop();
    }
}
