use ambient_core::{ScrollMetrics, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0) as f32;
    ScrollMetrics::new(scroll_y, document_height, viewport(window).height)
}

/// All elements matching `selector`, in document order.
pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn query_one<T: JsCast>(root: &web::Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn dataset_value(el: &web::HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::warn!("[dom] set {} failed: {:?}", name, e);
    }
}
