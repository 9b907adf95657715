use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_ev: web::Event| handler());
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn set_display(el: &web::Element, visible: bool) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}

/// Window size in CSS pixels.
pub fn window_size() -> (f32, f32) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (width as f32, height as f32)
        })
        .unwrap_or((1.0, 1.0))
}

/// Match the canvas backing store to the window size times the (capped)
/// device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let (css_w, css_h) = window_size();
        let w_px = (css_w as f64 * dpr) as u32;
        let h_px = (css_h as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
    }
}
