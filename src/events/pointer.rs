use crate::core::{InputBus, InputEvent};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub bus: Rc<RefCell<InputBus>>,
}

/// Translate DOM input into `InputEvent`s on the bus.
pub fn wire_input_handlers(w: InputWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    wire_mousemove(&w, &document);
    wire_touchmove(&w, &document);
    wire_orientation(&w);
    wire_resize(&w);
    wire_custom_cursor(&document);
}

fn wire_mousemove(w: &InputWiring, document: &web::Document) {
    let bus = w.bus.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        bus.borrow().publish(&InputEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });
}

fn wire_touchmove(w: &InputWiring, document: &web::Document) {
    let bus = w.bus.clone();
    dom::add_listener(document, "touchmove", move |ev: web::TouchEvent| {
        let touches = ev.touches();
        let count = touches.length();
        if count != 1 {
            return;
        }
        // Keep the page from scrolling while the backdrop is being steered.
        ev.prevent_default();
        if let Some(t) = touches.get(0) {
            bus.borrow().publish(&InputEvent::TouchMove {
                x: t.client_x() as f32,
                y: t.client_y() as f32,
                touches: count,
            });
        }
    });
}

fn wire_orientation(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let bus = w.bus.clone();
    dom::add_listener(&window, "deviceorientation", move |ev: web::DeviceOrientationEvent| {
        bus.borrow().publish(&InputEvent::Orientation {
            beta: ev.beta().map(|v| v as f32),
            gamma: ev.gamma().map(|v| v as f32),
        });
    });
}

fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let publish_size = {
        let bus = w.bus.clone();
        let canvas = w.canvas.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            let (width, height) = dom::window_size();
            bus.borrow().publish(&InputEvent::Resize { width, height });
        }
    };
    publish_size();
    dom::add_listener(&window, "resize", move |_ev: web::Event| publish_size());
}

fn wire_custom_cursor(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        if let Some(cursor) = dom::query(&doc, ".custom-cursor") {
            if let Some(el) = wasm_bindgen::JsCast::dyn_ref::<web::HtmlElement>(&cursor) {
                let style = el.style();
                _ = style.set_property("left", &format!("{}px", ev.client_x()));
                _ = style.set_property("top", &format!("{}px", ev.client_y()));
            }
        }
    });
}
