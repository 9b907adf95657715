use crate::audio::{self, AudioDeck};
use crate::constants::{COPYRIGHT_ID, ENTER_ID, FULLSCREEN_ID, SITE_WRAPPER_ID, WELCOME_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_page_chrome(document: &web::Document, deck: Option<&Rc<RefCell<AudioDeck>>>) {
    set_copyright_year(document);
    wire_hamburger(document);
    wire_modals(document);
    wire_fullscreen(document);
    wire_welcome_screen(document, deck);
}

fn set_copyright_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(COPYRIGHT_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn menu_parts(document: &web::Document) -> Option<(web::Element, web::Element)> {
    Some((
        dom::query(document, ".hamburger")?,
        dom::query(document, ".nav-menu")?,
    ))
}

fn close_menu(document: &web::Document) {
    if let Some((hamburger, nav)) = menu_parts(document) {
        _ = hamburger.class_list().remove_1("active");
        _ = nav.class_list().remove_1("active");
    }
}

fn wire_hamburger(document: &web::Document) {
    let Some((hamburger, nav)) = menu_parts(document) else {
        return;
    };
    let ham = hamburger.clone();
    dom::add_listener(&hamburger, "click", move |_ev: web::Event| {
        _ = ham.class_list().toggle("active");
        _ = nav.class_list().toggle("active");
    });
}

fn wire_modals(document: &web::Document) {
    for trigger in dom::query_all(document, "[data-modal-target]") {
        let Some(target) = trigger.get_attribute("data-modal-target") else {
            continue;
        };
        let doc = document.clone();
        dom::add_listener(&trigger, "click", move |ev: web::Event| {
            ev.prevent_default();
            if let Some(modal) = dom::query(&doc, &target) {
                _ = modal.class_list().add_1("active");
            }
            close_menu(&doc);
        });
    }

    for overlay in dom::query_all(document, ".modal-overlay") {
        let backdrop = overlay.clone();
        dom::add_listener(&overlay, "click", move |ev: web::Event| {
            // Clicks inside the dialog bubble up here too; only the backdrop closes.
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| el == backdrop)
                .unwrap_or(false);
            if on_backdrop {
                _ = backdrop.class_list().remove_1("active");
            }
        });
    }

    for button in dom::query_all(document, ".close-modal") {
        let btn = button.clone();
        dom::add_listener(&button, "click", move |_ev: web::Event| {
            if let Ok(Some(overlay)) = btn.closest(".modal-overlay") {
                _ = overlay.class_list().remove_1("active");
            }
        });
    }
}

fn wire_fullscreen(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, FULLSCREEN_ID, move || toggle_fullscreen(&doc));
}

pub fn toggle_fullscreen(document: &web::Document) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(root) = document.document_element() {
        if let Err(e) = root.request_fullscreen() {
            log::warn!("[page] fullscreen refused: {:?}", e);
        }
    }
}

fn wire_welcome_screen(document: &web::Document, deck: Option<&Rc<RefCell<AudioDeck>>>) {
    let (Some(welcome), Some(enter)) = (
        document.get_element_by_id(WELCOME_ID),
        document.get_element_by_id(ENTER_ID),
    ) else {
        return;
    };
    let doc = document.clone();
    let deck = deck.cloned();
    dom::add_listener(&enter, "click", move |_ev: web::Event| {
        _ = welcome.class_list().add_1("hidden");
        if let Some(site) = doc.get_element_by_id(SITE_WRAPPER_ID) {
            _ = site.class_list().add_1("loaded");
        }
        if let Some(deck) = &deck {
            audio::start_after_gesture(deck);
        }

        let screen = welcome.clone();
        dom::add_listener(&welcome, "transitionend", move |_ev: web::Event| screen.remove());
    });
}
