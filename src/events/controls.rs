use crate::audio::AudioDeck;
use crate::constants::{BASS_TOGGLE_ID, NEXT_TRACK_ID, SOUND_TOGGLE_ID, VOLUME_SLIDER_ID};
use crate::core::SceneState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct AudioControls {
    pub deck: Rc<RefCell<AudioDeck>>,
    pub scene: Rc<RefCell<SceneState>>,
}

/// Sound toggle, next track, volume slider and bass toggle.
pub fn wire_audio_controls(c: AudioControls, document: &web::Document) {
    c.deck.borrow().update_sound_icon();

    let deck = c.deck.clone();
    dom::add_click_listener(document, SOUND_TOGGLE_ID, move || {
        deck.borrow_mut().toggle_playback();
    });

    let deck = c.deck.clone();
    dom::add_click_listener(document, NEXT_TRACK_ID, move || {
        deck.borrow_mut().next_track();
    });

    if let Some(slider) = document
        .get_element_by_id(VOLUME_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        if let Some(pos) = c.deck.borrow().slider_position() {
            slider.set_value(&format!("{}", pos));
        }
        let deck = c.deck.clone();
        let input = slider.clone();
        dom::add_listener(&slider, "input", move |_ev: web::Event| {
            if let Ok(v) = input.value().parse::<f32>() {
                deck.borrow_mut().set_volume_from_slider(v);
            }
        });
    }

    if let Some(button) = document.get_element_by_id(BASS_TOGGLE_ID) {
        let scene = c.scene.clone();
        let btn = button.clone();
        dom::add_listener(&button, "click", move |_ev: web::Event| {
            let enabled = scene.borrow_mut().toggle_bass();
            _ = btn.class_list().toggle_with_force("active", enabled);
            log::info!("[audio] bass reactive={}", enabled);
        });
    }
}
