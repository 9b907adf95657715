#![cfg(target_arch = "wasm32")]
use crate::audio::AudioDeck;
use crate::constants::{CANVAS_ID, CONTAINER_ID};
use crate::core::{lifecycle, InputBus, InputListener, LifecycleAction, SceneParams, SceneState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;

/// Handles shared by the frame loop, timers and DOM handlers.
struct App {
    scene: Rc<RefCell<SceneState>>,
    deck: Option<Rc<RefCell<AudioDeck>>>,
    running: Rc<Cell<bool>>,
    spawner: Cell<Option<i32>>,
}

impl App {
    fn teardown(&self) {
        self.running.set(false);
        if let (Some(w), Some(id)) = (web::window(), self.spawner.take()) {
            w.clear_interval_with_handle(id);
        }
        self.scene.borrow_mut().stars.clear();
        log::info!("[app] torn down");
    }
}

/// The backdrop canvas, created inside the container when the page has none.
fn backdrop_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e));
    }
    let parent: web::Element = match document.get_element_by_id(CONTAINER_ID) {
        Some(c) => c,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", CONTAINER_ID))?,
    };
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

fn wire_teardown(app: Rc<App>) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "pagehide", move |ev: web::PageTransitionEvent| {
            match lifecycle::on_page_hide(ev.persisted()) {
                LifecycleAction::Teardown => app.teardown(),
                LifecycleAction::Keep => log::info!("[app] kept in back/forward cache"),
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmic-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = backdrop_canvas(&document)?;
    let scene = Rc::new(RefCell::new(SceneState::new(SceneParams::default())));

    let bus = Rc::new(RefCell::new(InputBus::new()));
    let listener: Rc<RefCell<dyn InputListener>> = scene.clone();
    bus.borrow_mut().subscribe(listener);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        bus: bus.clone(),
    });

    // The page still works without its soundtrack.
    let deck = match AudioDeck::from_document(&document) {
        Ok(d) => Some(Rc::new(RefCell::new(d))),
        Err(e) => {
            log::warn!("[audio] disabled: {:?}", e);
            None
        }
    };
    if let Some(deck) = &deck {
        events::wire_audio_controls(
            events::AudioControls {
                deck: deck.clone(),
                scene: scene.clone(),
            },
            &document,
        );
    }
    page::wire_page_chrome(&document, deck.as_ref());

    let app = Rc::new(App {
        scene: scene.clone(),
        deck,
        running: Rc::new(Cell::new(true)),
        spawner: Cell::new(None),
    });

    let gpu = frame::init_gpu(&canvas, &scene).await;
    if gpu.is_none() {
        log::warn!("[gpu] no renderer; page continues without the backdrop");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        deck: app.deck.clone(),
        canvas,
        gpu,
        start: Instant::now(),
        running: app.running.clone(),
    }));
    frame::start_loop(frame_ctx);
    app.spawner.set(frame::start_star_spawner(scene));

    wire_teardown(app);
    Ok(())
}
