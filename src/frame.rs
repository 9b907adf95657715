use crate::audio::AudioDeck;
use crate::core::constants::{STAR_LIFETIME_SEC, STAR_SPAWN_INTERVAL_MS};
use crate::core::SceneState;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub deck: Option<Rc<RefCell<AudioDeck>>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub start: Instant,
    /// Cleared on teardown; the loop stops re-registering.
    pub running: Rc<Cell<bool>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f32();

        {
            let mut scene = self.scene.borrow_mut();
            match self.deck.as_ref().filter(|_| scene.samples_spectrum()) {
                Some(deck) => {
                    let mut deck = deck.borrow_mut();
                    scene.update(elapsed, deck.sample_spectrum());
                }
                None => scene.update(elapsed, None),
            }
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            match gpu.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    gpu.reconfigure();
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &RefCell<SceneState>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running = frame_ctx.borrow().running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Spawn a shooting star every interval; each one is removed by its own
/// one-shot timer after its lifetime. Returns the interval id.
pub fn start_star_spawner(scene: Rc<RefCell<SceneState>>) -> Option<i32> {
    let window = web::window()?;
    let spawn = Closure::wrap(Box::new(move || {
        let id = scene.borrow_mut().spawn_star();
        log::info!("[stars] spawned {:?}", id);
        let Some(w) = web::window() else {
            return;
        };
        let scene = scene.clone();
        let expire = Closure::once_into_js(move || {
            if scene.borrow_mut().remove_star(id) {
                log::info!("[stars] expired {:?}", id);
            }
        });
        let lifetime_ms = (STAR_LIFETIME_SEC * 1000.0) as i32;
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            expire.unchecked_ref(),
            lifetime_ms,
        );
    }) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            spawn.as_ref().unchecked_ref(),
            STAR_SPAWN_INTERVAL_MS,
        )
        .map_err(|e| log::error!("[stars] setInterval failed: {:?}", e))
        .ok()?;
    spawn.forget();
    Some(handle)
}
