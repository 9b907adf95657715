use crate::constants::{ANALYSER_FFT_SIZE, AUDIO_ID};
use crate::core::prefs::{slider_to_volume, volume_to_slider, AudioPrefs};
use crate::core::{MemoryStore, PreferenceStore};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `window.sessionStorage` / `window.localStorage`, or memory when the
/// browser denies access (private mode, sandboxed iframes).
pub enum BrowserStore {
    Web(web::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn session() -> Self {
        match web::window().and_then(|w| w.session_storage().ok().flatten()) {
            Some(s) => Self::Web(s),
            None => Self::Memory(MemoryStore::default()),
        }
    }

    pub fn local() -> Self {
        match web::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(s) => Self::Web(s),
            None => Self::Memory(MemoryStore::default()),
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Web(s) => s.get_item(key).ok().flatten(),
            Self::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Web(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("[prefs] could not persist {}: {:?}", key, e);
                }
            }
            Self::Memory(m) => m.set(key, value),
        }
    }
}

/// Lazily-built Web Audio graph: media element source -> analyser -> output.
struct AnalyserGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    // Kept alive alongside the context.
    _source: web::MediaElementAudioSourceNode,
}

/// Background music player and its bass analyser.
pub struct AudioDeck {
    element: web::HtmlAudioElement,
    graph: Option<AnalyserGraph>,
    bins: Vec<u8>,
    pub prefs: AudioPrefs,
    session: BrowserStore,
    local: BrowserStore,
}

impl AudioDeck {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let element: web::HtmlAudioElement = document
            .get_element_by_id(AUDIO_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_ID))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("#{} is not an <audio>: {:?}", AUDIO_ID, e))?;
        let session = BrowserStore::session();
        let local = BrowserStore::local();
        let prefs = AudioPrefs::load(&session, &local);
        element.set_src(prefs.current_track());
        if let Some(v) = prefs.volume {
            element.set_volume(v as f64);
        }
        log::info!(
            "[audio] track={} playing={} volume={:?}",
            prefs.track_index,
            prefs.playing,
            prefs.volume
        );
        Ok(Self {
            element,
            graph: None,
            bins: Vec::new(),
            prefs,
            session,
            local,
        })
    }

    pub fn is_playing(&self) -> bool {
        self.prefs.playing
    }

    /// Build the audio graph on first use; must run inside a user gesture.
    pub fn ensure_context(&mut self) {
        if self.graph.is_some() {
            return;
        }
        match build_graph(&self.element) {
            Ok(graph) => {
                self.bins = vec![0; graph.analyser.frequency_bin_count() as usize];
                self.graph = Some(graph);
                log::info!("[audio] analyser ready ({} bins)", self.bins.len());
            }
            Err(e) => log::error!("[audio] graph error: {:?}", e),
        }
    }

    /// Sample the analyser into the internal byte spectrum.
    pub fn sample_spectrum(&mut self) -> Option<&[u8]> {
        let graph = self.graph.as_ref()?;
        graph.analyser.get_byte_frequency_data(&mut self.bins);
        Some(&self.bins)
    }

    /// Sound button: flip play state, persist and apply it.
    pub fn toggle_playback(&mut self) {
        self.ensure_context();
        if let Some(g) = &self.graph {
            if g.ctx.state() == web::AudioContextState::Suspended {
                _ = g.ctx.resume();
            }
        }
        self.prefs.playing = !self.prefs.playing;
        self.prefs.save_session(&mut self.session);
        if self.prefs.playing {
            _ = self.element.play();
        } else {
            _ = self.element.pause();
        }
        self.update_sound_icon();
    }

    pub fn next_track(&mut self) {
        self.ensure_context();
        let src = self.prefs.advance_track();
        self.prefs.save_session(&mut self.session);
        self.element.set_src(src);
        self.element.load();
        log::info!("[audio] track -> {}", src);
        if self.prefs.playing {
            _ = self.element.play();
        }
    }

    /// Volume slider input, `0..=100`.
    pub fn set_volume_from_slider(&mut self, slider: f32) {
        let v = slider_to_volume(slider);
        self.element.set_volume(v as f64);
        self.prefs.set_volume(v, &mut self.local);
    }

    pub fn slider_position(&self) -> Option<f32> {
        self.prefs.volume.map(volume_to_slider)
    }

    /// Show the icon for the action the button will perform.
    pub fn update_sound_icon(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Some(on) = dom::query(&document, ".icon-sound-on") {
            dom::set_display(&on, !self.prefs.playing);
        }
        if let Some(off) = dom::query(&document, ".icon-sound-off") {
            dom::set_display(&off, self.prefs.playing);
        }
    }

    fn reset_after_rejected_play(&mut self) {
        self.prefs.playing = false;
        self.prefs.save_session(&mut self.session);
        self.update_sound_icon();
    }
}

fn build_graph(element: &web::HtmlAudioElement) -> Result<AnalyserGraph, wasm_bindgen::JsValue> {
    let ctx = web::AudioContext::new()?;
    let source = ctx.create_media_element_source(element)?;
    let analyser = ctx.create_analyser()?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    source.connect_with_audio_node(&analyser)?;
    analyser.connect_with_audio_node(&ctx.destination())?;
    Ok(AnalyserGraph {
        ctx,
        analyser,
        _source: source,
    })
}

/// Start audio after the welcome screen: build the graph, reload the current
/// track and resume playback if the session had it playing. A rejected
/// autoplay falls back to the manual-start state.
pub fn start_after_gesture(deck: &Rc<RefCell<AudioDeck>>) {
    let promise = {
        let mut d = deck.borrow_mut();
        d.ensure_context();
        d.element.load();
        if !d.prefs.playing {
            return;
        }
        match d.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::error!("[audio] autoplay failed: {:?}", e);
                d.reset_after_rejected_play();
                return;
            }
        }
    };
    let deck = deck.clone();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::error!("[audio] autoplay failed: {:?}", e);
            deck.borrow_mut().reset_after_rejected_play();
        }
    });
}
