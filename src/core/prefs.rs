// Background-audio preferences and playlist.
//
// Track index and play state are per-session; volume survives sessions. The
// storage backend is abstracted so the parsing rules can be tested on the host.

use fnv::FnvHashMap;

pub const SOUNDTRACKS: [&str; 3] = [
    "meditation-yoga-relaxing-music-380330.mp3",
    "Interstellar LOFI.mp3",
    "Interstellar Main Theme.mp3",
];

pub const KEY_TRACK_INDEX: &str = "currentTrackIndex";
pub const KEY_PLAYING: &str = "audioPlaying";
pub const KEY_VOLUME: &str = "audioVolume";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when browser storage is unavailable.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioPrefs {
    pub track_index: usize,
    pub playing: bool,
    pub volume: Option<f32>,
}

impl Default for AudioPrefs {
    fn default() -> Self {
        Self {
            track_index: 0,
            playing: false,
            volume: None,
        }
    }
}

impl AudioPrefs {
    pub fn load(session: &dyn PreferenceStore, local: &dyn PreferenceStore) -> Self {
        Self {
            track_index: parse_track_index(session.get(KEY_TRACK_INDEX).as_deref()),
            playing: session.get(KEY_PLAYING).as_deref() == Some("true"),
            volume: parse_volume(local.get(KEY_VOLUME).as_deref()),
        }
    }

    pub fn current_track(&self) -> &'static str {
        SOUNDTRACKS[self.track_index % SOUNDTRACKS.len()]
    }

    /// Advance to the next track, wrapping around, and return it.
    pub fn advance_track(&mut self) -> &'static str {
        self.track_index = next_track_index(self.track_index);
        self.current_track()
    }

    pub fn save_session(&self, session: &mut dyn PreferenceStore) {
        session.set(KEY_TRACK_INDEX, &self.track_index.to_string());
        session.set(KEY_PLAYING, if self.playing { "true" } else { "false" });
    }

    pub fn set_volume(&mut self, volume: f32, local: &mut dyn PreferenceStore) {
        let v = volume.clamp(0.0, 1.0);
        self.volume = Some(v);
        local.set(KEY_VOLUME, &v.to_string());
    }
}

#[inline]
pub fn next_track_index(index: usize) -> usize {
    (index + 1) % SOUNDTRACKS.len()
}

/// Leading-integer parse; anything unparsable or out of range falls back to 0.
pub fn parse_track_index(raw: Option<&str>) -> usize {
    let digits: String = raw
        .unwrap_or("")
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<usize>() {
        Ok(i) if i < SOUNDTRACKS.len() => i,
        _ => 0,
    }
}

pub fn parse_volume(raw: Option<&str>) -> Option<f32> {
    let v = raw?.trim().parse::<f32>().ok()?;
    v.is_finite().then(|| v.clamp(0.0, 1.0))
}

/// Slider position (0–100) to element volume.
#[inline]
pub fn slider_to_volume(value: f32) -> f32 {
    (value / 100.0).clamp(0.0, 1.0)
}

#[inline]
pub fn volume_to_slider(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0) * 100.0
}
