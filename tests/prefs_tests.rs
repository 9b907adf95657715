// Host-side tests for audio preference parsing and persistence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod prefs {
    include!("../src/core/prefs.rs");
}

use prefs::*;

#[test]
fn empty_storage_loads_defaults() {
    let session = MemoryStore::default();
    let local = MemoryStore::default();
    let p = AudioPrefs::load(&session, &local);
    assert_eq!(p, AudioPrefs::default());
    assert_eq!(p.current_track(), SOUNDTRACKS[0]);
}

#[test]
fn track_index_parses_leading_digits_and_rejects_out_of_range() {
    assert_eq!(parse_track_index(None), 0);
    assert_eq!(parse_track_index(Some("")), 0);
    assert_eq!(parse_track_index(Some("2")), 2);
    assert_eq!(parse_track_index(Some(" 1 ")), 1);
    assert_eq!(parse_track_index(Some("1abc")), 1);
    assert_eq!(parse_track_index(Some("3")), 0);
    assert_eq!(parse_track_index(Some("-1")), 0);
    assert_eq!(parse_track_index(Some("banana")), 0);
}

#[test]
fn volume_parsing_clamps_and_ignores_garbage() {
    assert_eq!(parse_volume(None), None);
    assert_eq!(parse_volume(Some("loud")), None);
    assert_eq!(parse_volume(Some("NaN")), None);
    assert_eq!(parse_volume(Some("0.25")), Some(0.25));
    assert_eq!(parse_volume(Some("7")), Some(1.0));
    assert_eq!(parse_volume(Some("-2")), Some(0.0));
}

#[test]
fn next_track_cycles_through_the_playlist() {
    let mut p = AudioPrefs::default();
    let order: Vec<&str> = (0..4).map(|_| p.advance_track()).collect();
    assert_eq!(order, [SOUNDTRACKS[1], SOUNDTRACKS[2], SOUNDTRACKS[0], SOUNDTRACKS[1]]);
    assert_eq!(next_track_index(2), 0);
}

#[test]
fn session_state_round_trips_through_storage() {
    let mut session = MemoryStore::default();
    let mut local = MemoryStore::default();
    let mut p = AudioPrefs::default();
    p.advance_track();
    p.advance_track();
    p.playing = true;
    p.save_session(&mut session);
    p.set_volume(0.3, &mut local);

    assert_eq!(session.get(KEY_TRACK_INDEX).as_deref(), Some("2"));
    assert_eq!(session.get(KEY_PLAYING).as_deref(), Some("true"));
    let loaded = AudioPrefs::load(&session, &local);
    assert_eq!(loaded.track_index, 2);
    assert!(loaded.playing);
    assert_eq!(loaded.volume, Some(0.3));
}

#[test]
fn volume_lives_in_local_storage_only() {
    let mut session = MemoryStore::default();
    let mut local = MemoryStore::default();
    let mut p = AudioPrefs::default();
    p.set_volume(1.5, &mut local);
    p.save_session(&mut session);
    assert_eq!(p.volume, Some(1.0));
    assert_eq!(session.get(KEY_VOLUME), None);
    assert_eq!(local.get(KEY_VOLUME).as_deref(), Some("1"));
}

#[test]
fn slider_maps_percent_to_volume() {
    assert_eq!(slider_to_volume(0.0), 0.0);
    assert_eq!(slider_to_volume(50.0), 0.5);
    assert_eq!(slider_to_volume(150.0), 1.0);
    assert_eq!(volume_to_slider(0.5), 50.0);
}
