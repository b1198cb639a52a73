//! Fire-and-forget sound triggers. The game never waits on playback; a
//! missing file or blocked autoplay just means a silent frame.

use std::cell::Cell;

use web_sys::HtmlAudioElement;

use crate::game::world::AudioCue;

const SUCCESS_SRC: &str = "/sounds/success.mp3";
const HIT_SRC: &str = "/sounds/hit.mp3";
const HIT_VOLUME: f64 = 0.3;

thread_local! {
    static MUTED: Cell<bool> = const { Cell::new(false) };
}

pub fn play(cue: AudioCue) {
    if MUTED.with(|m| m.get()) {
        return;
    }
    let (src, volume) = match cue {
        AudioCue::Success => (SUCCESS_SRC, 1.0),
        AudioCue::Hit => (HIT_SRC, HIT_VOLUME),
    };
    if let Ok(audio) = HtmlAudioElement::new_with_src(src) {
        audio.set_volume(volume);
        // Autoplay restrictions may reject the promise; ignore it either way.
        let _ = audio.play();
    }
}

/// Flip the mute flag; returns the new muted state.
pub fn toggle_mute() -> bool {
    MUTED.with(|m| {
        m.set(!m.get());
        m.get()
    })
}

pub fn is_muted() -> bool {
    MUTED.with(|m| m.get())
}
