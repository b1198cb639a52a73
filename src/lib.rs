//! Hungry Cats core crate.
//!
//! A drag-and-drop feeding game: two cats raise randomized food and water
//! requests against a countdown, and delivering the right bowl in time scores
//! points and buys extra seconds. The game core (session state machine, need
//! scheduler, delivery resolution, rest-spot allocation, dialogue) is pure
//! Rust and runs under native `cargo test`; the browser shell in [`game`]
//! renders it on a 400x700 canvas.

use wasm_bindgen::prelude::*;

pub mod game;

pub use game::config::GameConfig;
pub use game::world::World;

/// Logical coordinate space the whole game is expressed in. The shell scales
/// pointer input from CSS pixels into this space.
pub const GAME_WIDTH: u32 = 400;
pub const GAME_HEIGHT: u32 = 700;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Unified entrypoints
// -----------------------------------------------------------------------------

/// Launch with the classic tuning: 60 second starting budget capped at 90,
/// level up every 8 points.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::launch(GameConfig::classic())
}

/// Launch with a named tuning variant: "classic" or "sprint" (20 second
/// budget capped at 30, level up every 5 points). Unknown names fall back
/// to classic.
#[wasm_bindgen]
pub fn start_game_variant(variant: &str) -> Result<(), JsValue> {
    let config = match variant {
        "sprint" => GameConfig::sprint(),
        _ => GameConfig::classic(),
    };
    game::launch(config)
}

/// Flip the sound mute flag; returns the new muted state.
#[wasm_bindgen]
pub fn toggle_sound() -> bool {
    game::audio::toggle_mute()
}
