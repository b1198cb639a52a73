// Integration tests (native) for the session life cycle, driven entirely
// through the public pointer API. These avoid wasm-specific functionality
// and run under `cargo test` on the host.

use hungry_cats::game::session::Phase;
use hungry_cats::{GameConfig, World};

#[test]
fn a_press_walks_the_whole_phase_cycle() {
    let mut w = World::new(GameConfig::classic(), 42);
    assert_eq!(w.session.phase(), Phase::Ready);

    w.pointer_down(200.0, 300.0, 0.0);
    assert_eq!(w.session.phase(), Phase::Playing);
    assert_eq!(w.session.time_left(), 60);
    assert_eq!(w.session.level(), 1);

    // No deliveries: the clock runs out after the initial budget.
    w.update(61_000.0);
    assert_eq!(w.session.phase(), Phase::Ended);
    assert_eq!(w.session.time_left(), 0);

    // A press on the ended screen returns to the ready screen...
    w.pointer_down(200.0, 300.0, 61_500.0);
    assert_eq!(w.session.phase(), Phase::Ready);

    // ...and the next press starts a fresh run.
    w.pointer_down(200.0, 300.0, 62_000.0);
    assert_eq!(w.session.phase(), Phase::Playing);
    assert_eq!(w.session.score(), 0);
    assert_eq!(w.session.time_left(), 60);
}

#[test]
fn sprint_variant_runs_on_its_own_clock() {
    let mut w = World::new(GameConfig::sprint(), 42);
    w.pointer_down(200.0, 300.0, 0.0);
    assert_eq!(w.session.time_left(), 20);
    w.update(19_000.0);
    assert_eq!(w.session.phase(), Phase::Playing);
    w.update(20_000.0);
    assert_eq!(w.session.phase(), Phase::Ended);
}

#[test]
fn requests_cannot_land_after_the_game_has_ended() {
    let mut w = World::new(GameConfig::classic(), 7);
    w.pointer_down(200.0, 300.0, 0.0);
    w.update(61_000.0);
    assert_eq!(w.session.phase(), Phase::Ended);

    let before: Vec<_> = w.cats.iter().map(|c| c.need).collect();
    w.generate_random_request(61_100.0);
    let after: Vec<_> = w.cats.iter().map(|c| c.need).collect();
    assert_eq!(before, after, "a late request callback must change nothing");
}
