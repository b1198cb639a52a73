// Full-session simulations (native) through the public pointer API: the
// scheduler raises requests, the test plays caretaker by dragging bowls.

use hungry_cats::game::actors::{ITEM_SIZE, Need};
use hungry_cats::game::session::Phase;
use hungry_cats::{GameConfig, World};

/// Drag the bowl of `kind` onto cat `idx` and drop it there.
fn deliver(w: &mut World, kind: Need, idx: usize, now: f64) {
    let item = w.items.iter().position(|i| i.kind == kind).unwrap();
    let (ix, iy) = (w.items[item].x, w.items[item].y);
    w.pointer_down(ix + 1.0, iy + 1.0, now);
    let (cx, cy) = (w.cats[idx].x, w.cats[idx].y);
    // Carry by center so the dropped top-left lands inside the cat.
    w.pointer_move(cx + ITEM_SIZE / 2.0 + 5.0, cy + ITEM_SIZE / 2.0 + 5.0);
    w.pointer_up(now);
}

#[test]
fn attentive_play_scores_and_outlasts_the_initial_budget() {
    let mut w = World::new(GameConfig::classic(), 2024);
    w.pointer_down(200.0, 300.0, 0.0);
    let budget_ms = w.config.initial_time as f64 * 1000.0;

    let mut now = 0.0;
    while now < budget_ms + 10_000.0 && w.session.is_playing() {
        now += 100.0;
        w.update(now);
        if let Some(idx) = w.cats.iter().position(|c| c.need.is_some()) {
            let kind = w.cats[idx].need.unwrap();
            deliver(&mut w, kind, idx, now);
        }
        assert!(w.session.time_left() <= w.config.max_time);
    }
    assert!(w.session.score() > 0);
    assert_eq!(
        w.session.phase(),
        Phase::Playing,
        "delivery bonuses keep a perfect run alive past the initial budget"
    );
}

#[test]
fn ignored_requests_time_out_and_the_cat_wanders_off() {
    let mut w = World::new(GameConfig::classic(), 5);
    w.pointer_down(200.0, 300.0, 0.0);

    // Let the scheduler raise the first request.
    let mut now = 0.0;
    let idx = loop {
        now += 100.0;
        w.update(now);
        if let Some(i) = w.cats.iter().position(|c| c.need.is_some()) {
            break i;
        }
        assert!(now < 10_000.0, "first request arrives within seconds");
    };

    let spot = (w.cats[idx].x, w.cats[idx].y);
    let deadline = w.cats[idx].deadline.unwrap();
    w.update(deadline + 1_100.0);
    assert_eq!(w.cats[idx].need, None);
    assert_ne!((w.cats[idx].x, w.cats[idx].y), spot);
    assert_eq!(w.session.score(), 0, "a missed request carries no penalty");
}

#[test]
fn identical_seeds_replay_identically() {
    let mut a = World::new(GameConfig::classic(), 31_415);
    let mut b = World::new(GameConfig::classic(), 31_415);
    for w in [&mut a, &mut b] {
        w.pointer_down(200.0, 300.0, 0.0);
        let mut now = 0.0;
        for _ in 0..400 {
            now += 120.0;
            w.update(now);
        }
    }
    let snap = |w: &World| {
        w.cats
            .iter()
            .map(|c| (c.need, c.x, c.y, c.satisfied))
            .collect::<Vec<_>>()
    };
    assert_eq!(snap(&a), snap(&b));
    assert_eq!(a.session.score(), b.session.score());
    assert_eq!(a.session.time_left(), b.session.time_left());
}

#[test]
fn rush_stage_shortens_fresh_fulfillment_windows() {
    let mut cfg = GameConfig::classic();
    cfg.rush_after_ms = 4000.0;
    let base_window = cfg.need_duration_ms(1, false);
    let rush_window = cfg.need_duration_ms(1, true);

    let mut w = World::new(cfg, 11);
    w.pointer_down(200.0, 300.0, 0.0);

    // A request raised before the threshold gets the relaxed window.
    w.generate_random_request(500.0);
    let idx = w.cats.iter().position(|c| c.need.is_some()).unwrap();
    assert_eq!(w.cats[idx].deadline.unwrap() - 500.0, base_window);

    // Cross the threshold, then raise a fresh request on an idle roster.
    w.update(6000.0);
    for cat in &mut w.cats {
        cat.clear_need();
        cat.satisfied = false;
    }
    w.generate_random_request(6100.0);
    let idx = w.cats.iter().position(|c| c.need.is_some()).unwrap();
    assert_eq!(w.cats[idx].deadline.unwrap() - 6100.0, rush_window);
}
