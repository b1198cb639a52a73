//! The game world: one owned state object tying the session state machine,
//! need scheduler, delivery resolution, dialogue, and position allocation
//! together. Pure Rust; the canvas shell forwards timestamps and pointer
//! events in, and reads actors/bubbles/audio cues out.
//!
//! Timekeeping: every timer is a stored next-fire timestamp compared against
//! the `now` the shell passes in (the `performance.now()` domain). All timers
//! scoped to the playing phase are disarmed on any transition out of it; a
//! late callback can therefore never mutate a finished game.

use crate::game::actors::{
    self, CAT_SIZE, Cat, ITEM_SIZE, Item, Need, spawn_cats, spawn_items,
};
use crate::game::config::{GameConfig, TICK_MS};
use crate::game::delivery::{DropOutcome, classify};
use crate::game::dialogue;
use crate::game::geometry::{Point, clamp};
use crate::game::rng::Lcg;
use crate::game::scheduler::{NeedScheduler, SchedulerEvent};
use crate::game::session::{Phase, Session};
use crate::{GAME_HEIGHT, GAME_WIDTH};

/// Vertical gap between a speaker and its bubble anchor.
const BUBBLE_OFFSET: f64 = 30.0;
/// Nominal bubble extents used only for clamping anchors onto the canvas.
const BUBBLE_W: f64 = 160.0;
const BUBBLE_H: f64 = 48.0;

/// Where the caretaker stands in the room.
pub const CARETAKER_X: f64 = 200.0;
pub const CARETAKER_Y: f64 = 370.0;
pub const CARETAKER_W: f64 = 180.0;
pub const CARETAKER_H: f64 = 240.0;

const BUBBLE_REQUEST_COLOR: &str = "#FFE4B5";
const BUBBLE_CARETAKER_COLOR: &str = "#FFE4E1";
const BUBBLE_THANKS_COLOR: &str = "#90EE90";
const BUBBLE_WRONG_COLOR: &str = "#FFB6C1";

/// Fire-and-forget triggers for the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Success,
    Hit,
}

/// Transient flavor text. Owned by the presentation side of the world:
/// nothing in the game logic ever reads a bubble back.
#[derive(Clone, Debug)]
pub struct SpeechBubble {
    pub x: f64,
    pub y: f64,
    pub text: &'static str,
    pub color: &'static str,
    pub created_at: f64,
    pub expires_at: f64,
    pub icon: Option<Need>,
}

pub struct World {
    pub config: GameConfig,
    pub session: Session,
    pub cats: Vec<Cat>,
    pub items: Vec<Item>,
    pub bubbles: Vec<SpeechBubble>,
    scheduler: NeedScheduler,
    rng: Lcg,
    /// Index of the item being dragged; at most one process-wide.
    dragging: Option<usize>,
    next_countdown_at: f64,
    /// One-shots: satisfied-grace expiries and delayed caretaker reactions,
    /// as (cat index, fire-at) pairs.
    grace_expiries: Vec<(usize, f64)>,
    pending_reactions: Vec<(usize, f64)>,
    cues: Vec<AudioCue>,
}

impl World {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            session: Session::new(),
            cats: spawn_cats(),
            items: spawn_items(),
            bubbles: Vec::new(),
            scheduler: NeedScheduler::idle(),
            rng: Lcg::new(seed),
            dragging: None,
            next_countdown_at: 0.0,
            grace_expiries: Vec::new(),
            pending_reactions: Vec::new(),
            cues: Vec::new(),
        }
    }

    /// Ready -> Playing: fresh roster, fresh clock, scheduler armed.
    pub fn start(&mut self, now: f64) {
        if self.session.phase() != Phase::Ready {
            return;
        }
        self.session.start(self.config.initial_time);
        self.cats = spawn_cats();
        self.items = spawn_items();
        self.bubbles.clear();
        self.cues.clear();
        self.dragging = None;
        self.grace_expiries.clear();
        self.pending_reactions.clear();
        self.next_countdown_at = now + TICK_MS;
        let level = self.session.level();
        self.scheduler.arm(now, &self.config, level);
    }

    /// Any phase -> Ready. Idempotent; cancels everything.
    pub fn reset(&mut self) {
        self.session.reset();
        self.disarm_all();
        self.cats = spawn_cats();
        self.items = spawn_items();
        self.bubbles.clear();
    }

    fn end_game(&mut self) {
        self.session.end();
        self.disarm_all();
    }

    /// Strict invariant: no playing-scoped timer survives a phase exit.
    fn disarm_all(&mut self) {
        self.scheduler.disarm();
        self.grace_expiries.clear();
        self.pending_reactions.clear();
        if let Some(i) = self.dragging.take() {
            self.items[i].snap_home();
        }
    }

    pub fn dragged_item(&self) -> Option<&Item> {
        self.dragging.map(|i| &self.items[i])
    }

    /// Hand accumulated audio triggers to the shell.
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    /// Advance all logical timers to `now`. Outside the playing phase only
    /// bubble expiry runs; bubbles self-destruct regardless of game state.
    pub fn update(&mut self, now: f64) {
        self.bubbles.retain(|b| b.expires_at > now);
        if !self.session.is_playing() {
            return;
        }

        while self.session.is_playing() && now >= self.next_countdown_at {
            self.next_countdown_at += TICK_MS;
            if self.session.decrement_time() {
                self.end_game();
                return;
            }
        }

        self.fire_caretaker_reactions(now);
        self.fire_grace_expiries(now);

        let active = self.cats.iter().filter(|c| c.need.is_some()).count();
        let level = self.session.level();
        let events = self.scheduler.poll(now, &self.config, level, active);
        for event in events {
            match event {
                SchedulerEvent::Request => self.generate_random_request(now),
                SchedulerEvent::DoubleRequest => self.generate_double_request(now),
                SchedulerEvent::Sweep => self.sweep_deadlines(now),
            }
        }
    }

    // --- Pointer / drag lifecycle -------------------------------------------

    /// Pointer press in logical coordinates. Outside the playing phase this
    /// doubles as the start/replay control.
    pub fn pointer_down(&mut self, x: f64, y: f64, now: f64) {
        match self.session.phase() {
            Phase::Ready => {
                self.start(now);
                return;
            }
            Phase::Ended => {
                self.reset();
                return;
            }
            Phase::Playing => {}
        }
        if self.dragging.is_some() {
            return;
        }
        let p = Point::new(x, y);
        for (i, item) in self.items.iter_mut().enumerate() {
            if item.rect().contains(p) {
                item.dragging = true;
                self.dragging = Some(i);
                break;
            }
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(i) = self.dragging {
            // Carry the item by its center.
            self.items[i].x = x - ITEM_SIZE / 2.0;
            self.items[i].y = y - ITEM_SIZE / 2.0;
        }
    }

    /// Pointer release: resolve the drop, then always snap the item home.
    pub fn pointer_up(&mut self, now: f64) {
        let Some(i) = self.dragging.take() else {
            return;
        };
        if self.session.is_playing() {
            let kind = self.items[i].kind;
            let drop_point = Point::new(self.items[i].x, self.items[i].y);
            match classify(&self.cats, drop_point, kind) {
                DropOutcome::Correct(idx) => self.handle_correct_delivery(idx, now),
                DropOutcome::Wrong(idx) => self.handle_wrong_delivery(idx, now),
                DropOutcome::Missed => {}
            }
        }
        self.items[i].snap_home();
    }

    // --- Request generation --------------------------------------------------

    /// Assign a uniformly random need to a uniformly random idle cat.
    /// Skips silently when no cat is available.
    pub fn generate_random_request(&mut self, now: f64) {
        let available: Vec<usize> = (0..self.cats.len())
            .filter(|&i| self.cats[i].is_available())
            .collect();
        if available.is_empty() {
            return;
        }
        let idx = available[self.rng.pick(available.len())];
        self.generate_request(idx, None, now);
    }

    /// The guaranteed early spike: the first two idle cats get food and
    /// water at once. Skipped when fewer than two cats are idle.
    fn generate_double_request(&mut self, now: f64) {
        let available: Vec<usize> = (0..self.cats.len())
            .filter(|&i| self.cats[i].is_available())
            .collect();
        if available.len() < 2 {
            return;
        }
        self.generate_request(available[0], Some(Need::Food), now);
        self.generate_request(available[1], Some(Need::Water), now);
    }

    fn generate_request(&mut self, idx: usize, force: Option<Need>, now: f64) {
        if !self.session.is_playing() || !self.cats[idx].is_available() {
            return;
        }
        let need = force.unwrap_or(if self.rng.coin() { Need::Food } else { Need::Water });
        let level = self.session.level();
        let duration = self.scheduler.need_duration_ms(&self.config, level);
        let temperament = self.cats[idx].temperament;
        let line = dialogue::need_line(temperament, need, &mut self.rng);
        {
            let cat = &mut self.cats[idx];
            cat.need = Some(need);
            cat.deadline = Some(now + duration);
        }
        self.cat_bubble(idx, line, BUBBLE_REQUEST_COLOR, Some(need), now);
        self.pending_reactions
            .push((idx, now + self.config.caretaker_reaction_delay_ms));
    }

    /// Expire overdue needs: the request is simply missed, the cat wanders
    /// off. No score penalty beyond the lost opportunity.
    fn sweep_deadlines(&mut self, now: f64) {
        for idx in 0..self.cats.len() {
            let overdue = matches!(self.cats[idx].deadline, Some(d) if now > d)
                && self.cats[idx].need.is_some();
            if overdue {
                let cat = &mut self.cats[idx];
                cat.clear_need();
                cat.satisfied = false;
                self.relocate_cat(idx);
            }
        }
    }

    // --- Delivery outcomes ----------------------------------------------------

    fn handle_correct_delivery(&mut self, idx: usize, now: f64) {
        self.session.increment_score();
        let level = self.session.level();
        self.session
            .add_time(self.config.delivery_bonus(level), self.config.max_time);
        if self.session.score() % self.config.level_up_score_step == 0 {
            self.session
                .level_up(self.config.level_up_time_bonus, self.config.max_time);
        }
        let temperament = self.cats[idx].temperament;
        {
            let cat = &mut self.cats[idx];
            cat.clear_need();
            cat.satisfied = true;
        }
        self.cues.push(AudioCue::Success);
        let line = dialogue::thanks_line(temperament, &mut self.rng);
        self.cat_bubble(idx, line, BUBBLE_THANKS_COLOR, None, now);
        self.grace_expiries
            .push((idx, now + self.config.satisfied_grace_ms));
    }

    fn handle_wrong_delivery(&mut self, idx: usize, now: f64) {
        self.cues.push(AudioCue::Hit);
        let line = dialogue::wrong_line(self.cats[idx].temperament, &mut self.rng);
        self.cat_bubble(idx, line, BUBBLE_WRONG_COLOR, None, now);
    }

    // --- One-shot timers --------------------------------------------------------

    fn fire_caretaker_reactions(&mut self, now: f64) {
        let mut due = Vec::new();
        self.pending_reactions.retain(|&(idx, at)| {
            if at <= now {
                due.push(idx);
                false
            } else {
                true
            }
        });
        for idx in due {
            let line = dialogue::caretaker_line(self.cats[idx].temperament, &mut self.rng);
            self.bubbles.push(SpeechBubble {
                x: CARETAKER_X + CARETAKER_W / 2.0,
                y: CARETAKER_Y - BUBBLE_OFFSET,
                text: line,
                color: BUBBLE_CARETAKER_COLOR,
                created_at: now,
                expires_at: now + self.config.caretaker_bubble_lifetime_ms,
                icon: None,
            });
        }
    }

    fn fire_grace_expiries(&mut self, now: f64) {
        let mut due = Vec::new();
        self.grace_expiries.retain(|&(idx, at)| {
            if at <= now {
                due.push(idx);
                false
            } else {
                true
            }
        });
        for idx in due {
            self.cats[idx].satisfied = false;
            self.relocate_cat(idx);
        }
    }

    // --- Helpers ---------------------------------------------------------------

    fn relocate_cat(&mut self, idx: usize) {
        let current = (self.cats[idx].x, self.cats[idx].y);
        let others: Vec<(f64, f64)> = self
            .cats
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, c)| (c.x, c.y))
            .collect();
        let (x, y) = actors::next_spot(
            &mut self.rng,
            current,
            &others,
            self.config.min_cat_separation,
        );
        self.cats[idx].x = x;
        self.cats[idx].y = y;
    }

    fn cat_bubble(
        &mut self,
        idx: usize,
        text: &'static str,
        color: &'static str,
        icon: Option<Need>,
        now: f64,
    ) {
        let cat = &self.cats[idx];
        let x = clamp(
            cat.x + CAT_SIZE / 2.0,
            BUBBLE_W / 2.0,
            GAME_WIDTH as f64 - BUBBLE_W / 2.0,
        );
        let y = clamp(
            (cat.y - BUBBLE_OFFSET).max(20.0),
            BUBBLE_H,
            GAME_HEIGHT as f64 - BUBBLE_H,
        );
        self.bubbles.push(SpeechBubble {
            x,
            y,
            text,
            color,
            created_at: now,
            expires_at: now + self.config.cat_bubble_lifetime_ms,
            icon,
        });
    }
}
