//! Session phase state machine: ready -> playing -> ended -> ready.
//!
//! Every action is a defensive no-op when called in the wrong phase. Timer
//! callbacks and pointer handlers race against phase transitions in the host
//! environment, so out-of-order calls must never be an error.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Ended,
}

#[derive(Clone, Debug)]
pub struct Session {
    phase: Phase,
    score: u32,
    level: u32,
    time_left: u32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Ready,
            score: 0,
            level: 1,
            time_left: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Ready -> Playing with a fresh score/level/clock. No-op elsewhere; the
    /// caller re-arms the need scheduler after a successful start.
    pub fn start(&mut self, initial_time: u32) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Playing;
        self.score = 0;
        self.level = 1;
        self.time_left = initial_time;
    }

    /// Playing -> Ended. Only valid from Playing.
    pub fn end(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Ended;
        }
    }

    /// Any phase -> Ready, clearing progress. Idempotent.
    pub fn reset(&mut self) {
        self.phase = Phase::Ready;
        self.score = 0;
        self.level = 1;
        self.time_left = 0;
    }

    /// One point per correct delivery. Playing only.
    pub fn increment_score(&mut self) {
        if self.phase == Phase::Playing {
            self.score += 1;
        }
    }

    /// Level bump with a bounded time grant. Playing only.
    pub fn level_up(&mut self, bonus: u32, cap: u32) {
        if self.phase != Phase::Playing {
            return;
        }
        self.level += 1;
        self.time_left = (self.time_left + bonus).min(cap);
    }

    /// Delivery time bonus, clamped to the cap. Playing only.
    pub fn add_time(&mut self, bonus: u32, cap: u32) {
        if self.phase == Phase::Playing {
            self.time_left = (self.time_left + bonus).min(cap);
        }
    }

    /// One countdown tick. Returns true when the clock just hit zero, at
    /// which point the caller must end the game within the same tick.
    pub fn decrement_time(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left == 0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
