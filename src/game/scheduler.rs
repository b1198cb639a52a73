//! Need scheduler: decides *when* a new request should be generated and when
//! deadlines should be swept, with difficulty escalating over elapsed play
//! time and level.
//!
//! All timers are logical: the scheduler owns one next-fire timestamp per
//! concern and compares them against the caller's clock. A policy change
//! (rush threshold crossed, level changed) recomputes the interval and
//! re-arms the generation timer rather than letting a stale cadence run on.

use crate::game::config::{GameConfig, TICK_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Assign a random need to one random idle cat.
    Request,
    /// The guaranteed early spike: two idle cats, one food and one water.
    DoubleRequest,
    /// Scan all deadlines and expire overdue needs.
    Sweep,
}

#[derive(Clone, Debug)]
pub struct NeedScheduler {
    armed: bool,
    started_at: f64,
    rush: bool,
    level: u32,
    interval_ms: f64,
    next_request_at: f64,
    next_sweep_at: f64,
    next_policy_at: f64,
    first_request_at: Option<f64>,
    double_request_at: Option<f64>,
}

impl NeedScheduler {
    /// A disarmed scheduler; produces no events until `arm` is called.
    pub fn idle() -> Self {
        Self {
            armed: false,
            started_at: 0.0,
            rush: false,
            level: 1,
            interval_ms: 0.0,
            next_request_at: 0.0,
            next_sweep_at: 0.0,
            next_policy_at: 0.0,
            first_request_at: None,
            double_request_at: None,
        }
    }

    /// Start the elapsed clock and arm every timer. Called on entering the
    /// playing phase.
    pub fn arm(&mut self, now: f64, cfg: &GameConfig, level: u32) {
        self.armed = true;
        self.started_at = now;
        self.rush = false;
        self.level = level;
        self.interval_ms = cfg.request_interval_ms(level, false);
        self.next_request_at = now + self.interval_ms;
        self.next_sweep_at = now + TICK_MS;
        self.next_policy_at = now + cfg.policy_check_ms;
        self.first_request_at = Some(now + cfg.first_request_delay_ms);
        self.double_request_at = Some(now + cfg.double_request_at_ms);
    }

    /// Cancel everything. Called on every transition out of the playing
    /// phase; a disarmed scheduler must never emit another event.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.first_request_at = None;
        self.double_request_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether the late-game escalation stage is active.
    pub fn rush(&self) -> bool {
        self.rush
    }

    /// Fulfillment window for a need assigned right now.
    pub fn need_duration_ms(&self, cfg: &GameConfig, level: u32) -> f64 {
        cfg.need_duration_ms(level, self.rush)
    }

    fn retune(&mut self, now: f64, cfg: &GameConfig) {
        self.interval_ms = cfg.request_interval_ms(self.level, self.rush);
        // Cancel-and-replace: the old cadence dies with the old policy.
        self.next_request_at = now + self.interval_ms;
    }

    /// Advance the scheduler to `now` and collect due events. `active_needs`
    /// is the count of cats currently holding an open request; generation is
    /// suppressed while it meets the concurrency bound.
    pub fn poll(
        &mut self,
        now: f64,
        cfg: &GameConfig,
        level: u32,
        active_needs: usize,
    ) -> Vec<SchedulerEvent> {
        let mut events = Vec::new();
        if !self.armed {
            return events;
        }

        if self.level != level {
            self.level = level;
            self.retune(now, cfg);
        }

        if self.next_policy_at <= now {
            self.next_policy_at = now + cfg.policy_check_ms;
            if !self.rush && now - self.started_at >= cfg.rush_after_ms {
                self.rush = true;
                self.retune(now, cfg);
            }
        }

        if let Some(at) = self.first_request_at
            && at <= now
        {
            self.first_request_at = None;
            events.push(SchedulerEvent::Request);
        }

        if let Some(at) = self.double_request_at
            && at <= now
        {
            self.double_request_at = None;
            events.push(SchedulerEvent::DoubleRequest);
        }

        if self.next_request_at <= now {
            self.next_request_at = now + self.interval_ms;
            if active_needs < cfg.max_concurrent(level, self.rush) {
                events.push(SchedulerEvent::Request);
            }
        }

        if self.next_sweep_at <= now {
            self.next_sweep_at = now + TICK_MS;
            events.push(SchedulerEvent::Sweep);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::classic()
    }

    #[test]
    fn disarmed_scheduler_is_silent() {
        let mut s = NeedScheduler::idle();
        assert!(s.poll(1e9, &cfg(), 1, 0).is_empty());
    }

    #[test]
    fn first_request_fires_once_after_its_delay() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        assert!(!s.poll(1400.0, &cfg, 1, 0).contains(&SchedulerEvent::Request));
        assert!(s.poll(1500.0, &cfg, 1, 0).contains(&SchedulerEvent::Request));
        assert!(!s.poll(1600.0, &cfg, 1, 0).contains(&SchedulerEvent::Request));
    }

    #[test]
    fn double_request_fires_at_its_moment() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        s.poll(9000.0, &cfg, 1, 0);
        let events = s.poll(10_000.0, &cfg, 1, 0);
        assert!(events.contains(&SchedulerEvent::DoubleRequest));
        assert!(!s
            .poll(10_100.0, &cfg, 1, 0)
            .contains(&SchedulerEvent::DoubleRequest));
    }

    #[test]
    fn generation_is_gated_by_concurrency() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        s.poll(1500.0, &cfg, 1, 0); // consume the first one-shot
        let interval = cfg.request_interval_ms(1, false);
        // Bound at level 1 is 1 open request: a full plate suppresses output.
        let events = s.poll(interval, &cfg, 1, 1);
        assert!(!events.contains(&SchedulerEvent::Request));
        // Next interval boundary with a free slot emits again.
        let events = s.poll(interval * 2.0, &cfg, 1, 0);
        assert!(events.contains(&SchedulerEvent::Request));
    }

    #[test]
    fn sweep_ticks_every_second() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        assert!(s.poll(1000.0, &cfg, 1, 0).contains(&SchedulerEvent::Sweep));
        assert!(!s.poll(1500.0, &cfg, 1, 0).contains(&SchedulerEvent::Sweep));
        assert!(s.poll(2000.0, &cfg, 1, 0).contains(&SchedulerEvent::Sweep));
    }

    #[test]
    fn rush_threshold_retunes_and_rearms() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        assert!(!s.rush());
        // Keep pending requests saturated so only the policy matters.
        s.poll(cfg.rush_after_ms, &cfg, 1, 9);
        assert!(s.rush());
        // The generation timer was re-armed at the rush interval: nothing
        // fires before one full rush interval elapses from the transition.
        let rush_interval = cfg.request_interval_ms(1, true);
        let events = s.poll(cfg.rush_after_ms + rush_interval - 100.0, &cfg, 1, 0);
        assert!(!events.contains(&SchedulerEvent::Request));
        let events = s.poll(cfg.rush_after_ms + rush_interval, &cfg, 1, 0);
        assert!(events.contains(&SchedulerEvent::Request));
        assert_eq!(s.need_duration_ms(&cfg, 1), cfg.need_duration_ms(1, true));
    }

    #[test]
    fn level_change_rearms_the_generation_timer() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        s.poll(100.0, &cfg, 3, 9);
        // Interval is now the level-3 one, measured from the retune instant.
        let i3 = cfg.request_interval_ms(3, false);
        assert!(!s.poll(100.0 + i3 - 50.0, &cfg, 3, 0).contains(&SchedulerEvent::Request));
        assert!(s.poll(100.0 + i3, &cfg, 3, 0).contains(&SchedulerEvent::Request));
    }

    #[test]
    fn disarm_cancels_pending_one_shots() {
        let cfg = cfg();
        let mut s = NeedScheduler::idle();
        s.arm(0.0, &cfg, 1);
        s.disarm();
        assert!(s.poll(20_000.0, &cfg, 1, 0).is_empty());
    }
}
