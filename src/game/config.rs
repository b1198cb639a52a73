//! All gameplay tuning in one place.
//!
//! The game shipped in two hand-tuned variants that disagreed on the initial
//! clock, the level-up cadence, and the escalation thresholds. Both live here
//! as presets; nothing in the engine hard-codes a tuning number.

/// Milliseconds between deadline sweeps and countdown ticks.
pub const TICK_MS: f64 = 1000.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Countdown budget granted by start/restart, seconds.
    pub initial_time: u32,
    /// Hard ceiling for the countdown; bonuses never push past it.
    pub max_time: u32,
    /// Level up every time the score reaches a multiple of this.
    pub level_up_score_step: u32,
    /// Seconds added by a level up (clamped to `max_time`).
    pub level_up_time_bonus: u32,
    /// Correct-delivery bonus is `delivery_bonus_base - level`, seconds...
    pub delivery_bonus_base: u32,
    /// ...but never below this floor.
    pub delivery_bonus_min: u32,

    /// Delay before the very first request after the game starts, ms.
    pub first_request_delay_ms: f64,
    /// Moment of the guaranteed double request (two cats, two need types), ms.
    pub double_request_at_ms: f64,
    /// Elapsed play time after which the rush policy kicks in, ms.
    pub rush_after_ms: f64,
    /// Cadence of the escalation-policy recheck, ms.
    pub policy_check_ms: f64,

    /// Request interval before the rush: `base - step * level`, floored.
    pub base_interval_ms: f64,
    pub base_interval_step_ms: f64,
    pub base_interval_floor_ms: f64,
    /// Request interval during the rush, same shape, tighter numbers.
    pub rush_interval_ms: f64,
    pub rush_interval_step_ms: f64,
    pub rush_interval_floor_ms: f64,

    /// Concurrency bound before the rush: `min(cap, 1 + level / 2)`.
    pub base_concurrent_cap: usize,
    /// Concurrency bound during the rush: `min(cap, 2 + level / 2)`.
    pub rush_concurrent_cap: usize,

    /// Need fulfillment window before the rush: `base - level` seconds, floored.
    pub need_duration_s: u32,
    pub need_duration_floor_s: u32,
    /// Fulfillment window during the rush.
    pub rush_duration_s: u32,
    pub rush_duration_floor_s: u32,

    /// How long a fed cat stays satisfied (no new requests) before relocating, ms.
    pub satisfied_grace_ms: f64,
    /// Delay before the caretaker reacts to a new request, ms.
    pub caretaker_reaction_delay_ms: f64,
    /// Speech bubble lifetimes, ms.
    pub cat_bubble_lifetime_ms: f64,
    pub caretaker_bubble_lifetime_ms: f64,

    /// Minimum Euclidean distance between resting cats, logical units.
    pub min_cat_separation: f64,
}

impl GameConfig {
    /// The long-form variant: a full minute on the clock, level up every 8
    /// points, rush difficulty after one minute of play.
    pub fn classic() -> Self {
        Self {
            initial_time: 60,
            max_time: 90,
            level_up_score_step: 8,
            level_up_time_bonus: 5,
            delivery_bonus_base: 12,
            delivery_bonus_min: 5,
            first_request_delay_ms: 1500.0,
            double_request_at_ms: 10_000.0,
            rush_after_ms: 60_000.0,
            policy_check_ms: 2000.0,
            base_interval_ms: 5000.0,
            base_interval_step_ms: 250.0,
            base_interval_floor_ms: 2000.0,
            rush_interval_ms: 2000.0,
            rush_interval_step_ms: 120.0,
            rush_interval_floor_ms: 900.0,
            base_concurrent_cap: 2,
            rush_concurrent_cap: 4,
            need_duration_s: 20,
            need_duration_floor_s: 8,
            rush_duration_s: 12,
            rush_duration_floor_s: 5,
            satisfied_grace_ms: 2000.0,
            caretaker_reaction_delay_ms: 1000.0,
            cat_bubble_lifetime_ms: 4000.0,
            caretaker_bubble_lifetime_ms: 3000.0,
            min_cat_separation: 80.0,
        }
    }

    /// The short-form variant: 20 seconds, level up every 5 points, capped at
    /// half a minute. Rush thresholds scale down with the shorter session.
    pub fn sprint() -> Self {
        Self {
            initial_time: 20,
            max_time: 30,
            level_up_score_step: 5,
            rush_after_ms: 30_000.0,
            ..Self::classic()
        }
    }

    /// Request interval for the given level under the current policy stage.
    pub fn request_interval_ms(&self, level: u32, rush: bool) -> f64 {
        let (base, step, floor) = if rush {
            (
                self.rush_interval_ms,
                self.rush_interval_step_ms,
                self.rush_interval_floor_ms,
            )
        } else {
            (
                self.base_interval_ms,
                self.base_interval_step_ms,
                self.base_interval_floor_ms,
            )
        };
        (base - step * level as f64).max(floor)
    }

    /// Upper bound on simultaneously open requests.
    pub fn max_concurrent(&self, level: u32, rush: bool) -> usize {
        let (start, cap) = if rush {
            (2, self.rush_concurrent_cap)
        } else {
            (1, self.base_concurrent_cap)
        };
        (start + level as usize / 2).min(cap)
    }

    /// Fulfillment window granted to a freshly assigned need, ms.
    pub fn need_duration_ms(&self, level: u32, rush: bool) -> f64 {
        let (base, floor) = if rush {
            (self.rush_duration_s, self.rush_duration_floor_s)
        } else {
            (self.need_duration_s, self.need_duration_floor_s)
        };
        base.saturating_sub(level).max(floor) as f64 * 1000.0
    }

    /// Seconds of countdown granted by a correct delivery.
    pub fn delivery_bonus(&self, level: u32) -> u32 {
        self.delivery_bonus_base
            .saturating_sub(level)
            .max(self.delivery_bonus_min)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_where_the_variants_did() {
        let classic = GameConfig::classic();
        let sprint = GameConfig::sprint();
        assert_eq!(classic.initial_time, 60);
        assert_eq!(sprint.initial_time, 20);
        assert_eq!(classic.level_up_score_step, 8);
        assert_eq!(sprint.level_up_score_step, 5);
        assert!(sprint.max_time < classic.max_time);
    }

    #[test]
    fn interval_tightens_monotonically() {
        let cfg = GameConfig::classic();
        let mut prev = f64::INFINITY;
        for level in 1..20 {
            let i = cfg.request_interval_ms(level, false);
            assert!(i <= prev);
            assert!(i >= cfg.base_interval_floor_ms);
            prev = i;
        }
        // Rush stage is strictly tighter than the base stage at equal level.
        assert!(cfg.request_interval_ms(3, true) < cfg.request_interval_ms(3, false));
        // Deep levels bottom out at the floors.
        assert_eq!(cfg.request_interval_ms(50, false), cfg.base_interval_floor_ms);
        assert_eq!(cfg.request_interval_ms(50, true), cfg.rush_interval_floor_ms);
    }

    #[test]
    fn concurrency_grows_with_ceilings() {
        let cfg = GameConfig::classic();
        assert_eq!(cfg.max_concurrent(1, false), 1);
        assert_eq!(cfg.max_concurrent(2, false), 2);
        assert_eq!(cfg.max_concurrent(10, false), cfg.base_concurrent_cap);
        assert_eq!(cfg.max_concurrent(1, true), 2);
        assert_eq!(cfg.max_concurrent(10, true), cfg.rush_concurrent_cap);
    }

    #[test]
    fn durations_shrink_with_floors() {
        let cfg = GameConfig::classic();
        assert_eq!(cfg.need_duration_ms(1, false), 19_000.0);
        assert_eq!(cfg.need_duration_ms(30, false), 8000.0);
        assert_eq!(cfg.need_duration_ms(1, true), 11_000.0);
        assert_eq!(cfg.need_duration_ms(30, true), 5000.0);
    }

    #[test]
    fn delivery_bonus_floors() {
        let cfg = GameConfig::classic();
        assert_eq!(cfg.delivery_bonus(1), 11);
        assert_eq!(cfg.delivery_bonus(7), 5);
        assert_eq!(cfg.delivery_bonus(40), 5);
    }
}
