//! Session tuning configuration.
//!
//! All pacing knobs live here so the QA harness can exercise shortened days
//! without touching the balance constants. Fields default individually,
//! letting partial JSON overrides deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ASSISTANT_PROGRESS_PER_TICK, ASSISTANT_REWARD_COINS, ASSISTANT_REWARD_POINTS,
    ASSISTANT_TICK_MS, DAY_LENGTH_SECS, PAINT_CELLS_FULL_COVERAGE, RATING_DISPLAY_SECS,
    SERVE_TARGET_PER_DAY, STARTING_COINS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seconds on the day clock when a day begins.
    #[serde(default = "GameConfig::default_day_length_secs")]
    pub day_length_secs: u32,
    /// Customers served in one day that end it early.
    #[serde(default = "GameConfig::default_serve_target")]
    pub serve_target: u32,
    /// Presentation delay before the rating screen yields back to play.
    #[serde(default = "GameConfig::default_rating_display_secs")]
    pub rating_display_secs: u32,
    /// Distinct paint cells equal to full coverage at paint level 1.
    #[serde(default = "GameConfig::default_paint_cells_full")]
    pub paint_cells_full: u32,
    /// Assistant simulation tick interval, for hosts that own the timer.
    #[serde(default = "GameConfig::default_assistant_tick_ms")]
    pub assistant_tick_ms: u64,
    /// Progress percent added per assistant tick.
    #[serde(default = "GameConfig::default_assistant_progress_per_tick")]
    pub assistant_progress_per_tick: f32,
    /// Flat coin payout per assistant-completed customer.
    #[serde(default = "GameConfig::default_assistant_reward_coins")]
    pub assistant_reward_coins: i64,
    /// Flat point payout per assistant-completed customer.
    #[serde(default = "GameConfig::default_assistant_reward_points")]
    pub assistant_reward_points: i64,
    /// Coin balance a fresh session starts with.
    #[serde(default = "GameConfig::default_starting_coins")]
    pub starting_coins: i64,
}

impl GameConfig {
    #[must_use]
    pub const fn default_day_length_secs() -> u32 {
        DAY_LENGTH_SECS
    }

    #[must_use]
    pub const fn default_serve_target() -> u32 {
        SERVE_TARGET_PER_DAY
    }

    #[must_use]
    pub const fn default_rating_display_secs() -> u32 {
        RATING_DISPLAY_SECS
    }

    #[must_use]
    pub const fn default_paint_cells_full() -> u32 {
        PAINT_CELLS_FULL_COVERAGE
    }

    #[must_use]
    pub const fn default_assistant_tick_ms() -> u64 {
        ASSISTANT_TICK_MS
    }

    #[must_use]
    pub const fn default_assistant_progress_per_tick() -> f32 {
        ASSISTANT_PROGRESS_PER_TICK
    }

    #[must_use]
    pub const fn default_assistant_reward_coins() -> i64 {
        ASSISTANT_REWARD_COINS
    }

    #[must_use]
    pub const fn default_assistant_reward_points() -> i64 {
        ASSISTANT_REWARD_POINTS
    }

    #[must_use]
    pub const fn default_starting_coins() -> i64 {
        STARTING_COINS
    }

    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            day_length_secs: Self::default_day_length_secs(),
            serve_target: Self::default_serve_target(),
            rating_display_secs: Self::default_rating_display_secs(),
            paint_cells_full: Self::default_paint_cells_full(),
            assistant_tick_ms: Self::default_assistant_tick_ms(),
            assistant_progress_per_tick: Self::default_assistant_progress_per_tick(),
            assistant_reward_coins: Self::default_assistant_reward_coins(),
            assistant_reward_points: Self::default_assistant_reward_points(),
            starting_coins: Self::default_starting_coins(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Customers that must be served before day end to keep the shop open.
#[must_use]
pub const fn daily_quota(day: u32) -> u32 {
    day + crate::constants::DAILY_QUOTA_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{ "day_length_secs": 30 }"#).unwrap();
        assert_eq!(cfg.day_length_secs, 30);
        assert_eq!(cfg.serve_target, 5);
        assert_eq!(cfg.starting_coins, 100);
        assert!((cfg.assistant_progress_per_tick - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn quota_is_day_plus_two() {
        for day in 1..=12 {
            assert_eq!(daily_quota(day), day + 2);
        }
    }
}
