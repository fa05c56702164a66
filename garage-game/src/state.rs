//! The session aggregate owned by the controller.
//!
//! All mutation funnels through [`crate::session::ShopSession`]; nothing
//! here is a global. The renderer consumes this struct read-only.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::assistant::AssistantState;
use crate::constants::{DAY_LENGTH_SECS, DEBUG_ENV_VAR};
use crate::customer::{Customer, CustomerQueue};
use crate::economy::EconomyLedger;
use crate::pipeline::BuildPipeline;
use crate::score::Rating;

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Start,
    Playing,
    Rating,
    DayEnd,
    GameOver,
}

impl SessionPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::Rating => "rating",
            Self::DayEnd => "day_end",
            Self::GameOver => "game_over",
        }
    }
}

/// Phase-scoped timer handle.
///
/// Every phase entry invalidates previously issued tokens, so a countdown or
/// assistant callback that fires after its phase ended presents a stale
/// token and is ignored instead of mutating a torn-down phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub seed: u64,
    pub day: u32,
    pub score: i64,
    #[serde(default)]
    pub ledger: EconomyLedger,
    #[serde(default)]
    pub customers_served_today: u32,
    #[serde(default)]
    pub total_cars_built: u32,
    #[serde(default)]
    pub perfect_cars: u32,
    #[serde(default = "default_day_time")]
    pub day_time_remaining_secs: u32,
    #[serde(default)]
    pub queue: CustomerQueue,
    #[serde(default)]
    pub current_customer: Option<Customer>,
    #[serde(default)]
    pub pipeline: Option<BuildPipeline>,
    #[serde(default)]
    pub assistant: AssistantState,
    #[serde(default)]
    pub last_rating: Option<Rating>,
    /// Presentation keys pushed for the UI/audio collaborator to drain.
    pub notifications: Vec<String>,
    #[serde(default)]
    timer_epoch: u64,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

const fn default_day_time() -> u32 {
    DAY_LENGTH_SECS
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SessionState {
    /// Fresh pre-game state carrying the run seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            phase: SessionPhase::Start,
            seed,
            day: 1,
            score: 0,
            ledger: EconomyLedger::default(),
            customers_served_today: 0,
            total_cars_built: 0,
            perfect_cars: 0,
            day_time_remaining_secs: DAY_LENGTH_SECS,
            queue: CustomerQueue::new(),
            current_customer: None,
            pipeline: None,
            assistant: AssistantState::default(),
            last_rating: None,
            notifications: Vec::new(),
            timer_epoch: 0,
            rng: Some(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    /// Restore the RNG after deserialization.
    #[must_use]
    pub fn rehydrate(mut self) -> Self {
        self.rng = Some(ChaCha20Rng::seed_from_u64(self.seed));
        self
    }

    /// Token for timers registered against the current phase.
    #[must_use]
    pub const fn timer_token(&self) -> TimerToken {
        TimerToken(self.timer_epoch)
    }

    #[must_use]
    pub const fn token_is_current(&self, token: TimerToken) -> bool {
        token.0 == self.timer_epoch
    }

    /// Keep stale-token protection intact across a full session reset.
    pub(crate) const fn carry_epoch_from(&mut self, previous: &Self) {
        self.timer_epoch = previous.timer_epoch;
    }

    /// Enter a phase, invalidating every timer scoped to the previous one.
    pub(crate) fn enter_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }

    pub(crate) fn push_note(&mut self, key: &str) {
        if debug_log_enabled() {
            println!("[garage] day={} phase={} {key}", self.day, self.phase.as_str());
        }
        self.notifications.push(key.to_string());
    }

    /// Hand the pending notification keys to the presenter.
    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}
