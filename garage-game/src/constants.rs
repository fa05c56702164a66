//! Centralized balance and tuning constants for the garage session engine.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Notification keys --------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "GARAGE_DEBUG_LOGS";
pub(crate) const LOG_SESSION_STARTED: &str = "log.session.started";
pub(crate) const LOG_ORDER_TAKEN: &str = "log.order.taken";
pub(crate) const LOG_FRAME_SELECTED: &str = "log.station.frame-selected";
pub(crate) const LOG_PAINT_COMMITTED: &str = "log.station.paint-committed";
pub(crate) const LOG_TIRES_COMMITTED: &str = "log.station.tires-committed";
pub(crate) const LOG_ENGINE_PLACED: &str = "log.station.engine-placed";
pub(crate) const LOG_ORDER_DELIVERED: &str = "log.order.delivered";
pub(crate) const LOG_ORDER_ABANDONED: &str = "log.order.abandoned";
pub(crate) const LOG_DAY_ENDED: &str = "log.day.ended";
pub(crate) const LOG_DAY_ADVANCED: &str = "log.day.advanced";
pub(crate) const LOG_QUEUE_RESTOCKED: &str = "log.queue.restocked";
pub(crate) const LOG_GAME_OVER: &str = "log.game-over";
pub(crate) const LOG_UPGRADE_PURCHASED: &str = "log.shop.purchased";
pub(crate) const LOG_ASSISTANT_CLAIMED: &str = "log.assistant.claimed";
pub(crate) const LOG_ASSISTANT_COMPLETED: &str = "log.assistant.completed";

// Station hint keys (presentation copy lives with the renderer) ------------
pub(crate) const HINT_STATION_FRAME: &str = "hint.station.frame";
pub(crate) const HINT_STATION_COLOR: &str = "hint.station.color";
pub(crate) const HINT_STATION_TIRES: &str = "hint.station.tires";
pub(crate) const HINT_STATION_ENGINE: &str = "hint.station.engine";
pub(crate) const HINT_STATION_CHECKOUT: &str = "hint.station.checkout";

// Day pacing ---------------------------------------------------------------
pub(crate) const DAY_LENGTH_SECS: u32 = 180;
pub(crate) const RATING_DISPLAY_SECS: u32 = 3;
pub(crate) const SERVE_TARGET_PER_DAY: u32 = 5;
pub(crate) const DAILY_QUOTA_BASE: u32 = 2;
pub(crate) const CUSTOMER_BATCH_BASE: u32 = 3;
pub(crate) const PATIENCE_BASE_SECS: u32 = 120;
pub(crate) const PATIENCE_PER_DAY_SECS: u32 = 10;

// Economy ------------------------------------------------------------------
pub(crate) const STARTING_COINS: i64 = 100;
pub(crate) const UPGRADE_BASE_COST: i64 = 50;
pub(crate) const UPGRADE_MAX_LEVEL: u8 = 3;
pub(crate) const ASSISTANT_HIRE_COST: i64 = 200;

// Scoring ------------------------------------------------------------------
pub(crate) const ORDER_ATTRIBUTE_COUNT: u8 = 4;
pub(crate) const STAR_MAX: u8 = 5;
pub(crate) const COINS_PER_STAR: f64 = 5.0;
pub(crate) const POINTS_PER_STAR: f64 = 10.0;

// Paint station ------------------------------------------------------------
pub(crate) const PAINT_CELLS_FULL_COVERAGE: u32 = 60;
pub(crate) const PAINT_COMPLETE_PCT: f32 = 100.0;

// Assistant ----------------------------------------------------------------
pub(crate) const ASSISTANT_TICK_MS: u64 = 100;
pub(crate) const ASSISTANT_PROGRESS_PER_TICK: f32 = 0.5;
pub(crate) const ASSISTANT_PROGRESS_COMPLETE: f32 = 100.0;
pub(crate) const ASSISTANT_REWARD_COINS: i64 = 15;
pub(crate) const ASSISTANT_REWARD_POINTS: i64 = 50;

// Leaderboard --------------------------------------------------------------
pub(crate) const LEADERBOARD_CAP: usize = 10;
