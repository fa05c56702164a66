//! Top-level session state machine.
//!
//! `ShopSession` composes the queue, pipeline, assistant, ledger, and day
//! clock behind a command surface matching the renderer's discrete input
//! events. Commands arriving in the wrong phase (or at the wrong station)
//! fall through as no-ops: the single-threaded UI loop is expected to send
//! the occasional stray late event, and filtering beats failing.

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::catalog::{EngineKind, FrameKind, PaintColor, TireKind};
use crate::config::{GameConfig, daily_quota};
use crate::constants::{
    HINT_STATION_CHECKOUT, HINT_STATION_COLOR, HINT_STATION_ENGINE, HINT_STATION_FRAME,
    HINT_STATION_TIRES, LOG_ASSISTANT_CLAIMED, LOG_ASSISTANT_COMPLETED, LOG_DAY_ADVANCED,
    LOG_DAY_ENDED, LOG_ENGINE_PLACED, LOG_FRAME_SELECTED, LOG_GAME_OVER, LOG_ORDER_ABANDONED,
    LOG_ORDER_DELIVERED, LOG_ORDER_TAKEN, LOG_PAINT_COMMITTED, LOG_QUEUE_RESTOCKED,
    LOG_SESSION_STARTED, LOG_TIRES_COMMITTED, LOG_UPGRADE_PURCHASED,
};
use crate::assistant::AssistantTick;
use crate::customer::Claim;
use crate::economy::{PurchaseOutcome, ShopCatalog, UpgradeId};
use crate::leaderboard::LeaderboardEntry;
use crate::pipeline::{BuildPipeline, PaintSample, Station, TireInstall};
use crate::score::{Rating, score_build};
use crate::state::{SessionPhase, SessionState, TimerToken};

/// Result of one day-clock second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClockTick {
    /// Wrong phase or stale token; nothing happened.
    Ignored,
    Running { remaining_secs: u32 },
    /// Clock hit zero; the day ended, any in-progress order was dropped.
    Expired,
}

/// Result of one assistant tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssistantOutcome {
    /// Not hired, wrong phase, stale token, or nothing to do.
    Ignored,
    /// The assistant pulled the queue head into its bay.
    Claimed,
    Working { progress_pct: f32 },
    Completed { day_ended: bool },
}

/// A full playable session: tuning, shop catalog, and the live state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSession {
    config: GameConfig,
    catalog: ShopCatalog,
    state: SessionState,
}

impl ShopSession {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default_config())
    }

    #[must_use]
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        Self {
            config,
            catalog: ShopCatalog::standard(),
            state: SessionState::new(seed),
        }
    }

    /// Rebuild a session around a deserialized state.
    #[must_use]
    pub fn from_state(state: SessionState, config: GameConfig) -> Self {
        Self {
            config,
            catalog: ShopCatalog::standard(),
            state: state.rehydrate(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &ShopCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Token guarding timers registered against the current phase.
    #[must_use]
    pub const fn timer_token(&self) -> TimerToken {
        self.state.timer_token()
    }

    /// Quota for the current day.
    #[must_use]
    pub const fn quota(&self) -> u32 {
        daily_quota(self.state.day)
    }

    #[must_use]
    pub const fn quota_met(&self) -> bool {
        self.state.customers_served_today >= self.quota()
    }

    /// Renderer hint for the player's current station, if an order is open.
    #[must_use]
    pub fn hint_key(&self) -> Option<&'static str> {
        let station = self.state.pipeline.as_ref()?.station();
        Some(match station {
            Station::Frame => HINT_STATION_FRAME,
            Station::Color => HINT_STATION_COLOR,
            Station::Tires => HINT_STATION_TIRES,
            Station::Engine => HINT_STATION_ENGINE,
            Station::Checkout => HINT_STATION_CHECKOUT,
        })
    }

    /// Begin a run: day 1, fresh ledger and upgrades, full day clock.
    /// Valid from the start screen or the game-over screen (replay).
    pub fn start_game(&mut self) -> Option<TimerToken> {
        if !matches!(
            self.state.phase,
            SessionPhase::Start | SessionPhase::GameOver
        ) {
            return None;
        }
        // Stale-token protection must survive the reset, so the epoch
        // carries across runs.
        let seed = self.state.seed;
        let epoch_holder = std::mem::replace(&mut self.state, SessionState::new(seed));
        self.state.carry_epoch_from(&epoch_holder);
        self.state.day_time_remaining_secs = self.config.day_length_secs;
        self.state.ledger = crate::economy::EconomyLedger::with_coins(self.config.starting_coins);
        self.state.enter_phase(SessionPhase::Playing);
        self.state.push_note(LOG_SESSION_STARTED);
        self.restock_if_needed();
        Some(self.state.timer_token())
    }

    /// Pull the waiting queue's head onto the player's lift.
    pub fn take_order(&mut self) -> bool {
        if self.state.phase != SessionPhase::Playing
            || self.state.current_customer.is_some()
            || self.state.queue.is_empty()
        {
            return false;
        }
        let Ok(mut customer) = self.state.queue.take_next() else {
            return false;
        };
        customer.claim = Claim::Player;
        self.state.current_customer = Some(customer);
        self.state.pipeline = Some(BuildPipeline::new());
        self.state.push_note(LOG_ORDER_TAKEN);
        true
    }

    pub fn select_frame(&mut self, frame: FrameKind) -> bool {
        let Some(pipeline) = self.playing_pipeline() else {
            return false;
        };
        let advanced = pipeline.select_frame(frame);
        if advanced {
            self.state.push_note(LOG_FRAME_SELECTED);
        }
        advanced
    }

    pub fn set_color(&mut self, color: PaintColor) -> bool {
        match self.playing_pipeline() {
            Some(pipeline) => pipeline.set_color(color),
            None => false,
        }
    }

    /// One pointer sample over the car body while spraying.
    pub fn paint_sample(&mut self, x: f32, y: f32) -> PaintSample {
        let level = self.state.ledger.upgrades.paint_speed;
        let cells_full = self.config.paint_cells_full;
        let Some(pipeline) = self.playing_pipeline() else {
            return PaintSample::Ignored;
        };
        let sample = pipeline.paint_sample(x, y, level, cells_full);
        if sample == PaintSample::Committed {
            self.state.push_note(LOG_PAINT_COMMITTED);
        }
        sample
    }

    pub fn select_tires(&mut self, tires: TireKind) -> bool {
        match self.playing_pipeline() {
            Some(pipeline) => pipeline.select_tires(tires),
            None => false,
        }
    }

    pub fn install_tire(&mut self, position: u8) -> TireInstall {
        let Some(pipeline) = self.playing_pipeline() else {
            return TireInstall::Ignored;
        };
        let install = pipeline.install_tire(position);
        if install == TireInstall::Committed {
            self.state.push_note(LOG_TIRES_COMMITTED);
        }
        install
    }

    pub fn select_engine(&mut self, engine: EngineKind) -> bool {
        match self.playing_pipeline() {
            Some(pipeline) => pipeline.select_engine(engine),
            None => false,
        }
    }

    /// Resolve an engine drag-and-drop; a miss outside the bay retries.
    pub fn install_engine(&mut self, dropped_in_bay: bool) -> bool {
        let Some(pipeline) = self.playing_pipeline() else {
            return false;
        };
        let placed = pipeline.install_engine(dropped_in_bay);
        if placed {
            self.state.push_note(LOG_ENGINE_PLACED);
        }
        placed
    }

    /// Hand the finished car over and collect the customer's verdict.
    pub fn deliver(&mut self) -> Option<Rating> {
        if self.state.phase != SessionPhase::Playing {
            return None;
        }
        let build = self.state.pipeline.as_ref()?.finished_build()?;
        let order = self.state.current_customer.as_ref()?.order;
        let rating = score_build(&order, &build);
        self.state.ledger.deposit(rating.coins_earned);
        self.state.score += rating.points_earned;
        if rating.is_perfect {
            self.state.perfect_cars += 1;
        }
        self.finish_order(rating, LOG_ORDER_DELIVERED);
        Some(rating)
    }

    /// Give up on the open order. Zero reward regardless of progress,
    /// but the customer still counts as served. Once the car reaches
    /// checkout the only way out is `deliver`.
    pub fn abandon(&mut self) -> Option<Rating> {
        if self.state.phase != SessionPhase::Playing {
            return None;
        }
        if self.state.pipeline.as_ref()?.station() == Station::Checkout {
            return None;
        }
        let rating = Rating::timed_out();
        self.finish_order(rating, LOG_ORDER_ABANDONED);
        Some(rating)
    }

    fn finish_order(&mut self, rating: Rating, note: &str) {
        self.state.total_cars_built += 1;
        self.state.customers_served_today += 1;
        self.state.last_rating = Some(rating);
        self.state.push_note(note);
        self.state.enter_phase(SessionPhase::Rating);
    }

    /// Leave the rating screen once the presenter's display delay elapses.
    /// Returns the fresh play token, or `None` when the day ended instead.
    pub fn complete_rating(&mut self) -> Option<TimerToken> {
        if self.state.phase != SessionPhase::Rating {
            return None;
        }
        self.state.current_customer = None;
        self.state.pipeline = None;
        self.state.last_rating = None;
        if self.state.customers_served_today >= self.config.serve_target {
            self.end_day();
            return None;
        }
        self.state.enter_phase(SessionPhase::Playing);
        self.restock_if_needed();
        Some(self.state.timer_token())
    }

    /// One second off the day clock.
    pub fn tick_day_clock(&mut self, token: TimerToken) -> DayClockTick {
        if self.state.phase != SessionPhase::Playing || !self.state.token_is_current(token) {
            return DayClockTick::Ignored;
        }
        self.state.day_time_remaining_secs = self.state.day_time_remaining_secs.saturating_sub(1);
        if self.state.day_time_remaining_secs == 0 {
            // Out of time mid-build: the order is dropped, not scored.
            self.state.current_customer = None;
            self.state.pipeline = None;
            self.state.last_rating = None;
            self.end_day();
            return DayClockTick::Expired;
        }
        self.restock_if_needed();
        DayClockTick::Running {
            remaining_secs: self.state.day_time_remaining_secs,
        }
    }

    /// One assistant simulation tick.
    pub fn tick_assistant(&mut self, token: TimerToken) -> AssistantOutcome {
        if self.state.phase != SessionPhase::Playing
            || !self.state.token_is_current(token)
            || !self.state.ledger.upgrades.assistant_hired
        {
            return AssistantOutcome::Ignored;
        }
        if self.state.assistant.is_idle() {
            // FIFO precedence: the assistant only claims while the player
            // is between orders, so they never race for one customer.
            if self.state.current_customer.is_none()
                && !self.state.queue.is_empty()
                && let Ok(customer) = self.state.queue.take_next()
                && self.state.assistant.claim(customer)
            {
                self.state.push_note(LOG_ASSISTANT_CLAIMED);
                return AssistantOutcome::Claimed;
            }
            return AssistantOutcome::Ignored;
        }
        match self
            .state
            .assistant
            .tick(self.config.assistant_progress_per_tick)
        {
            AssistantTick::Idle => AssistantOutcome::Ignored,
            AssistantTick::Working(progress_pct) => AssistantOutcome::Working { progress_pct },
            AssistantTick::Finished(_customer) => {
                self.state.ledger.deposit(self.config.assistant_reward_coins);
                self.state.score += self.config.assistant_reward_points;
                self.state.customers_served_today += 1;
                self.state.total_cars_built += 1;
                self.state.push_note(LOG_ASSISTANT_COMPLETED);
                let day_ended =
                    self.state.customers_served_today >= self.config.serve_target;
                if day_ended {
                    self.end_day();
                } else {
                    self.restock_if_needed();
                }
                AssistantOutcome::Completed { day_ended }
            }
        }
    }

    /// Buy an upgrade from the shop. Only available while playing.
    pub fn purchase(&mut self, id: UpgradeId) -> Option<PurchaseOutcome> {
        if self.state.phase != SessionPhase::Playing {
            return None;
        }
        let outcome = self.state.ledger.purchase(&self.catalog, id);
        if matches!(outcome, PurchaseOutcome::Purchased { .. }) {
            self.state.push_note(LOG_UPGRADE_PURCHASED);
        }
        Some(outcome)
    }

    /// Continue into the next day after meeting quota.
    pub fn advance_day(&mut self) -> Option<TimerToken> {
        if self.state.phase != SessionPhase::DayEnd || !self.quota_met() {
            return None;
        }
        self.state.day += 1;
        self.state.customers_served_today = 0;
        self.state.day_time_remaining_secs = self.config.day_length_secs;
        self.state.queue.clear();
        self.state.current_customer = None;
        self.state.pipeline = None;
        self.state.last_rating = None;
        self.state.assistant.reset();
        self.state.enter_phase(SessionPhase::Playing);
        self.state.push_note(LOG_DAY_ADVANCED);
        // The queue stays empty here; the restock rule refills it on the
        // next state change.
        Some(self.state.timer_token())
    }

    /// Close out a failed run. Only reachable when the quota was missed.
    pub fn submit_score(&mut self, name: &str) -> Option<LeaderboardEntry> {
        if self.state.phase != SessionPhase::DayEnd || self.quota_met() {
            return None;
        }
        let entry = LeaderboardEntry::from_run(name, &self.state);
        self.state.enter_phase(SessionPhase::GameOver);
        self.state.push_note(LOG_GAME_OVER);
        Some(entry)
    }

    /// Back to the title screen from the game-over screen.
    pub fn return_to_menu(&mut self) -> bool {
        if self.state.phase != SessionPhase::GameOver {
            return false;
        }
        self.state.enter_phase(SessionPhase::Start);
        true
    }

    /// Drain pending presentation keys for the UI/audio collaborator.
    pub fn take_notifications(&mut self) -> Vec<String> {
        self.state.take_notifications()
    }

    fn end_day(&mut self) {
        self.state.enter_phase(SessionPhase::DayEnd);
        self.state.push_note(LOG_DAY_ENDED);
    }

    /// Refill the waiting line once it is empty and nobody is mid-build.
    /// Invoked after every state change that could empty the shop.
    fn restock_if_needed(&mut self) {
        if self.state.phase != SessionPhase::Playing
            || !self.state.queue.is_empty()
            || self.state.current_customer.is_some()
            || !self.state.assistant.is_idle()
        {
            return;
        }
        let day = self.state.day;
        let serve_target = self.config.serve_target;
        let seed = self.state.seed;
        let rng = self
            .state
            .rng
            .get_or_insert_with(|| rand_chacha::ChaCha20Rng::seed_from_u64(seed));
        self.state.queue.generate_day(day, serve_target, rng);
        self.state.push_note(LOG_QUEUE_RESTOCKED);
    }

    fn playing_pipeline(&mut self) -> Option<&mut BuildPipeline> {
        if self.state.phase != SessionPhase::Playing {
            return None;
        }
        self.state.pipeline.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FrameKind;

    fn playing_session() -> (ShopSession, TimerToken) {
        let mut session = ShopSession::new(0xBEEF);
        let token = session.start_game().unwrap();
        (session, token)
    }

    /// Walk the current order through every station with a perfect build.
    fn build_to_checkout(session: &mut ShopSession) {
        let order = session.state().current_customer.as_ref().unwrap().order;
        assert!(session.select_frame(order.frame));
        assert!(session.set_color(order.color));
        let mut x = 0.0;
        while session.paint_sample(x, 0.0) != PaintSample::Committed {
            x += 1.0;
        }
        assert!(session.select_tires(order.tires));
        let mut committed = false;
        for pos in 0..order.frame.required_wheel_count() {
            committed = session.install_tire(pos) == TireInstall::Committed;
        }
        assert!(committed);
        assert!(session.select_engine(order.engine));
        assert!(session.install_engine(true));
    }

    #[test]
    fn start_game_resets_and_stocks_the_shop() {
        let (session, _token) = playing_session();
        let state = session.state();
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.day, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.ledger.coins(), 100);
        assert_eq!(state.day_time_remaining_secs, 180);
        // Day 1 batch: min(5, 3 + 1).
        assert_eq!(state.queue.len(), 4);
    }

    #[test]
    fn perfect_delivery_flows_into_rating_and_back() {
        let (mut session, _token) = playing_session();
        assert!(session.take_order());
        build_to_checkout(&mut session);
        let rating = session.deliver().unwrap();
        assert!(rating.is_perfect);
        assert_eq!(session.phase(), SessionPhase::Rating);
        assert_eq!(session.state().customers_served_today, 1);
        assert_eq!(session.state().total_cars_built, 1);
        assert_eq!(session.state().perfect_cars, 1);

        let token = session.complete_rating().unwrap();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert!(session.state().token_is_current(token));
        assert!(session.state().current_customer.is_none());
    }

    #[test]
    fn wrong_phase_commands_are_no_ops() {
        let mut session = ShopSession::new(1);
        // Nothing is playing yet.
        assert!(!session.take_order());
        assert!(!session.select_frame(FrameKind::Sedan));
        assert!(session.deliver().is_none());
        assert!(session.advance_day().is_none());
        assert_eq!(session.phase(), SessionPhase::Start);

        let token = session.start_game().unwrap();
        assert!(session.take_order());
        // Frame not chosen yet: tire and engine events fall through.
        assert_eq!(session.install_tire(0), TireInstall::Ignored);
        assert!(!session.install_engine(true));
        assert_eq!(session.tick_day_clock(token), DayClockTick::Running {
            remaining_secs: 179
        });
    }

    #[test]
    fn stale_tokens_cannot_tick_a_new_phase() {
        let (mut session, token) = playing_session();
        assert!(session.take_order());
        build_to_checkout(&mut session);
        session.deliver().unwrap();
        // The day clock callback from the playing phase fires late.
        assert_eq!(session.tick_day_clock(token), DayClockTick::Ignored);
        let play_token = session.complete_rating().unwrap();
        assert_ne!(token, play_token);
        assert!(matches!(
            session.tick_day_clock(play_token),
            DayClockTick::Running { .. }
        ));
    }

    #[test]
    fn day_clock_expiry_drops_the_open_order() {
        let (mut session, token) = playing_session();
        assert!(session.take_order());
        assert!(session.select_frame(FrameKind::Truck));
        let mut outcome = DayClockTick::Ignored;
        for _ in 0..180 {
            outcome = session.tick_day_clock(token);
        }
        assert_eq!(outcome, DayClockTick::Expired);
        assert_eq!(session.phase(), SessionPhase::DayEnd);
        // Dropped, not scored: no counters moved.
        assert_eq!(session.state().customers_served_today, 0);
        assert_eq!(session.state().total_cars_built, 0);
        assert!(session.state().current_customer.is_none());
        assert!(session.state().pipeline.is_none());
    }

    #[test]
    fn abandon_counts_the_customer_with_zero_reward() {
        let (mut session, _token) = playing_session();
        assert!(session.take_order());
        assert!(session.select_frame(FrameKind::Sedan));
        let coins_before = session.state().ledger.coins();
        let rating = session.abandon().unwrap();
        assert_eq!(rating.stars, 0);
        assert_eq!(rating.coins_earned, 0);
        assert_eq!(session.state().ledger.coins(), coins_before);
        assert_eq!(session.state().customers_served_today, 1);
        assert_eq!(session.state().total_cars_built, 1);
        assert_eq!(session.phase(), SessionPhase::Rating);
    }

    #[test]
    fn missed_quota_routes_through_submit_score_to_game_over() {
        let (mut session, token) = playing_session();
        for _ in 0..180 {
            session.tick_day_clock(token);
        }
        assert_eq!(session.phase(), SessionPhase::DayEnd);
        assert!(!session.quota_met());
        assert!(session.advance_day().is_none());
        let entry = session.submit_score("Avery").unwrap();
        assert_eq!(entry.name, "Avery");
        assert_eq!(entry.day, 1);
        assert_eq!(session.phase(), SessionPhase::GameOver);
        // Replay resets in full.
        let replay_token = session.start_game().unwrap();
        assert_eq!(session.state().day, 1);
        assert_eq!(session.state().score, 0);
        assert!(session.state().token_is_current(replay_token));
    }

    #[test]
    fn met_quota_advances_with_a_lazily_restocked_queue() {
        let (mut session, mut token) = playing_session();
        // Serve until the day ends at the serve target.
        loop {
            if !session.take_order() {
                // Queue drained mid-day; a clock tick restocks it.
                session.tick_day_clock(token);
                continue;
            }
            build_to_checkout(&mut session);
            session.deliver().unwrap();
            match session.complete_rating() {
                Some(next_token) => token = next_token,
                None => break,
            }
        }
        assert_eq!(session.phase(), SessionPhase::DayEnd);
        assert_eq!(session.state().customers_served_today, 5);
        assert!(session.quota_met());
        assert!(session.submit_score("nope").is_none());

        let token = session.advance_day().unwrap();
        assert_eq!(session.state().day, 2);
        assert_eq!(session.state().customers_served_today, 0);
        assert_eq!(session.state().day_time_remaining_secs, 180);
        assert!(session.state().queue.is_empty());
        // First state change after day start refills the queue.
        session.tick_day_clock(token);
        assert_eq!(session.state().queue.len(), 5);
    }

    #[test]
    fn assistant_claims_only_when_player_is_between_orders() {
        let (mut session, token) = playing_session();
        assert!(session.take_order());
        // Not hired yet.
        assert_eq!(session.tick_assistant(token), AssistantOutcome::Ignored);
        session.state_mut_for_tests().ledger = crate::economy::EconomyLedger::with_coins(250);
        session.purchase(UpgradeId::AssistantHire).unwrap();
        // Player is mid-order: the assistant must not claim.
        assert_eq!(session.tick_assistant(token), AssistantOutcome::Ignored);
        session.abandon().unwrap();
        let token = session.complete_rating().unwrap();
        assert_eq!(session.tick_assistant(token), AssistantOutcome::Claimed);
        let assistant_customer = session.state().assistant.customer().unwrap().id;
        // Mutual exclusion: that customer is in no other slot.
        assert!(session.state().current_customer.is_none());
        assert!(session.state().queue.iter().all(|c| c.id != assistant_customer));
    }

    #[test]
    fn assistant_completion_pays_flat_and_checks_day_end() {
        let (mut session, token) = playing_session();
        session.state_mut_for_tests().ledger = crate::economy::EconomyLedger::with_coins(250);
        session.purchase(UpgradeId::AssistantHire).unwrap();
        assert_eq!(session.tick_assistant(token), AssistantOutcome::Claimed);
        let coins_before = session.state().ledger.coins();
        let score_before = session.state().score;
        let mut completed = false;
        for _ in 0..200 {
            if let AssistantOutcome::Completed { day_ended } = session.tick_assistant(token) {
                assert!(!day_ended);
                completed = true;
                break;
            }
        }
        assert!(completed);
        assert_eq!(session.state().ledger.coins(), coins_before + 15);
        assert_eq!(session.state().score, score_before + 50);
        assert_eq!(session.state().customers_served_today, 1);
        assert_eq!(session.state().total_cars_built, 1);
    }

    #[test]
    fn return_to_menu_only_works_from_game_over() {
        let (mut session, token) = playing_session();
        assert!(!session.return_to_menu());
        for _ in 0..180 {
            session.tick_day_clock(token);
        }
        session.submit_score("").unwrap();
        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert!(session.return_to_menu());
        assert_eq!(session.phase(), SessionPhase::Start);
        // And the menu can start a fresh run again.
        assert!(session.start_game().is_some());
    }

    #[test]
    fn session_state_roundtrips_through_serde() {
        let (mut session, _token) = playing_session();
        assert!(session.take_order());
        assert!(session.select_frame(FrameKind::Suv));
        let json = serde_json::to_string(session.state()).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        let resumed = ShopSession::from_state(restored, GameConfig::default_config());
        assert_eq!(resumed.phase(), SessionPhase::Playing);
        let pipeline = resumed.state().pipeline.as_ref().unwrap();
        assert_eq!(pipeline.station(), Station::Color);
        assert_eq!(pipeline.progress().frame, Some(FrameKind::Suv));
        assert!(resumed.state().rng.is_some());
    }

    impl ShopSession {
        fn state_mut_for_tests(&mut self) -> &mut SessionState {
            &mut self.state
        }
    }
}
