//! Scripted bot policies that drive a session end to end without a UI.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use garage_game::{
    AssistantOutcome, DayClockTick, EngineKind, FrameKind, GameEngine, MemoryLeaderboard, Order,
    PaintColor, PaintSample, SessionPhase, ShopSession, TireInstall, TireKind, UpgradeId,
};

/// How the bot plays each order it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotPolicy {
    /// Build exactly what the customer ordered.
    Perfect,
    /// Build the same cheap sedan for everyone and live with the stars.
    Sloppy,
    /// Take no orders at all; hire the assistant if affordable and idle.
    Idle,
}

impl BotPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Sloppy => "sloppy",
            Self::Idle => "idle",
        }
    }
}

/// Outcome of one scripted run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub policy: &'static str,
    pub final_day: u32,
    pub score: i64,
    pub cars_built: u32,
    pub perfect_cars: u32,
    pub coins: i64,
}

const MAX_DAYS: u32 = 40;

fn build_order(session: &mut ShopSession, target: &Order) -> Result<()> {
    if !session.select_frame(target.frame) {
        bail!("frame select rejected");
    }
    session.set_color(target.color);
    let mut x = 0.0f32;
    loop {
        match session.paint_sample(x, 0.0) {
            PaintSample::Committed => break,
            PaintSample::Progress(_) | PaintSample::Ignored => x += 1.0,
        }
        if x > 10_000.0 {
            bail!("paint never completed");
        }
    }
    session.select_tires(target.tires);
    let mut committed = false;
    for position in 0..target.frame.required_wheel_count() {
        committed = session.install_tire(position) == TireInstall::Committed;
    }
    if !committed {
        bail!("tire install never committed");
    }
    session.select_engine(target.engine);
    if !session.install_engine(true) {
        bail!("engine drop rejected");
    }
    Ok(())
}

fn play_one_playing_stretch(session: &mut ShopSession, policy: BotPolicy) -> Result<()> {
    let token = session.timer_token();
    loop {
        if session.phase() != SessionPhase::Playing {
            return Ok(());
        }
        match policy {
            BotPolicy::Idle => {
                // Hire help if we can, then just let the clock run.
                session.purchase(UpgradeId::AssistantHire);
                session.tick_assistant(token);
                if session.tick_day_clock(token) == DayClockTick::Expired {
                    return Ok(());
                }
                // Keep the assistant busy between clock seconds.
                for _ in 0..10 {
                    if let AssistantOutcome::Completed { day_ended: true } =
                        session.tick_assistant(token)
                    {
                        return Ok(());
                    }
                }
            }
            BotPolicy::Perfect | BotPolicy::Sloppy => {
                if !session.take_order() {
                    match session.tick_day_clock(token) {
                        DayClockTick::Expired => return Ok(()),
                        DayClockTick::Running { .. } | DayClockTick::Ignored => continue,
                    }
                }
                let order = session
                    .state()
                    .current_customer
                    .as_ref()
                    .context("took an order but no customer is active")?
                    .order;
                let target = match policy {
                    BotPolicy::Perfect => order,
                    BotPolicy::Sloppy => Order {
                        frame: FrameKind::Sedan,
                        color: PaintColor::Red,
                        tires: TireKind::Standard,
                        engine: EngineKind::Eco,
                    },
                    BotPolicy::Idle => unreachable!("idle bots take no orders"),
                };
                build_order(session, &target)?;
                session.deliver().context("checkout refused delivery")?;
                return Ok(());
            }
        }
    }
}

/// Drive one full session to game over and report what happened.
pub fn run_session(
    engine: &GameEngine<MemoryLeaderboard>,
    seed: u64,
    policy: BotPolicy,
) -> Result<RunReport> {
    let mut session = engine.create_session(seed);
    loop {
        match session.phase() {
            SessionPhase::Start => {
                session
                    .start_game()
                    .context("session refused to start")?;
            }
            SessionPhase::Playing => play_one_playing_stretch(&mut session, policy)?,
            SessionPhase::Rating => {
                session.complete_rating();
            }
            SessionPhase::DayEnd => {
                if session.quota_met() {
                    session.advance_day().context("quota met but day refused to advance")?;
                    log::debug!(
                        "seed {seed}: advanced to day {} with {} coins",
                        session.state().day,
                        session.state().ledger.coins()
                    );
                    if session.state().day > MAX_DAYS {
                        bail!("run exceeded {MAX_DAYS} days; progression is stuck");
                    }
                } else {
                    let name = format!("bot-{}-{seed}", policy.as_str());
                    engine
                        .finish_run(&mut session, &name)
                        .context("leaderboard store rejected the run")?
                        .context("missed quota but no entry was recorded")?;
                }
            }
            SessionPhase::GameOver => break,
        }
    }

    let state = session.state();
    Ok(RunReport {
        seed,
        policy: policy.as_str(),
        final_day: state.day,
        score: state.score,
        cars_built: state.total_cars_built,
        perfect_cars: state.perfect_cars,
        coins: state.ledger.coins(),
    })
}
