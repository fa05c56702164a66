//! The station-by-station build pipeline for the player's active order.
//!
//! A strict linear machine: `Frame -> Color -> Tires -> Engine -> Checkout`.
//! The active station *is* the pipeline's state; an action invoked at any
//! other station is rejected as a silent no-op, which is how stray late UI
//! events are filtered without error plumbing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;

use crate::catalog::{EngineKind, FrameKind, PaintColor, TireKind};
use crate::constants::PAINT_COMPLETE_PCT;
use crate::numbers::quantize_coord;

/// One step of the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Frame,
    Color,
    Tires,
    Engine,
    Checkout,
}

impl Station {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Color => "color",
            Self::Tires => "tires",
            Self::Engine => "engine",
            Self::Checkout => "checkout",
        }
    }
}

/// Read-only snapshot of the committed build attributes, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildProgress {
    pub frame: Option<FrameKind>,
    pub color: Option<PaintColor>,
    pub tires: Option<TireKind>,
    pub engine: Option<EngineKind>,
}

/// A build with all four attributes committed, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedBuild {
    pub frame: FrameKind,
    pub color: PaintColor,
    pub tires: TireKind,
    pub engine: EngineKind,
}

/// Result of feeding one pointer sample to the paint station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintSample {
    /// Wrong station, no color picked, or a cell already painted.
    Ignored,
    /// New cell accepted; coverage now at this percentage.
    Progress(f32),
    /// Coverage reached 100%; color committed, pipeline moved to tires.
    Committed,
}

/// Result of clicking one wheel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TireInstall {
    /// Wrong station, no tire picked, bad index, or position already filled.
    Ignored,
    /// Position accepted; `placed` of `required` now filled.
    Placed { placed: u8, required: u8 },
    /// All positions filled; tires committed, pipeline moved to engine.
    Committed,
}

/// Per-order scratch state while the player walks one car through the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPipeline {
    station: Station,
    frame: Option<FrameKind>,
    color: Option<PaintColor>,
    tires: Option<TireKind>,
    engine: Option<EngineKind>,
    selected_color: Option<PaintColor>,
    /// Quantized pointer cells already sprayed. Membership, not count,
    /// drives progress: hovering one spot forever paints one cell.
    painted_cells: HashSet<(i32, i32)>,
    paint_progress_pct: f32,
    selected_tires: Option<TireKind>,
    tires_placed: SmallVec<[u8; 6]>,
    selected_engine: Option<EngineKind>,
}

impl Default for BuildPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            station: Station::Frame,
            frame: None,
            color: None,
            tires: None,
            engine: None,
            selected_color: None,
            painted_cells: HashSet::new(),
            paint_progress_pct: 0.0,
            selected_tires: None,
            tires_placed: SmallVec::new(),
            selected_engine: None,
        }
    }

    #[must_use]
    pub const fn station(&self) -> Station {
        self.station
    }

    #[must_use]
    pub const fn progress(&self) -> BuildProgress {
        BuildProgress {
            frame: self.frame,
            color: self.color,
            tires: self.tires,
            engine: self.engine,
        }
    }

    #[must_use]
    pub const fn selected_color(&self) -> Option<PaintColor> {
        self.selected_color
    }

    #[must_use]
    pub const fn paint_progress_pct(&self) -> f32 {
        self.paint_progress_pct
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tires_placed_count(&self) -> u8 {
        self.tires_placed.len() as u8
    }

    #[must_use]
    pub const fn selected_engine(&self) -> Option<EngineKind> {
        self.selected_engine
    }

    /// Commit the chassis and open the paint station.
    pub fn select_frame(&mut self, frame: FrameKind) -> bool {
        if self.station != Station::Frame {
            return false;
        }
        self.frame = Some(frame);
        self.station = Station::Color;
        self.selected_color = None;
        self.painted_cells.clear();
        self.paint_progress_pct = 0.0;
        true
    }

    /// Pick (or re-pick) a spray color. Re-picking restarts coverage.
    pub fn set_color(&mut self, color: PaintColor) -> bool {
        if self.station != Station::Color {
            return false;
        }
        self.selected_color = Some(color);
        self.painted_cells.clear();
        self.paint_progress_pct = 0.0;
        true
    }

    /// Feed one pointer sample to the sprayer. Samples quantize to grid
    /// cells; each distinct cell counts once, scaled by the sprayer level.
    #[allow(clippy::cast_precision_loss)]
    pub fn paint_sample(
        &mut self,
        x: f32,
        y: f32,
        paint_speed_level: u8,
        cells_full: u32,
    ) -> PaintSample {
        if self.station != Station::Color || self.selected_color.is_none() {
            return PaintSample::Ignored;
        }
        let cell = (quantize_coord(x), quantize_coord(y));
        if !self.painted_cells.insert(cell) {
            return PaintSample::Ignored;
        }
        let cells = self.painted_cells.len() as f32;
        let full = cells_full.max(1) as f32;
        let pct = (cells / full * 100.0 * f32::from(paint_speed_level.max(1))).min(PAINT_COMPLETE_PCT);
        self.paint_progress_pct = pct;
        if pct >= PAINT_COMPLETE_PCT {
            self.color = self.selected_color;
            self.station = Station::Tires;
            self.selected_tires = None;
            self.tires_placed.clear();
            return PaintSample::Committed;
        }
        PaintSample::Progress(pct)
    }

    /// Pick (or re-pick) a tire compound. Re-picking clears placed wheels.
    pub fn select_tires(&mut self, tires: TireKind) -> bool {
        if self.station != Station::Tires {
            return false;
        }
        self.selected_tires = Some(tires);
        self.tires_placed.clear();
        true
    }

    /// Bolt the selected compound onto one wheel position.
    #[allow(clippy::cast_possible_truncation)]
    pub fn install_tire(&mut self, position: u8) -> TireInstall {
        if self.station != Station::Tires || self.selected_tires.is_none() {
            return TireInstall::Ignored;
        }
        let Some(frame) = self.frame else {
            return TireInstall::Ignored;
        };
        let required = frame.required_wheel_count();
        if position >= required || self.tires_placed.contains(&position) {
            return TireInstall::Ignored;
        }
        self.tires_placed.push(position);
        let placed = self.tires_placed.len() as u8;
        if placed >= required {
            self.tires = self.selected_tires;
            self.station = Station::Engine;
            self.selected_engine = None;
            return TireInstall::Committed;
        }
        TireInstall::Placed { placed, required }
    }

    /// Pick the engine to drag toward the bay.
    pub fn select_engine(&mut self, engine: EngineKind) -> bool {
        if self.station != Station::Engine {
            return false;
        }
        self.selected_engine = Some(engine);
        true
    }

    /// Resolve an engine drop. A miss outside the bay is a retryable no-op.
    pub fn install_engine(&mut self, dropped_in_bay: bool) -> bool {
        if self.station != Station::Engine || self.selected_engine.is_none() || !dropped_in_bay {
            return false;
        }
        self.engine = self.selected_engine;
        self.station = Station::Checkout;
        true
    }

    /// All four attributes, available only once checkout is reached.
    #[must_use]
    pub fn finished_build(&self) -> Option<FinishedBuild> {
        if self.station != Station::Checkout {
            return None;
        }
        Some(FinishedBuild {
            frame: self.frame?,
            color: self.color?,
            tires: self.tires?,
            engine: self.engine?,
        })
    }
}
