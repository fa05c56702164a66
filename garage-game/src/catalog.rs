//! Fixed part catalogs for customer orders and builds.
//!
//! Every order attribute is drawn uniformly from one of these catalogs; the
//! renderer presents the same lists as pickable options, so the engine and
//! the UI can never disagree about what exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chassis type. Determines wheel positions and the reward multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Sedan,
    Suv,
    Sports,
    Truck,
}

impl FrameKind {
    pub const ALL: [Self; 4] = [Self::Sedan, Self::Suv, Self::Sports, Self::Truck];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Sports => "sports",
            Self::Truck => "truck",
        }
    }

    /// Wheel positions the chassis exposes; the truck runs dual rear axles.
    #[must_use]
    pub const fn required_wheel_count(self) -> u8 {
        match self {
            Self::Truck => 6,
            Self::Sedan | Self::Suv | Self::Sports => 4,
        }
    }

    /// Reward multiplier applied to both coin and point payouts.
    /// Keyed by the frame actually installed, not the one ordered.
    #[must_use]
    pub const fn reward_multiplier(self) -> f64 {
        match self {
            Self::Truck => 1.5,
            Self::Sports => 1.3,
            Self::Suv => 1.2,
            Self::Sedan => 1.0,
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            "sports" => Ok(Self::Sports),
            "truck" => Ok(Self::Truck),
            _ => Err(()),
        }
    }
}

/// Paint color applied at the color station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintColor {
    Red,
    Blue,
    Black,
    White,
    Green,
    Yellow,
}

impl PaintColor {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Black,
        Self::White,
        Self::Green,
        Self::Yellow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Black => "black",
            Self::White => "white",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for PaintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tire compound installed at the tire station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireKind {
    Standard,
    Sport,
    Offroad,
    Racing,
}

impl TireKind {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Sport, Self::Offroad, Self::Racing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Sport => "sport",
            Self::Offroad => "offroad",
            Self::Racing => "racing",
        }
    }
}

impl fmt::Display for TireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine dropped into the bay at the engine station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Eco,
    Standard,
    Turbo,
    V8,
}

impl EngineKind {
    pub const ALL: [Self; 4] = [Self::Eco, Self::Standard, Self::Turbo, Self::V8];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eco => "eco",
            Self::Standard => "standard",
            Self::Turbo => "turbo",
            Self::V8 => "v8",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster of walk-in customer names. Repeats across a day are expected.
pub const CUSTOMER_NAMES: [&str; 8] = [
    "Alex", "Sam", "Jordan", "Casey", "Riley", "Morgan", "Taylor", "Jamie",
];
