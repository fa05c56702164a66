//! Coin balance, tool upgrades, and the shop catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ASSISTANT_HIRE_COST, STARTING_COINS, UPGRADE_BASE_COST, UPGRADE_MAX_LEVEL};

/// Purchasable upgrade slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeId {
    PaintSpeed,
    TireSpeed,
    EngineSpeed,
    AssistantHire,
}

impl UpgradeId {
    pub const ALL: [Self; 4] = [
        Self::PaintSpeed,
        Self::TireSpeed,
        Self::EngineSpeed,
        Self::AssistantHire,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaintSpeed => "paint_speed",
            Self::TireSpeed => "tire_speed",
            Self::EngineSpeed => "engine_speed",
            Self::AssistantHire => "assistant_hire",
        }
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool levels and the assistant flag. Persist across days, reset per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrades {
    pub paint_speed: u8,
    pub tire_speed: u8,
    pub engine_speed: u8,
    pub assistant_hired: bool,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            paint_speed: 1,
            tire_speed: 1,
            engine_speed: 1,
            assistant_hired: false,
        }
    }
}

impl Upgrades {
    /// Current level of a leveled upgrade; the assistant reads as 0/1.
    #[must_use]
    pub const fn level(&self, id: UpgradeId) -> u8 {
        match id {
            UpgradeId::PaintSpeed => self.paint_speed,
            UpgradeId::TireSpeed => self.tire_speed,
            UpgradeId::EngineSpeed => self.engine_speed,
            UpgradeId::AssistantHire => {
                if self.assistant_hired { 1 } else { 0 }
            }
        }
    }
}

/// A single entry in the shop. Display copy rides along for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: UpgradeId,
    pub name: String,
    pub desc: String,
    pub base_cost: i64,
    pub max_level: u8,
}

/// The fixed upgrade catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub items: Vec<ShopItem>,
}

impl ShopCatalog {
    /// The stock catalog every session opens with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            items: vec![
                ShopItem {
                    id: UpgradeId::PaintSpeed,
                    name: String::from("Fast Paint Sprayer"),
                    desc: String::from("Paint cars faster"),
                    base_cost: UPGRADE_BASE_COST,
                    max_level: UPGRADE_MAX_LEVEL,
                },
                ShopItem {
                    id: UpgradeId::TireSpeed,
                    name: String::from("Pneumatic Wrench"),
                    desc: String::from("Install tires faster"),
                    base_cost: UPGRADE_BASE_COST,
                    max_level: UPGRADE_MAX_LEVEL,
                },
                ShopItem {
                    id: UpgradeId::EngineSpeed,
                    name: String::from("Engine Hoist"),
                    desc: String::from("Install engines faster"),
                    base_cost: UPGRADE_BASE_COST,
                    max_level: UPGRADE_MAX_LEVEL,
                },
                ShopItem {
                    id: UpgradeId::AssistantHire,
                    name: String::from("Hire Miguel (Freelancer)"),
                    desc: String::from("Auto-builds cars for coins"),
                    base_cost: ASSISTANT_HIRE_COST,
                    max_level: 1,
                },
            ],
        }
    }

    #[must_use]
    pub fn find(&self, id: UpgradeId) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of a purchase attempt. Rejections leave the ledger untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Purchased { cost: i64 },
    InsufficientFunds,
    AlreadyMaxed,
}

/// Coin balance plus upgrade levels; the only mutation path is `purchase`
/// and `deposit`, so `coins >= 0` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyLedger {
    coins: i64,
    pub upgrades: Upgrades,
}

impl Default for EconomyLedger {
    fn default() -> Self {
        Self::with_coins(STARTING_COINS)
    }
}

impl EconomyLedger {
    #[must_use]
    pub const fn with_coins(coins: i64) -> Self {
        Self {
            coins,
            upgrades: Upgrades {
                paint_speed: 1,
                tire_speed: 1,
                engine_speed: 1,
                assistant_hired: false,
            },
        }
    }

    #[must_use]
    pub const fn coins(&self) -> i64 {
        self.coins
    }

    /// Credit earned coins. Rewards are never negative.
    pub fn deposit(&mut self, coins: i64) {
        self.coins = self.coins.saturating_add(coins.max(0));
    }

    /// Price of the next level (or hire) for an upgrade.
    /// Leveled tools cost `base * current_level`; the hire is flat.
    #[must_use]
    pub fn next_cost(&self, item: &ShopItem) -> i64 {
        match item.id {
            UpgradeId::AssistantHire => item.base_cost,
            _ => item.base_cost * i64::from(self.upgrades.level(item.id)),
        }
    }

    /// Attempt a purchase. No partial purchases, no refunds.
    pub fn purchase(&mut self, catalog: &ShopCatalog, id: UpgradeId) -> PurchaseOutcome {
        let Some(item) = catalog.find(id) else {
            return PurchaseOutcome::AlreadyMaxed;
        };
        if self.upgrades.level(id) >= item.max_level {
            return PurchaseOutcome::AlreadyMaxed;
        }
        let cost = self.next_cost(item);
        if self.coins < cost {
            return PurchaseOutcome::InsufficientFunds;
        }
        self.coins -= cost;
        match id {
            UpgradeId::PaintSpeed => self.upgrades.paint_speed += 1,
            UpgradeId::TireSpeed => self.upgrades.tire_speed += 1,
            UpgradeId::EngineSpeed => self.upgrades.engine_speed += 1,
            UpgradeId::AssistantHire => self.upgrades.assistant_hired = true,
        }
        PurchaseOutcome::Purchased { cost }
    }
}
