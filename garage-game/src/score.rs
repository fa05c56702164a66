//! Pure scoring for delivered builds.

use serde::{Deserialize, Serialize};

use crate::constants::{COINS_PER_STAR, ORDER_ATTRIBUTE_COUNT, POINTS_PER_STAR, STAR_MAX};
use crate::customer::Order;
use crate::numbers::{round_f64_to_i64, round_f64_to_u8};
use crate::pipeline::FinishedBuild;

/// Outcome of checking a finished car against what the customer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// How many of the four attributes matched exactly. No partial credit.
    pub correct_count: u8,
    /// 0..=5 star rating shown to the player.
    pub stars: u8,
    pub coins_earned: i64,
    pub points_earned: i64,
    pub is_perfect: bool,
}

impl Rating {
    /// The flat zero awarded for a timed-out or abandoned order,
    /// independent of any partial progress.
    #[must_use]
    pub const fn timed_out() -> Self {
        Self {
            correct_count: 0,
            stars: 0,
            coins_earned: 0,
            points_earned: 0,
            is_perfect: false,
        }
    }
}

/// Score a finished build against the customer's order.
///
/// The reward multiplier keys off the frame actually installed: a sedan
/// order filled with a truck chassis pays out at truck rates.
#[must_use]
pub fn score_build(order: &Order, build: &FinishedBuild) -> Rating {
    let mut correct_count = 0u8;
    if build.frame == order.frame {
        correct_count += 1;
    }
    if build.color == order.color {
        correct_count += 1;
    }
    if build.tires == order.tires {
        correct_count += 1;
    }
    if build.engine == order.engine {
        correct_count += 1;
    }

    let stars = round_f64_to_u8(
        f64::from(correct_count) / f64::from(ORDER_ATTRIBUTE_COUNT) * f64::from(STAR_MAX),
    );
    let multiplier = build.frame.reward_multiplier();
    let coins_earned = round_f64_to_i64(f64::from(stars) * COINS_PER_STAR * multiplier);
    let points_earned = round_f64_to_i64(f64::from(stars) * POINTS_PER_STAR * multiplier);

    Rating {
        correct_count,
        stars,
        coins_earned,
        points_earned,
        is_perfect: correct_count == ORDER_ATTRIBUTE_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EngineKind, FrameKind, PaintColor, TireKind};

    const ORDER: Order = Order {
        frame: FrameKind::Sedan,
        color: PaintColor::Red,
        tires: TireKind::Sport,
        engine: EngineKind::Turbo,
    };

    #[test]
    fn exact_match_is_five_stars_at_sedan_rates() {
        let build = FinishedBuild {
            frame: FrameKind::Sedan,
            color: PaintColor::Red,
            tires: TireKind::Sport,
            engine: EngineKind::Turbo,
        };
        let rating = score_build(&ORDER, &build);
        assert_eq!(rating.correct_count, 4);
        assert_eq!(rating.stars, 5);
        assert!(rating.is_perfect);
        assert_eq!(rating.coins_earned, 25);
        assert_eq!(rating.points_earned, 50);
    }

    #[test]
    fn multiplier_follows_installed_frame() {
        // Two matches round up to three stars; the suv chassis pays 1.2x.
        let build = FinishedBuild {
            frame: FrameKind::Suv,
            color: PaintColor::Red,
            tires: TireKind::Sport,
            engine: EngineKind::Eco,
        };
        let rating = score_build(&ORDER, &build);
        assert_eq!(rating.correct_count, 2);
        assert_eq!(rating.stars, 3);
        assert!(!rating.is_perfect);
        assert_eq!(rating.coins_earned, 18);
        assert_eq!(rating.points_earned, 36);
    }

    #[test]
    fn perfect_truck_build_pays_truck_rates() {
        let order = Order {
            frame: FrameKind::Truck,
            color: PaintColor::Black,
            tires: TireKind::Offroad,
            engine: EngineKind::V8,
        };
        let build = FinishedBuild {
            frame: FrameKind::Truck,
            color: PaintColor::Black,
            tires: TireKind::Offroad,
            engine: EngineKind::V8,
        };
        let rating = score_build(&order, &build);
        assert_eq!(rating.stars, 5);
        assert_eq!(rating.coins_earned, 38); // round(5 * 5 * 1.5)
        assert_eq!(rating.points_earned, 75);
    }

    #[test]
    fn timed_out_rating_is_all_zero() {
        let rating = Rating::timed_out();
        assert_eq!(rating.stars, 0);
        assert_eq!(rating.coins_earned, 0);
        assert_eq!(rating.points_earned, 0);
        assert!(!rating.is_perfect);
    }
}
