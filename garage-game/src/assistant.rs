//! The autonomous assistant ("Miguel") working the same queue as the player.
//!
//! The assistant never competes with the player: claims happen only while
//! the player is between orders, and a claimed customer carries the
//! `Claim::Assistant` tag until completion. Progress is a fixed increment
//! per host-driven tick; there is no failure path and no build to score,
//! so completion pays a flat reward.

use serde::{Deserialize, Serialize};

use crate::constants::ASSISTANT_PROGRESS_COMPLETE;
use crate::customer::{Claim, Customer};

/// One assistant tick's observable result.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantTick {
    /// Nothing claimed; nothing happened.
    Idle,
    /// Still building; progress now at this percentage.
    Working(f32),
    /// Build finished; the completed customer leaves the shop.
    Finished(Customer),
}

/// The assistant's single work slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantState {
    customer: Option<Customer>,
    progress_pct: f32,
}

impl AssistantState {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.customer.is_none()
    }

    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    #[must_use]
    pub const fn progress_pct(&self) -> f32 {
        self.progress_pct
    }

    /// Take over a customer fresh off the queue. Ignored while busy.
    pub fn claim(&mut self, mut customer: Customer) -> bool {
        if self.customer.is_some() {
            return false;
        }
        customer.claim = Claim::Assistant;
        self.customer = Some(customer);
        self.progress_pct = 0.0;
        true
    }

    /// Advance the build by one tick's increment.
    pub fn tick(&mut self, increment: f32) -> AssistantTick {
        if self.customer.is_none() {
            return AssistantTick::Idle;
        }
        self.progress_pct =
            (self.progress_pct + increment.max(0.0)).min(ASSISTANT_PROGRESS_COMPLETE);
        if self.progress_pct >= ASSISTANT_PROGRESS_COMPLETE
            && let Some(finished) = self.customer.take()
        {
            self.progress_pct = 0.0;
            return AssistantTick::Finished(finished);
        }
        AssistantTick::Working(self.progress_pct)
    }

    /// Drop any in-flight work, e.g. when a day is torn down.
    pub fn reset(&mut self) {
        self.customer = None;
        self.progress_pct = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EngineKind, FrameKind, PaintColor, TireKind};
    use crate::customer::{CustomerId, Order};

    fn customer() -> Customer {
        Customer {
            id: CustomerId(7),
            name: String::from("Riley"),
            order: Order {
                frame: FrameKind::Sports,
                color: PaintColor::Yellow,
                tires: TireKind::Racing,
                engine: EngineKind::V8,
            },
            patience_secs: 130,
            claim: Claim::Unclaimed,
        }
    }

    #[test]
    fn claim_tags_the_customer_and_blocks_double_claims() {
        let mut assistant = AssistantState::default();
        assert!(assistant.claim(customer()));
        assert_eq!(assistant.customer().unwrap().claim, Claim::Assistant);
        assert!(!assistant.claim(customer()));
    }

    #[test]
    fn fixed_increments_reach_completion() {
        let mut assistant = AssistantState::default();
        assistant.claim(customer());
        let mut ticks = 0;
        loop {
            ticks += 1;
            match assistant.tick(0.5) {
                AssistantTick::Finished(done) => {
                    assert_eq!(done.id, CustomerId(7));
                    break;
                }
                AssistantTick::Working(_) => {}
                AssistantTick::Idle => panic!("assistant went idle mid-build"),
            }
        }
        assert_eq!(ticks, 200);
        assert!(assistant.is_idle());
        assert_eq!(assistant.tick(0.5), AssistantTick::Idle);
    }

    #[test]
    fn reset_drops_in_flight_work() {
        let mut assistant = AssistantState::default();
        assistant.claim(customer());
        assistant.tick(0.5);
        assistant.reset();
        assert!(assistant.is_idle());
        assert!((assistant.progress_pct() - 0.0).abs() < f32::EPSILON);
    }
}
