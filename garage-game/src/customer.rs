//! Walk-in customers and the per-day waiting queue.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

use crate::catalog::{CUSTOMER_NAMES, EngineKind, FrameKind, PaintColor, TireKind};
use crate::constants::{CUSTOMER_BATCH_BASE, PATIENCE_BASE_SECS, PATIENCE_PER_DAY_SECS};

/// Session-unique customer identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

/// Immutable build specification attached to a customer. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub frame: FrameKind,
    pub color: PaintColor,
    pub tires: TireKind,
    pub engine: EngineKind,
}

impl Order {
    fn draw(rng: &mut impl Rng) -> Self {
        Self {
            frame: FrameKind::ALL[rng.gen_range(0..FrameKind::ALL.len())],
            color: PaintColor::ALL[rng.gen_range(0..PaintColor::ALL.len())],
            tires: TireKind::ALL[rng.gen_range(0..TireKind::ALL.len())],
            engine: EngineKind::ALL[rng.gen_range(0..EngineKind::ALL.len())],
        }
    }
}

/// Who, if anyone, is currently building this customer's car.
///
/// The tag replaces cross-checked "is busy" flags: a customer leaves the
/// queue already tagged, so a car can never be claimed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Claim {
    #[default]
    Unclaimed,
    Player,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub order: Order,
    /// Tracked for display only; no path expires a waiting customer.
    pub patience_secs: u32,
    #[serde(default)]
    pub claim: Claim,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Callers must check `is_empty` before `take_next`; hitting this in
    /// normal flow is a logic error, not a recoverable condition.
    #[error("customer queue is empty")]
    Empty,
}

/// Number of customers generated for a day's batch.
#[must_use]
pub const fn batch_size(day: u32, serve_target: u32) -> u32 {
    let n = CUSTOMER_BATCH_BASE + day;
    if n < serve_target { n } else { serve_target }
}

/// FIFO waiting line for the current day.
///
/// Ids keep counting across batches so a restocked queue never reuses one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerQueue {
    waiting: VecDeque<Customer>,
    next_id: u32,
}

impl CustomerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the waiting line with a fresh batch for `day`.
    pub fn generate_day(&mut self, day: u32, serve_target: u32, rng: &mut impl Rng) {
        self.waiting.clear();
        let count = batch_size(day, serve_target);
        let patience_secs = PATIENCE_BASE_SECS + PATIENCE_PER_DAY_SECS * day;
        for _ in 0..count {
            let id = CustomerId(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            let name = CUSTOMER_NAMES[rng.gen_range(0..CUSTOMER_NAMES.len())].to_string();
            self.waiting.push_back(Customer {
                id,
                name,
                order: Order::draw(rng),
                patience_secs,
                claim: Claim::Unclaimed,
            });
        }
    }

    /// Remove and return the head of the line.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] when no customer is waiting.
    pub fn take_next(&mut self) -> Result<Customer, QueueError> {
        self.waiting.pop_front().ok_or(QueueError::Empty)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Customer> {
        self.waiting.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn clear(&mut self) {
        self.waiting.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.waiting.iter()
    }
}
