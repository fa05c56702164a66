//! Finished-run records and the local top-10 table.
//!
//! The engine only defines the record shape and ordering rules; where the
//! table lives is the storage collaborator's problem (see
//! [`crate::LeaderboardStore`]).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use crate::constants::LEADERBOARD_CAP;
use crate::state::SessionState;

/// One finished run. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    pub day: u32,
    pub cars_built: u32,
    pub perfect_cars: u32,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

impl LeaderboardEntry {
    /// Snapshot a run at game over. A blank name gets a generated one.
    #[must_use]
    pub fn from_run(name: &str, state: &SessionState) -> Self {
        let now = Utc::now();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("Player {}", now.timestamp_millis())
        } else {
            trimmed.to_string()
        };
        Self {
            name,
            score: state.score,
            day: state.day,
            cars_built: state.total_cars_built,
            perfect_cars: state.perfect_cars,
            timestamp: now.to_rfc3339(),
        }
    }
}

/// The ranked table: descending by score, ties kept in insertion order,
/// truncated to the top ten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, re-rank, truncate.
    pub fn record(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        // Stable sort keeps earlier submissions ahead on ties.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);
    }

    #[must_use]
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// In-memory store for tests and the QA harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    board: Rc<RefCell<Leaderboard>>,
}

impl MemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl crate::LeaderboardStore for MemoryLeaderboard {
    type Error = Infallible;

    fn get_top(&self, n: usize) -> Result<Vec<LeaderboardEntry>, Self::Error> {
        Ok(self.board.borrow().top(n).to_vec())
    }

    fn record(&self, entry: &LeaderboardEntry) -> Result<(), Self::Error> {
        self.board.borrow_mut().record(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            day: 3,
            cars_built: 9,
            perfect_cars: 2,
            timestamp: String::from("2026-01-01T00:00:00+00:00"),
        }
    }

    #[test]
    fn ranks_descending_and_truncates_to_ten() {
        let mut board = Leaderboard::new();
        for score in 0..15 {
            board.record(entry("p", score));
        }
        assert_eq!(board.len(), 10);
        let top = board.top(10);
        assert_eq!(top[0].score, 14);
        assert_eq!(top[9].score, 5);
        assert_eq!(board.top(3).len(), 3);
        assert_eq!(board.top(99).len(), 10);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.record(entry("first", 50));
        board.record(entry("second", 50));
        board.record(entry("third", 80));
        let top = board.top(3);
        assert_eq!(top[0].name, "third");
        assert_eq!(top[1].name, "first");
        assert_eq!(top[2].name, "second");
    }

    #[test]
    fn blank_names_get_a_generated_fallback() {
        let state = SessionState::new(5);
        let named = LeaderboardEntry::from_run("  Sam  ", &state);
        assert_eq!(named.name, "Sam");
        let blank = LeaderboardEntry::from_run("   ", &state);
        assert!(blank.name.starts_with("Player "));
        assert_eq!(blank.day, 1);
        assert_eq!(blank.score, 0);
    }
}
