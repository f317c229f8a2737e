//! Per-game records and the cross-game seat summary.

use apprentice_engine::game::ErrorStats;
use apprentice_engine::{GameEvent, GameOutcome, GameStatus};
use serde::Serialize;

use crate::dealing::DealMode;

/// One JSON line of simulator output.
#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub game: u32,
    pub seed: u64,
    pub deal_mode: DealMode,
    /// Agent kind per seat.
    pub agents: Vec<String>,
    pub seat_names: Vec<String>,
    pub status: GameStatus,
    pub completed_rounds: usize,
    pub totals: Vec<i32>,
    pub winners: Vec<u8>,
    pub stats: ErrorStats,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GameOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<GameEvent>>,
}

impl GameRecord {
    pub fn new(
        game: u32,
        seed: u64,
        deal_mode: DealMode,
        agents: Vec<String>,
        outcome: GameOutcome,
        duration_ms: f64,
    ) -> Self {
        Self {
            game,
            seed,
            deal_mode,
            agents,
            seat_names: outcome.seat_names.clone(),
            status: outcome.status.clone(),
            completed_rounds: outcome.completed_rounds().count(),
            totals: outcome.totals(),
            winners: outcome.winners().into_iter().map(|s| s.0).collect(),
            stats: outcome.stats.clone(),
            duration_ms,
            outcome: Some(outcome),
            events: None,
        }
    }

    /// Drop round-by-round detail, keeping the headline numbers.
    pub fn summary_only(mut self) -> Self {
        self.outcome = None;
        self
    }

    pub fn with_events(mut self, events: Vec<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatSummary {
    pub games: u32,
    pub total: i64,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub wins: u32,
    pub aborts: u32,
}

impl SeatSummary {
    pub fn average(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total as f64 / f64::from(self.games)
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games) * 100.0
    }
}

/// Running totals across games.
#[derive(Debug, Default)]
pub struct Summary {
    pub games: u32,
    pub aborted: u32,
    pub failed: u32,
    pub seats: Vec<SeatSummary>,
}

impl Summary {
    pub fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        if matches!(record.status, GameStatus::Aborted { .. }) {
            self.aborted += 1;
        }
        if self.seats.len() < record.totals.len() {
            self.seats.resize(record.totals.len(), SeatSummary::default());
        }
        for (idx, (seat, &score)) in self.seats.iter_mut().zip(&record.totals).enumerate() {
            seat.games += 1;
            seat.total += i64::from(score);
            seat.min = Some(seat.min.map_or(score, |m| m.min(score)));
            seat.max = Some(seat.max.map_or(score, |m| m.max(score)));
            if record.winners.iter().any(|&w| usize::from(w) == idx) {
                seat.wins += 1;
            }
        }
        if let GameStatus::Aborted { seat, .. } = record.status {
            if let Some(line) = self.seats.get_mut(seat.index()) {
                line.aborts += 1;
            }
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}
