//! What a finished (or aborted) game hands back to its caller.

use serde::Serialize;

use crate::answer::{AnswerKind, Violation, ViolationCategory};
use crate::domain::{RoundNo, RoundRecord, SeatId};
use crate::exchange::{AbortReason, ExchangeOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    Completed,
    /// Game ended early; rounds before `round` keep their points.
    Aborted {
        round: RoundNo,
        seat: SeatId,
        kind: AnswerKind,
        reason: AbortReason,
    },
}

/// Request and violation counters for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorStats {
    pub requests: u32,
    pub reprompts: u32,
    pub structural: u32,
    pub not_in_hand: u32,
    pub suit: u32,
    pub range: u32,
    /// Last round that was started.
    pub last_round: u8,
}

impl ErrorStats {
    pub fn record_violation(&mut self, violation: &Violation) {
        let counter = match violation.category() {
            ViolationCategory::Structural => &mut self.structural,
            ViolationCategory::NotInHand => &mut self.not_in_hand,
            ViolationCategory::Suit => &mut self.suit,
            ViolationCategory::Range => &mut self.range,
        };
        *counter += 1;
    }

    pub fn absorb(&mut self, outcome: &ExchangeOutcome) {
        self.requests += outcome.answers;
        self.reprompts += outcome.reprompts;
        for violation in &outcome.violations {
            self.record_violation(violation);
        }
    }

    pub fn total_violations(&self) -> u32 {
        self.structural + self.not_in_hand + self.suit + self.range
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub status: GameStatus,
    /// Display names, indexed by seat.
    pub seat_names: Vec<String>,
    /// Every started round; an aborted round is present but unscored.
    pub rounds: Vec<RoundRecord>,
    pub stats: ErrorStats,
}

impl GameOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self.status, GameStatus::Aborted { .. })
    }

    /// Rounds that reached scoring.
    pub fn completed_rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter().filter(|r| r.is_scored())
    }

    /// Sum of per-round points for each seat, indexed by seat.
    pub fn totals(&self) -> Vec<i32> {
        let mut totals = vec![0i32; self.seat_names.len()];
        for round in self.completed_rounds() {
            for (total, seat) in totals.iter_mut().zip(&round.seats) {
                *total += seat.points.unwrap_or(0);
            }
        }
        totals
    }

    /// Seats sharing the highest total.
    pub fn winners(&self) -> Vec<SeatId> {
        let totals = self.totals();
        let Some(&best) = totals.iter().max() else {
            return Vec::new();
        };
        totals
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == best)
            .filter_map(|(i, _)| u8::try_from(i).ok().map(SeatId))
            .collect()
    }
}
