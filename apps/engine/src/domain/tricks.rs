use serde::Serialize;

use crate::domain::seating::SeatId;
use crate::domain::{card_beats, Card, Trump};
use crate::errors::domain::DomainError;

/// Winning card of a trick; `None` for an empty trick.
///
/// The first card leads; each later card replaces the current winner only if
/// it beats it, so the earliest of equal cards keeps the trick.
pub fn evaluate_trick(cards: &[Card], trump: Trump) -> Option<Card> {
    let (&first, rest) = cards.split_first()?;
    Some(rest.iter().fold(first, |winner, &challenger| {
        if card_beats(challenger, winner, trump) {
            challenger
        } else {
            winner
        }
    }))
}

/// Index into `cards` of the winning play.
pub fn winning_index(cards: &[Card], trump: Trump) -> Option<usize> {
    if cards.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for i in 1..cards.len() {
        if card_beats(cards[i], cards[best], trump) {
            best = i;
        }
    }
    Some(best)
}

/// A trick in progress: (seat, card) pairs in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<(SeatId, Card)>,
    seat_count: usize,
}

impl Trick {
    pub fn new(seat_count: usize) -> Self {
        Self {
            plays: Vec::with_capacity(seat_count),
            seat_count,
        }
    }

    pub fn plays(&self) -> &[(SeatId, Card)] {
        &self.plays
    }

    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|&(_, c)| c).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.seat_count
    }

    pub fn push(&mut self, seat: SeatId, card: Card) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::TrickComplete);
        }
        if self.plays.iter().any(|&(s, _)| s == seat) {
            return Err(DomainError::invariant(format!(
                "seat {seat} already played in this trick"
            )));
        }
        self.plays.push((seat, card));
        Ok(())
    }

    /// Decide a complete trick.
    pub fn resolve(self, trump: Trump) -> Result<CompletedTrick, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::invariant(format!(
                "resolve called on trick with {} of {} plays",
                self.plays.len(),
                self.seat_count
            )));
        }
        let idx = winning_index(&self.cards(), trump)
            .ok_or_else(|| DomainError::invariant("resolve called on empty trick"))?;
        let (winner, winning_card) = self.plays[idx];
        Ok(CompletedTrick {
            plays: self.plays,
            winner,
            winning_card,
        })
    }
}

/// A decided trick as kept in round history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub plays: Vec<(SeatId, Card)>,
    pub winner: SeatId,
    pub winning_card: Card,
}
