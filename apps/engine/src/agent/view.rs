//! What a single seat can see when it is asked to act.

use serde::Serialize;

use crate::answer::legal_plays;
use crate::domain::{valid_prediction_range, Card, GameState, RoundNo, SeatId, Trump};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat: SeatId,
    pub seat_name: String,
    pub round_no: RoundNo,
    pub trick_no: u8,
    pub trump: Trump,
    pub seat_count: usize,
    /// Remaining cards, sorted.
    pub hand: Vec<Card>,
    /// Plays of the current trick so far, in order.
    pub trick: Vec<(SeatId, Card)>,
    /// Predictions already made this round, in starting order.
    pub predictions: Vec<(SeatId, u8)>,
    pub prediction: Option<u8>,
    pub tricks_won: u8,
}

impl SeatView {
    pub fn capture(
        state: &GameState,
        seat: SeatId,
        seat_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let record = state.require_current_round("SeatView::capture")?;
        let line = record.seat(seat)?;
        let mut hand = state.hand(seat)?.to_vec();
        hand.sort();
        Ok(Self {
            seat,
            seat_name: seat_name.into(),
            round_no: state.round_no(),
            trick_no: state.trick_no(),
            trump: record.trump,
            seat_count: state.seat_count(),
            hand,
            trick: state.trick().plays().to_vec(),
            predictions: record.predictions(),
            prediction: line.prediction,
            tricks_won: line.tricks_won,
        })
    }

    pub fn trick_cards(&self) -> Vec<Card> {
        self.trick.iter().map(|&(_, c)| c).collect()
    }

    pub fn legal_predictions(&self) -> Vec<u8> {
        valid_prediction_range(self.round_no.get()).collect()
    }

    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays(&self.hand, &self.trick_cards())
    }

    /// Tricks still needed to meet the prediction (zero once met or passed).
    pub fn tricks_needed(&self) -> u8 {
        self.prediction
            .map_or(0, |p| p.saturating_sub(self.tricks_won))
    }
}
