//! Domain-level error type used across the engine.
//!
//! These errors describe malformed game data or broken engine invariants.
//! Bad agent answers are never reported through this type: they are
//! [`Violation`](crate::answer::Violation)s, handled by the reprompt loop.

use thiserror::Error;

use crate::domain::{Card, SeatId};

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Externally supplied game instance is inconsistent
    #[error("invalid game instance: {0}")]
    Instance(String),
    /// Card token could not be parsed
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Seat is not part of the current seating
    #[error("unknown seat {0}")]
    UnknownSeat(SeatId),
    /// Card could not be removed from the seat's hand
    #[error("card {card} not in hand of seat {seat}")]
    CardNotInHand { seat: SeatId, card: Card },
    /// Second prediction for the same seat in one round
    #[error("seat {0} already predicted this round")]
    PredictionAlreadySet(SeatId),
    /// Trick already holds one card per seat
    #[error("trick already complete")]
    TrickComplete,
    /// Operation attempted in the wrong phase
    #[error("phase mismatch: {0}")]
    PhaseMismatch(&'static str),
    /// Engine invariant violated
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn instance(detail: impl Into<String>) -> Self {
        Self::Instance(detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
