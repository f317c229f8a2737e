//! Agent answers: the two-alternative grammar and game-legality checks.
//!
//! Parsing turns raw text into a typed value; validation checks that value
//! against the seat's hand, the trick so far and the round. Both report
//! failures as a [`Violation`], which the exchange loop maps to a correction.

pub mod grammar;
pub mod validate;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{Card, CardAlphabet, Suit};

pub use grammar::{AnswerGrammar, StructuralError};
pub use validate::{
    check_card, check_prediction, legal_plays, validate_card, validate_prediction, CardVerdict,
};

/// What an exchange asks the agent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Prediction,
    Card,
}

/// A parsed and validated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Prediction(u8),
    Card(Card),
}

/// Recoverable answer errors. Each variant selects its own correction.
///
/// `Display` writes cards in the standard letters; [`Violation::describe`]
/// uses the letters the agent was shown.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("answer not in expected format: {reason}")]
    Structural {
        expected: AnswerKind,
        answer: String,
        reason: String,
    },
    #[error("card {card} is not in hand")]
    NotInHand { card: Card },
    #[error("card {card} does not follow the required suit")]
    SuitViolation { card: Card, required: Suit },
    #[error("prediction {value} outside 1..={round}")]
    OutOfRange { value: u32, round: u8 },
}

/// Coarse classification used for statistics and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    Structural,
    NotInHand,
    Suit,
    Range,
}

impl Violation {
    /// Same text as `Display`, with cards rendered through `alphabet`.
    pub fn describe(&self, alphabet: &CardAlphabet) -> String {
        match self {
            Violation::NotInHand { card } => {
                format!("card {} is not in hand", alphabet.render(*card))
            }
            Violation::SuitViolation { card, .. } => format!(
                "card {} does not follow the required suit",
                alphabet.render(*card)
            ),
            Violation::Structural { .. } | Violation::OutOfRange { .. } => self.to_string(),
        }
    }

    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::Structural { .. } => ViolationCategory::Structural,
            Violation::NotInHand { .. } => ViolationCategory::NotInHand,
            Violation::SuitViolation { .. } => ViolationCategory::Suit,
            Violation::OutOfRange { .. } => ViolationCategory::Range,
        }
    }
}
