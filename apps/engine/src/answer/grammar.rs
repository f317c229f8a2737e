//! Answer grammar
//!
//! ```text
//! answer     := prediction | play
//! prediction := "PREDICTION:" ws* digit+
//! play       := "I PLAY:" ws* card-token
//! ```
//!
//! Surrounding whitespace is ignored; anything after the value is rejected.

use thiserror::Error;

use crate::answer::AnswerKind;
use crate::domain::{Card, CardAlphabet};
use crate::errors::domain::DomainError;

pub const PREDICTION_TAG: &str = "PREDICTION:";
pub const PLAY_TAG: &str = "I PLAY:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("missing {0:?} prefix")]
    MissingTag(&'static str),
    #[error("missing value after {0:?}")]
    MissingValue(&'static str),
    #[error("unexpected text after value: {0:?}")]
    TrailingText(String),
    #[error("not a whole number: {0:?}")]
    NotANumber(String),
    #[error("not a card: {0:?}")]
    NotACard(String),
}

/// Grammar resolved once from a card alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGrammar {
    alphabet: CardAlphabet,
}

impl Default for AnswerGrammar {
    fn default() -> Self {
        Self {
            alphabet: CardAlphabet::STANDARD,
        }
    }
}

impl AnswerGrammar {
    pub fn new(alphabet: CardAlphabet) -> Result<Self, DomainError> {
        alphabet.validate()?;
        Ok(Self { alphabet })
    }

    pub fn alphabet(&self) -> &CardAlphabet {
        &self.alphabet
    }

    /// Digit runs too long for a `u32` saturate to `u32::MAX`: they are well
    /// formed, just out of range.
    pub fn parse_prediction(&self, text: &str) -> Result<u32, StructuralError> {
        let value = tagged_value(text, PREDICTION_TAG)?;
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StructuralError::NotANumber(value.to_string()));
        }
        Ok(value.parse::<u32>().unwrap_or(u32::MAX))
    }

    pub fn parse_card(&self, text: &str) -> Result<Card, StructuralError> {
        let value = tagged_value(text, PLAY_TAG)?;
        self.alphabet
            .parse_token(value)
            .ok_or_else(|| StructuralError::NotACard(value.to_string()))
    }

    pub fn render_card(&self, card: Card) -> String {
        self.alphabet.render(card)
    }

    pub fn render_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|&c| self.alphabet.render(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn render_prediction(&self, value: u8) -> String {
        format!("{PREDICTION_TAG} {value}")
    }

    pub fn render_play(&self, card: Card) -> String {
        format!("{PLAY_TAG} {}", self.alphabet.render(card))
    }

    /// Human-readable answer template for a kind.
    pub fn expected_format(kind: AnswerKind) -> &'static str {
        match kind {
            AnswerKind::Prediction => "PREDICTION: number",
            AnswerKind::Card => "I PLAY: card",
        }
    }
}

fn tagged_value<'a>(text: &'a str, tag: &'static str) -> Result<&'a str, StructuralError> {
    let rest = text
        .trim()
        .strip_prefix(tag)
        .ok_or(StructuralError::MissingTag(tag))?;
    let value = rest.trim_start();
    if value.is_empty() {
        return Err(StructuralError::MissingValue(tag));
    }
    if value.contains(char::is_whitespace) {
        return Err(StructuralError::TrailingText(value.to_string()));
    }
    Ok(value)
}
