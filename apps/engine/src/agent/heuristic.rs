//! Heuristic: a deterministic baseline that plays to its prediction.
//!
//! Prediction:
//! - One trick per Wizard, per trump among the top four ranks, and per
//!   off-trump top rank; clamped into the legal range. Ranks are read from
//!   the alphabet in play (10 and 13 for the standard deck).
//!
//! Play:
//! - Still short of the prediction: take the trick with the cheapest card
//!   that currently wins it; if none can, play the lowest card.
//! - Prediction met: avoid winning; prefer a Jester, else the highest card
//!   that still loses, else the lowest card.

use super::trait_def::{Agent, AgentError, AgentRequest};
use crate::agent::SeatView;
use crate::answer::AnswerKind;
use crate::domain::{evaluate_trick, Card, CardAlphabet, Trump};

/// Trumps this close to the top rank are counted as sure tricks.
const HIGH_TRUMP_SPAN: u8 = 3;

#[derive(Debug, Clone, Default)]
pub struct HeuristicAgent;

impl HeuristicAgent {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Rough card power: Jesters lowest, trumps above plain suits, Wizards top.
    fn strength(card: Card, trump: Trump) -> u8 {
        match card {
            Card::Special { .. } if card.is_jester() => 0,
            Card::Special { .. } => 100,
            Card::Ordinary { suit, rank } if Some(suit) == trump.suit() => 50 + rank,
            Card::Ordinary { rank, .. } => rank,
        }
    }

    fn is_sure_trick(card: Card, trump: Trump, top_rank: u8) -> bool {
        match card {
            Card::Special { .. } => card.is_wizard(),
            Card::Ordinary { suit, rank } if Some(suit) == trump.suit() => {
                rank >= top_rank.saturating_sub(HIGH_TRUMP_SPAN)
            }
            Card::Ordinary { rank, .. } => rank == top_rank,
        }
    }

    pub fn predict(view: &SeatView, alphabet: &CardAlphabet) -> Option<u8> {
        let top_rank = alphabet.ranks_per_suit;
        let estimate = view
            .hand
            .iter()
            .filter(|&&c| Self::is_sure_trick(c, view.trump, top_rank))
            .count();
        let legal = view.legal_predictions();
        let lo = *legal.first()?;
        let hi = *legal.last()?;
        let estimate = u8::try_from(estimate).unwrap_or(u8::MAX);
        Some(estimate.clamp(lo, hi))
    }

    /// Whether `card`, played now, would hold the trick so far.
    fn would_win(view: &SeatView, card: Card) -> bool {
        let mut cards = view.trick_cards();
        cards.push(card);
        evaluate_trick(&cards, view.trump) == Some(card)
    }

    pub fn choose_play(view: &SeatView) -> Option<Card> {
        let mut legal = view.legal_plays();
        legal.sort_by_key(|&c| Self::strength(c, view.trump));
        let lowest = legal.first().copied();

        if view.tricks_needed() > 0 {
            return legal
                .iter()
                .copied()
                .find(|&c| Self::would_win(view, c))
                .or(lowest);
        }

        if let Some(jester) = legal.iter().copied().find(Card::is_jester) {
            return Some(jester);
        }
        legal
            .iter()
            .rev()
            .copied()
            .find(|&c| !Self::would_win(view, c))
            .or(lowest)
    }
}

impl Agent for HeuristicAgent {
    fn ask(&self, request: &AgentRequest<'_>) -> Result<String, AgentError> {
        match request.kind {
            AnswerKind::Prediction => Self::predict(request.view, request.grammar.alphabet())
                .map(|p| request.grammar.render_prediction(p))
                .ok_or_else(|| AgentError::Internal("no legal predictions".into())),
            AnswerKind::Card => Self::choose_play(request.view)
                .map(|c| request.grammar.render_play(c))
                .ok_or_else(|| AgentError::Internal("no legal plays".into())),
        }
    }
}
