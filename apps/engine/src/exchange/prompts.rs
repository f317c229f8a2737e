//! Prompt text sources.
//!
//! The engine treats prompt text as opaque: it only needs one prompt per
//! answer kind and one correction per violation.

use crate::agent::SeatView;
use crate::answer::{AnswerGrammar, AnswerKind, Violation};

pub trait PromptSource: Send + Sync {
    fn prompt(&self, kind: AnswerKind, view: &SeatView, grammar: &AnswerGrammar) -> String;

    fn correction(&self, violation: &Violation, view: &SeatView, grammar: &AnswerGrammar)
        -> String;
}

/// Minimal line-oriented prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrompts;

impl PlainPrompts {
    fn situation(view: &SeatView, grammar: &AnswerGrammar) -> String {
        let trump = match view.trump.suit() {
            Some(suit) => format!("{suit:?}"),
            None => "none".to_string(),
        };
        let mut lines = vec![
            format!(
                "You are {} in round {} of a game with {} players.",
                view.seat_name, view.round_no, view.seat_count
            ),
            format!("Trump suit: {trump}."),
            format!("Your current hand is: {}", grammar.render_cards(&view.hand)),
        ];
        if !view.predictions.is_empty() {
            let made = view
                .predictions
                .iter()
                .map(|(seat, p)| format!("seat {seat}: {p}"))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Predictions so far: {made}"));
        }
        lines.join("\n")
    }
}

impl PromptSource for PlainPrompts {
    fn prompt(&self, kind: AnswerKind, view: &SeatView, grammar: &AnswerGrammar) -> String {
        let mut text = Self::situation(view, grammar);
        match kind {
            AnswerKind::Prediction => {
                text.push_str(&format!(
                    "\nHow many of the {} tricks will you win? Answer with {}.",
                    view.round_no,
                    AnswerGrammar::expected_format(kind)
                ));
            }
            AnswerKind::Card => {
                if !view.trick.is_empty() {
                    text.push_str(&format!(
                        "\nThese cards have been played in this trick already in this order: {}",
                        grammar.render_cards(&view.trick_cards())
                    ));
                }
                text.push_str(&format!(
                    "\nWhich card do you play? Answer with {}.",
                    AnswerGrammar::expected_format(kind)
                ));
            }
        }
        text
    }

    fn correction(
        &self,
        violation: &Violation,
        view: &SeatView,
        grammar: &AnswerGrammar,
    ) -> String {
        match violation {
            Violation::Structural { expected, .. } => format!(
                "Your answer did not follow the format. Answer only with {}.",
                AnswerGrammar::expected_format(*expected)
            ),
            Violation::NotInHand { card } => format!(
                "{} is not in your hand. Your current hand is: {}",
                grammar.render_card(*card),
                grammar.render_cards(&view.hand)
            ),
            Violation::SuitViolation { card, required } => format!(
                "{} does not follow suit. You hold {required:?} cards and must play one of them, a Wizard or a Jester.",
                grammar.render_card(*card)
            ),
            Violation::OutOfRange { value, round } => format!(
                "{value} is not a possible prediction. Predict a number from 1 to {round}."
            ),
        }
    }
}
