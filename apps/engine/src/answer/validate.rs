use crate::answer::{AnswerGrammar, AnswerKind, Violation};
use crate::domain::{hand_has_suit, suit_to_follow, valid_prediction_range, Card, Suit};

pub fn validate_prediction(value: u32, round: u8) -> bool {
    u8::try_from(value).is_ok_and(|v| valid_prediction_range(round).contains(&v))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVerdict {
    Ok,
    NotInHand,
    SuitViolation { required: Suit },
}

/// Check a card against the seat's remaining hand and the trick so far.
///
/// Specials may always be played. An ordinary card must match the suit to
/// follow unless the hand holds none of that suit.
pub fn validate_card(card: Card, hand: &[Card], trick_so_far: &[Card]) -> CardVerdict {
    if !hand.contains(&card) {
        return CardVerdict::NotInHand;
    }
    let Some(required) = suit_to_follow(trick_so_far) else {
        return CardVerdict::Ok;
    };
    if card.is_special() || card.suit() == Some(required) || !hand_has_suit(hand, required) {
        return CardVerdict::Ok;
    }
    CardVerdict::SuitViolation { required }
}

/// Cards from `hand` that would pass [`validate_card`], sorted.
pub fn legal_plays(hand: &[Card], trick_so_far: &[Card]) -> Vec<Card> {
    let mut legal: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| validate_card(c, hand, trick_so_far) == CardVerdict::Ok)
        .collect();
    legal.sort();
    legal
}

/// Parse and validate a prediction answer for round `round`.
pub fn check_prediction(grammar: &AnswerGrammar, text: &str, round: u8) -> Result<u8, Violation> {
    let value = grammar
        .parse_prediction(text)
        .map_err(|e| structural(AnswerKind::Prediction, text, e))?;
    if !validate_prediction(value, round) {
        return Err(Violation::OutOfRange { value, round });
    }
    u8::try_from(value).map_err(|_| Violation::OutOfRange { value, round })
}

/// Parse and validate a card answer.
pub fn check_card(
    grammar: &AnswerGrammar,
    text: &str,
    hand: &[Card],
    trick_so_far: &[Card],
) -> Result<Card, Violation> {
    let card = grammar
        .parse_card(text)
        .map_err(|e| structural(AnswerKind::Card, text, e))?;
    match validate_card(card, hand, trick_so_far) {
        CardVerdict::Ok => Ok(card),
        CardVerdict::NotInHand => Err(Violation::NotInHand { card }),
        CardVerdict::SuitViolation { required } => Err(Violation::SuitViolation { card, required }),
    }
}

fn structural(expected: AnswerKind, text: &str, err: impl std::fmt::Display) -> Violation {
    Violation::Structural {
        expected,
        answer: text.to_string(),
        reason: err.to_string(),
    }
}
