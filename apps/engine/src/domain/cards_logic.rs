//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit() == Some(suit))
}

/// Suit every later card of the trick must follow, if any.
///
/// Leading Jesters are skipped; the first non-Jester decides. A Wizard in
/// that position lifts the constraint for the whole trick.
pub fn suit_to_follow(trick: &[Card]) -> Option<Suit> {
    let first = trick.iter().find(|c| !c.is_jester())?;
    first.suit()
}

/// Whether `challenger`, played after `winner`, takes the trick from it.
///
/// Earlier cards keep priority on ties: a second Wizard never overtakes the
/// first and Jesters never overtake each other.
pub fn card_beats(challenger: Card, winner: Card, trump: Trump) -> bool {
    if challenger.is_special() || winner.is_special() {
        if challenger.is_wizard() && !winner.is_wizard() {
            return true;
        }
        // First non-Jester takes over an all-Jester trick
        return winner.is_jester() && !challenger.is_jester();
    }

    let (Card::Ordinary { suit: cs, rank: cr }, Card::Ordinary { suit: ws, rank: wr }) =
        (challenger, winner)
    else {
        return false;
    };

    if let Some(trump_suit) = trump.suit() {
        if cs == trump_suit && ws != trump_suit {
            return true;
        }
    }
    if cs == ws {
        return cr > wr;
    }
    // Off-suit, non-trump discard
    false
}
