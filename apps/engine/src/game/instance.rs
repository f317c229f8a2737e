//! Externally supplied game data: seating, per-round hands and trump cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::rules::MIN_SEATS;
use crate::domain::{hand_size_for_round, Card, CardAlphabet, PlayOrder, SeatId, Trump};
use crate::errors::domain::DomainError;

/// Cards for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDeal {
    /// Card turned up to fix trump; `None` plays without trump.
    pub trump_card: Option<Card>,
    /// Starting hands, indexed by seat.
    pub hands: Vec<Vec<Card>>,
}

impl RoundDeal {
    pub fn trump(&self) -> Trump {
        Trump::from(self.trump_card.and_then(|c| c.suit()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInstance {
    /// Display names, indexed by seat.
    pub seat_names: Vec<String>,
    /// Initial seating; round 1 starts in this order.
    pub seating: PlayOrder,
    /// Round `r` is `rounds[r - 1]`.
    pub rounds: Vec<RoundDeal>,
}

impl GameInstance {
    pub fn seat_count(&self) -> usize {
        self.seat_names.len()
    }

    pub fn seat_name(&self, seat: SeatId) -> &str {
        self.seat_names
            .get(seat.index())
            .map_or("unknown", String::as_str)
    }

    /// Check that every round can be played as dealt.
    pub fn validate(&self, alphabet: &CardAlphabet) -> Result<(), DomainError> {
        let n = self.seat_count();
        if n < MIN_SEATS {
            return Err(DomainError::instance(format!(
                "need at least {MIN_SEATS} seats, got {n}"
            )));
        }
        if self.seating.len() != n || self.seating.seats().iter().any(|s| s.index() >= n) {
            return Err(DomainError::instance(format!(
                "seating {:?} does not cover seats 0..{n}",
                self.seating.seats()
            )));
        }
        if self.rounds.is_empty() {
            return Err(DomainError::instance("no rounds to play"));
        }

        let deck: HashSet<Card> = alphabet.deck().into_iter().collect();
        for (idx, deal) in self.rounds.iter().enumerate() {
            let round_no = u8::try_from(idx + 1)
                .map_err(|_| DomainError::instance("too many rounds"))?;
            let hand_size = hand_size_for_round(round_no)
                .ok_or_else(|| DomainError::invariant("round numbers start at 1"))?;
            validate_deal(deal, round_no, usize::from(hand_size), n, &deck)?;
        }
        Ok(())
    }
}

fn validate_deal(
    deal: &RoundDeal,
    round_no: u8,
    hand_size: usize,
    seats: usize,
    deck: &HashSet<Card>,
) -> Result<(), DomainError> {
    if deal.hands.len() != seats {
        return Err(DomainError::instance(format!(
            "round {round_no}: {} hands for {seats} seats",
            deal.hands.len()
        )));
    }
    let mut seen: HashSet<Card> = HashSet::new();
    if let Some(trump_card) = deal.trump_card {
        if trump_card.is_special() {
            return Err(DomainError::instance(format!(
                "round {round_no}: trump card {trump_card} is not an ordinary card"
            )));
        }
        if !deck.contains(&trump_card) {
            return Err(DomainError::instance(format!(
                "round {round_no}: trump card {trump_card} not in deck"
            )));
        }
        seen.insert(trump_card);
    }
    for (seat, hand) in deal.hands.iter().enumerate() {
        if hand.len() != hand_size {
            return Err(DomainError::instance(format!(
                "round {round_no}: seat {seat} holds {} cards, expected {hand_size}",
                hand.len()
            )));
        }
        for &card in hand {
            if !deck.contains(&card) {
                return Err(DomainError::instance(format!(
                    "round {round_no}: card {card} not in deck"
                )));
            }
            if !seen.insert(card) {
                return Err(DomainError::instance(format!(
                    "round {round_no}: card {card} dealt twice"
                )));
            }
        }
    }
    Ok(())
}
