//! Deterministic card dealing for simulated games.
//!
//! Every round is dealt from a fresh deck shuffled with a seed derived from
//! the game seed, so a game seed reproduces the whole instance.

use apprentice_engine::domain::rules::max_rounds;
use apprentice_engine::domain::{Card, CardAlphabet, PlayOrder};
use apprentice_engine::{DomainError, GameInstance, RoundDeal};
use clap::ValueEnum;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Highest ordinary rank that counts as a weak card.
const WEAK_MAX_RANK: u8 = 5;
/// Lowest ordinary rank that counts as a strong card.
const STRONG_MIN_RANK: u8 = 9;

/// Hand quality for the first seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DealMode {
    /// Plain shuffle for everyone.
    Random,
    /// First seat gets low ordinary cards and jesters where possible.
    Weak,
    /// First seat gets high ordinary cards and wizards where possible.
    Strong,
}

impl DealMode {
    fn favours(self, card: Card) -> bool {
        match self {
            DealMode::Random => false,
            DealMode::Weak => card.is_jester() || card.rank().is_some_and(|r| r <= WEAK_MAX_RANK),
            DealMode::Strong => {
                card.is_wizard() || card.rank().is_some_and(|r| r >= STRONG_MIN_RANK)
            }
        }
    }
}

/// Seed for dealing one round of a game.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Deal one round: `round_no` cards per seat, hands sorted.
///
/// With `with_trump`, the trump card is a random ordinary card left over
/// after dealing; when none is left the round has no trump.
pub fn deal_round(
    alphabet: &CardAlphabet,
    seat_count: usize,
    round_no: u8,
    mode: DealMode,
    with_trump: bool,
    seed: u64,
) -> Result<RoundDeal, DomainError> {
    let hand_size = usize::from(round_no);
    let mut deck = alphabet.deck();
    if seat_count * hand_size > deck.len() {
        return Err(DomainError::instance(format!(
            "round {round_no}: {seat_count} hands of {hand_size} exceed a deck of {}",
            deck.len()
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    // Stable: favoured cards move to the front in shuffled order.
    deck.sort_by_key(|&c| !mode.favours(c));
    let mut hands = Vec::with_capacity(seat_count);
    hands.push(deck.drain(..hand_size).collect::<Vec<_>>());
    if mode != DealMode::Random {
        deck.shuffle(&mut rng);
    }
    for _ in 1..seat_count {
        hands.push(deck.drain(..hand_size).collect::<Vec<_>>());
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }

    let trump_card = if with_trump {
        deck.iter().copied().find(|c| !c.is_special())
    } else {
        None
    };
    Ok(RoundDeal { trump_card, hands })
}

/// Deal a whole game for the named seats.
///
/// `rounds` defaults to the most rounds the deck allows; the final round is
/// always played without trump.
pub fn deal_game(
    seat_names: Vec<String>,
    rounds: Option<u8>,
    mode: DealMode,
    game_seed: u64,
    alphabet: &CardAlphabet,
) -> Result<GameInstance, DomainError> {
    let seat_count = seat_names.len();
    let seats = u8::try_from(seat_count)
        .map_err(|_| DomainError::instance(format!("{seat_count} seats is too many")))?;
    let limit = max_rounds(alphabet.deck().len(), seat_count);
    let rounds = rounds.unwrap_or(limit);
    if rounds == 0 || rounds > limit {
        return Err(DomainError::instance(format!(
            "{rounds} rounds requested, deck allows 1..={limit} for {seat_count} seats"
        )));
    }

    let deals = (1..=rounds)
        .map(|round_no| {
            deal_round(
                alphabet,
                seat_count,
                round_no,
                mode,
                round_no < rounds,
                derive_dealing_seed(game_seed, round_no),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameInstance {
        seat_names,
        seating: PlayOrder::sequential(seats),
        rounds: deals,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("seat-{i}")).collect()
    }

    #[test]
    fn dealing_is_deterministic() {
        let a = deal_round(&CardAlphabet::STANDARD, 3, 5, DealMode::Random, true, 42).unwrap();
        let b = deal_round(&CardAlphabet::STANDARD, 3, 5, DealMode::Random, true, 42).unwrap();
        let c = deal_round(&CardAlphabet::STANDARD, 3, 5, DealMode::Random, true, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn dealt_games_pass_instance_validation() {
        for mode in [DealMode::Random, DealMode::Weak, DealMode::Strong] {
            let game =
                deal_game(names(3), None, mode, 7, &CardAlphabet::STANDARD).unwrap();
            assert_eq!(game.rounds.len(), 20);
            game.validate(&CardAlphabet::STANDARD).unwrap();
        }
    }

    #[test]
    fn hands_hold_distinct_sorted_cards() {
        let deal = deal_round(&CardAlphabet::STANDARD, 4, 10, DealMode::Random, true, 99).unwrap();
        let mut seen = HashSet::new();
        for hand in &deal.hands {
            assert_eq!(hand.len(), 10);
            let mut sorted = hand.clone();
            sorted.sort();
            assert_eq!(hand, &sorted);
            for card in hand {
                assert!(seen.insert(*card), "card {card} dealt twice");
            }
        }
        let trump = deal.trump_card.expect("cards remain for a trump");
        assert!(!trump.is_special());
        assert!(!seen.contains(&trump));
    }

    #[test]
    fn final_round_has_no_trump() {
        let game = deal_game(names(3), Some(4), DealMode::Random, 1, &CardAlphabet::STANDARD)
            .unwrap();
        assert!(game.rounds[..3].iter().all(|d| d.trump_card.is_some()));
        assert_eq!(game.rounds[3].trump_card, None);
    }

    #[test]
    fn strong_and_weak_modes_shape_the_first_hand() {
        for seed in 0..20 {
            let strong =
                deal_round(&CardAlphabet::STANDARD, 3, 6, DealMode::Strong, true, seed).unwrap();
            assert!(strong.hands[0]
                .iter()
                .all(|&c| DealMode::Strong.favours(c)));

            let weak =
                deal_round(&CardAlphabet::STANDARD, 3, 6, DealMode::Weak, true, seed).unwrap();
            assert!(weak.hands[0].iter().all(|&c| DealMode::Weak.favours(c)));
        }
    }

    #[test]
    fn rejects_more_rounds_than_the_deck_allows() {
        assert!(deal_game(names(3), Some(21), DealMode::Random, 0, &CardAlphabet::STANDARD)
            .is_err());
        assert!(deal_game(names(3), Some(0), DealMode::Random, 0, &CardAlphabet::STANDARD)
            .is_err());
        assert!(deal_round(&CardAlphabet::STANDARD, 4, 16, DealMode::Random, false, 0).is_err());
    }
}
