// Proptest generators for domain types.
// Cards are drawn without replacement from the standard deck so every
// generated trick or hand is physically possible.

use proptest::prelude::*;

use crate::domain::{Card, CardAlphabet, SeatId, Suit, Trump};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Green),
        Just(Suit::Blue),
        Just(Suit::Red),
        Just(Suit::Yellow),
    ]
}

/// Random Trump (including NoTrump)
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![suit().prop_map(Trump::from), Just(Trump::NoTrump)]
}

pub fn ordinary_card() -> impl Strategy<Value = Card> {
    (suit(), 1u8..=13).prop_map(|(suit, rank)| Card::ordinary(suit, rank))
}

/// `count` distinct cards from the standard deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(CardAlphabet::STANDARD.deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// `count` distinct ordinary cards.
pub fn unique_ordinary_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    let ordinary: Vec<Card> = CardAlphabet::STANDARD
        .deck()
        .into_iter()
        .filter(|c| !c.is_special())
        .collect();
    Just(ordinary)
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// A complete trick for 2..=6 seats: (plays in order, trump).
pub fn complete_trick() -> impl Strategy<Value = (Vec<Card>, Trump)> {
    (2usize..=6).prop_flat_map(|n| (unique_cards(n), trump()))
}

/// Seat count and a rotation offset into it.
pub fn seats_and_offset() -> impl Strategy<Value = (u8, u8)> {
    (2u8..=6).prop_flat_map(|n| (Just(n), 0..n))
}

pub fn seat_in(n: u8) -> impl Strategy<Value = SeatId> {
    (0..n).prop_map(SeatId)
}
