use proptest::prelude::*;

use crate::domain::tricks::winning_index;
use crate::domain::{
    evaluate_trick, next_round_order, next_trick_order, test_gens, test_prelude, Card, PlayOrder,
    SeatId, Trump,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winner is always one of the played cards, at the reported index.
    #[test]
    fn prop_winner_is_played_card((cards, trump) in test_gens::complete_trick()) {
        let winner = evaluate_trick(&cards, trump).unwrap();
        let idx = winning_index(&cards, trump).unwrap();
        prop_assert_eq!(cards[idx], winner);
    }

    /// A single Wizard takes the trick no matter where it lands.
    #[test]
    fn prop_single_wizard_wins(
        mut cards in test_gens::unique_ordinary_cards(4),
        pos in 0usize..5,
        trump in test_gens::trump(),
    ) {
        let wizard = Card::wizard(1);
        cards.insert(pos.min(cards.len()), wizard);
        prop_assert_eq!(evaluate_trick(&cards, trump), Some(wizard));
    }

    /// The first of several Wizards stands.
    #[test]
    fn prop_first_wizard_wins(
        mut cards in test_gens::unique_ordinary_cards(3),
        first in 0usize..4,
        trump in test_gens::trump(),
    ) {
        let z1 = Card::wizard(1);
        let first = first.min(cards.len());
        cards.insert(first, z1);
        cards.push(Card::wizard(2));
        prop_assert_eq!(evaluate_trick(&cards, trump), Some(z1));
    }

    /// All Jesters: the first one played wins.
    #[test]
    fn prop_all_jesters_first_wins(n in 1u8..=4, trump in test_gens::trump()) {
        let cards: Vec<Card> = (1..=n).rev().map(Card::jester).collect();
        prop_assert_eq!(evaluate_trick(&cards, trump), Some(cards[0]));
    }

    /// No specials and no trump: highest card of the leading suit wins.
    #[test]
    fn prop_no_trump_highest_lead_suit(cards in test_gens::unique_ordinary_cards(5)) {
        let lead = cards[0].suit().unwrap();
        let best = cards
            .iter()
            .filter(|c| c.suit() == Some(lead))
            .max_by_key(|c| c.rank())
            .copied();
        prop_assert_eq!(evaluate_trick(&cards, Trump::NoTrump), best);
    }

    /// With trump cards present and no specials, the highest trump wins.
    #[test]
    fn prop_highest_trump_wins(
        cards in test_gens::unique_ordinary_cards(5),
        trump_suit in test_gens::suit(),
    ) {
        let trumps: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| c.suit() == Some(trump_suit))
            .collect();
        prop_assume!(!trumps.is_empty());
        let best = trumps.iter().max_by_key(|c| c.rank()).copied();
        prop_assert_eq!(evaluate_trick(&cards, Trump::from(trump_suit)), best);
    }

    /// Rotating to a winner keeps the cyclic sequence and puts the winner first.
    #[test]
    fn prop_trick_order_is_rotation((n, w) in test_gens::seats_and_offset()) {
        let order = PlayOrder::sequential(n);
        let next = next_trick_order(&order, SeatId(w)).unwrap();
        prop_assert_eq!(next.len(), order.len());
        prop_assert_eq!(next.first(), Some(SeatId(w)));
        for (i, seat) in next.seats().iter().enumerate() {
            let expected = (usize::from(w) + i) % usize::from(n);
            prop_assert_eq!(seat.index(), expected);
        }
    }

    /// `n` round rotations bring the starting order back.
    #[test]
    fn prop_round_order_cycles((n, _) in test_gens::seats_and_offset()) {
        let order = PlayOrder::sequential(n);
        let mut rotated = order.clone();
        for _ in 0..n {
            rotated = next_round_order(&rotated);
        }
        prop_assert_eq!(rotated, order);
    }

    /// Rotating to any seat of the order is always possible.
    #[test]
    fn prop_trick_order_accepts_every_member(
        seat in (2u8..=6).prop_flat_map(test_gens::seat_in)
    ) {
        let order = PlayOrder::sequential(6);
        prop_assert!(next_trick_order(&order, seat).is_ok());
    }
}
