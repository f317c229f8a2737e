use crate::domain::tricks::{winning_index, Trick};
use crate::domain::{evaluate_trick, try_parse_cards, Card, SeatId, Trump};
use crate::errors::domain::DomainError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

#[test]
fn trump_beats_higher_lead_suit() {
    let trick = cards(&["R5", "B3", "R9"]);
    assert_eq!(
        evaluate_trick(&trick, Trump::Blue),
        Some(Card::ordinary(crate::domain::Suit::Blue, 3))
    );
}

#[test]
fn first_of_two_wizards_wins() {
    let trick = cards(&["Z1", "R9", "Z2"]);
    assert_eq!(evaluate_trick(&trick, Trump::Red), Some(Card::wizard(1)));
}

#[test]
fn leading_jesters_hand_over_to_first_ordinary() {
    let trick = cards(&["J1", "J2", "G4", "G7"]);
    assert_eq!(winning_index(&trick, Trump::NoTrump), Some(3));
    let trick = cards(&["J1", "Y2", "G13"]);
    assert_eq!(winning_index(&trick, Trump::NoTrump), Some(1));
}

#[test]
fn jester_after_ordinary_never_wins() {
    let trick = cards(&["G2", "J1"]);
    assert_eq!(winning_index(&trick, Trump::NoTrump), Some(0));
}

#[test]
fn empty_trick_has_no_winner() {
    assert_eq!(evaluate_trick(&[], Trump::Green), None);
    assert_eq!(winning_index(&[], Trump::Green), None);
}

#[test]
fn trick_resolves_to_seat() {
    let mut trick = Trick::new(3);
    for (seat, card) in [(2u8, "R5"), (0, "B3"), (1, "R9")] {
        trick.push(SeatId(seat), card.parse().unwrap()).unwrap();
    }
    assert!(trick.is_complete());
    let done = trick.resolve(Trump::Blue).unwrap();
    assert_eq!(done.winner, SeatId(0));
    assert_eq!(done.winning_card.to_string(), "B3");
    assert_eq!(done.plays.len(), 3);
}

#[test]
fn trick_rejects_extra_and_repeated_plays() {
    let mut trick = Trick::new(2);
    trick.push(SeatId(0), Card::jester(1)).unwrap();
    assert!(trick.push(SeatId(0), Card::jester(2)).is_err());
    trick.push(SeatId(1), Card::jester(2)).unwrap();
    assert_eq!(
        trick.push(SeatId(2), Card::jester(3)),
        Err(DomainError::TrickComplete)
    );
}

#[test]
fn incomplete_trick_cannot_resolve() {
    let mut trick = Trick::new(3);
    trick.push(SeatId(0), Card::wizard(1)).unwrap();
    assert!(matches!(
        trick.resolve(Trump::NoTrump),
        Err(DomainError::Invariant(_))
    ));
}
