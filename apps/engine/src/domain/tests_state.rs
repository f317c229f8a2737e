use crate::domain::{
    try_parse_cards, Card, GameState, Phase, PlayOrder, RoundNo, SeatId, Trump,
};
use crate::errors::domain::DomainError;

const A: SeatId = SeatId(0);
const B: SeatId = SeatId(1);
const C: SeatId = SeatId(2);

fn hands(tokens: [&[&str]; 3]) -> Vec<Vec<Card>> {
    tokens
        .iter()
        .map(|t| try_parse_cards(*t).expect("hardcoded valid card tokens"))
        .collect()
}

fn round_two_state() -> GameState {
    let order = PlayOrder::sequential(3);
    let mut state = GameState::new(order.clone());
    state
        .begin_round(
            RoundNo(2),
            Trump::Blue,
            order,
            hands([&["R5", "G2"], &["B3", "G9"], &["R9", "J1"]]),
        )
        .unwrap();
    state
}

#[test]
fn predictions_once_per_seat_within_range() {
    let mut state = round_two_state();
    assert_eq!(state.phase(), Phase::Predicting);
    state.record_prediction(A, 1).unwrap();
    assert_eq!(
        state.record_prediction(A, 2),
        Err(DomainError::PredictionAlreadySet(A))
    );
    assert!(state.record_prediction(B, 3).is_err());
    assert!(state.record_prediction(B, 0).is_err());
    assert!(state.begin_tricks().is_err());
}

#[test]
fn full_round_rotates_to_winner_and_scores() {
    let mut state = round_two_state();
    for (seat, p) in [(A, 1), (B, 1), (C, 1)] {
        state.record_prediction(seat, p).unwrap();
    }
    state.begin_tricks().unwrap();
    assert_eq!(state.expected_player(), Some(A));

    // Trick 1: R5, B3 (trump), R9 -> B wins
    state.play_card(A, "R5".parse().unwrap()).unwrap();
    state.play_card(B, "B3".parse().unwrap()).unwrap();
    let res = state.play_card(C, "R9".parse().unwrap()).unwrap();
    assert_eq!(res.completed.map(|t| t.winner), Some(B));
    assert!(!res.round_finished);
    assert_eq!(state.order().seats(), &[B, C, A]);
    assert_eq!(state.phase(), Phase::TrickPlaying { trick_no: 2 });

    // Trick 2: G9, J1, G2 -> B wins again
    state.play_card(B, "G9".parse().unwrap()).unwrap();
    state.play_card(C, Card::jester(1)).unwrap();
    let res = state.play_card(A, "G2".parse().unwrap()).unwrap();
    assert!(res.round_finished);
    assert_eq!(state.phase(), Phase::RoundEnd);

    let record = state.score_round().unwrap();
    assert_eq!(record.total_tricks(), 2);
    assert_eq!(record.seats[0].points, Some(-10));
    assert_eq!(record.seats[1].points, Some(-10));
    assert_eq!(record.seats[2].points, Some(-10));
    assert_eq!(record.tricks.len(), 2);
}

#[test]
fn play_rejects_out_of_turn_and_missing_card() {
    let mut state = round_two_state();
    for seat in [A, B, C] {
        state.record_prediction(seat, 1).unwrap();
    }
    state.begin_tricks().unwrap();
    assert!(state.play_card(B, "B3".parse().unwrap()).is_err());
    assert_eq!(
        state.play_card(A, "Y7".parse().unwrap()),
        Err(DomainError::CardNotInHand {
            seat: A,
            card: "Y7".parse().unwrap()
        })
    );
    assert_eq!(state.hand(A).unwrap().len(), 2);
}

#[test]
fn abort_keeps_history() {
    let mut state = round_two_state();
    state.record_prediction(A, 2).unwrap();
    state.abort();
    assert!(state.is_aborted());
    assert_eq!(state.phase(), Phase::Aborted);
    assert_eq!(state.rounds().len(), 1);
    assert!(!state.rounds()[0].is_scored());
}
