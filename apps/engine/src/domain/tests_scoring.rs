use crate::domain::scoring::{apply_round_scoring, round_points};
use crate::domain::{PlayOrder, RoundNo, RoundRecord, Trump};

#[test]
fn exact_prediction_earns_bonus() {
    assert_eq!(round_points(3, 3), 50);
    assert_eq!(round_points(1, 1), 30);
}

#[test]
fn misses_cost_ten_per_trick() {
    assert_eq!(round_points(2, 4), -20);
    assert_eq!(round_points(4, 2), -20);
    assert_eq!(round_points(1, 0), -10);
}

#[test]
fn zero_tricks_predicted_exactly_is_twenty() {
    // Not reachable through the prediction range, but the formula stays total.
    assert_eq!(round_points(0, 0), 20);
}

#[test]
fn apply_fills_every_predicted_seat() {
    let mut record = RoundRecord::new(RoundNo(2), Trump::Red, PlayOrder::sequential(3));
    let lines = [(Some(1), 1), (Some(2), 0), (None, 1)];
    for (seat, (prediction, won)) in record.seats.iter_mut().zip(lines) {
        seat.prediction = prediction;
        seat.tricks_won = won;
    }
    apply_round_scoring(&mut record);
    assert_eq!(record.seats[0].points, Some(30));
    assert_eq!(record.seats[1].points, Some(-20));
    assert_eq!(record.seats[2].points, None);
    assert!(!record.is_scored());
}
