use crate::domain::state::RoundRecord;

pub const EXACT_BASE: i32 = 20;
pub const POINTS_PER_TRICK: i32 = 10;
pub const PENALTY_PER_TRICK: i32 = 10;

/// Points for one seat in one round.
///
/// Exact prediction earns 20 plus 10 per trick; any miss costs 10 per trick
/// of difference.
pub fn round_points(prediction: u8, tricks_won: u8) -> i32 {
    let predicted = i32::from(prediction);
    let won = i32::from(tricks_won);
    if predicted == won {
        EXACT_BASE + POINTS_PER_TRICK * won
    } else {
        -PENALTY_PER_TRICK * (predicted - won).abs()
    }
}

/// Fill in points for every seat of a finished round.
///
/// Seats without a prediction are left unscored; the state machine never
/// reaches round end in that case.
pub fn apply_round_scoring(record: &mut RoundRecord) {
    for seat in record.seats.iter_mut() {
        if let Some(prediction) = seat.prediction {
            seat.points = Some(round_points(prediction, seat.tricks_won));
        }
    }
}
