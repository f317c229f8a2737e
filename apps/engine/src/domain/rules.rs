use std::ops::RangeInclusive;

pub const DEFAULT_RANKS_PER_SUIT: u8 = 13;
pub const DEFAULT_SPECIALS_PER_KIND: u8 = 4;
pub const MIN_SEATS: usize = 2;

// Round `r` deals `r` cards to every seat and plays `r` tricks.
pub fn hand_size_for_round(round_no: u8) -> Option<u8> {
    if round_no == 0 {
        return None;
    }
    Some(round_no)
}

/// Predictions must lie in `1..=round_no`.
pub fn valid_prediction_range(round_no: u8) -> RangeInclusive<u8> {
    1..=round_no
}

/// Number of rounds a deck can support for the given seat count.
pub fn max_rounds(deck_size: usize, seats: usize) -> u8 {
    if seats == 0 {
        return 0;
    }
    u8::try_from(deck_size / seats).unwrap_or(u8::MAX)
}
