//! Seats and play order rotation.
//!
//! Play order only ever changes by rotation: each trick is led by the winner
//! of the previous one, and each round starts one seat further along than the
//! round before it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Position of a seat in the initial seating (0-based).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u8);

impl SeatId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based round number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundNo(pub u8);

impl RoundNo {
    pub const FIRST: RoundNo = RoundNo(1);

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RoundNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered seats for one trick or one round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeatId>", into = "Vec<SeatId>")]
pub struct PlayOrder(Vec<SeatId>);

impl TryFrom<Vec<SeatId>> for PlayOrder {
    type Error = DomainError;

    fn try_from(seats: Vec<SeatId>) -> Result<Self, Self::Error> {
        Self::new(seats)
    }
}

impl From<PlayOrder> for Vec<SeatId> {
    fn from(order: PlayOrder) -> Self {
        order.0
    }
}

impl PlayOrder {
    /// Build an order; every seat must appear at most once.
    pub fn new(seats: Vec<SeatId>) -> Result<Self, DomainError> {
        let mut sorted = seats.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != seats.len() {
            return Err(DomainError::instance(format!(
                "play order repeats a seat: {seats:?}"
            )));
        }
        Ok(Self(seats))
    }

    /// Seats `0..n` in index order.
    pub fn sequential(n: u8) -> Self {
        Self((0..n).map(SeatId).collect())
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<SeatId> {
        self.0.first().copied()
    }

    pub fn position(&self, seat: SeatId) -> Option<usize> {
        self.0.iter().position(|&s| s == seat)
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.position(seat).is_some()
    }

    fn rotated_left(&self, by: usize) -> Self {
        let mut seats = self.0.clone();
        let n = seats.len();
        if n > 0 {
            seats.rotate_left(by % n);
        }
        Self(seats)
    }
}

impl<'a> IntoIterator for &'a PlayOrder {
    type Item = &'a SeatId;
    type IntoIter = std::slice::Iter<'a, SeatId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Order for the next trick: the winner leads, the cyclic sequence is kept.
pub fn next_trick_order(order: &PlayOrder, winner: SeatId) -> Result<PlayOrder, DomainError> {
    let idx = order
        .position(winner)
        .ok_or(DomainError::UnknownSeat(winner))?;
    Ok(order.rotated_left(idx))
}

/// Starting order for the next round: rotate the previous round's starting
/// order left by one seat, regardless of who won tricks.
pub fn next_round_order(order: &PlayOrder) -> PlayOrder {
    order.rotated_left(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: SeatId = SeatId(0);
    const B: SeatId = SeatId(1);
    const C: SeatId = SeatId(2);

    fn abc() -> PlayOrder {
        PlayOrder::new(vec![A, B, C]).unwrap()
    }

    #[test]
    fn trick_order_rotates_to_winner() {
        let next = next_trick_order(&abc(), B).unwrap();
        assert_eq!(next.seats(), &[B, C, A]);
        let same = next_trick_order(&abc(), A).unwrap();
        assert_eq!(same, abc());
    }

    #[test]
    fn trick_order_rejects_unknown_winner() {
        let err = next_trick_order(&abc(), SeatId(9)).unwrap_err();
        assert_eq!(err, DomainError::UnknownSeat(SeatId(9)));
    }

    #[test]
    fn round_order_rotates_by_one() {
        let next = next_round_order(&abc());
        assert_eq!(next.seats(), &[B, C, A]);
        let wrapped = next_round_order(&next_round_order(&next));
        assert_eq!(wrapped, abc());
    }

    #[test]
    fn rotation_wraps_past_the_end() {
        assert_eq!(abc().rotated_left(4).seats(), &[B, C, A]);
        assert_eq!(abc().rotated_left(3), abc());
        let lone = PlayOrder::sequential(1);
        assert_eq!(next_round_order(&lone), lone);
        let empty = PlayOrder::sequential(0);
        assert!(next_round_order(&empty).is_empty());
    }

    #[test]
    fn play_order_rejects_duplicates() {
        assert!(PlayOrder::new(vec![A, B, A]).is_err());
        assert_eq!(PlayOrder::sequential(3), abc());
        assert!(serde_json::from_str::<PlayOrder>("[0, 1, 0]").is_err());
        let order: PlayOrder = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(order.seats(), &[C, A, B]);
    }
}
