use serde::Serialize;

use crate::domain::rules::valid_prediction_range;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::seating::{next_trick_order, PlayOrder, RoundNo, SeatId};
use crate::domain::tricks::{CompletedTrick, Trick};
use crate::domain::{Card, Trump};
use crate::errors::domain::DomainError;

/// Game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Trump and starting order are being established.
    RoundStart,
    /// Seats predict in the round's starting order.
    Predicting,
    /// Playing tricks within the round; `trick_no` is 1-based.
    TrickPlaying { trick_no: u8 },
    /// All tricks played; points are tallied.
    RoundEnd,
    /// All rounds complete.
    GameComplete,
    /// An exchange was aborted; no further rounds are played.
    Aborted,
}

/// One seat's line in a round record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatRoundRecord {
    pub prediction: Option<u8>,
    pub tricks_won: u8,
    pub points: Option<i32>,
}

/// Everything recorded about one round, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round_no: RoundNo,
    pub trump: Trump,
    pub starting_order: PlayOrder,
    /// Indexed by [`SeatId::index`].
    pub seats: Vec<SeatRoundRecord>,
    pub tricks: Vec<CompletedTrick>,
}

impl RoundRecord {
    pub fn new(round_no: RoundNo, trump: Trump, starting_order: PlayOrder) -> Self {
        let seats = vec![SeatRoundRecord::default(); starting_order.len()];
        Self {
            round_no,
            trump,
            starting_order,
            seats,
            tricks: Vec::new(),
        }
    }

    pub fn seat(&self, seat: SeatId) -> Result<&SeatRoundRecord, DomainError> {
        self.seats
            .get(seat.index())
            .ok_or(DomainError::UnknownSeat(seat))
    }

    fn seat_mut(&mut self, seat: SeatId) -> Result<&mut SeatRoundRecord, DomainError> {
        self.seats
            .get_mut(seat.index())
            .ok_or(DomainError::UnknownSeat(seat))
    }

    /// Predictions made so far, in the round's starting order.
    pub fn predictions(&self) -> Vec<(SeatId, u8)> {
        self.starting_order
            .seats()
            .iter()
            .filter_map(|&s| {
                self.seats
                    .get(s.index())
                    .and_then(|r| r.prediction)
                    .map(|p| (s, p))
            })
            .collect()
    }

    pub fn total_tricks(&self) -> u32 {
        self.seats.iter().map(|s| u32::from(s.tricks_won)).sum()
    }

    /// Whether points have been assigned to every seat.
    pub fn is_scored(&self) -> bool {
        self.seats.iter().all(|s| s.points.is_some())
    }
}

/// Outcome of a single card being placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The trick this play completed, if any.
    pub completed: Option<CompletedTrick>,
    /// Whether this play ended the last trick of the round.
    pub round_finished: bool,
}

/// Entire in-memory game container.
///
/// Fields are private: only the crate's game master drives mutation.
#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    round_no: RoundNo,
    trick_no: u8,
    seat_count: usize,
    /// Current trick order (the round's starting order for trick 1).
    order: PlayOrder,
    /// Remaining cards, indexed by seat.
    hands: Vec<Vec<Card>>,
    trick: Trick,
    rounds: Vec<RoundRecord>,
    aborted: bool,
}

impl GameState {
    pub fn new(starting_order: PlayOrder) -> Self {
        let seat_count = starting_order.len();
        Self {
            phase: Phase::RoundStart,
            round_no: RoundNo::FIRST,
            trick_no: 0,
            seat_count,
            order: starting_order,
            hands: vec![Vec::new(); seat_count],
            trick: Trick::new(seat_count),
            rounds: Vec::new(),
            aborted: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_no(&self) -> RoundNo {
        self.round_no
    }

    pub fn trick_no(&self) -> u8 {
        self.trick_no
    }

    pub fn order(&self) -> &PlayOrder {
        &self.order
    }

    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    pub fn hand(&self, seat: SeatId) -> Result<&[Card], DomainError> {
        self.hands
            .get(seat.index())
            .map(Vec::as_slice)
            .ok_or(DomainError::UnknownSeat(seat))
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn current_round(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn require_current_round(&self, ctx: &'static str) -> Result<&RoundRecord, DomainError> {
        self.current_round().ok_or_else(|| {
            DomainError::invariant(format!("current round must be set ({ctx})"))
        })
    }

    fn require_current_round_mut(
        &mut self,
        ctx: &'static str,
    ) -> Result<&mut RoundRecord, DomainError> {
        self.rounds.last_mut().ok_or_else(|| {
            DomainError::invariant(format!("current round must be set ({ctx})"))
        })
    }

    /// Seat expected to act next in the current trick.
    pub fn expected_player(&self) -> Option<SeatId> {
        let Phase::TrickPlaying { .. } = self.phase else {
            return None;
        };
        self.order.seats().get(self.trick.plays().len()).copied()
    }

    /// Enter a round with freshly dealt hands (indexed by seat).
    pub(crate) fn begin_round(
        &mut self,
        round_no: RoundNo,
        trump: Trump,
        starting_order: PlayOrder,
        hands: Vec<Vec<Card>>,
    ) -> Result<(), DomainError> {
        if !matches!(self.phase, Phase::RoundStart | Phase::RoundEnd) {
            return Err(DomainError::PhaseMismatch("begin_round"));
        }
        if hands.len() != self.seat_count || starting_order.len() != self.seat_count {
            return Err(DomainError::invariant(format!(
                "round {round_no} expects {} seats",
                self.seat_count
            )));
        }
        self.round_no = round_no;
        self.trick_no = 0;
        self.hands = hands;
        self.trick = Trick::new(self.seat_count);
        self.order = starting_order.clone();
        self.rounds
            .push(RoundRecord::new(round_no, trump, starting_order));
        self.phase = Phase::Predicting;
        Ok(())
    }

    pub(crate) fn record_prediction(&mut self, seat: SeatId, value: u8) -> Result<(), DomainError> {
        if self.phase != Phase::Predicting {
            return Err(DomainError::PhaseMismatch("record_prediction"));
        }
        let round = self.round_no.get();
        if !valid_prediction_range(round).contains(&value) {
            return Err(DomainError::invariant(format!(
                "prediction {value} outside 1..={round}"
            )));
        }
        let record = self.require_current_round_mut("record_prediction")?;
        let line = record.seat_mut(seat)?;
        if line.prediction.is_some() {
            return Err(DomainError::PredictionAlreadySet(seat));
        }
        line.prediction = Some(value);
        Ok(())
    }

    /// Leave the prediction phase; every seat must have predicted.
    pub(crate) fn begin_tricks(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Predicting {
            return Err(DomainError::PhaseMismatch("begin_tricks"));
        }
        let record = self.require_current_round("begin_tricks")?;
        if record.seats.iter().any(|s| s.prediction.is_none()) {
            return Err(DomainError::invariant("trick play before all predictions"));
        }
        self.trick_no = 1;
        self.phase = Phase::TrickPlaying { trick_no: 1 };
        Ok(())
    }

    /// Move a card from the seat's hand into the current trick.
    ///
    /// Completing a trick credits its winner and rotates the order so the
    /// winner leads next; completing the last trick moves to `RoundEnd`.
    pub(crate) fn play_card(
        &mut self,
        seat: SeatId,
        card: Card,
    ) -> Result<PlayCardResult, DomainError> {
        let Phase::TrickPlaying { trick_no } = self.phase else {
            return Err(DomainError::PhaseMismatch("play_card"));
        };
        if self.expected_player() != Some(seat) {
            return Err(DomainError::invariant(format!(
                "seat {seat} played out of turn"
            )));
        }
        let hand = self
            .hands
            .get_mut(seat.index())
            .ok_or(DomainError::UnknownSeat(seat))?;
        let pos = hand
            .iter()
            .position(|&c| c == card)
            .ok_or(DomainError::CardNotInHand { seat, card })?;
        hand.remove(pos);
        self.trick.push(seat, card)?;

        if !self.trick.is_complete() {
            return Ok(PlayCardResult {
                completed: None,
                round_finished: false,
            });
        }

        let trick = std::mem::replace(&mut self.trick, Trick::new(self.seat_count));
        let record = self.require_current_round_mut("play_card")?;
        let completed = trick.resolve(record.trump)?;
        let line = record.seat_mut(completed.winner)?;
        line.tricks_won = line.tricks_won.saturating_add(1);
        record.tricks.push(completed.clone());

        let round_finished = trick_no >= self.round_no.get();
        if round_finished {
            self.phase = Phase::RoundEnd;
        } else {
            self.order = next_trick_order(&self.order, completed.winner)?;
            self.trick_no = trick_no + 1;
            self.phase = Phase::TrickPlaying {
                trick_no: self.trick_no,
            };
        }
        Ok(PlayCardResult {
            completed: Some(completed),
            round_finished,
        })
    }

    /// Assign points for the finished round.
    pub(crate) fn score_round(&mut self) -> Result<&RoundRecord, DomainError> {
        if self.phase != Phase::RoundEnd {
            return Err(DomainError::PhaseMismatch("score_round"));
        }
        let round = self.round_no.get();
        let record = self.require_current_round_mut("score_round")?;
        if record.total_tricks() != u32::from(round) {
            return Err(DomainError::invariant(format!(
                "round {round} credited {} tricks",
                record.total_tricks()
            )));
        }
        apply_round_scoring(record);
        Ok(&*record)
    }

    pub(crate) fn complete(&mut self) {
        self.phase = Phase::GameComplete;
    }

    /// Stop the game; the unfinished round stays in history without points.
    pub(crate) fn abort(&mut self) {
        self.aborted = true;
        self.phase = Phase::Aborted;
    }
}
