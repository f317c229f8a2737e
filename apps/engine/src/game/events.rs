//! Discrete game events and where they go.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::answer::{AnswerKind, Violation};
use crate::domain::{Card, CardAlphabet, PlayOrder, RoundNo, SeatId, SeatRoundRecord, Trump};
use crate::exchange::AbortReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        round: RoundNo,
        trump: Trump,
        order: PlayOrder,
    },
    ExchangeSent {
        round: RoundNo,
        seat: SeatId,
        kind: AnswerKind,
        attempt: u32,
    },
    ExchangeAnswered {
        round: RoundNo,
        seat: SeatId,
        kind: AnswerKind,
        attempt: u32,
        answer: String,
    },
    ViolationRecorded {
        round: RoundNo,
        seat: SeatId,
        attempt: u32,
        violation: Violation,
    },
    TrickDecided {
        round: RoundNo,
        trick_no: u8,
        winner: SeatId,
        card: Card,
    },
    RoundScored {
        round: RoundNo,
        seats: Vec<SeatRoundRecord>,
    },
    GameAborted {
        round: RoundNo,
        seat: SeatId,
        reason: AbortReason,
    },
    GameCompleted {
        rounds: u8,
        totals: Vec<i32>,
    },
}

/// Receives every event in the order it happens.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Forwards events to `tracing`, writing cards in the agents' letters.
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    alphabet: CardAlphabet,
}

impl TracingSink {
    pub fn new(alphabet: CardAlphabet) -> Self {
        Self { alphabet }
    }
}

impl EventSink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round, trump, .. } => {
                info!(round = round.get(), trump = ?trump, "round started");
            }
            GameEvent::ExchangeSent {
                round,
                seat,
                kind,
                attempt,
            } => {
                debug!(round = round.get(), seat = seat.0, kind = ?kind, attempt, "exchange sent");
            }
            GameEvent::ExchangeAnswered {
                round,
                seat,
                kind,
                attempt,
                answer,
            } => {
                debug!(
                    round = round.get(),
                    seat = seat.0,
                    kind = ?kind,
                    attempt,
                    answer = %answer,
                    "exchange answered"
                );
            }
            GameEvent::ViolationRecorded {
                round,
                seat,
                attempt,
                violation,
            } => {
                warn!(
                    round = round.get(),
                    seat = seat.0,
                    attempt,
                    kind = ?violation.category(),
                    error = %violation.describe(&self.alphabet),
                    "violation recorded"
                );
            }
            GameEvent::TrickDecided {
                round,
                trick_no,
                winner,
                card,
            } => {
                debug!(
                    round = round.get(),
                    trick_no,
                    winner = winner.0,
                    card = %self.alphabet.render(*card),
                    "trick decided"
                );
            }
            GameEvent::RoundScored { round, seats } => {
                let points: Vec<Option<i32>> = seats.iter().map(|s| s.points).collect();
                info!(round = round.get(), points = ?points, "round scored");
            }
            GameEvent::GameAborted {
                round,
                seat,
                reason,
            } => {
                warn!(round = round.get(), seat = seat.0, reason = ?reason, "game aborted");
            }
            GameEvent::GameCompleted { rounds, totals } => {
                info!(rounds, totals = ?totals, "game completed");
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Sends each event to two sinks.
pub struct Tee<'a, A: EventSink, B: EventSink>(pub &'a mut A, pub &'a mut B);

impl<A: EventSink, B: EventSink> EventSink for Tee<'_, A, B> {
    fn emit(&mut self, event: &GameEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}
