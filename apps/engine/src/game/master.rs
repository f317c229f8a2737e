//! Round/game state machine.
//!
//! `RoundStart -> Predicting -> TrickPlaying -> RoundEnd`, once per round,
//! ending in `GameComplete` or `Aborted`. The master is the only writer of
//! [`GameState`]; everything it calls returns values.

use crate::agent::{Agent, SeatView};
use crate::answer::{Answer, AnswerGrammar, AnswerKind};
use crate::config::EngineConfig;
use crate::domain::{next_round_order, GameState, RoundNo, SeatId};
use crate::errors::domain::DomainError;
use crate::exchange::{
    run_exchange, AbortReason, Conversation, ExchangeContext, PlainPrompts, PromptSource,
    RepromptPolicy,
};
use crate::game::events::{EventSink, GameEvent};
use crate::game::instance::GameInstance;
use crate::game::outcome::{ErrorStats, GameOutcome, GameStatus};

pub struct GameMaster {
    instance: GameInstance,
    /// Indexed by seat.
    agents: Vec<Box<dyn Agent>>,
    prompts: Box<dyn PromptSource>,
    grammar: AnswerGrammar,
    policy: RepromptPolicy,
}

/// Per-play mutable bookkeeping.
struct Session<'s> {
    state: GameState,
    conversations: Vec<Conversation>,
    stats: ErrorStats,
    sink: &'s mut dyn EventSink,
}

impl GameMaster {
    /// Validate the instance against the configured alphabet and bind one
    /// agent per seat.
    pub fn new(
        instance: GameInstance,
        agents: Vec<Box<dyn Agent>>,
        config: &EngineConfig,
    ) -> Result<Self, DomainError> {
        let grammar = AnswerGrammar::new(config.alphabet.clone())?;
        instance.validate(grammar.alphabet())?;
        if agents.len() != instance.seat_count() {
            return Err(DomainError::instance(format!(
                "{} agents for {} seats",
                agents.len(),
                instance.seat_count()
            )));
        }
        Ok(Self {
            instance,
            agents,
            prompts: Box::new(PlainPrompts),
            grammar,
            policy: config.reprompt_policy(),
        })
    }

    pub fn with_prompts(mut self, prompts: Box<dyn PromptSource>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn instance(&self) -> &GameInstance {
        &self.instance
    }

    /// Play every round, or stop at the first aborted exchange.
    ///
    /// `Err` means the instance or an engine invariant is broken; an agent
    /// that fails its exchange yields `Ok` with [`GameStatus::Aborted`].
    pub fn play(&self, sink: &mut dyn EventSink) -> Result<GameOutcome, DomainError> {
        let conversations = (0..self.instance.seat_count())
            .map(|i| u8::try_from(i).map(|s| Conversation::new(SeatId(s))))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DomainError::instance("too many seats"))?;
        let mut session = Session {
            state: GameState::new(self.instance.seating.clone()),
            conversations,
            stats: ErrorStats::default(),
            sink,
        };

        let mut starting_order = self.instance.seating.clone();
        for (idx, deal) in self.instance.rounds.iter().enumerate() {
            let round_no = RoundNo(
                u8::try_from(idx + 1).map_err(|_| DomainError::instance("too many rounds"))?,
            );
            if idx > 0 {
                starting_order = next_round_order(&starting_order);
            }

            // RoundStart
            let trump = deal.trump();
            session.state.begin_round(
                round_no,
                trump,
                starting_order.clone(),
                deal.hands.clone(),
            )?;
            session.stats.last_round = round_no.get();
            session.sink.emit(&GameEvent::RoundStarted {
                round: round_no,
                trump,
                order: starting_order.clone(),
            });

            // Predicting
            for &seat in starting_order.seats() {
                match self.exchange(&mut session, seat, AnswerKind::Prediction)? {
                    Ok(Answer::Prediction(value)) => session.state.record_prediction(seat, value)?,
                    Ok(Answer::Card(_)) => {
                        return Err(DomainError::invariant("card answer to prediction exchange"))
                    }
                    Err(reason) => {
                        return Ok(self.abort(session, seat, AnswerKind::Prediction, reason))
                    }
                }
            }

            // TrickPlaying
            session.state.begin_tricks()?;
            while let Some(seat) = session.state.expected_player() {
                let trick_no = session.state.trick_no();
                let card = match self.exchange(&mut session, seat, AnswerKind::Card)? {
                    Ok(Answer::Card(card)) => card,
                    Ok(Answer::Prediction(_)) => {
                        return Err(DomainError::invariant("prediction answer to card exchange"))
                    }
                    Err(reason) => return Ok(self.abort(session, seat, AnswerKind::Card, reason)),
                };
                let played = session.state.play_card(seat, card)?;
                if let Some(trick) = played.completed {
                    session.sink.emit(&GameEvent::TrickDecided {
                        round: round_no,
                        trick_no,
                        winner: trick.winner,
                        card: trick.winning_card,
                    });
                }
            }

            // RoundEnd
            let seats = session.state.score_round()?.seats.clone();
            session.sink.emit(&GameEvent::RoundScored {
                round: round_no,
                seats,
            });
        }

        session.state.complete();
        let outcome = self.outcome(&session, GameStatus::Completed);
        session.sink.emit(&GameEvent::GameCompleted {
            rounds: session.state.round_no().get(),
            totals: outcome.totals(),
        });
        Ok(outcome)
    }

    /// Run one exchange for `seat`; the inner `Err` is an abort.
    fn exchange(
        &self,
        session: &mut Session<'_>,
        seat: SeatId,
        kind: AnswerKind,
    ) -> Result<Result<Answer, AbortReason>, DomainError> {
        let view = SeatView::capture(&session.state, seat, self.instance.seat_name(seat))?;
        let agent = self
            .agents
            .get(seat.index())
            .ok_or(DomainError::UnknownSeat(seat))?;
        let conversation = session
            .conversations
            .get_mut(seat.index())
            .ok_or(DomainError::UnknownSeat(seat))?;
        let mut ctx = ExchangeContext {
            grammar: &self.grammar,
            prompts: self.prompts.as_ref(),
            policy: self.policy,
            sink: &mut *session.sink,
        };
        let outcome = run_exchange(&mut ctx, agent.as_ref(), conversation, kind, &view);
        session.stats.absorb(&outcome);
        Ok(outcome.result)
    }

    fn abort(
        &self,
        mut session: Session<'_>,
        seat: SeatId,
        kind: AnswerKind,
        reason: AbortReason,
    ) -> GameOutcome {
        session.state.abort();
        let round = session.state.round_no();
        session.sink.emit(&GameEvent::GameAborted {
            round,
            seat,
            reason: reason.clone(),
        });
        self.outcome(
            &session,
            GameStatus::Aborted {
                round,
                seat,
                kind,
                reason,
            },
        )
    }

    fn outcome(&self, session: &Session<'_>, status: GameStatus) -> GameOutcome {
        GameOutcome {
            status,
            seat_names: self.instance.seat_names.clone(),
            rounds: session.state.rounds().to_vec(),
            stats: session.stats.clone(),
        }
    }
}
