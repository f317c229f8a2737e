//! Reprompt controller: one logical "ask the agent for X" exchange.
//!
//! An exchange sends a prompt, parses and validates the answer, and on a
//! violation re-asks with a correction appended, up to the policy limit.
//! It never substitutes a made-up answer: when attempts run out the
//! exchange aborts and the caller ends the game.

pub mod conversation;
pub mod prompts;

use serde::Serialize;

use crate::agent::{Agent, AgentRequest, SeatView};
use crate::answer::{check_card, check_prediction, Answer, AnswerGrammar, AnswerKind, Violation};
use crate::game::events::{EventSink, GameEvent};
pub use conversation::{Conversation, Message, Role};
pub use prompts::{PlainPrompts, PromptSource};

/// How many corrections an exchange may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepromptPolicy {
    /// Reprompts allowed after the first answer.
    pub max_attempts: u32,
    /// Without liberal mode the first violation aborts.
    pub liberal: bool,
}

impl Default for RepromptPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            liberal: true,
        }
    }
}

impl RepromptPolicy {
    pub fn allows_retry(&self, attempts_used: u32) -> bool {
        self.liberal && attempts_used < self.max_attempts
    }
}

/// Why an exchange gave up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AbortReason {
    /// Every allowed answer violated the rules; carries the last violation.
    AttemptsExhausted { last: Violation },
    /// The agent call itself failed.
    AgentFailure { message: String },
}

/// Explicit controller states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeState {
    Awaiting,
    ParsedInvalid(Violation),
    ParsedValid(Answer),
    Aborted(AbortReason),
}

/// Result of one exchange, valid or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub kind: AnswerKind,
    pub result: Result<Answer, AbortReason>,
    /// Answers received from the agent.
    pub answers: u32,
    /// Corrections sent after the first prompt.
    pub reprompts: u32,
    pub violations: Vec<Violation>,
    /// Messages of the exchange, in order; the seat's context is empty afterwards.
    pub transcript: Vec<Message>,
}

/// Collaborators shared by every exchange of a game.
pub struct ExchangeContext<'a> {
    pub grammar: &'a AnswerGrammar,
    pub prompts: &'a dyn PromptSource,
    pub policy: RepromptPolicy,
    pub sink: &'a mut dyn EventSink,
}

/// Run one bounded exchange with `agent` for the seat described by `view`.
pub fn run_exchange(
    ctx: &mut ExchangeContext<'_>,
    agent: &dyn Agent,
    conversation: &mut Conversation,
    kind: AnswerKind,
    view: &SeatView,
) -> ExchangeOutcome {
    let round = view.round_no;
    let seat = view.seat;
    let mut attempts_used: u32 = 0;
    let mut answers: u32 = 0;
    let mut violations = Vec::new();

    conversation.push(Message::master(ctx.prompts.prompt(kind, view, ctx.grammar)));
    let mut state = ExchangeState::Awaiting;

    loop {
        state = match state {
            ExchangeState::Awaiting => {
                let attempt = attempts_used + 1;
                ctx.sink.emit(&GameEvent::ExchangeSent {
                    round,
                    seat,
                    kind,
                    attempt,
                });
                let request = AgentRequest {
                    kind,
                    messages: conversation.messages(),
                    view,
                    grammar: ctx.grammar,
                };
                match agent.ask(&request) {
                    Ok(text) => {
                        answers += 1;
                        ctx.sink.emit(&GameEvent::ExchangeAnswered {
                            round,
                            seat,
                            kind,
                            attempt,
                            answer: text.clone(),
                        });
                        let checked = check_answer(ctx.grammar, kind, &text, view);
                        conversation.push(Message::agent(text));
                        match checked {
                            Ok(answer) => ExchangeState::ParsedValid(answer),
                            Err(violation) => ExchangeState::ParsedInvalid(violation),
                        }
                    }
                    Err(err) => ExchangeState::Aborted(AbortReason::AgentFailure {
                        message: err.to_string(),
                    }),
                }
            }
            ExchangeState::ParsedInvalid(violation) => {
                let attempt = attempts_used + 1;
                ctx.sink.emit(&GameEvent::ViolationRecorded {
                    round,
                    seat,
                    attempt,
                    violation: violation.clone(),
                });
                violations.push(violation.clone());
                if ctx.policy.allows_retry(attempts_used) {
                    attempts_used += 1;
                    let correction = ctx.prompts.correction(&violation, view, ctx.grammar);
                    conversation.push(Message::master(correction));
                    ExchangeState::Awaiting
                } else {
                    ExchangeState::Aborted(AbortReason::AttemptsExhausted { last: violation })
                }
            }
            ExchangeState::ParsedValid(answer) => {
                return ExchangeOutcome {
                    kind,
                    result: Ok(answer),
                    answers,
                    reprompts: attempts_used,
                    violations,
                    transcript: conversation.finish(),
                };
            }
            ExchangeState::Aborted(reason) => {
                return ExchangeOutcome {
                    kind,
                    result: Err(reason),
                    answers,
                    reprompts: attempts_used,
                    violations,
                    transcript: conversation.finish(),
                };
            }
        };
    }
}

fn check_answer(
    grammar: &AnswerGrammar,
    kind: AnswerKind,
    text: &str,
    view: &SeatView,
) -> Result<Answer, Violation> {
    match kind {
        AnswerKind::Prediction => {
            check_prediction(grammar, text, view.round_no.get()).map(Answer::Prediction)
        }
        AnswerKind::Card => {
            check_card(grammar, text, &view.hand, &view.trick_cards()).map(Answer::Card)
        }
    }
}

#[cfg(test)]
mod tests;
