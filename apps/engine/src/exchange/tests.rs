use super::*;
use crate::agent::{AgentError, CallbackAgent, ScriptedAgent};
use crate::answer::ViolationCategory;
use crate::domain::{try_parse_cards, Card, RoundNo, SeatId, Trump};
use crate::game::events::EventLog;

fn view() -> SeatView {
    SeatView {
        seat: SeatId(1),
        seat_name: "Oz".into(),
        round_no: RoundNo(2),
        trick_no: 1,
        trump: Trump::Red,
        seat_count: 3,
        hand: try_parse_cards(["G2", "R7"]).unwrap(),
        trick: vec![(SeatId(0), "G9".parse().unwrap())],
        predictions: vec![(SeatId(0), 1), (SeatId(1), 1), (SeatId(2), 2)],
        prediction: Some(1),
        tricks_won: 0,
    }
}

fn run(
    agent: &dyn Agent,
    kind: AnswerKind,
    policy: RepromptPolicy,
    log: &mut EventLog,
) -> (ExchangeOutcome, Conversation) {
    let grammar = AnswerGrammar::default();
    let mut ctx = ExchangeContext {
        grammar: &grammar,
        prompts: &PlainPrompts,
        policy,
        sink: log,
    };
    let mut conversation = Conversation::new(SeatId(1));
    let outcome = run_exchange(&mut ctx, agent, &mut conversation, kind, &view());
    (outcome, conversation)
}

#[test]
fn valid_first_answer() {
    let agent = ScriptedAgent::new(["I PLAY: G2"]);
    let mut log = EventLog::new();
    let (outcome, conversation) = run(&agent, AnswerKind::Card, RepromptPolicy::default(), &mut log);

    assert_eq!(outcome.result, Ok(Answer::Card(Card::ordinary(crate::domain::Suit::Green, 2))));
    assert_eq!(outcome.answers, 1);
    assert_eq!(outcome.reprompts, 0);
    assert!(outcome.violations.is_empty());
    assert_eq!(outcome.transcript.len(), 2);
    assert!(conversation.is_empty());
    assert_eq!(log.len(), 2);
}

#[test]
fn suit_violation_then_recovery() {
    let agent = ScriptedAgent::new(["I PLAY: R7", "I PLAY: G2"]);
    let mut log = EventLog::new();
    let (outcome, _) = run(&agent, AnswerKind::Card, RepromptPolicy::default(), &mut log);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.answers, 2);
    assert_eq!(outcome.reprompts, 1);
    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].category(), ViolationCategory::Suit);
    // prompt, answer, correction, answer
    assert_eq!(outcome.transcript.len(), 4);
    assert_eq!(outcome.transcript[2].role, Role::Master);
    assert!(outcome.transcript[2].content.contains("does not follow suit"));
}

#[test]
fn aborts_after_third_structural_failure() {
    let agent = ScriptedAgent::new(["uh", "G2", "play G2", "I PLAY: G2"]);
    let mut log = EventLog::new();
    let policy = RepromptPolicy {
        max_attempts: 2,
        liberal: true,
    };
    let (outcome, conversation) = run(&agent, AnswerKind::Card, policy, &mut log);

    let Err(AbortReason::AttemptsExhausted { last }) = &outcome.result else {
        panic!("expected exhausted abort, got {:?}", outcome.result);
    };
    assert_eq!(last.category(), ViolationCategory::Structural);
    assert_eq!(outcome.answers, 3);
    assert_eq!(outcome.reprompts, 2);
    assert_eq!(outcome.violations.len(), 3);
    assert_eq!(agent.remaining(), 1);
    assert!(conversation.is_empty());
}

#[test]
fn strict_mode_aborts_on_first_violation() {
    let agent = ScriptedAgent::new(["PREDICTION: 5", "PREDICTION: 1"]);
    let mut log = EventLog::new();
    let policy = RepromptPolicy {
        max_attempts: 2,
        liberal: false,
    };
    let (outcome, _) = run(&agent, AnswerKind::Prediction, policy, &mut log);

    assert_eq!(
        outcome.result,
        Err(AbortReason::AttemptsExhausted {
            last: Violation::OutOfRange { value: 5, round: 2 }
        })
    );
    assert_eq!(outcome.answers, 1);
}

#[test]
fn agent_failure_aborts_without_retry() {
    let agent = CallbackAgent::new("offline", |_req: &AgentRequest<'_>| {
        Err(AgentError::Unavailable("connection refused".into()))
    });
    let mut log = EventLog::new();
    let (outcome, _) = run(&agent, AnswerKind::Prediction, RepromptPolicy::default(), &mut log);

    assert!(matches!(
        outcome.result,
        Err(AbortReason::AgentFailure { ref message }) if message.contains("connection refused")
    ));
    assert_eq!(outcome.answers, 0);
    assert!(outcome.violations.is_empty());
}

#[test]
fn correction_reaches_agent_context() {
    let agent = CallbackAgent::new("echo", |req: &AgentRequest<'_>| {
        if req.messages.len() == 1 {
            Ok("PREDICTION: 0".to_string())
        } else {
            let last = req.latest_prompt().unwrap_or_default();
            assert!(last.contains("from 1 to 2"));
            Ok(req.grammar.render_prediction(2))
        }
    });
    let mut log = EventLog::new();
    let (outcome, _) = run(&agent, AnswerKind::Prediction, RepromptPolicy::default(), &mut log);
    assert_eq!(outcome.result, Ok(Answer::Prediction(2)));
}

#[test]
fn events_follow_attempts() {
    let agent = ScriptedAgent::new(["I PLAY: Y1", "I PLAY: G2"]);
    let mut log = EventLog::new();
    run(&agent, AnswerKind::Card, RepromptPolicy::default(), &mut log);

    let attempts: Vec<u32> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::ExchangeSent { attempt, .. } => Some(*attempt),
            _ => None,
        })
        .collect();
    assert_eq!(attempts, vec![1, 2]);
    assert!(log.events().iter().any(|e| matches!(
        e,
        GameEvent::ViolationRecorded {
            violation: Violation::NotInHand { .. },
            ..
        }
    )));
}
