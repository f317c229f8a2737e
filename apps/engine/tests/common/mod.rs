#![allow(dead_code)]

use apprentice_engine::agent::ScriptedAgent;
use apprentice_engine::domain::{try_parse_cards, Card, PlayOrder};
use apprentice_engine::{Agent, GameInstance, RoundDeal};

pub const SEAT_NAMES: [&str; 3] = ["Gandalf", "Oz", "Merlin"];

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn deal(trump: Option<&str>, hands: &[&[&str]]) -> RoundDeal {
    RoundDeal {
        trump_card: trump.map(|t| t.parse().expect("hardcoded valid trump card")),
        hands: hands.iter().map(|h| cards(h)).collect(),
    }
}

/// Three seats, two rounds.
///
/// Round 1 (trump Blue): Gandalf G5, Oz Z1, Merlin J3.
/// Round 2 (trump Red):  Gandalf G9 R2, Oz G3 Y13, Merlin G12 J1.
pub fn two_round_instance() -> GameInstance {
    GameInstance {
        seat_names: SEAT_NAMES.iter().map(|s| s.to_string()).collect(),
        seating: PlayOrder::sequential(3),
        rounds: vec![
            deal(Some("B7"), &[&["G5"], &["Z1"], &["J3"]]),
            deal(Some("R1"), &[&["G9", "R2"], &["G3", "Y13"], &["G12", "J1"]]),
        ],
    }
}

pub fn scripted(scripts: [Vec<String>; 3]) -> Vec<Box<dyn Agent>> {
    scripts
        .into_iter()
        .map(|s| Box::new(ScriptedAgent::new(s)) as Box<dyn Agent>)
        .collect()
}
