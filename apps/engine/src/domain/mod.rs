//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod state;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_state;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit, suit_to_follow};
pub use cards_parsing::{try_parse_cards, CardAlphabet};
pub use cards_types::{Card, SpecialKind, Suit, Trump};
pub use rules::{hand_size_for_round, valid_prediction_range};
pub use scoring::round_points;
pub use seating::{next_round_order, next_trick_order, PlayOrder, RoundNo, SeatId};
pub use state::{GameState, Phase, RoundRecord, SeatRoundRecord};
pub use tricks::{evaluate_trick, CompletedTrick, Trick};
