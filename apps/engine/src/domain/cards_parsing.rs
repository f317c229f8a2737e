//! Card tokens: parsing from and rendering to compact strings (e.g., "R5", "Z1")

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, SpecialKind, Suit};
use super::rules::{DEFAULT_RANKS_PER_SUIT, DEFAULT_SPECIALS_PER_KIND};
use crate::errors::domain::DomainError;

/// Letters and ranges that make up card tokens.
///
/// A token is one letter followed by a decimal number without leading zeros:
/// suit letter + rank for ordinary cards, special letter + index for specials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAlphabet {
    /// Letters for Green, Blue, Red, Yellow (in [`Suit::ALL`] order)
    pub suit_letters: [char; 4],
    pub wizard_letter: char,
    pub jester_letter: char,
    pub ranks_per_suit: u8,
    pub specials_per_kind: u8,
}

impl CardAlphabet {
    pub const STANDARD: CardAlphabet = CardAlphabet {
        suit_letters: ['G', 'B', 'R', 'Y'],
        wizard_letter: 'Z',
        jester_letter: 'J',
        ranks_per_suit: DEFAULT_RANKS_PER_SUIT,
        specials_per_kind: DEFAULT_SPECIALS_PER_KIND,
    };

    /// Reject alphabets whose letters collide or whose ranges are empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut letters: Vec<char> = self.suit_letters.to_vec();
        letters.push(self.wizard_letter);
        letters.push(self.jester_letter);
        if letters.iter().any(|c| !c.is_alphabetic()) {
            return Err(DomainError::instance(format!(
                "card letters must be alphabetic: {letters:?}"
            )));
        }
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != letters.len() {
            return Err(DomainError::instance(format!(
                "card letters must be distinct: {letters:?}"
            )));
        }
        if self.ranks_per_suit == 0 {
            return Err(DomainError::instance("ranks_per_suit must be at least 1"));
        }
        Ok(())
    }

    pub fn suit_letter(&self, suit: Suit) -> char {
        self.suit_letters[suit.index()]
    }

    fn special_letter(&self, kind: SpecialKind) -> char {
        match kind {
            SpecialKind::Wizard => self.wizard_letter,
            SpecialKind::Jester => self.jester_letter,
        }
    }

    /// Parse a single token; `None` when it is not a card of this alphabet.
    pub fn parse_token(&self, token: &str) -> Option<Card> {
        self.parse_unbounded(token).filter(|&c| self.contains(c))
    }

    /// Parse by letters alone, accepting any rank or index from 1 to 255.
    ///
    /// Used for stored card data, where the deck size is checked later
    /// against the configured alphabet.
    pub fn parse_unbounded(&self, token: &str) -> Option<Card> {
        let mut chars = token.chars();
        let letter = chars.next()?;
        let number = parse_number(chars.as_str())?;

        if let Some(pos) = self.suit_letters.iter().position(|&c| c == letter) {
            return Some(Card::ordinary(Suit::ALL[pos], number));
        }
        let kind = if letter == self.wizard_letter {
            SpecialKind::Wizard
        } else if letter == self.jester_letter {
            SpecialKind::Jester
        } else {
            return None;
        };
        Some(Card::Special {
            kind,
            index: number,
        })
    }

    /// Whether `card` belongs to the deck this alphabet describes.
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Ordinary { rank, .. } => (1..=self.ranks_per_suit).contains(&rank),
            Card::Special { index, .. } => (1..=self.specials_per_kind).contains(&index),
        }
    }

    pub fn render(&self, card: Card) -> String {
        match card {
            Card::Ordinary { suit, rank } => format!("{}{}", self.suit_letter(suit), rank),
            Card::Special { kind, index } => format!("{}{}", self.special_letter(kind), index),
        }
    }

    /// Every card of the deck described by this alphabet, in sorted order.
    pub fn deck(&self) -> Vec<Card> {
        let mut deck = Vec::new();
        for suit in Suit::ALL {
            for rank in 1..=self.ranks_per_suit {
                deck.push(Card::ordinary(suit, rank));
            }
        }
        for index in 1..=self.specials_per_kind {
            deck.push(Card::wizard(index));
        }
        for index in 1..=self.specials_per_kind {
            deck.push(Card::jester(index));
        }
        deck
    }
}

impl Default for CardAlphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Decimal number without sign or leading zeros that fits a u8.
fn parse_number(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.starts_with('0') {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u8>().ok()
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardAlphabet::STANDARD
            .parse_token(s)
            .ok_or_else(|| DomainError::ParseCard(s.to_string()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CardAlphabet::STANDARD.render(*self))
    }
}

/// Non-panicking helper to parse card tokens (e.g., "R5", "Z1") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
