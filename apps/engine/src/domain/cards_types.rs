//! Core card-related types: Card, Suit, SpecialKind, Trump

use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Green,
    Blue,
    Red,
    Yellow,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Green, Suit::Blue, Suit::Red, Suit::Yellow];

    /// Position of the suit in [`Suit::ALL`]; used to look up configured letters.
    pub fn index(self) -> usize {
        match self {
            Suit::Green => 0,
            Suit::Blue => 1,
            Suit::Red => 2,
            Suit::Yellow => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SpecialKind {
    Wizard,
    Jester,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Green,
    Blue,
    Red,
    Yellow,
    NoTrump,
}

impl Trump {
    /// The trump suit, or `None` for a no-trump round.
    pub fn suit(self) -> Option<Suit> {
        Suit::try_from(self).ok()
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Green => Trump::Green,
            Suit::Blue => Trump::Blue,
            Suit::Red => Trump::Red,
            Suit::Yellow => Trump::Yellow,
        }
    }
}

impl From<Option<Suit>> for Trump {
    fn from(suit: Option<Suit>) -> Self {
        suit.map_or(Trump::NoTrump, Trump::from)
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Green => Ok(Suit::Green),
            Trump::Blue => Ok(Suit::Blue),
            Trump::Red => Ok(Suit::Red),
            Trump::Yellow => Ok(Suit::Yellow),
            Trump::NoTrump => Err(DomainError::invariant("cannot convert NoTrump to Suit")),
        }
    }
}

/// A single card. Ordinary cards carry suit and rank; specials carry their
/// kind and an index that only distinguishes copies and never affects power.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Ordinary { suit: Suit, rank: u8 },
    Special { kind: SpecialKind, index: u8 },
}

impl Card {
    pub const fn ordinary(suit: Suit, rank: u8) -> Self {
        Card::Ordinary { suit, rank }
    }

    pub const fn wizard(index: u8) -> Self {
        Card::Special {
            kind: SpecialKind::Wizard,
            index,
        }
    }

    pub const fn jester(index: u8) -> Self {
        Card::Special {
            kind: SpecialKind::Jester,
            index,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Card::Special { .. })
    }

    pub fn is_wizard(&self) -> bool {
        matches!(
            self,
            Card::Special {
                kind: SpecialKind::Wizard,
                ..
            }
        )
    }

    pub fn is_jester(&self) -> bool {
        matches!(
            self,
            Card::Special {
                kind: SpecialKind::Jester,
                ..
            }
        )
    }

    /// Suit of an ordinary card; specials have none.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Ordinary { suit, .. } => Some(*suit),
            Card::Special { .. } => None,
        }
    }

    /// Rank of an ordinary card; specials have none.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Card::Ordinary { rank, .. } => Some(*rank),
            Card::Special { .. } => None,
        }
    }
}

// Note: Ord on Card is only for stable sorting: ordinary cards by suit then
// rank, specials after them. Never use it to decide tricks.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (
                Card::Ordinary { suit: sa, rank: ra },
                Card::Ordinary { suit: sb, rank: rb },
            ) => sa.cmp(sb).then(ra.cmp(rb)),
            (Card::Ordinary { .. }, Card::Special { .. }) => Ordering::Less,
            (Card::Special { .. }, Card::Ordinary { .. }) => Ordering::Greater,
            (
                Card::Special { kind: ka, index: ia },
                Card::Special { kind: kb, index: ib },
            ) => ka.cmp(kb).then(ia.cmp(ib)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
