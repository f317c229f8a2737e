//! Serde for card types.
//!
//! Suits and trump travel as upper-case names (`"GREEN"`, `"NO_TRUMP"`),
//! cards as tokens in the standard letters (`"R5"`, `"Z1"`). Names are
//! matched case-insensitively on the way in.
//!
//! Stored tokens are not bounded by the standard deck size: `"G14"` reads
//! back for a 15-rank deck, and `GameInstance::validate` checks every card
//! against the configured alphabet.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_parsing::CardAlphabet;
use super::cards_types::{Card, Suit, Trump};

const SUIT_NAMES: &[&str] = &["GREEN", "BLUE", "RED", "YELLOW"];
const NO_TRUMP: &str = "NO_TRUMP";
const TRUMP_NAMES: &[&str] = &["GREEN", "BLUE", "RED", "YELLOW", NO_TRUMP];

impl Suit {
    /// Upper-case wire name.
    pub fn name(self) -> &'static str {
        SUIT_NAMES[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Suit::from_name(&name).ok_or_else(|| D::Error::unknown_variant(&name, SUIT_NAMES))
    }
}

impl Serialize for Trump {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suit().map_or(NO_TRUMP, Suit::name))
    }
}

impl<'de> Deserialize<'de> for Trump {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.eq_ignore_ascii_case(NO_TRUMP) {
            return Ok(Trump::NoTrump);
        }
        Suit::from_name(&name)
            .map(Trump::from)
            .ok_or_else(|| D::Error::unknown_variant(&name, TRUMP_NAMES))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        CardAlphabet::STANDARD
            .parse_unbounded(&token)
            .ok_or_else(|| D::Error::custom(format!("not a card token: {token:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_serializes_as_token() {
        let json = serde_json::to_string(&vec![Card::ordinary(Suit::Yellow, 11), Card::jester(2)])
            .unwrap();
        assert_eq!(json, r#"["Y11","J2"]"#);
        let back: Vec<Card> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[1], Card::jester(2));
    }

    #[test]
    fn trump_uses_suit_names_or_no_trump() {
        assert_eq!(serde_json::to_string(&Trump::Red).unwrap(), r#""RED""#);
        assert_eq!(serde_json::to_string(&Trump::NoTrump).unwrap(), r#""NO_TRUMP""#);
        let t: Trump = serde_json::from_str(r#""no_trump""#).unwrap();
        assert_eq!(t, Trump::NoTrump);
        let t: Trump = serde_json::from_str(r#""Blue""#).unwrap();
        assert_eq!(t, Trump::Blue);
    }

    #[test]
    fn unknown_names_list_the_alternatives() {
        let err = serde_json::from_str::<Suit>(r#""PURPLE""#).unwrap_err();
        assert!(err.to_string().contains("GREEN"), "{err}");
        assert!(serde_json::from_str::<Trump>(r#""NONE""#).is_err());
    }

    #[test]
    fn ranks_beyond_the_standard_deck_read_back() {
        let card: Card = serde_json::from_str(r#""G14""#).unwrap();
        assert_eq!(card, Card::ordinary(Suit::Green, 14));
        assert_eq!(serde_json::to_string(&card).unwrap(), r#""G14""#);
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["R0", "R05", "Q9", "", "5R", "JJ"] {
            let res: Result<Card, _> = serde_json::from_str(&format!("\"{tok}\""));
            assert!(res.is_err(), "{tok:?} should not parse");
        }
    }
}
