//! Card categories.
//!
//! The set is closed: every card is an attack, a defense or an effect.
//! Text is converted with `FromStr`, which is the only place an unknown
//! category can be rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CardError;

/// Category of a card's general effect family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Offensive cards ("Bang!").
    Attack,
    /// Cards played in response to an attack ("Missed!").
    Defense,
    /// Everything else ("Beer").
    Effect,
}

impl CardType {
    /// All card types, in declaration order.
    pub const ALL: [CardType; 3] = [CardType::Attack, CardType::Defense, CardType::Effect];

    /// Lowercase textual form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Attack => "attack",
            CardType::Defense => "defense",
            CardType::Effect => "effect",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = CardError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(CardType::Attack),
            "defense" => Ok(CardType::Defense),
            "effect" => Ok(CardType::Effect),
            other => Err(CardError::InvalidCardType(other.to_string())),
        }
    }
}
