//! The base card.
//!
//! `Card` holds a card's identity (name, description, category) and
//! whether it can currently be played. Identity is validated once at
//! construction and cannot change afterwards; only playability is mutable.
//!
//! Behavior lives in [`CardBehavior`](super::behavior::CardBehavior), not here.

use serde::{Deserialize, Serialize};

use super::card_type::CardType;
use super::error::CardError;

/// Untyped card description, as read from configuration.
///
/// All three fields are plain text. Converting into a [`Card`] validates
/// them.
///
/// ```
/// use bang_cards::cards::{Card, CardSpec};
///
/// let spec = CardSpec::new("Missed!", "Cancel a Bang!", "defense");
/// let card = Card::try_from(spec).unwrap();
/// assert_eq!(card.to_string(), "Missed! (defense)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSpec {
    pub name: String,
    pub description: String,
    pub card_type: String,
}

impl CardSpec {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        card_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            card_type: card_type.into(),
        }
    }
}

/// A validated playing card.
///
/// ## Example
///
/// ```
/// use bang_cards::cards::{Card, CardType};
///
/// let bang = Card::new("Bang!", "Deal 1 damage", CardType::Attack).unwrap();
/// assert!(bang.is_playable());
/// assert_eq!(bang.to_string(), "Bang! (attack)");
///
/// assert!(Card::new("   ", "x", CardType::Attack).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    name: String,
    description: String,
    card_type: CardType,
    is_playable: bool,
}

impl Card {
    /// Create a card from typed arguments.
    ///
    /// Fails with [`CardError::InvalidName`] if `name` is empty or
    /// whitespace-only. Fields are stored verbatim.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        card_type: CardType,
    ) -> Result<Self, CardError> {
        let name = validate_name(name.into())?;
        Ok(Self::from_parts(name, description.into(), card_type))
    }

    /// Create a card from text arguments, parsing the card type.
    ///
    /// The name is checked before the type.
    pub fn parse(
        name: impl Into<String>,
        description: impl Into<String>,
        card_type: &str,
    ) -> Result<Self, CardError> {
        let name = validate_name(name.into())?;
        let card_type = card_type.parse::<CardType>().inspect_err(|_| {
            tracing::debug!(name = %name, card_type, "rejected card with unknown type");
        })?;

        Ok(Self::from_parts(name, description.into(), card_type))
    }

    fn from_parts(name: String, description: String, card_type: CardType) -> Self {
        Self {
            name,
            description,
            card_type,
            is_playable: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Can this card currently be played? True at construction.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.is_playable
    }

    pub fn set_playable(&mut self, playable: bool) {
        self.is_playable = playable;
    }
}

/// Names must contain something other than whitespace.
fn validate_name(name: String) -> Result<String, CardError> {
    if name.trim().is_empty() {
        tracing::debug!(name = %name, "rejected card with blank name");
        return Err(CardError::InvalidName);
    }
    Ok(name)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.card_type)
    }
}

impl TryFrom<CardSpec> for Card {
    type Error = CardError;

    fn try_from(spec: CardSpec) -> Result<Self, Self::Error> {
        Card::parse(spec.name, spec.description, &spec.card_type)
    }
}

/// Serialized form of a card. Decoding goes through validation again.
#[derive(Deserialize)]
struct CardRecord {
    name: String,
    description: String,
    card_type: CardType,
    #[serde(default = "playable_by_default")]
    is_playable: bool,
}

fn playable_by_default() -> bool {
    true
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let mut card = Card::new(record.name, record.description, record.card_type)?;
        card.is_playable = record.is_playable;
        Ok(card)
    }
}
