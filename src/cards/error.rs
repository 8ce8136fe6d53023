//! Card errors.

use thiserror::Error;

use super::registry::CardId;

/// Errors raised by card construction, behavior and the registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    /// Name was empty or whitespace-only.
    #[error("card name must be a non-empty string")]
    InvalidName,

    /// Description was not text.
    #[error("card description must be a string")]
    InvalidDescription,

    /// Card type outside {attack, defense, effect}.
    #[error("invalid card type: {0}")]
    InvalidCardType(String),

    /// `use` was invoked on a card that does not implement it.
    #[error("`use` is not implemented for card {card}")]
    Unsupported { card: String },

    #[error("card id {0} already registered")]
    DuplicateId(CardId),

    /// Every card id is taken.
    #[error("no free card ids left")]
    IdsExhausted,

    #[error("card codec error: {0}")]
    Codec(String),
}

impl CardError {
    /// True for the validation failures raised at construction time.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CardError::InvalidName | CardError::InvalidDescription | CardError::InvalidCardType(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_grouping() {
        assert!(CardError::InvalidName.is_invalid_argument());
        assert!(CardError::InvalidDescription.is_invalid_argument());
        assert!(CardError::InvalidCardType("heal".into()).is_invalid_argument());

        let unsupported = CardError::Unsupported { card: "Bang!".into() };
        assert!(!unsupported.is_invalid_argument());
        assert!(!CardError::DuplicateId(CardId::new(1)).is_invalid_argument());
        assert!(!CardError::IdsExhausted.is_invalid_argument());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CardError::InvalidCardType("heal".into()).to_string(),
            "invalid card type: heal"
        );
        assert_eq!(
            CardError::DuplicateId(CardId::new(3)).to_string(),
            "card id Card(3) already registered"
        );
        assert_eq!(
            CardError::Unsupported { card: "Beer".into() }.to_string(),
            "`use` is not implemented for card Beer"
        );
    }
}
