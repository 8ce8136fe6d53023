//! # bang-cards
//!
//! Validated playing cards for card-game simulations.
//!
//! A [`Card`] is a name, a description and a [`CardType`] (attack,
//! defense or effect), plus a playability flag. Construction validates
//! the fields once; identity cannot change afterwards.
//!
//! What a card *does* is supplied by implementing [`CardBehavior`]. A
//! plain `Card` has no behavior: using it returns
//! [`CardError::Unsupported`].
//!
//! ## Modules
//!
//! - `core`: Player identifiers
//! - `cards`: Card types, cards, behavior, registry, errors
//! - `logging`: Tracing subscriber setup
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use bang_cards::{Card, CardError};
//!
//! let bang = Card::parse("Bang!", "Deal 1 damage", "attack").unwrap();
//! assert_eq!(bang.to_string(), "Bang! (attack)");
//!
//! let beer = Card::parse("Beer", "Heal 1 life", "heal");
//! assert_eq!(beer, Err(CardError::InvalidCardType("heal".into())));
//! ```

pub mod core;
pub mod cards;
pub mod logging;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::PlayerId;

pub use crate::cards::{
    Card, CardBehavior, CardError, CardId, CardRegistry, CardSpec, CardType,
};
