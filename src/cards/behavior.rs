//! Card behavior: what happens when a card is used.
//!
//! Concrete cards implement [`CardBehavior`] and override
//! [`use_card`](CardBehavior::use_card). The base [`Card`] implements the
//! trait with the default, so using a plain card always fails with
//! [`CardError::Unsupported`].
//!
//! The trait is generic over the party type `P` so games can pass whatever
//! represents a player (a `PlayerId`, a player state, ...).
//!
//! ## Example
//!
//! ```
//! use bang_cards::cards::{Card, CardBehavior, CardError, CardType};
//!
//! struct Life(i32);
//!
//! struct Beer(Card);
//!
//! impl CardBehavior<Life> for Beer {
//!     fn card(&self) -> &Card {
//!         &self.0
//!     }
//!
//!     fn use_card(&self, player: &mut Life, _target: Option<&mut Life>) -> Result<(), CardError> {
//!         player.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let beer = Beer(Card::new("Beer", "Heal 1 life", CardType::Effect).unwrap());
//! let mut me = Life(3);
//! beer.use_card(&mut me, None).unwrap();
//! assert_eq!(me.0, 4);
//!
//! let base = Card::new("Beer", "Heal 1 life", CardType::Effect).unwrap();
//! assert!(matches!(
//!     CardBehavior::<Life>::use_card(&base, &mut me, None),
//!     Err(CardError::Unsupported { .. })
//! ));
//! ```

use super::card::Card;
use super::error::CardError;

/// The `use` capability of a card.
pub trait CardBehavior<P> {
    /// Card data backing this behavior.
    fn card(&self) -> &Card;

    /// Use the card. `target` is `None` for self-directed effects.
    ///
    /// The default fails with [`CardError::Unsupported`] for any arguments.
    fn use_card(&self, _player: &mut P, _target: Option<&mut P>) -> Result<(), CardError> {
        let card = self.card();
        tracing::debug!(card = %card, "use invoked without an implementation");
        Err(CardError::Unsupported {
            card: card.name().to_string(),
        })
    }
}

impl<P> CardBehavior<P> for Card {
    fn card(&self) -> &Card {
        self
    }
}
