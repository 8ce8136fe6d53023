//! Card system: types, cards, behavior, and registry.
//!
//! ## Key Types
//!
//! - `CardType`: Closed set of card categories (attack, defense, effect)
//! - `Card`: Validated card identity plus playability
//! - `CardSpec`: Text-only card description for configuration
//! - `CardBehavior`: The `use` hook concrete cards implement
//! - `CardRegistry`: Card lookup by `CardId`
//! - `CardError`: Everything above can fail with this

pub mod behavior;
pub mod card;
pub mod card_type;
pub mod error;
pub mod registry;

pub use behavior::CardBehavior;
pub use card::{Card, CardSpec};
pub use card_type::CardType;
pub use error::CardError;
pub use registry::{CardId, CardRegistry};
