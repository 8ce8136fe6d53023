//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores the validated cards of a game, keyed by
//! `CardId`. It can be built incrementally, loaded from a list of
//! [`CardSpec`]s, and snapshotted to bytes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardSpec};
use super::card_type::CardType;
use super::error::CardError;

/// Identifier of a card within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Registry of validated cards.
///
/// ## Example
///
/// ```
/// use bang_cards::cards::{CardRegistry, CardSpec, CardType};
///
/// let registry = CardRegistry::from_specs([
///     CardSpec::new("Bang!", "Deal 1 damage", "attack"),
///     CardSpec::new("Missed!", "Cancel a Bang!", "defense"),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.find_by_type(CardType::Defense).count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from specs, assigning ids in input order.
    ///
    /// All-or-nothing: the first invalid spec aborts loading.
    pub fn from_specs<I>(specs: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = CardSpec>,
    {
        let mut registry = Self::new();
        for spec in specs {
            let card = Card::try_from(spec)?;
            registry.register_auto(card)?;
        }
        tracing::debug!(cards = registry.len(), "loaded card registry");
        Ok(registry)
    }

    /// Register a card under a specific ID.
    pub fn register(&mut self, id: CardId, card: Card) -> Result<(), CardError> {
        if self.cards.contains_key(&id) {
            return Err(CardError::DuplicateId(id));
        }
        tracing::trace!(%id, card = %card, "registered card");
        self.cards.insert(id, card);
        Ok(())
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// IDs count up from 0, skipping any already taken. Once `u32::MAX`
    /// is reached the search continues from 0.
    pub fn register_auto(&mut self, card: Card) -> Result<CardId, CardError> {
        let id = self.next_free_id().ok_or(CardError::IdsExhausted)?;
        self.next_id = id.raw().saturating_add(1);

        tracing::trace!(%id, card = %card, "registered card");
        self.cards.insert(id, card);
        Ok(id)
    }

    fn next_free_id(&self) -> Option<CardId> {
        (self.next_id..=u32::MAX)
            .chain(0..self.next_id)
            .map(CardId::new)
            .find(|id| !self.cards.contains_key(id))
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card mutably. Only playability can be changed through it.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        let mut entries: Vec<_> = self.cards.iter().map(|(id, card)| (*id, card)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = (CardId, &Card)> {
        self.find(move |c| c.card_type() == card_type)
    }

    /// Find cards with exactly this name.
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (CardId, &'a Card)> {
        self.find(move |c| c.name() == name)
    }

    /// Cards that can currently be played.
    pub fn playable(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.find(Card::is_playable)
    }

    /// Find cards matching a predicate, ordered by ID.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = (CardId, &Card)>
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().filter(move |(_, c)| predicate(*c))
    }

    /// Encode the registry with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CardError> {
        bincode::serialize(&self.cards).map_err(|e| CardError::Codec(e.to_string()))
    }

    /// Decode a registry produced by [`to_bytes`](Self::to_bytes).
    ///
    /// Every card is validated again while decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CardError> {
        let cards: FxHashMap<CardId, Card> =
            bincode::deserialize(bytes).map_err(|e| CardError::Codec(e.to_string()))?;
        let next_id = cards
            .keys()
            .map(|id| id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        Ok(Self { cards, next_id })
    }
}
