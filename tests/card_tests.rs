//! Card construction tests.
//!
//! These tests check the construction contract of `Card`:
//! - Valid inputs are stored verbatim and start playable
//! - Blank names and unknown card types are rejected
//! - The display form names the card and its type

use bang_cards::cards::{Card, CardError, CardSpec, CardType};
use proptest::prelude::*;

fn card_type() -> impl Strategy<Value = CardType> {
    prop::sample::select(CardType::ALL.to_vec())
}

fn valid_name() -> impl Strategy<Value = String> {
    ".{1,24}".prop_filter("name must not be blank", |s| !s.trim().is_empty())
}

fn blank_name() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,8}"
}

fn unknown_type() -> impl Strategy<Value = String> {
    ".{0,12}".prop_filter("must not be a known type", |s| {
        !matches!(s.as_str(), "attack" | "defense" | "effect")
    })
}

/// The documented example card.
#[test]
fn test_bang_example() {
    let card = Card::parse("Bang!", "Deal 1 damage", "attack").expect("valid card");

    assert_eq!(card.name(), "Bang!");
    assert_eq!(card.description(), "Deal 1 damage");
    assert_eq!(card.card_type(), CardType::Attack);
    assert!(card.is_playable());
    assert_eq!(card.to_string(), "Bang! (attack)");
}

/// An empty name is an invalid argument.
#[test]
fn test_empty_name_example() {
    let err = Card::parse("", "x", "attack").unwrap_err();
    assert_eq!(err, CardError::InvalidName);
    assert!(err.is_invalid_argument());
}

/// "heal" is not one of the card types.
#[test]
fn test_unknown_type_example() {
    let err = Card::parse("Beer", "Heal 1 life", "heal").unwrap_err();
    assert_eq!(err, CardError::InvalidCardType("heal".to_string()));
    assert!(err.is_invalid_argument());
}

/// Specs loaded from JSON go through the same validation.
#[test]
fn test_specs_from_json() {
    let json = r#"[
        {"name": "Bang!", "description": "Deal 1 damage", "card_type": "attack"},
        {"name": "Missed!", "description": "Cancel a Bang!", "card_type": "defense"},
        {"name": "Beer", "description": "", "card_type": "effect"}
    ]"#;
    let specs: Vec<CardSpec> = serde_json::from_str(json).unwrap();
    let cards: Result<Vec<Card>, _> = specs.into_iter().map(Card::try_from).collect();
    let cards = cards.unwrap();

    let shown: Vec<_> = cards.iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["Bang! (attack)", "Missed! (defense)", "Beer (effect)"]);
}

/// Non-text fields never make it past decoding.
#[test]
fn test_non_text_spec_fields_rejected() {
    for json in [
        r#"{"name": 1, "description": "x", "card_type": "attack"}"#,
        r#"{"name": "Bang!", "description": null, "card_type": "attack"}"#,
        r#"{"name": "Bang!", "description": "x", "card_type": ["attack"]}"#,
    ] {
        assert!(serde_json::from_str::<CardSpec>(json).is_err(), "{json}");
    }
}

proptest! {
    #[test]
    fn test_valid_inputs_construct_verbatim(
        name in valid_name(),
        description in ".{0,40}",
        card_type in card_type(),
    ) {
        let card = Card::new(name.clone(), description.clone(), card_type).unwrap();
        prop_assert_eq!(card.name(), name.as_str());
        prop_assert_eq!(card.description(), description.as_str());
        prop_assert_eq!(card.card_type(), card_type);
        prop_assert!(card.is_playable());

        let parsed = Card::parse(name, description, card_type.as_str()).unwrap();
        prop_assert_eq!(parsed, card);
    }

    #[test]
    fn test_blank_names_rejected(name in blank_name(), card_type in card_type()) {
        prop_assert_eq!(Card::new(name.clone(), "x", card_type), Err(CardError::InvalidName));
        prop_assert_eq!(Card::parse(name, "x", card_type.as_str()), Err(CardError::InvalidName));
    }

    #[test]
    fn test_unknown_types_rejected(name in valid_name(), card_type in unknown_type()) {
        let err = Card::parse(name, "x", &card_type).unwrap_err();
        prop_assert!(err.is_invalid_argument());
        prop_assert_eq!(err, CardError::InvalidCardType(card_type));
    }

    #[test]
    fn test_display_contains_name_and_type(name in valid_name(), card_type in card_type()) {
        let card = Card::new(name.clone(), "", card_type).unwrap();
        let shown = card.to_string();
        prop_assert!(shown.contains(&name));
        prop_assert!(shown.contains(card_type.as_str()));
        prop_assert_eq!(shown, format!("{} ({})", name, card_type));
    }
}
