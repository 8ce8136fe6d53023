//! Core types shared by the card system.

pub mod player;

pub use player::PlayerId;
