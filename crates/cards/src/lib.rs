// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards without replacement:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_shuffled(&mut rand::rng());
//! let hole_cards = deck.deal(2);
//! let flop = deck.deal(3);
//! assert_eq!(hole_cards.len() + flop.len(), 5);
//! assert_eq!(deck.len(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
