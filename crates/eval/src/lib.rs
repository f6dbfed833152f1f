// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator scores every
//! 5 cards subset of the given cards and keeps the best one, the resulting
//! [HandValue] is totally ordered so that comparing two hands is a single
//! integer comparison.
//!
//! ```
//! # use showdown_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//! let royal = HandValue::eval(&cards("As Ks Qs Js Ts 2h 3h"));
//! let quads = HandValue::eval(&cards("7h 7d 7s 7c 2h 9s 9d"));
//! assert_eq!(royal.rank(), HandRank::RoyalFlush);
//! assert_eq!(quads.rank(), HandRank::FourOfAKind);
//! assert!(royal > quads);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
