// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is scored as a single `u32` with the hand category in the
//! high bits and the ranks that break ties within the category, most
//! significant first, packed into 4 bits nibbles below it:
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   |xxxxxxxx|cccc0000|11112222|33334444|  ... and rank 5 in the low nibble
//!   +--------+--------+--------+--------+
//!   c = hand category (high card=0, ..., royal flush=9)
//!   1..5 = tie break ranks (deuce=2, ..., ace=14, unused=0)
//! ```
//!
//! For 6 and 7 cards hands all 5 cards subsets are scored and the maximum is
//! kept together with the cards that make the best hand.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

/// The hand category, from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The category label used for display.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }

    fn from_category(category: u32) -> Self {
        match category {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            8 => HandRank::StraightFlush,
            9 => HandRank::RoyalFlush,
            _ => panic!("Invalid hand category {category}"),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of a poker hand.
///
/// Values compare by score only, two hands with the same score tie even if
/// they are made of different cards.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    score: u32,
    hand: [Card; 5],
}

impl HandValue {
    const CATEGORY_SHIFT: u32 = 20;

    /// Evaluates the best 5 cards hand out of 5, 6 or 7 cards.
    ///
    /// Panics if the number of cards is not between 5 and 7.
    pub fn eval(cards: &[Card]) -> Self {
        assert!(
            (5..=7).contains(&cards.len()),
            "Cannot evaluate a hand with {} cards",
            cards.len()
        );

        let n = cards.len();
        let mut best: Option<HandValue> = None;

        // Every subset of 5 cards, 21 subsets for 7 cards.
        for mask in 0u32..(1 << n) {
            if mask.count_ones() != 5 {
                continue;
            }

            let mut hand = [cards[0]; 5];
            let mut idx = 0;
            for (pos, card) in cards.iter().enumerate() {
                if mask & (1 << pos) != 0 {
                    hand[idx] = *card;
                    idx += 1;
                }
            }

            let score = score5(&hand);
            if best.is_none_or(|b| score > b.score) {
                best = Some(HandValue { score, hand });
            }
        }

        // There is at least one subset as n >= 5.
        best.unwrap_or_else(|| unreachable!())
    }

    /// The hand score, higher is better.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_category(self.score >> Self::CATEGORY_SHIFT)
    }

    /// The 5 cards that make this hand.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// Scores a 5 cards hand.
fn score5(hand: &[Card; 5]) -> u32 {
    let mut values = hand.map(|c| c.rank().value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());

    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }

    // Rank groups ordered by size and then by rank, e.g. for a full house the
    // trips rank comes before the pair rank.
    let mut groups = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let straight_high = if groups.len() == 5 && values[0] - values[4] == 4 {
        Some(values[0])
    } else if values == [14, 5, 4, 3, 2] {
        // The wheel plays as a 5 high straight.
        Some(5)
    } else {
        None
    };

    let group_ranks = groups.iter().map(|g| g.1).collect::<Vec<_>>();
    let (category, ranks) = match (straight_high, is_flush, groups[0].0, groups.get(1)) {
        (Some(14), true, ..) => (HandRank::RoyalFlush, vec![14]),
        (Some(high), true, ..) => (HandRank::StraightFlush, vec![high]),
        (_, _, 4, _) => (HandRank::FourOfAKind, group_ranks),
        (_, _, 3, Some((2, _))) => (HandRank::FullHouse, group_ranks),
        (_, true, ..) => (HandRank::Flush, group_ranks),
        (Some(high), false, ..) => (HandRank::Straight, vec![high]),
        (_, _, 3, _) => (HandRank::ThreeOfAKind, group_ranks),
        (_, _, 2, Some((2, _))) => (HandRank::TwoPair, group_ranks),
        (_, _, 2, _) => (HandRank::OnePair, group_ranks),
        _ => (HandRank::HighCard, group_ranks),
    };

    let packed = ranks
        .iter()
        .chain(std::iter::repeat(&0))
        .take(5)
        .fold(0u32, |acc, &r| (acc << 4) | r as u32);

    ((category as u32) << HandValue::CATEGORY_SHIFT) | packed
}
