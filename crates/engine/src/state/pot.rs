// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Side pots built from the players hand contributions.
use showdown_core::poker::{Chips, SeatId};

/// The chips a player put in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// The player seat.
    pub seat: SeatId,
    /// The chips put in the hand.
    pub amount: Chips,
    /// The player has not folded.
    pub live: bool,
}

/// A pot contested only by the eligible players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    /// The pot chips.
    pub amount: Chips,
    /// The live players who contributed up to this pot level.
    pub eligible: Vec<SeatId>,
}

/// Splits the hand contributions into side pots, from the main pot up.
///
/// There is one pot for each distinct live contribution level. Folded chips
/// above the highest live level go to the last pot.
pub fn side_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let mut levels = contributions
        .iter()
        .filter(|c| c.live && !c.amount.is_zero())
        .map(|c| c.amount)
        .collect::<Vec<_>>();
    levels.sort();
    levels.dedup();

    if levels.is_empty() {
        let amount = contributions.iter().map(|c| c.amount).sum::<Chips>();
        if amount.is_zero() {
            return Vec::default();
        }

        let eligible = contributions
            .iter()
            .filter(|c| c.live)
            .map(|c| c.seat)
            .collect();
        return vec![SidePot { amount, eligible }];
    }

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for (idx, &level) in levels.iter().enumerate() {
        let is_last = idx + 1 == levels.len();

        let amount = contributions
            .iter()
            .map(|c| {
                let cap = if is_last { c.amount } else { c.amount.min(level) };
                cap - c.amount.min(prev_level)
            })
            .sum();

        let eligible = contributions
            .iter()
            .filter(|c| c.live && c.amount >= level)
            .map(|c| c.seat)
            .collect();

        pots.push(SidePot { amount, eligible });
        prev_level = level;
    }

    pots
}

/// Splits a pot evenly among the winners.
///
/// Winners must be ordered starting left of the button, odd chips go one
/// each to the first winners.
pub fn split_pot(amount: Chips, winners: &[SeatId]) -> Vec<(SeatId, Chips)> {
    if winners.is_empty() {
        return Vec::default();
    }

    let count = winners.len() as u32;
    let share = amount / count;
    let odd_chips = (amount % count).amount() as usize;

    winners
        .iter()
        .enumerate()
        .map(|(idx, &seat)| {
            let extra = if idx < odd_chips { 1 } else { 0 };
            (seat, share + Chips::new(extra))
        })
        .collect()
}
