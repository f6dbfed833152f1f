// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tournament configuration.
use serde::{Deserialize, Serialize};
use std::time::Duration;

use showdown_core::poker::Chips;

/// Tournament settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// The chips each player starts with.
    pub starting_stack: Chips,
    /// The small blind at level 0.
    pub small_blind: Chips,
    /// The big blind at level 0.
    pub big_blind: Chips,
    /// How many hands are played at each blind level.
    pub blind_interval: u32,
    /// Hands limit, the largest stack wins when reached.
    pub max_hands: u32,
    /// How long a player has to decide.
    pub decision_timeout: Duration,
    /// Seed for the deck shuffles, random if not set.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips::new(1_000),
            small_blind: Chips::new(10),
            big_blind: Chips::new(20),
            blind_interval: 3,
            max_hands: 200,
            decision_timeout: Duration::from_secs(15),
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Sets the starting stack.
    pub fn with_starting_stack(mut self, chips: Chips) -> Self {
        self.starting_stack = chips;
        self
    }

    /// Sets the level 0 blinds.
    pub fn with_blinds(mut self, small_blind: Chips, big_blind: Chips) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }

    /// Sets the number of hands per blind level.
    pub fn with_blind_interval(mut self, hands: u32) -> Self {
        self.blind_interval = hands;
        self
    }

    /// Sets the hands limit.
    pub fn with_max_hands(mut self, hands: u32) -> Self {
        self.max_hands = hands;
        self
    }

    /// Sets the decision timeout.
    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = timeout;
        self
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The blind level for a hand number starting from 1.
    pub fn blind_level(&self, hand_number: u32) -> u32 {
        hand_number.saturating_sub(1) / self.blind_interval.max(1)
    }

    /// The small and big blinds at a level, blinds double at each level.
    pub fn blinds(&self, level: u32) -> (Chips, Chips) {
        let factor = 1u32.checked_shl(level).unwrap_or(u32::MAX);
        let double = |c: Chips| Chips::new(c.amount().saturating_mul(factor));
        (double(self.small_blind), double(self.big_blind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_schedule() {
        let config = TournamentConfig::default();
        assert_eq!(config.blind_level(1), 0);
        assert_eq!(config.blind_level(3), 0);
        assert_eq!(config.blind_level(4), 1);
        assert_eq!(config.blind_level(7), 2);

        assert_eq!(config.blinds(0), (Chips::new(10), Chips::new(20)));
        assert_eq!(config.blinds(1), (Chips::new(20), Chips::new(40)));
        assert_eq!(config.blinds(2), (Chips::new(40), Chips::new(80)));
        assert_eq!(config.blinds(40), (Chips::new(u32::MAX), Chips::new(u32::MAX)));
    }

    #[test]
    fn zero_interval_is_one_hand() {
        let config = TournamentConfig::default().with_blind_interval(0);
        assert_eq!(config.blind_level(1), 0);
        assert_eq!(config.blind_level(2), 1);
    }
}
