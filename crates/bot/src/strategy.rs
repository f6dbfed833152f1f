// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scripted strategies.
use rand::{Rng, SeedableRng, rngs::StdRng};

use showdown_core::{decision::Decision, game_state::DecisionRequest, poker::Chips};

use crate::Strategy;

/// Calls any bet and never raises.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn execute(&mut self, req: &DecisionRequest) -> Decision {
        if req.can_call() {
            Decision::call()
        } else if req.can_check() {
            Decision::check()
        } else {
            Decision::fold()
        }
    }
}

/// Plays a random legal action with some basic logic.
///
/// Checks most of the time when free, sometimes folds to a bet and
/// sometimes raises to twice the current bet plus a random amount.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn execute(&mut self, req: &DecisionRequest) -> Decision {
        let roll = self.rng.random::<f64>();

        if req.can_check() && roll < 0.6 {
            return Decision::check().with_reasoning("checking it");
        }

        if req.can_fold() && roll < 0.15 {
            return Decision::fold().with_reasoning("not feeling it");
        }

        if req.can_raise() && roll > 0.75 {
            let extra = self.rng.random_range(0..50) * 10;
            let max_bet = req.player.stack + req.player.bet;
            let amount = (req.table.current_bet * 2 + Chips::new(extra)).min(max_bet);
            return Decision::raise_to(amount).with_reasoning("feeling lucky");
        }

        if req.can_call() {
            Decision::call().with_reasoning("calling")
        } else if req.can_check() {
            Decision::check().with_reasoning("checking it")
        } else {
            Decision::fold().with_reasoning("nothing better")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_core::game_state::PlayerAction;

    use crate::tests::request;

    #[test]
    fn calling_station() {
        let mut s = CallingStation;

        let req = request(vec![PlayerAction::Fold, PlayerAction::Call], "2c 7d");
        assert_eq!(s.execute(&req), Decision::call());

        let req = request(vec![PlayerAction::Check, PlayerAction::Raise], "2c 7d");
        assert_eq!(s.execute(&req), Decision::check());

        let req = request(vec![PlayerAction::Fold], "2c 7d");
        assert_eq!(s.execute(&req), Decision::fold());
    }

    #[test]
    fn random_actions_are_legal() {
        let mut s = RandomStrategy::with_seed(11);
        let facing_bet = request(
            vec![PlayerAction::Fold, PlayerAction::Call, PlayerAction::Raise],
            "Qh Qs",
        );
        let free = request(vec![PlayerAction::Check, PlayerAction::Raise], "Qh Qs");

        let mut seen = Vec::new();
        for _ in 0..500 {
            for req in [&facing_bet, &free] {
                let d = s.execute(req);
                assert!(req.check_action(d.action));

                if d.action == PlayerAction::Raise {
                    // Twice the bet plus a multiple of 10, capped at the stack.
                    assert!(d.amount >= Chips::new(120));
                    assert!(d.amount <= Chips::new(1_000));
                    assert_eq!(d.amount.amount() % 10, 0);
                }

                if !seen.contains(&d.action) {
                    seen.push(d.action);
                }
            }
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn seeded_strategies_repeat() {
        let req = request(
            vec![PlayerAction::Fold, PlayerAction::Call, PlayerAction::Raise],
            "Ah 2h",
        );

        let mut s1 = RandomStrategy::with_seed(5);
        let mut s2 = RandomStrategy::with_seed(5);
        for _ in 0..20 {
            assert_eq!(s1.execute(&req), s2.execute(&req));
        }
    }
}
