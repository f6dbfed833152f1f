// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting round controller.
//!
//! The controller only decides who acts next, the orchestrator asks the
//! player for a decision and applies it to the state.
use std::collections::VecDeque;

use showdown_core::{game_state::PlayerAction, poker::SeatId};

use crate::state::TournamentState;

/// The next step of a betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    /// The player at this seat must act.
    AwaitingAction(SeatId),
    /// Everybody acted, the round is over.
    RoundClosed,
    /// Only this player is left in the hand.
    HandOver(SeatId),
}

/// A betting round.
#[derive(Debug)]
pub struct BettingRound {
    queue: VecDeque<SeatId>,
}

impl BettingRound {
    /// Starts a round with every player who can bet, from the first to act.
    pub fn start(state: &TournamentState) -> Self {
        let queue = state
            .first_to_act()
            .map(|seat| state.active_from(seat).into())
            .unwrap_or_default();

        Self { queue }
    }

    /// Returns the next step of this round.
    ///
    /// Players who folded or went all-in since they were queued are skipped.
    /// A lone player who can bet is asked to act only if owing chips.
    pub fn next(&mut self, state: &TournamentState) -> RoundStep {
        if state.count_in_hand() == 1 {
            if let Some(p) = state.players().iter().find(|p| p.status.in_hand()) {
                return RoundStep::HandOver(p.seat);
            }
        }

        while let Some(seat) = self.queue.pop_front() {
            let Ok(player) = state.player(seat) else {
                continue;
            };

            if !player.is_active() {
                continue;
            }

            if state.count_active() < 2 && player.bet >= state.current_bet() {
                continue;
            }

            return RoundStep::AwaitingAction(seat);
        }

        RoundStep::RoundClosed
    }

    /// Updates the round after a player action.
    ///
    /// A raise reopens the action to every other player who can bet.
    pub fn action_applied(&mut self, state: &TournamentState, seat: SeatId, action: PlayerAction) {
        if action == PlayerAction::Raise {
            self.queue = state
                .active_from(seat)
                .into_iter()
                .filter(|s| *s != seat)
                .collect();
        }
    }

    /// The players still to act, in order.
    pub fn pending(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.queue.iter().copied()
    }
}
