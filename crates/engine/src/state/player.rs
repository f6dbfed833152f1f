// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tournament player types.
use showdown_core::{
    event::SeatStack,
    game_state::SeatView,
    poker::{Card, Chips, PlayerStatus, SeatId},
};

/// A tournament entrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    /// The player name.
    pub name: String,
    /// The player persona passed to the decision provider.
    pub profile: String,
}

impl Entrant {
    /// Creates an entrant with an empty profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: String::default(),
        }
    }

    /// Sets the entrant profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }
}

/// A seated player state.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player seat.
    pub seat: SeatId,
    /// The player name.
    pub name: String,
    /// The player persona.
    pub profile: String,
    /// This player chips.
    pub stack: Chips,
    /// The player bet in the current street.
    pub bet: Chips,
    /// All chips the player put in this hand, current street included.
    pub contributed: Chips,
    /// The player hole cards.
    pub cards: Vec<Card>,
    /// The player status.
    pub status: PlayerStatus,
}

impl Player {
    /// Creates a new player.
    pub fn new(seat: SeatId, entrant: Entrant, stack: Chips) -> Self {
        Self {
            seat,
            name: entrant.name,
            profile: entrant.profile,
            stack,
            bet: Chips::ZERO,
            contributed: Chips::ZERO,
            cards: Vec::default(),
            status: PlayerStatus::Active,
        }
    }

    /// Raises this player bet to the given total, returns the chips moved.
    ///
    /// A player without enough chips bets the whole stack and goes all-in.
    pub fn bet(&mut self, total: Chips) -> Chips {
        let remainder = (total - self.bet).min(self.stack);

        self.stack -= remainder;
        self.bet += remainder;
        self.contributed += remainder;

        if self.stack.is_zero() && !remainder.is_zero() {
            self.status = PlayerStatus::AllIn;
        }

        remainder
    }

    /// Sets this player in fold state for the current hand.
    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
        self.cards.clear();
    }

    /// Checks if the player can still act in this hand.
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Checks if the player is still in the tournament.
    pub fn is_seated(&self) -> bool {
        self.status != PlayerStatus::Eliminated
    }

    /// Reset state for a new hand, a player with no chips is out for good.
    pub(super) fn start_hand(&mut self) {
        self.bet = Chips::ZERO;
        self.contributed = Chips::ZERO;
        self.cards.clear();

        self.status = if self.stack.is_zero() {
            PlayerStatus::Eliminated
        } else {
            PlayerStatus::Active
        };
    }

    /// The public view of this player.
    pub fn seat_view(&self) -> SeatView {
        SeatView {
            seat: self.seat,
            name: self.name.clone(),
            stack: self.stack,
            bet: self.bet,
            status: self.status,
        }
    }

    /// The player stack snapshot.
    pub fn seat_stack(&self) -> SeatStack {
        SeatStack {
            seat: self.seat,
            name: self.name.clone(),
            stack: self.stack,
        }
    }
}
