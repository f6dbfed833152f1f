// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table snapshots handed to decision providers.
use serde::{Deserialize, Serialize};

use crate::poker::{Card, Chips, PlayerStatus, SeatId, Street, TournamentId};

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Player folds.
    Fold,
    /// Player checks.
    Check,
    /// Player calls.
    Call,
    /// Player raises.
    Raise,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Raise => "raise",
        }
    }
}

/// The public state of a seat at the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    /// The seat id.
    pub seat: SeatId,
    /// The player name.
    pub name: String,
    /// The player stack.
    pub stack: Chips,
    /// The player bet in this street.
    pub bet: Chips,
    /// The player status.
    pub status: PlayerStatus,
}

/// The private state of the player asked to act.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    /// The seat id.
    pub seat: SeatId,
    /// The player name.
    pub name: String,
    /// Free text describing how this player plays, e.g. an agent persona.
    pub profile: String,
    /// The player stack.
    pub stack: Chips,
    /// The player bet in this street.
    pub bet: Chips,
    /// The player hole cards.
    pub cards: Vec<Card>,
}

/// The table state as seen by every player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    /// The tournament id.
    pub tournament_id: TournamentId,
    /// The hand number, starting from 1.
    pub hand_number: u32,
    /// The current street.
    pub street: Street,
    /// The community cards.
    pub board: Vec<Card>,
    /// All chips in the middle, including this street bets.
    pub pot: Chips,
    /// The bet to match in this street.
    pub current_bet: Chips,
    /// The current small blind.
    pub small_blind: Chips,
    /// The current big blind.
    pub big_blind: Chips,
    /// The seat with the button.
    pub dealer: SeatId,
    /// All seats in seat order.
    pub seats: Vec<SeatView>,
}

/// A request for an action sent to a decision provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The player that should act.
    pub player: PlayerView,
    /// The table state.
    pub table: TableView,
    /// The list of legal actions.
    pub actions: Vec<PlayerAction>,
}

impl DecisionRequest {
    /// How many chips the player must put in to call.
    pub fn to_call(&self) -> Chips {
        self.table.current_bet - self.player.bet
    }

    /// The smallest total bet a raise can make.
    pub fn min_raise_to(&self) -> Chips {
        self.table.current_bet + self.table.big_blind
    }

    /// Check if a fold action is in the request.
    pub fn can_fold(&self) -> bool {
        self.check_action(PlayerAction::Fold)
    }

    /// Check if a call action is in the request.
    pub fn can_call(&self) -> bool {
        self.check_action(PlayerAction::Call)
    }

    /// Check if a check action is in the request.
    pub fn can_check(&self) -> bool {
        self.check_action(PlayerAction::Check)
    }

    /// Check if a raise action is in the request.
    pub fn can_raise(&self) -> bool {
        self.check_action(PlayerAction::Raise)
    }

    /// Check if an action is legal for this request.
    pub fn check_action(&self, action: PlayerAction) -> bool {
        self.actions.iter().any(|a| a == &action)
    }
}
