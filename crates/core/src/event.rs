// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tournament events emitted for external observers.
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::{
    game_state::PlayerAction,
    poker::{Card, Chips, SeatId, Street, TournamentId},
};

/// A player stack snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStack {
    /// The player seat.
    pub seat: SeatId,
    /// The player name.
    pub name: String,
    /// The player chips.
    pub stack: Chips,
}

/// A hand revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand {
    /// The player seat.
    pub seat: SeatId,
    /// The player hole cards.
    pub cards: Vec<Card>,
    /// The best five cards.
    pub best: Vec<Card>,
    /// The hand category, e.g. "Full House".
    pub category: String,
    /// The hand score, higher is better.
    pub score: u32,
}

/// Chips won by a player at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    /// The winner seat.
    pub seat: SeatId,
    /// The chips won.
    pub amount: Chips,
}

/// Why a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandEndReason {
    /// Everybody else folded.
    LastStanding,
    /// The best hands at showdown won.
    Showdown,
}

/// Why a tournament ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentEndReason {
    /// A single player has chips left.
    LastStanding,
    /// The hands limit was reached, the largest stack wins.
    HandCap,
}

/// A tournament event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Event {
    /// The tournament started.
    TournamentStart {
        /// The tournament id.
        tournament_id: TournamentId,
        /// The seated players.
        players: Vec<SeatStack>,
        /// The starting small blind.
        small_blind: Chips,
        /// The starting big blind.
        big_blind: Chips,
    },
    /// A new hand started and blinds have been posted.
    HandStart {
        /// The hand number, starting from 1.
        hand_number: u32,
        /// The button seat.
        dealer: SeatId,
        /// The small blind seat.
        small_blind_seat: SeatId,
        /// The big blind seat.
        big_blind_seat: SeatId,
        /// The small blind amount.
        small_blind: Chips,
        /// The big blind amount.
        big_blind: Chips,
        /// The pot after the blinds.
        pot: Chips,
        /// The stacks of the players in the tournament.
        stacks: Vec<SeatStack>,
    },
    /// Hole cards dealt to a player.
    Deal {
        /// The player seat.
        seat: SeatId,
        /// The hole cards.
        cards: Vec<Card>,
    },
    /// Community cards revealed.
    Community {
        /// The street the cards open.
        street: Street,
        /// The cards revealed.
        cards: Vec<Card>,
        /// The whole board.
        board: Vec<Card>,
        /// The pot.
        pot: Chips,
    },
    /// A player acted.
    Action {
        /// The player seat.
        seat: SeatId,
        /// The street.
        street: Street,
        /// The action applied.
        action: PlayerAction,
        /// Chips moved for a call, the total bet for a raise.
        amount: Chips,
        /// The pot after the action.
        pot: Chips,
        /// The player went all-in with this action.
        all_in: bool,
        /// Set when the provider decision was replaced, with the reason.
        fallback: Option<String>,
        /// The decision reasoning.
        reasoning: Option<String>,
        /// The decision thinking.
        thinking: Option<String>,
    },
    /// The remaining hands are revealed.
    Showdown {
        /// The hands in seat order.
        hands: Vec<ShowdownHand>,
    },
    /// A hand ended.
    HandEnd {
        /// The hand number.
        hand_number: u32,
        /// The chips awarded to each winner.
        winners: Vec<Payoff>,
        /// Why the hand ended.
        reason: HandEndReason,
    },
    /// A player lost all chips.
    Eliminated {
        /// The player seat.
        seat: SeatId,
        /// The player name.
        name: String,
        /// The hand the player lost the last chips.
        hand_number: u32,
    },
    /// Blinds went up.
    BlindsUp {
        /// The new blind level, starting from 0.
        level: u32,
        /// The new small blind.
        small_blind: Chips,
        /// The new big blind.
        big_blind: Chips,
    },
    /// The tournament ended.
    Winner {
        /// The winner seat.
        seat: SeatId,
        /// The winner name.
        name: String,
        /// The winner chips.
        stack: Chips,
        /// How many hands were played.
        hands_played: u32,
        /// Why the tournament ended.
        reason: TournamentEndReason,
    },
}

impl Event {
    /// The event type name as it appears in records.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::TournamentStart { .. } => "tournament_start",
            Event::HandStart { .. } => "hand_start",
            Event::Deal { .. } => "deal",
            Event::Community { .. } => "community",
            Event::Action { .. } => "action",
            Event::Showdown { .. } => "showdown",
            Event::HandEnd { .. } => "hand_end",
            Event::Eliminated { .. } => "eliminated",
            Event::BlindsUp { .. } => "blinds_up",
            Event::Winner { .. } => "winner",
        }
    }
}

/// A timestamped event, serialized as `{"timestamp", "type", "payload"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// The event.
    #[serde(flatten)]
    pub event: Event,
}

impl EventRecord {
    /// Stamps an event with the current time.
    pub fn new(event: Event) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            event,
        }
    }

    /// The event type name.
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }

    /// The record as a JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.event_type(), self.to_json())
    }
}

/// An append only consumer of tournament events.
///
/// Emitting must not block or fail, a sink that cannot keep up should
/// buffer or drop records on its own.
pub trait EventSink: Send + Sync {
    /// Records an event.
    fn emit(&self, record: EventRecord);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, record: EventRecord) {
        self.as_ref().emit(record)
    }
}

impl<S: EventSink> EventSink for Vec<S> {
    fn emit(&self, record: EventRecord) {
        if let Some((last, rest)) = self.split_last() {
            for sink in rest {
                sink.emit(record.clone());
            }

            last.emit(record);
        }
    }
}
