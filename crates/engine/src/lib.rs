// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker tournament engine.
//!
//! A [Tournament] seats players, each with its own decision provider, and
//! plays No Limit Texas Hold'em hands until a single player has chips left.
//! Every state change is reported to an event sink and the winner is paid
//! through a [Settlement].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod betting;
pub mod config;
pub mod decision;
pub mod registry;
pub mod sink;
pub mod state;
pub mod tournament;

pub use config::TournamentConfig;
pub use registry::{EventRegistry, TournamentLog};
pub use sink::{ChannelSink, LogSink};
pub use state::{Entrant, TournamentState};
pub use tournament::{Settlement, Tournament, TournamentResult};
