// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker core types shared by the engine and decision providers.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod decision;
pub mod event;
pub mod game_state;
pub mod poker;
