// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker bots.
//!
//! A [Strategy] is a synchronous decision function, wrap it in a [Bot] to
//! seat it at a tournament table. [TextBot] plays through free text replies
//! the way a language model agent does.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use parking_lot::Mutex;

use showdown_core::{
    decision::{Decision, DecisionProvider},
    game_state::DecisionRequest,
};

mod strategy;
pub use strategy::{CallingStation, RandomStrategy};

mod text;
pub use text::{PocketPairs, Replier, TextBot, render_prompt};

pub use showdown_core as core;

/// A Poker bot strategy.
pub trait Strategy: Send + 'static {
    /// Decides an action for the request.
    fn execute(&mut self, req: &DecisionRequest) -> Decision;
}

/// A decision provider that runs a strategy.
#[derive(Debug)]
pub struct Bot<S> {
    strategy: Mutex<S>,
}

impl<S: Strategy> Bot<S> {
    /// Creates a bot for the given strategy.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy: Mutex::new(strategy),
        }
    }
}

impl<S: Strategy> DecisionProvider for Bot<S> {
    async fn decide(&self, req: &DecisionRequest) -> Result<Decision> {
        let decision = self.strategy.lock().execute(req);
        Ok(decision)
    }
}
