// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bots that decide through free text replies.
use anyhow::Result;
use log::debug;
use std::future::Future;

use showdown_core::{
    decision::{Decision, DecisionProvider, parse_decision},
    game_state::DecisionRequest,
    poker::{Card, PlayerStatus, Suit},
};

const RULES: &str = "You are playing Texas Hold'em poker. Your goal is to win chips.

First, think through your decision in a <thinking> section:
- Analyze your hand strength
- Consider the pot odds and betting patterns
- Evaluate your opponents' likely hands
- Decide on your strategy

Then respond with your action in this exact format:
  fold
  check
  call
  raise <amount>";

/// Answers a prompt with free text, e.g. a language model.
pub trait Replier: Send + Sync {
    /// Replies to a prompt for the given request.
    fn reply(
        &self,
        req: &DecisionRequest,
        system: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// A decision provider that prompts a replier and parses its answer.
#[derive(Debug)]
pub struct TextBot<R> {
    replier: R,
}

impl<R: Replier> TextBot<R> {
    /// Creates a text bot.
    pub fn new(replier: R) -> Self {
        Self { replier }
    }
}

impl<R: Replier> DecisionProvider for TextBot<R> {
    async fn decide(&self, req: &DecisionRequest) -> Result<Decision> {
        let system = if req.player.profile.trim().is_empty() {
            RULES.to_string()
        } else {
            format!("{}\n\n{RULES}", req.player.profile.trim())
        };

        let prompt = render_prompt(req);
        let text = self.replier.reply(req, &system, &prompt).await?;
        debug!("Player {} replied {text:?}", req.player.name);

        Ok(parse_decision(&text, req)?)
    }
}

/// Renders the table as seen by the player asked to act.
pub fn render_prompt(req: &DecisionRequest) -> String {
    let player = &req.player;
    let table = &req.table;

    let board = if table.board.is_empty() {
        "none (preflop)".to_string()
    } else {
        format_cards(&table.board)
    };

    let others = table
        .seats
        .iter()
        .filter(|s| s.seat != player.seat)
        .filter_map(|s| match s.status {
            PlayerStatus::Folded => Some(format!("  - {} (seat {}): FOLDED\n", s.name, s.seat)),
            PlayerStatus::AllIn => Some(format!(
                "  - {} (seat {}): ALL-IN, bet {}\n",
                s.name, s.seat, s.bet
            )),
            PlayerStatus::Active => Some(format!(
                "  - {} (seat {}): stack {}, current bet {}\n",
                s.name, s.seat, s.stack, s.bet
            )),
            PlayerStatus::Eliminated => None,
        })
        .collect::<String>();

    let actions = req
        .actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Your hand: {hand}\n\
         Community cards: {board}\n\
         Street: {street}\n\
         Pot: {pot}\n\
         Your stack: {stack}\n\
         Amount to call: {to_call}\n\
         Blinds: {small_blind}/{big_blind}\n\
         Other players:\n\
         {others}\n\
         Valid actions: {actions}\n\
         Min raise: {min_raise}",
        hand = format_cards(&player.cards),
        street = table.street,
        pot = table.pot,
        stack = player.stack,
        to_call = req.to_call(),
        small_blind = table.small_blind,
        big_blind = table.big_blind,
        min_raise = req.min_raise_to(),
    )
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| {
            let suit = match c.suit() {
                Suit::Spades => '♠',
                Suit::Hearts => '♥',
                Suit::Diamonds => '♦',
                Suit::Clubs => '♣',
            };
            format!("{}{suit}", c.rank())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A scripted replier that raises preflop with a pocket pair and otherwise
/// calls or checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PocketPairs;

impl Replier for PocketPairs {
    async fn reply(&self, req: &DecisionRequest, _system: &str, _prompt: &str) -> Result<String> {
        let pair = match req.player.cards.as_slice() {
            [c1, c2] => c1.rank() == c2.rank(),
            _ => false,
        };

        let text = if pair && req.table.board.is_empty() && req.can_raise() {
            format!(
                "<thinking>A pocket pair before the flop.</thinking>\nraise {}",
                req.min_raise_to()
            )
        } else if req.can_check() {
            "<thinking>Nothing to pay, see the next card.</thinking>\ncheck".to_string()
        } else {
            "<thinking>Stay in the hand.</thinking>\ncall".to_string()
        };

        Ok(text)
    }
}
