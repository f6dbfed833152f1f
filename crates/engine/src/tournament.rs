// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tournament orchestrator.
use anyhow::{Result, bail};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::future::Future;

use showdown_core::{
    decision::DecisionProvider,
    event::{
        Event, EventRecord, EventSink, HandEndReason, Payoff, SeatStack, TournamentEndReason,
    },
    poker::{SeatId, Street, TournamentId},
};

use crate::{
    betting::{BettingRound, RoundStep},
    config::TournamentConfig,
    decision,
    state::{Entrant, TournamentState},
};

/// Pays out the tournament winner, e.g. releasing an escrow.
///
/// A settlement is consumed when called so it runs at most once.
pub trait Settlement: Send {
    /// Settles the tournament in favor of the winner seat.
    fn settle(self, winner: SeatId) -> impl Future<Output = Result<()>> + Send;
}

impl<F> Settlement for F
where
    F: FnOnce(SeatId) -> Result<()> + Send,
{
    async fn settle(self, winner: SeatId) -> Result<()> {
        self(winner)
    }
}

/// The outcome of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// The tournament id.
    pub tournament_id: TournamentId,
    /// The winner seat.
    pub winner: SeatId,
    /// The winner name.
    pub winner_name: String,
    /// How many hands were played.
    pub hands_played: u32,
    /// Why the tournament ended.
    pub reason: TournamentEndReason,
    /// The final stacks of all players in seat order.
    pub stacks: Vec<SeatStack>,
}

/// A single table tournament.
///
/// Each seat has its own decision provider, events for every state change
/// go to the sink.
#[derive(Debug)]
pub struct Tournament<D, E> {
    state: TournamentState,
    providers: Vec<D>,
    sink: E,
    last_blind_level: u32,
}

impl<D, E> Tournament<D, E>
where
    D: DecisionProvider,
    E: EventSink,
{
    /// Creates a tournament, players are seated in the given order.
    pub fn new(
        tournament_id: TournamentId,
        config: TournamentConfig,
        players: Vec<(Entrant, D)>,
        sink: E,
    ) -> Result<Self> {
        let (entrants, providers): (Vec<_>, Vec<_>) = players.into_iter().unzip();
        let state = TournamentState::init(tournament_id, entrants, config)?;

        Ok(Self {
            state,
            providers,
            sink,
            last_blind_level: 0,
        })
    }

    /// The tournament state.
    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    /// Plays the tournament to the end and settles it.
    ///
    /// Hands are played until a single player has chips or the hands limit
    /// is reached, in which case the largest stack wins.
    pub async fn run<S: Settlement>(mut self, settlement: S) -> Result<TournamentResult> {
        let tournament_id = self.state.tournament_id();
        let (small_blind, big_blind) = self.state.blinds();

        info!(
            "Tournament {tournament_id} started with {} players",
            self.state.players().len()
        );

        self.emit(Event::TournamentStart {
            tournament_id,
            players: self.state.stacks(),
            small_blind,
            big_blind,
        });

        let max_hands = self.state.config().max_hands;
        while !self.state.is_over() && self.state.hand_number() < max_hands {
            self.play_hand().await?;
        }

        let reason = if self.state.is_over() {
            TournamentEndReason::LastStanding
        } else {
            TournamentEndReason::HandCap
        };

        let Some(winner) = self.state.chip_leader() else {
            bail!("Tournament {tournament_id} ended with no chips in play");
        };

        let result = TournamentResult {
            tournament_id,
            winner: winner.seat,
            winner_name: winner.name.clone(),
            hands_played: self.state.hand_number(),
            reason,
            stacks: self
                .state
                .players()
                .iter()
                .map(|p| p.seat_stack())
                .collect(),
        };

        self.emit(Event::Winner {
            seat: result.winner,
            name: result.winner_name.clone(),
            stack: winner.stack,
            hands_played: result.hands_played,
            reason,
        });

        info!(
            "Tournament {tournament_id} won by {} after {} hands",
            result.winner_name, result.hands_played
        );

        if let Err(e) = settlement.settle(result.winner).await {
            error!("Tournament {tournament_id} settlement failed {e}");
        }

        Ok(result)
    }

    async fn play_hand(&mut self) -> Result<()> {
        self.state.start_hand()?;

        let level = self.state.blind_level();
        if level > self.last_blind_level {
            self.last_blind_level = level;
            let (small_blind, big_blind) = self.state.blinds();
            info!(
                "Tournament {} blinds up to {small_blind}/{big_blind}",
                self.state.tournament_id()
            );

            self.emit(Event::BlindsUp {
                level,
                small_blind,
                big_blind,
            });
        }

        let blinds = self.state.post_blinds()?;
        let hand_number = self.state.hand_number();

        self.emit(Event::HandStart {
            hand_number,
            dealer: blinds.dealer,
            small_blind_seat: blinds.small_blind_seat,
            big_blind_seat: blinds.big_blind_seat,
            small_blind: blinds.small_blind,
            big_blind: blinds.big_blind,
            pot: self.state.total_pot(),
            stacks: self.state.stacks(),
        });

        for (seat, cards) in self.state.deal_hole_cards()? {
            self.emit(Event::Deal { seat, cards });
        }

        loop {
            if let Some(seat) = self.betting_round().await? {
                let amount = self.state.award_pot(seat)?;
                debug!("Hand {hand_number} won by {seat} with no showdown");

                self.emit(Event::HandEnd {
                    hand_number,
                    winners: vec![Payoff { seat, amount }],
                    reason: HandEndReason::LastStanding,
                });
                break;
            }

            if self.state.street() == Street::River {
                let showdown = self.state.showdown()?;
                self.emit(Event::Showdown {
                    hands: showdown.hands,
                });
                self.emit(Event::HandEnd {
                    hand_number,
                    winners: showdown.payoffs,
                    reason: HandEndReason::Showdown,
                });
                break;
            }

            let cards = self.state.advance_street()?;
            self.emit(Event::Community {
                street: self.state.street(),
                cards,
                board: self.state.board().to_vec(),
                pot: self.state.total_pot(),
            });
        }

        for seat in self.state.eliminate_busted() {
            let name = self.state.player(seat)?.name.clone();
            info!(
                "Tournament {} player {name} eliminated",
                self.state.tournament_id()
            );

            self.emit(Event::Eliminated {
                seat,
                name,
                hand_number,
            });
        }

        Ok(())
    }

    /// Runs a betting round, returns the winner if everybody else folded.
    async fn betting_round(&mut self) -> Result<Option<SeatId>> {
        let timeout = self.state.config().decision_timeout;
        let mut round = BettingRound::start(&self.state);

        loop {
            let seat = match round.next(&self.state) {
                RoundStep::AwaitingAction(seat) => seat,
                RoundStep::RoundClosed => return Ok(None),
                RoundStep::HandOver(seat) => return Ok(Some(seat)),
            };

            let Some(provider) = self.providers.get(seat.number() as usize) else {
                bail!("No decision provider for seat {seat}");
            };

            let actions = self.state.valid_actions(seat)?;
            let req = self.state.decision_request(seat, actions)?;
            let checked = decision::decide(provider, &req, timeout).await;

            let decision = checked.decision;
            let outcome = self
                .state
                .apply_action(seat, decision.action, decision.amount)?;
            round.action_applied(&self.state, seat, outcome.action);

            debug!(
                "Hand {} {} player {seat} {} {}",
                self.state.hand_number(),
                self.state.street(),
                outcome.action.label(),
                outcome.amount
            );

            self.emit(Event::Action {
                seat,
                street: self.state.street(),
                action: outcome.action,
                amount: outcome.amount,
                pot: self.state.total_pot(),
                all_in: outcome.all_in,
                fallback: checked.fallback.map(|e| e.to_string()),
                reasoning: decision.reasoning,
                thinking: decision.thinking,
            });
        }
    }

    fn emit(&self, event: Event) {
        self.sink.emit(EventRecord::new(event));
    }
}
