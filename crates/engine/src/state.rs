// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tournament state and its transitions.
//!
//! Chips are accounted in three places: player stacks, the pot with the
//! chips from completed streets, and player bets for the current street.
//! Their sum never changes during a tournament.
use ahash::AHashMap;
use anyhow::{Result, bail};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use showdown_core::{
    event::{Payoff, SeatStack, ShowdownHand},
    game_state::{DecisionRequest, PlayerAction, PlayerView, TableView},
    poker::{Card, Chips, Deck, PlayerStatus, SeatId, Street, TournamentId},
};
use showdown_eval::HandValue;

use crate::config::TournamentConfig;

mod player;
pub use player::{Entrant, Player};

mod pot;
pub use pot::{Contribution, SidePot, side_pots, split_pot};

/// The blinds posted at the start of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    /// The button seat.
    pub dealer: SeatId,
    /// The small blind seat.
    pub small_blind_seat: SeatId,
    /// The big blind seat.
    pub big_blind_seat: SeatId,
    /// The chips posted by the small blind.
    pub small_blind: Chips,
    /// The chips posted by the big blind.
    pub big_blind: Chips,
}

/// The result of an applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The action applied.
    pub action: PlayerAction,
    /// Chips moved for a call, the total bet for a raise.
    pub amount: Chips,
    /// The player has no chips left.
    pub all_in: bool,
}

/// The showdown result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    /// The revealed hands in seat order.
    pub hands: Vec<ShowdownHand>,
    /// The chips won by each winner in seat order.
    pub payoffs: Vec<Payoff>,
}

/// The state of a single table tournament.
#[derive(Debug)]
pub struct TournamentState {
    tournament_id: TournamentId,
    config: TournamentConfig,
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    current_bet: Chips,
    hand_number: u32,
    dealer: Option<usize>,
    big_blind_idx: Option<usize>,
    street: Street,
    blind_level: u32,
    small_blind: Chips,
    big_blind: Chips,
    total_chips: Chips,
    rng: StdRng,
}

impl TournamentState {
    /// Creates a tournament state, the seats follow the entrants order.
    pub fn init(
        tournament_id: TournamentId,
        entrants: Vec<Entrant>,
        config: TournamentConfig,
    ) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(tournament_id, entrants, config, rng)
    }

    /// Creates a tournament state with user initialized randomness.
    fn with_rng(
        tournament_id: TournamentId,
        entrants: Vec<Entrant>,
        config: TournamentConfig,
        rng: StdRng,
    ) -> Result<Self> {
        if entrants.len() < 2 {
            bail!("A tournament needs at least 2 players");
        }

        // Each player takes two cards and five go to the board.
        if entrants.len() * 2 + 5 > Deck::SIZE {
            bail!("Too many players {}", entrants.len());
        }

        if config.starting_stack.is_zero() {
            bail!("Starting stack must be positive");
        }

        let Some(total_chips) = u32::try_from(entrants.len())
            .ok()
            .and_then(|n| config.starting_stack.amount().checked_mul(n))
            .map(Chips::new)
        else {
            bail!(
                "Chip supply overflows with {} players of {} chips",
                entrants.len(),
                config.starting_stack
            );
        };

        let players = entrants
            .into_iter()
            .enumerate()
            .map(|(idx, e)| Player::new(SeatId::new(idx as u32), e, config.starting_stack))
            .collect::<Vec<_>>();
        let (small_blind, big_blind) = config.blinds(0);

        Ok(Self {
            tournament_id,
            config,
            players,
            deck: Deck::default(),
            board: Vec::default(),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            hand_number: 0,
            dealer: None,
            big_blind_idx: None,
            street: Street::Preflop,
            blind_level: 0,
            small_blind,
            big_blind,
            total_chips,
            rng,
        })
    }

    /// The tournament id.
    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    /// The tournament configuration.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// All players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at a seat.
    pub fn player(&self, seat: SeatId) -> Result<&Player> {
        let idx = self.index(seat)?;
        Ok(&self.players[idx])
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The chips swept from completed streets.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// All chips in the middle, current street bets included.
    pub fn total_pot(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.bet).sum()
    }

    /// The bet to match in this street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The current hand number, 0 before the first hand.
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    /// The button seat.
    pub fn dealer(&self) -> Option<SeatId> {
        self.dealer.map(|idx| self.players[idx].seat)
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The current blind level.
    pub fn blind_level(&self) -> u32 {
        self.blind_level
    }

    /// The current small and big blinds.
    pub fn blinds(&self) -> (Chips, Chips) {
        (self.small_blind, self.big_blind)
    }

    /// The chips in play, constant for the whole tournament.
    pub fn total_chips(&self) -> Chips {
        self.total_chips
    }

    /// Returns the number of players who have not folded this hand.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.status.in_hand()).count()
    }

    /// Returns the number of players who can still bet this hand.
    pub fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Returns the number of players who have chips.
    pub fn count_with_chips(&self) -> usize {
        self.players.iter().filter(|p| !p.stack.is_zero()).count()
    }

    /// Checks if only one player has chips left.
    pub fn is_over(&self) -> bool {
        self.count_with_chips() < 2
    }

    /// The stacks of the players still in the tournament.
    pub fn stacks(&self) -> Vec<SeatStack> {
        self.players
            .iter()
            .filter(|p| p.is_seated())
            .map(Player::seat_stack)
            .collect()
    }

    /// Starts a new hand.
    ///
    /// Moves the button to the next player with chips, sets the blinds for
    /// the hand level, shuffles a new deck and resets the players hand state.
    /// Players with no chips are eliminated for good.
    pub fn start_hand(&mut self) -> Result<()> {
        if self.is_over() {
            bail!("Cannot start a hand with fewer than 2 players");
        }

        for player in &mut self.players {
            player.start_hand();
        }

        self.dealer = match self.dealer {
            None => self.players.iter().position(Player::is_seated),
            Some(idx) => Some(self.next_seated(idx)),
        };

        self.hand_number += 1;
        self.blind_level = self.config.blind_level(self.hand_number);
        (self.small_blind, self.big_blind) = self.config.blinds(self.blind_level);

        self.deck = Deck::new_shuffled(&mut self.rng);
        self.board.clear();
        self.pot = Chips::ZERO;
        self.current_bet = Chips::ZERO;
        self.big_blind_idx = None;
        self.street = Street::Preflop;

        debug!(
            "Tournament {} hand {} dealer {:?} blinds {}/{}",
            self.tournament_id,
            self.hand_number,
            self.dealer(),
            self.small_blind,
            self.big_blind
        );

        self.check_chips();
        Ok(())
    }

    /// Posts the small and big blinds.
    ///
    /// Heads up the button posts the small blind, otherwise the two players
    /// after the button post. A short stacked player posts all chips.
    pub fn post_blinds(&mut self) -> Result<Blinds> {
        let Some(dealer) = self.dealer else {
            bail!("No hand in progress");
        };

        let sb_idx = if self.count_seated() == 2 {
            dealer
        } else {
            self.next_seated(dealer)
        };
        let bb_idx = self.next_seated(sb_idx);

        let small_blind = self.players[sb_idx].bet(self.small_blind);
        let big_blind = self.players[bb_idx].bet(self.big_blind);

        self.current_bet = small_blind.max(big_blind);
        self.big_blind_idx = Some(bb_idx);

        self.check_chips();

        Ok(Blinds {
            dealer: self.players[dealer].seat,
            small_blind_seat: self.players[sb_idx].seat,
            big_blind_seat: self.players[bb_idx].seat,
            small_blind,
            big_blind,
        })
    }

    /// Deals two cards to each player starting left of the button.
    pub fn deal_hole_cards(&mut self) -> Result<Vec<(SeatId, Vec<Card>)>> {
        let Some(dealer) = self.dealer else {
            bail!("No hand in progress");
        };

        let mut dealt = Vec::with_capacity(self.players.len());
        for idx in self.seat_order(dealer + 1) {
            let player = &mut self.players[idx];
            if player.status.in_hand() {
                player.cards = self.deck.deal(2);
                dealt.push((player.seat, player.cards.clone()));
            }
        }

        Ok(dealt)
    }

    /// The seat that acts first in the current street.
    ///
    /// Preflop action starts after the big blind, postflop after the button.
    pub fn first_to_act(&self) -> Option<SeatId> {
        let start = match self.street {
            Street::Preflop => self.big_blind_idx?,
            _ => self.dealer?,
        };

        Some(self.players[self.next_seated(start)].seat)
    }

    /// The players who can still bet, in action order from a seat.
    pub fn active_from(&self, seat: SeatId) -> Vec<SeatId> {
        let Ok(start) = self.index(seat) else {
            return Vec::default();
        };

        self.seat_order(start)
            .map(|idx| &self.players[idx])
            .filter(|p| p.is_active())
            .map(|p| p.seat)
            .collect()
    }

    /// How many chips a player must put in to call.
    pub fn to_call(&self, seat: SeatId) -> Result<Chips> {
        let player = self.player(seat)?;
        Ok(self.current_bet - player.bet)
    }

    /// The actions a player can take.
    ///
    /// Check is legal only when nothing is owed, otherwise the player can
    /// fold or call. Raising needs more chips than the call.
    pub fn valid_actions(&self, seat: SeatId) -> Result<Vec<PlayerAction>> {
        let player = self.player(seat)?;
        if !player.is_active() {
            bail!("Player {seat} cannot act");
        }

        let to_call = self.current_bet - player.bet;
        let mut actions = if to_call.is_zero() {
            vec![PlayerAction::Check]
        } else {
            vec![PlayerAction::Fold, PlayerAction::Call]
        };

        if player.stack > to_call {
            actions.push(PlayerAction::Raise);
        }

        Ok(actions)
    }

    /// Applies a player action.
    ///
    /// A raise goes to at least the current bet plus the big blind, and to
    /// at most the player chips.
    pub fn apply_action(
        &mut self,
        seat: SeatId,
        action: PlayerAction,
        raise_to: Chips,
    ) -> Result<ActionOutcome> {
        if !self.valid_actions(seat)?.contains(&action) {
            bail!("Invalid action {} for player {seat}", action.label());
        }

        // Saturates once the blinds reach the chips limit.
        let min_raise = self.current_bet + self.big_blind;
        let current_bet = self.current_bet;
        let idx = self.index(seat)?;
        let player = &mut self.players[idx];

        let amount = match action {
            PlayerAction::Fold => {
                player.fold();
                Chips::ZERO
            }
            PlayerAction::Check => Chips::ZERO,
            PlayerAction::Call => player.bet(current_bet),
            PlayerAction::Raise => {
                let target = raise_to.max(min_raise).min(player.stack + player.bet);
                player.bet(target);
                self.current_bet = self.current_bet.max(player.bet);
                player.bet
            }
        };

        let outcome = ActionOutcome {
            action,
            amount,
            all_in: player.status == PlayerStatus::AllIn,
        };

        self.check_chips();
        Ok(outcome)
    }

    /// Moves to the next street and deals its community cards.
    pub fn advance_street(&mut self) -> Result<Vec<Card>> {
        let Some(street) = self.street.next() else {
            bail!("No street after the river");
        };

        self.sweep_bets();

        let cards = self.deck.deal(street.cards_to_deal());
        self.board.extend_from_slice(&cards);
        self.street = street;

        self.check_chips();
        Ok(cards)
    }

    /// Gives the whole pot to one player, returns the chips won.
    pub fn award_pot(&mut self, seat: SeatId) -> Result<Chips> {
        let idx = self.index(seat)?;
        self.sweep_bets();

        let amount = self.pot;
        self.players[idx].stack += amount;
        self.pot = Chips::ZERO;

        self.check_chips();
        Ok(amount)
    }

    /// Evaluates the remaining hands and pays each side pot to its best
    /// hands, a tie splits the pot.
    pub fn showdown(&mut self) -> Result<Showdown> {
        let Some(dealer) = self.dealer else {
            bail!("No hand in progress");
        };

        let mut values = AHashMap::new();
        let mut hands = Vec::new();
        for player in self.players.iter().filter(|p| p.status.in_hand()) {
            let mut cards = player.cards.clone();
            cards.extend_from_slice(&self.board);
            if cards.len() < 5 {
                bail!("Showdown with {} cards for player {}", cards.len(), player.seat);
            }

            let value = HandValue::eval(&cards);
            hands.push(ShowdownHand {
                seat: player.seat,
                cards: player.cards.clone(),
                best: value.hand().to_vec(),
                category: value.rank().label().to_string(),
                score: value.score(),
            });
            values.insert(player.seat, value);
        }

        self.sweep_bets();

        let contributions = self
            .players
            .iter()
            .map(|p| Contribution {
                seat: p.seat,
                amount: p.contributed,
                live: p.status.in_hand(),
            })
            .collect::<Vec<_>>();

        // Odd chips go to the winners closest to the left of the button.
        let payout_order = self
            .seat_order(dealer + 1)
            .map(|idx| self.players[idx].seat)
            .collect::<Vec<_>>();

        let mut won = AHashMap::<SeatId, Chips>::new();
        for pot in side_pots(&contributions) {
            let Some(best) = pot.eligible.iter().filter_map(|s| values.get(s)).max() else {
                continue;
            };

            let winners = payout_order
                .iter()
                .copied()
                .filter(|s| pot.eligible.contains(s) && values.get(s) == Some(best))
                .collect::<Vec<_>>();

            for (seat, chips) in split_pot(pot.amount, &winners) {
                *won.entry(seat).or_default() += chips;
            }
        }

        for (seat, chips) in &won {
            let idx = self.index(*seat)?;
            self.players[idx].stack += *chips;
            self.pot -= *chips;
        }

        let mut payoffs = won
            .into_iter()
            .map(|(seat, amount)| Payoff { seat, amount })
            .collect::<Vec<_>>();
        payoffs.sort_by_key(|p| p.seat);

        self.check_chips();
        Ok(Showdown { hands, payoffs })
    }

    /// Eliminates the players who lost all their chips, returns their seats.
    pub fn eliminate_busted(&mut self) -> Vec<SeatId> {
        let mut busted = Vec::new();
        for player in &mut self.players {
            if player.stack.is_zero() && player.is_seated() {
                player.status = PlayerStatus::Eliminated;
                player.cards.clear();
                busted.push(player.seat);
            }
        }

        busted
    }

    /// The player with the most chips, ties go to the lowest seat.
    pub fn chip_leader(&self) -> Option<&Player> {
        self.players
            .iter()
            .rev()
            .filter(|p| !p.stack.is_zero())
            .max_by_key(|p| p.stack)
    }

    /// Builds a decision request for a player.
    pub fn decision_request(
        &self,
        seat: SeatId,
        actions: Vec<PlayerAction>,
    ) -> Result<DecisionRequest> {
        let player = self.player(seat)?;

        let table = TableView {
            tournament_id: self.tournament_id,
            hand_number: self.hand_number,
            street: self.street,
            board: self.board.clone(),
            pot: self.total_pot(),
            current_bet: self.current_bet,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            dealer: self.dealer().unwrap_or(player.seat),
            seats: self.players.iter().map(Player::seat_view).collect(),
        };

        let player = PlayerView {
            seat: player.seat,
            name: player.name.clone(),
            profile: player.profile.clone(),
            stack: player.stack,
            bet: player.bet,
            cards: player.cards.clone(),
        };

        Ok(DecisionRequest {
            player,
            table,
            actions,
        })
    }

    /// Moves the street bets to the pot.
    fn sweep_bets(&mut self) {
        for player in &mut self.players {
            self.pot += player.bet;
            player.bet = Chips::ZERO;
        }

        self.current_bet = Chips::ZERO;
    }

    fn index(&self, seat: SeatId) -> Result<usize> {
        let idx = seat.number() as usize;
        if idx >= self.players.len() {
            bail!("Unknown seat {seat}");
        }

        Ok(idx)
    }

    /// All player indexes in seat order starting from `start`.
    fn seat_order(&self, start: usize) -> impl Iterator<Item = usize> + use<> {
        let len = self.players.len();
        (0..len).map(move |offset| (start + offset) % len)
    }

    fn count_seated(&self) -> usize {
        self.players.iter().filter(|p| p.is_seated()).count()
    }

    /// The next seated player after `idx`.
    fn next_seated(&self, idx: usize) -> usize {
        self.seat_order(idx + 1)
            .find(|&i| self.players[i].is_seated())
            .unwrap_or(idx)
    }

    fn check_chips(&self) {
        debug_assert_eq!(
            self.players.iter().map(|p| p.stack + p.bet).sum::<Chips>() + self.pot,
            self.total_chips,
            "Chips are not conserved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(players: usize) -> TournamentState {
        let entrants = (0..players)
            .map(|i| Entrant::new(format!("Player {i}")))
            .collect();
        let config = TournamentConfig::default();
        TournamentState::with_rng(
            TournamentId::new_id(),
            entrants,
            config,
            StdRng::seed_from_u64(13),
        )
        .unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn seat(n: u32) -> SeatId {
        SeatId::new(n)
    }

    fn stack(state: &TournamentState, n: u32) -> u32 {
        state.player(seat(n)).unwrap().stack.amount()
    }

    fn assert_chips(state: &TournamentState) {
        let total = state.players.iter().map(|p| p.stack + p.bet).sum::<Chips>() + state.pot;
        assert_eq!(total, state.total_chips);
    }

    #[test]
    fn init_players() {
        let state = new_state(3);
        assert_eq!(state.players().len(), 3);
        assert_eq!(state.total_chips(), Chips::new(3_000));
        assert!(state.players().iter().all(|p| p.stack == Chips::new(1_000)));
        assert_eq!(state.hand_number(), 0);

        let res = TournamentState::init(
            TournamentId::new_id(),
            vec![Entrant::new("Alone")],
            TournamentConfig::default(),
        );
        assert!(res.is_err());

        let res = TournamentState::init(
            TournamentId::new_id(),
            (0..24).map(|i| Entrant::new(format!("P{i}"))).collect(),
            TournamentConfig::default(),
        );
        assert!(res.is_err());
    }

    #[test]
    fn heads_up_blinds() {
        let mut state = new_state(2);
        state.start_hand().unwrap();
        assert_eq!(state.dealer(), Some(seat(0)));

        let blinds = state.post_blinds().unwrap();
        assert_eq!(blinds.small_blind_seat, seat(0));
        assert_eq!(blinds.big_blind_seat, seat(1));
        assert_eq!(state.total_pot(), Chips::new(30));
        assert_eq!(state.current_bet(), Chips::new(20));

        // The button acts first preflop and last after the flop.
        assert_eq!(state.first_to_act(), Some(seat(0)));
        state.apply_action(seat(0), PlayerAction::Call, Chips::ZERO).unwrap();
        state.apply_action(seat(1), PlayerAction::Check, Chips::ZERO).unwrap();
        state.advance_street().unwrap();
        assert_eq!(state.first_to_act(), Some(seat(1)));
        assert_chips(&state);
    }

    #[test]
    fn three_handed_positions() {
        let mut state = new_state(3);
        state.start_hand().unwrap();
        let blinds = state.post_blinds().unwrap();
        assert_eq!(state.dealer(), Some(seat(0)));
        assert_eq!(blinds.small_blind_seat, seat(1));
        assert_eq!(blinds.big_blind_seat, seat(2));

        // Three seats after the button wraps to the button.
        assert_eq!(state.first_to_act(), Some(seat(0)));
        assert_eq!(state.active_from(seat(0)), vec![seat(0), seat(1), seat(2)]);

        state.street = Street::Flop;
        assert_eq!(state.first_to_act(), Some(seat(1)));
    }

    #[test]
    fn button_skips_busted_players() {
        let mut state = new_state(4);
        state.start_hand().unwrap();
        assert_eq!(state.dealer(), Some(seat(0)));

        // Seat 1 lost all chips to seat 3.
        state.players[1].stack = Chips::ZERO;
        state.players[3].stack = Chips::new(2_000);

        state.start_hand().unwrap();
        assert_eq!(state.dealer(), Some(seat(2)));
        assert_eq!(state.players[1].status, PlayerStatus::Eliminated);

        let blinds = state.post_blinds().unwrap();
        assert_eq!(blinds.small_blind_seat, seat(3));
        assert_eq!(blinds.big_blind_seat, seat(0));
        assert_eq!(state.first_to_act(), Some(seat(2)));
        assert_eq!(state.active_from(seat(2)), vec![seat(2), seat(3), seat(0)]);
    }

    #[test]
    fn blinds_go_up() {
        let mut state = new_state(2);
        for _ in 0..4 {
            state.start_hand().unwrap();
        }

        assert_eq!(state.hand_number(), 4);
        assert_eq!(state.blind_level(), 1);
        assert_eq!(state.blinds(), (Chips::new(20), Chips::new(40)));
    }

    #[test]
    fn short_blind_goes_all_in() {
        let mut state = new_state(2);
        state.players[1].stack = Chips::new(15);
        state.players[0].stack = Chips::new(1_985);

        state.start_hand().unwrap();
        let blinds = state.post_blinds().unwrap();
        assert_eq!(blinds.big_blind, Chips::new(15));
        assert_eq!(state.current_bet(), Chips::new(15));
        assert_eq!(state.players[1].status, PlayerStatus::AllIn);
        assert_chips(&state);
    }

    #[test]
    fn valid_actions() {
        use PlayerAction::*;

        let mut state = new_state(3);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        assert_eq!(state.valid_actions(seat(0)).unwrap(), vec![Fold, Call, Raise]);

        state.apply_action(seat(0), Call, Chips::ZERO).unwrap();
        state.apply_action(seat(1), Call, Chips::ZERO).unwrap();
        assert_eq!(state.valid_actions(seat(2)).unwrap(), vec![Check, Raise]);

        // Folding is not offered when checking is free.
        assert!(state.apply_action(seat(2), Fold, Chips::ZERO).is_err());

        state.apply_action(seat(2), Raise, Chips::new(100)).unwrap();
        assert_eq!(state.valid_actions(seat(0)).unwrap(), vec![Fold, Call, Raise]);

        state.apply_action(seat(0), Fold, Chips::ZERO).unwrap();
        assert!(state.valid_actions(seat(0)).is_err());
        assert!(state.apply_action(seat(0), Check, Chips::ZERO).is_err());
        assert!(state.valid_actions(seat(9)).is_err());
        assert_chips(&state);
    }

    #[test]
    fn short_stack_cannot_raise() {
        let mut state = new_state(2);
        state.players[0].stack = Chips::new(20);
        state.players[1].stack = Chips::new(1_980);

        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        assert_eq!(
            state.valid_actions(seat(0)).unwrap(),
            vec![PlayerAction::Fold, PlayerAction::Call]
        );
    }

    #[test]
    fn raise_amounts() {
        let mut state = new_state(2);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();

        // A raise below the minimum goes to current bet plus big blind.
        let outcome = state
            .apply_action(seat(0), PlayerAction::Raise, Chips::new(25))
            .unwrap();
        assert_eq!(outcome.amount, Chips::new(40));
        assert_eq!(state.current_bet(), Chips::new(40));
        assert_eq!(stack(&state, 0), 960);

        // A raise above the stack is all-in.
        let outcome = state
            .apply_action(seat(1), PlayerAction::Raise, Chips::new(5_000))
            .unwrap();
        assert_eq!(outcome.amount, Chips::new(1_000));
        assert!(outcome.all_in);
        assert_eq!(state.current_bet(), Chips::new(1_000));
        assert_eq!(state.total_pot(), Chips::new(1_040));
        assert_chips(&state);
    }

    #[test]
    fn call_all_in() {
        let mut state = new_state(2);
        state.players[0].stack = Chips::new(300);
        state.players[1].stack = Chips::new(1_700);

        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        state.apply_action(seat(0), PlayerAction::Call, Chips::ZERO).unwrap();
        state
            .apply_action(seat(1), PlayerAction::Raise, Chips::new(500))
            .unwrap();

        let outcome = state
            .apply_action(seat(0), PlayerAction::Call, Chips::ZERO)
            .unwrap();
        assert_eq!(outcome.amount, Chips::new(280));
        assert!(outcome.all_in);
        assert_eq!(state.count_active(), 1);
        assert_eq!(state.count_in_hand(), 2);
        assert_chips(&state);
    }

    #[test]
    fn streets_and_award() {
        let mut state = new_state(2);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        state.deal_hole_cards().unwrap();
        assert_eq!(state.deck.len(), Deck::SIZE - 4);

        state.apply_action(seat(0), PlayerAction::Call, Chips::ZERO).unwrap();
        state.apply_action(seat(1), PlayerAction::Check, Chips::ZERO).unwrap();

        assert_eq!(state.advance_street().unwrap().len(), 3);
        assert_eq!(state.street(), Street::Flop);
        assert_eq!(state.pot(), Chips::new(40));
        assert_eq!(state.current_bet(), Chips::ZERO);
        assert!(state.players.iter().all(|p| p.bet.is_zero()));

        assert_eq!(state.advance_street().unwrap().len(), 1);
        assert_eq!(state.advance_street().unwrap().len(), 1);
        assert_eq!(state.street(), Street::River);
        assert_eq!(state.board().len(), 5);
        assert!(state.advance_street().is_err());

        state
            .apply_action(seat(1), PlayerAction::Raise, Chips::new(100))
            .unwrap();
        state.apply_action(seat(0), PlayerAction::Fold, Chips::ZERO).unwrap();

        assert_eq!(state.award_pot(seat(1)).unwrap(), Chips::new(140));
        assert_eq!(state.total_pot(), Chips::ZERO);
        assert_eq!(stack(&state, 0), 980);
        assert_eq!(stack(&state, 1), 1_020);
        assert_chips(&state);
    }

    #[test]
    fn showdown_best_hand_wins() {
        let mut state = new_state(2);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        state.apply_action(seat(0), PlayerAction::Call, Chips::ZERO).unwrap();
        state.apply_action(seat(1), PlayerAction::Check, Chips::ZERO).unwrap();

        state.players[0].cards = cards("As Ad");
        state.players[1].cards = cards("Kc Qd");
        state.board = cards("2h 7c 9s Js 3d");

        let showdown = state.showdown().unwrap();
        assert_eq!(showdown.hands.len(), 2);
        assert_eq!(showdown.hands[0].category, "One Pair");
        assert_eq!(
            showdown.payoffs,
            vec![Payoff {
                seat: seat(0),
                amount: Chips::new(40),
            }]
        );
        assert_eq!(stack(&state, 0), 1_020);
        assert_eq!(stack(&state, 1), 980);
        assert_eq!(state.pot(), Chips::ZERO);
        assert_chips(&state);
    }

    #[test]
    fn showdown_split_pot() {
        let mut state = new_state(3);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();

        // Seat 0 calls, seat 1 completes, seat 2 checks: 60 in the pot.
        state.apply_action(seat(0), PlayerAction::Call, Chips::ZERO).unwrap();
        state.apply_action(seat(1), PlayerAction::Call, Chips::ZERO).unwrap();
        state.apply_action(seat(2), PlayerAction::Check, Chips::ZERO).unwrap();

        // Seat 1 folds on the flop after putting in one more chip.
        state.advance_street().unwrap();
        state.players[1].stack -= Chips::new(1);
        state.players[1].contributed += Chips::new(1);
        state.pot += Chips::new(1);
        state.players[1].fold();

        state.players[0].cards = cards("Ah 4c");
        state.players[2].cards = cards("Ad 5c");
        state.board = cards("Kh Ks Qd Qc Jh");

        let showdown = state.showdown().unwrap();
        assert_eq!(showdown.hands.len(), 2);

        // Both play the board with the ace, odd chip left of the button.
        assert_eq!(
            showdown.payoffs,
            vec![
                Payoff {
                    seat: seat(0),
                    amount: Chips::new(30),
                },
                Payoff {
                    seat: seat(2),
                    amount: Chips::new(31),
                },
            ]
        );
        assert_eq!(stack(&state, 0), 1_010);
        assert_eq!(stack(&state, 1), 979);
        assert_eq!(stack(&state, 2), 1_011);
        assert_chips(&state);
    }

    #[test]
    fn showdown_side_pot() {
        let mut state = new_state(3);
        state.players[0].stack = Chips::new(100);
        state.players[1].stack = Chips::new(1_000);
        state.players[2].stack = Chips::new(1_900);

        state.start_hand().unwrap();
        state.post_blinds().unwrap();

        // Seat 0 all-in for 100, seat 1 and seat 2 go to 400.
        state
            .apply_action(seat(0), PlayerAction::Raise, Chips::new(100))
            .unwrap();
        state
            .apply_action(seat(1), PlayerAction::Raise, Chips::new(400))
            .unwrap();
        state.apply_action(seat(2), PlayerAction::Call, Chips::ZERO).unwrap();

        for _ in 0..3 {
            state.advance_street().unwrap();
        }

        // The short stack has the best hand, seat 2 beats seat 1.
        state.players[0].cards = cards("As Ad");
        state.players[1].cards = cards("2c 3d");
        state.players[2].cards = cards("Kc Kd");
        state.board = cards("Ah 7c 9s Js 4h");

        let showdown = state.showdown().unwrap();
        assert_eq!(
            showdown.payoffs,
            vec![
                Payoff {
                    seat: seat(0),
                    amount: Chips::new(300),
                },
                Payoff {
                    seat: seat(2),
                    amount: Chips::new(600),
                },
            ]
        );

        assert_eq!(stack(&state, 0), 300);
        assert_eq!(stack(&state, 1), 600);
        assert_eq!(stack(&state, 2), 2_100);
        assert_chips(&state);

        assert!(state.eliminate_busted().is_empty());
    }

    #[test]
    fn eliminations() {
        let mut state = new_state(3);
        state.start_hand().unwrap();
        state.players[2].stack = Chips::ZERO;
        state.players[0].stack += Chips::new(1_000);

        assert_eq!(state.eliminate_busted(), vec![seat(2)]);
        assert!(state.eliminate_busted().is_empty());
        assert_eq!(state.stacks().len(), 2);
        assert!(!state.is_over());

        state.players[1].stack = Chips::ZERO;
        state.players[0].stack += Chips::new(1_000);
        assert!(state.is_over());
        assert!(state.start_hand().is_err());
        assert_eq!(state.chip_leader().map(|p| p.seat), Some(seat(0)));
    }

    #[test]
    fn chip_leader_ties() {
        let mut state = new_state(3);
        state.players[0].stack = Chips::new(500);
        state.players[1].stack = Chips::new(1_250);
        state.players[2].stack = Chips::new(1_250);
        assert_eq!(state.chip_leader().map(|p| p.seat), Some(seat(1)));
    }

    #[test]
    fn decision_request() {
        let mut state = new_state(2);
        state.start_hand().unwrap();
        state.post_blinds().unwrap();
        state.deal_hole_cards().unwrap();

        let actions = state.valid_actions(seat(0)).unwrap();
        let req = state.decision_request(seat(0), actions).unwrap();
        assert_eq!(req.to_call(), Chips::new(10));
        assert_eq!(req.min_raise_to(), Chips::new(40));
        assert_eq!(req.player.cards.len(), 2);
        assert_eq!(req.table.pot, Chips::new(30));
        assert_eq!(req.table.seats.len(), 2);
        assert!(req.can_raise());
    }

    #[test]
    fn chip_supply_must_fit() {
        let entrants = (0..9).map(|i| Entrant::new(format!("Player {i}"))).collect();
        let config = TournamentConfig::default().with_starting_stack(Chips::new(1_000_000_000));
        assert!(TournamentState::init(TournamentId::new_id(), entrants, config).is_err());

        // The largest supply that fits is accepted.
        let entrants = (0..3).map(|i| Entrant::new(format!("Player {i}"))).collect();
        let config = TournamentConfig::default().with_starting_stack(Chips::new(u32::MAX / 3));
        let state = TournamentState::init(TournamentId::new_id(), entrants, config).unwrap();
        assert_eq!(state.total_chips(), Chips::new(u32::MAX / 3 * 3));
    }

    #[test]
    fn capped_blinds_call_and_raise() {
        let config = TournamentConfig::default().with_blind_interval(1);

        let play = |action: PlayerAction| {
            let mut state = TournamentState::with_rng(
                TournamentId::new_id(),
                (0..3).map(|i| Entrant::new(format!("Player {i}"))).collect(),
                config.clone(),
                StdRng::seed_from_u64(3),
            )
            .unwrap();

            for _ in 0..40 {
                state.start_hand().unwrap();
            }
            assert_eq!(state.blinds(), (Chips::new(u32::MAX), Chips::new(u32::MAX)));

            // Give the first actor more chips than the blinds.
            state.players[1].stack -= Chips::new(500);
            state.players[0].stack += Chips::new(500);

            let blinds = state.post_blinds().unwrap();
            assert_eq!(blinds.small_blind, Chips::new(500));
            assert_eq!(blinds.big_blind, Chips::new(1_000));

            let first = state.first_to_act().unwrap();
            assert_eq!(first, seat(0));

            let outcome = state.apply_action(first, action, Chips::ZERO).unwrap();
            assert_chips(&state);
            outcome
        };

        let call = play(PlayerAction::Call);
        assert_eq!(call.amount, Chips::new(1_000));
        assert!(!call.all_in);

        // The minimum raise saturates and is clamped to the player chips.
        let raise = play(PlayerAction::Raise);
        assert_eq!(raise.amount, Chips::new(1_500));
        assert!(raise.all_in);
    }
}
