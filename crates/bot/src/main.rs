// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Runs bot tournaments and prints their events.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashMap;
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::{sync::Arc, time::Duration};

use showdown_bot::{
    Bot, CallingStation, PocketPairs, RandomStrategy, TextBot,
    core::{
        decision::{Decision, DecisionProvider},
        event::EventSink,
        game_state::DecisionRequest,
        poker::{Chips, SeatId, TournamentId},
    },
};
use showdown_engine::{ChannelSink, Entrant, EventRegistry, LogSink, Tournament, TournamentConfig};

static NICKNAMES: &[(&str, &str)] = &[
    ("Alice", "You play aggressive and bluff often."),
    ("Bob", "You play tight and only bet strong hands."),
    ("Carol", "You are a loose player who loves to see flops."),
    ("Dave", "You play by the pot odds."),
    ("Frank", "You are a cautious beginner."),
    ("Mike", "You play aggressive and bluff often."),
    ("Nina", "You play tight and only bet strong hands."),
    ("Oscar", "You are a loose player who loves to see flops."),
    ("Paula", "You play by the pot odds."),
];

/// The bots seated at each table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Lineup {
    /// Random, calling and text bots in turn.
    Mixed,
    /// Only random bots.
    Random,
    /// Only calling stations.
    Calling,
    /// Only text bots.
    Text,
}

/// A bot of any kind.
#[derive(Debug)]
enum AnyBot {
    Random(Bot<RandomStrategy>),
    Calling(Bot<CallingStation>),
    Text(TextBot<PocketPairs>),
}

impl AnyBot {
    fn new(lineup: Lineup, seat: usize, seed: Option<u64>) -> Self {
        let random = || {
            let strategy = match seed {
                Some(seed) => RandomStrategy::with_seed(seed.wrapping_add(seat as u64)),
                None => RandomStrategy::new(),
            };
            AnyBot::Random(Bot::new(strategy))
        };

        match lineup {
            Lineup::Random => random(),
            Lineup::Calling => AnyBot::Calling(Bot::new(CallingStation)),
            Lineup::Text => AnyBot::Text(TextBot::new(PocketPairs)),
            Lineup::Mixed => match seat % 3 {
                0 => random(),
                1 => AnyBot::Calling(Bot::new(CallingStation)),
                _ => AnyBot::Text(TextBot::new(PocketPairs)),
            },
        }
    }
}

impl DecisionProvider for AnyBot {
    async fn decide(&self, req: &DecisionRequest) -> Result<Decision> {
        match self {
            AnyBot::Random(bot) => bot.decide(req).await,
            AnyBot::Calling(bot) => bot.decide(req).await,
            AnyBot::Text(bot) => bot.decide(req).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Number of players at each table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// Number of tournaments to run concurrently.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
    tournaments: u16,
    /// The chips each player starts with.
    #[clap(long, default_value_t = 1_000, value_parser = clap::value_parser!(u32).range(1..))]
    starting_stack: u32,
    /// The starting small blind.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    small_blind: u32,
    /// The starting big blind.
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    big_blind: u32,
    /// Number of hands at each blind level.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    blind_interval: u32,
    /// Hands limit, the largest stack wins when reached.
    #[clap(long, default_value_t = 200)]
    max_hands: u32,
    /// How long a bot has to decide in milliseconds.
    #[clap(long, default_value_t = 15_000)]
    timeout_ms: u64,
    /// Seed for the deck shuffles and the random bots.
    #[clap(long)]
    seed: Option<u64>,
    /// The bots seated at each table.
    #[clap(long, value_enum, default_value_t = Lineup::Mixed)]
    bots: Lineup,
    /// Print events as JSON lines on stdout.
    #[clap(long)]
    json: bool,
    /// Help long flag.
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

impl Cli {
    fn config(&self) -> Result<TournamentConfig> {
        if self.big_blind < self.small_blind {
            bail!(
                "Big blind {} smaller than small blind {}",
                self.big_blind,
                self.small_blind
            );
        }

        let config = TournamentConfig::default()
            .with_starting_stack(Chips::new(self.starting_stack))
            .with_blinds(Chips::new(self.small_blind), Chips::new(self.big_blind))
            .with_blind_interval(self.blind_interval)
            .with_max_hands(self.max_hands)
            .with_decision_timeout(Duration::from_millis(self.timeout_ms));

        Ok(config)
    }

    fn players(&self, tournament: u64) -> Vec<(Entrant, AnyBot)> {
        let seed = self.seed.map(|s| s.wrapping_add(tournament * 100));
        (0..self.players as usize)
            .map(|seat| {
                let (name, profile) = NICKNAMES[seat % NICKNAMES.len()];
                let entrant = Entrant::new(name).with_profile(profile);
                (entrant, AnyBot::new(self.bots, seat, seed))
            })
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = cli.config()?;
    let registry = EventRegistry::new();

    // In JSON mode the events go to stdout through a channel.
    let (channel, printer) = if cli.json {
        let (sink, mut rx) = ChannelSink::new(8_192);
        let printer = tokio::spawn(async move {
            while let Some(record) = rx.recv().await {
                println!("{}", record.to_json());
            }
        });

        (Some(sink), Some(printer))
    } else {
        (None, None)
    };

    let mut tasks = Vec::with_capacity(cli.tournaments as usize);
    for idx in 0..cli.tournaments as u64 {
        let tournament_id = TournamentId::new_id();

        let mut sinks: Vec<Arc<dyn EventSink>> = vec![Arc::new(registry.create(tournament_id)?)];
        match &channel {
            Some(sink) => sinks.push(Arc::new(sink.clone())),
            None => sinks.push(Arc::new(LogSink)),
        }

        let config = match cli.seed {
            Some(seed) => config.clone().with_seed(seed.wrapping_add(idx)),
            None => config.clone(),
        };

        let tournament = Tournament::new(tournament_id, config, cli.players(idx), sinks)?;
        let settlement = move |winner: SeatId| -> Result<()> {
            info!("Tournament {tournament_id} settled to seat {winner}");
            Ok(())
        };

        tasks.push(tokio::spawn(async move {
            tournament.run(settlement).await
        }));
    }

    let mut wins = AHashMap::<String, u32>::default();
    for task in tasks {
        match task.await? {
            Ok(result) => {
                let events = registry
                    .remove(result.tournament_id)
                    .map(|events| events.len())
                    .unwrap_or_default();

                info!(
                    "Tournament {} won by {} in {} hands ({} events)",
                    result.tournament_id, result.winner_name, result.hands_played, events
                );

                *wins.entry(result.winner_name).or_default() += 1;
            }
            Err(e) => error!("Tournament error: {e}"),
        }
    }

    // Close the channel so the printer drains the last events.
    drop(channel);
    if let Some(printer) = printer {
        printer.await?;
    }

    let mut wins = wins.into_iter().collect::<Vec<_>>();
    wins.sort_by(|(n1, w1), (n2, w2)| w2.cmp(w1).then_with(|| n1.cmp(n2)));
    for (name, count) in wins {
        info!("{name}: {count} wins");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["showdown-bot"]);
        let config = cli.config().unwrap();
        assert_eq!(config, TournamentConfig::default());
        assert_eq!(cli.players, 4);
        assert_eq!(cli.bots, Lineup::Mixed);
        assert!(!cli.json);
    }

    #[test]
    fn cli_validation() {
        assert!(Cli::try_parse_from(["showdown-bot", "--players", "1"]).is_err());
        assert!(Cli::try_parse_from(["showdown-bot", "--players", "10"]).is_err());
        assert!(Cli::try_parse_from(["showdown-bot", "--small-blind", "0"]).is_err());

        let cli = Cli::parse_from(["showdown-bot", "--small-blind", "50", "--big-blind", "20"]);
        assert!(cli.config().is_err());
    }

    #[test]
    fn chip_supply_overflow_is_an_error() {
        let cli = Cli::parse_from(["showdown-bot", "-p", "9", "--starting-stack", "1000000000"]);
        let config = cli.config().unwrap();
        let res = Tournament::new(TournamentId::new_id(), config, cli.players(0), LogSink);
        assert!(res.is_err());
    }

    #[test]
    fn mixed_lineup() {
        let cli = Cli::parse_from(["showdown-bot", "-p", "5", "--seed", "3"]);
        let players = cli.players(0);
        assert_eq!(players.len(), 5);
        assert_eq!(players[2].0.name, "Carol");
        assert!(matches!(players[0].1, AnyBot::Random(_)));
        assert!(matches!(players[1].1, AnyBot::Calling(_)));
        assert!(matches!(players[2].1, AnyBot::Text(_)));
        assert!(matches!(players[3].1, AnyBot::Random(_)));
    }

    #[tokio::test]
    async fn bots_finish_a_tournament() {
        let cli = Cli::parse_from(["showdown-bot", "-p", "3", "--seed", "9", "--max-hands", "50"]);
        let registry = EventRegistry::new();
        let tournament_id = TournamentId::new_id();
        let log = registry.create(tournament_id).unwrap();

        let config = cli.config().unwrap().with_seed(9);
        let tournament = Tournament::new(tournament_id, config, cli.players(0), log).unwrap();
        let result = tournament
            .run(|_: SeatId| -> Result<()> { Ok(()) })
            .await
            .unwrap();

        let total = result.stacks.iter().map(|s| s.stack).sum::<Chips>();
        assert_eq!(total, Chips::new(3_000));
        assert!(result.hands_played <= 50);

        let events = registry.events(tournament_id).unwrap();
        assert_eq!(events.first().unwrap().event_type(), "tournament_start");
        assert_eq!(events.last().unwrap().event_type(), "winner");
    }
}
