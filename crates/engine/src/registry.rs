// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Event logs of running tournaments.
use ahash::AHashMap;
use anyhow::{Result, bail};
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

use showdown_core::{
    event::{EventRecord, EventSink},
    poker::TournamentId,
};

/// A registry of tournament event logs that observers can query.
///
/// A log is created before a tournament starts and lives until it is removed.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry(Arc<Mutex<Shared>>);

#[derive(Debug, Default)]
struct Shared {
    logs: AHashMap<TournamentId, Vec<EventRecord>>,
}

impl EventRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the log for a tournament and returns a sink that appends to it.
    pub fn create(&self, tournament_id: TournamentId) -> Result<TournamentLog> {
        let mut shared = self.0.lock();
        if shared.logs.contains_key(&tournament_id) {
            bail!("Tournament {tournament_id} already registered");
        }

        shared.logs.insert(tournament_id, Vec::default());

        Ok(TournamentLog {
            tournament_id,
            registry: self.clone(),
        })
    }

    /// Returns a copy of a tournament events.
    pub fn events(&self, tournament_id: TournamentId) -> Option<Vec<EventRecord>> {
        self.0.lock().logs.get(&tournament_id).cloned()
    }

    /// Removes a tournament log and returns its events.
    pub fn remove(&self, tournament_id: TournamentId) -> Option<Vec<EventRecord>> {
        self.0.lock().logs.remove(&tournament_id)
    }

    /// The registered tournaments in id order.
    pub fn tournaments(&self) -> Vec<TournamentId> {
        let mut ids = self.0.lock().logs.keys().copied().collect::<Vec<_>>();
        ids.sort();
        ids
    }
}

/// An event sink that appends to a tournament log in a registry.
#[derive(Debug, Clone)]
pub struct TournamentLog {
    tournament_id: TournamentId,
    registry: EventRegistry,
}

impl TournamentLog {
    /// The tournament id.
    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }
}

impl EventSink for TournamentLog {
    fn emit(&self, record: EventRecord) {
        match self.registry.0.lock().logs.get_mut(&self.tournament_id) {
            Some(log) => log.push(record),
            None => debug!(
                "Tournament {} log removed, dropping {} event",
                self.tournament_id,
                record.event_type()
            ),
        }
    }
}
