// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Event sinks.
use log::{info, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

use showdown_core::event::{EventRecord, EventSink};

/// A sink that writes each event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, record: EventRecord) {
        info!("{record}");
    }
}

/// A sink that forwards events to a channel.
///
/// Events are dropped when the channel is full or closed so that a slow
/// consumer never holds up a tournament.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<EventRecord>,
}

impl ChannelSink {
    /// Creates a sink and the receiver for its events.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<EventRecord>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, record: EventRecord) {
        match self.tx.try_send(record) {
            Ok(()) => {}
            Err(TrySendError::Full(record)) => {
                warn!("Event channel full, dropping {} event", record.event_type());
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_core::{
        event::Event,
        poker::{Chips, SeatId},
    };

    fn deal() -> EventRecord {
        EventRecord::new(Event::Deal {
            seat: SeatId::new(0),
            cards: vec!["As".parse().unwrap(), "Kd".parse().unwrap()],
        })
    }

    #[test]
    fn channel_drops_when_full() {
        let (sink, mut rx) = ChannelSink::new(1);
        sink.emit(deal());
        sink.emit(EventRecord::new(Event::BlindsUp {
            level: 1,
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        }));

        assert_eq!(rx.try_recv().unwrap().event_type(), "deal");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (sink, rx) = ChannelSink::new(4);
        drop(rx);
        sink.emit(deal());
        LogSink.emit(deal());
    }
}
