// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bounded decision calls with a safe fallback.
use log::warn;
use std::time::Duration;
use tokio::time;

use showdown_core::{
    decision::{Decision, DecisionError, DecisionProvider},
    game_state::{DecisionRequest, PlayerAction},
    poker::Chips,
};

/// A decision ready to be applied.
#[derive(Debug)]
pub struct CheckedDecision {
    /// The decision to apply.
    pub decision: Decision,
    /// Why the provider decision was replaced by the fallback.
    pub fallback: Option<DecisionError>,
}

/// The decision used when a provider fails: check if free, call otherwise.
pub fn fallback_decision(req: &DecisionRequest) -> Decision {
    if req.can_check() {
        Decision::check()
    } else {
        Decision::call()
    }
}

/// Asks a provider for a decision, waiting at most `timeout`.
///
/// A provider error, a timeout, or a decision that is not legal for the
/// request all resolve to the fallback decision.
pub async fn decide<D>(provider: &D, req: &DecisionRequest, timeout: Duration) -> CheckedDecision
where
    D: DecisionProvider,
{
    let res = match time::timeout(timeout, provider.decide(req)).await {
        Ok(Ok(decision)) => validate(decision, req),
        Ok(Err(e)) => Err(e
            .downcast::<DecisionError>()
            .unwrap_or_else(DecisionError::Provider)),
        Err(_) => Err(DecisionError::Timeout(timeout)),
    };

    match res {
        Ok(decision) => CheckedDecision {
            decision,
            fallback: None,
        },
        Err(e) => {
            let decision = fallback_decision(req);
            warn!(
                "Tournament {} hand {} player {}: {e}, fallback to {}",
                req.table.tournament_id,
                req.table.hand_number,
                req.player.seat,
                decision.action.label()
            );

            CheckedDecision {
                decision,
                fallback: Some(e),
            }
        }
    }
}

fn validate(decision: Decision, req: &DecisionRequest) -> Result<Decision, DecisionError> {
    if !req.check_action(decision.action) {
        return Err(DecisionError::Illegal(decision.action));
    }

    if decision.action != PlayerAction::Raise && !decision.amount.is_zero() {
        // Only raises carry an amount.
        return Ok(Decision {
            amount: Chips::ZERO,
            ..decision
        });
    }

    Ok(decision)
}
