// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions and the providers that make them.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{future::Future, sync::Arc, time::Duration};
use thiserror::Error;

use crate::{
    game_state::{DecisionRequest, PlayerAction},
    poker::Chips,
};

/// A player decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The action.
    pub action: PlayerAction,
    /// The total bet for a raise, ignored for other actions.
    pub amount: Chips,
    /// Short explanation of the decision.
    pub reasoning: Option<String>,
    /// Longer free text thinking behind the decision.
    pub thinking: Option<String>,
}

impl Decision {
    /// Creates a decision with no explanation.
    pub fn new(action: PlayerAction, amount: Chips) -> Self {
        Self {
            action,
            amount,
            reasoning: None,
            thinking: None,
        }
    }

    /// A fold decision.
    pub fn fold() -> Self {
        Self::new(PlayerAction::Fold, Chips::ZERO)
    }

    /// A check decision.
    pub fn check() -> Self {
        Self::new(PlayerAction::Check, Chips::ZERO)
    }

    /// A call decision.
    pub fn call() -> Self {
        Self::new(PlayerAction::Call, Chips::ZERO)
    }

    /// A raise to a total bet of `amount`.
    pub fn raise_to(amount: Chips) -> Self {
        Self::new(PlayerAction::Raise, amount)
    }

    /// Sets the decision reasoning.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}

/// Why a decision could not be used.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The provider did not answer in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// The provider failed.
    #[error("provider error: {0}")]
    Provider(#[from] anyhow::Error),
    /// The provider answer could not be understood.
    #[error("malformed decision: {0}")]
    Malformed(String),
    /// The provider chose an action that is not legal.
    #[error("illegal action {}", .0.label())]
    Illegal(PlayerAction),
}

/// A source of player decisions, an AI agent, a scripted bot or a test harness.
///
/// Providers may be slow or fail, callers bound each call with a timeout and
/// replace failed decisions with a safe default.
pub trait DecisionProvider: Send + Sync {
    /// Decides an action for the player in the request.
    fn decide(&self, req: &DecisionRequest) -> impl Future<Output = Result<Decision>> + Send;
}

impl<P: DecisionProvider> DecisionProvider for Arc<P> {
    fn decide(&self, req: &DecisionRequest) -> impl Future<Output = Result<Decision>> + Send {
        self.as_ref().decide(req)
    }
}

/// Parses a free text decision.
///
/// The text may start with a `<thinking>...</thinking>` section, the first
/// non empty line after it must be one of `fold`, `check`, `call`, or
/// `raise <amount>` where the amount is the total bet.
pub fn parse_decision(text: &str, req: &DecisionRequest) -> Result<Decision, DecisionError> {
    const OPEN: &str = "<thinking>";
    const CLOSE: &str = "</thinking>";

    let (thinking, rest) = match (text.find(OPEN), text.find(CLOSE)) {
        (Some(start), Some(end)) if start < end => {
            let thinking = text[start + OPEN.len()..end].trim().to_string();
            (Some(thinking), &text[end + CLOSE.len()..])
        }
        _ => (None, text),
    };

    let line = rest
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_lowercase)
        .ok_or_else(|| DecisionError::Malformed("empty response".to_string()))?;

    let mut words = line.split_whitespace();
    let action = match words.next().map(|w| w.trim_end_matches([',', '.', ':'])) {
        Some("fold") => PlayerAction::Fold,
        Some("check") => PlayerAction::Check,
        Some("call") => PlayerAction::Call,
        Some("raise") | Some("bet") => PlayerAction::Raise,
        _ => return Err(DecisionError::Malformed(line.clone())),
    };

    if !req.check_action(action) {
        return Err(DecisionError::Illegal(action));
    }

    let amount = if action == PlayerAction::Raise {
        let amount = words
            .find(|w| *w != "to")
            .and_then(|w| w.trim_end_matches(['.', ',']).parse::<u32>().ok())
            .ok_or_else(|| DecisionError::Malformed(line.clone()))?;
        Chips::new(amount)
    } else {
        Chips::ZERO
    };

    Ok(Decision {
        action,
        amount,
        reasoning: Some(line),
        thinking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::tests::request;

    fn facing_bet() -> DecisionRequest {
        request(vec![
            PlayerAction::Fold,
            PlayerAction::Call,
            PlayerAction::Raise,
        ])
    }

    #[test]
    fn parse_simple_actions() {
        let req = facing_bet();
        assert_eq!(parse_decision("fold", &req).unwrap().action, PlayerAction::Fold);
        assert_eq!(parse_decision("  Call\n", &req).unwrap().action, PlayerAction::Call);

        let d = parse_decision("raise 200", &req).unwrap();
        assert_eq!(d.action, PlayerAction::Raise);
        assert_eq!(d.amount, Chips::new(200));

        let d = parse_decision("RAISE to 150.", &req).unwrap();
        assert_eq!(d.amount, Chips::new(150));
    }

    #[test]
    fn parse_thinking_section() {
        let req = facing_bet();
        let text = "<thinking>\nPocket aces, raise big.\n</thinking>\n\nraise 300\n";
        let d = parse_decision(text, &req).unwrap();
        assert_eq!(d.action, PlayerAction::Raise);
        assert_eq!(d.amount, Chips::new(300));
        assert_eq!(d.thinking.as_deref(), Some("Pocket aces, raise big."));
        assert_eq!(d.reasoning.as_deref(), Some("raise 300"));
    }

    #[test]
    fn parse_errors() {
        let req = facing_bet();
        assert!(matches!(
            parse_decision("check", &req),
            Err(DecisionError::Illegal(PlayerAction::Check))
        ));
        assert!(matches!(
            parse_decision("raise lots", &req),
            Err(DecisionError::Malformed(_))
        ));
        assert!(matches!(
            parse_decision("raise", &req),
            Err(DecisionError::Malformed(_))
        ));
        assert!(matches!(
            parse_decision("I am not sure", &req),
            Err(DecisionError::Malformed(_))
        ));
        assert!(matches!(
            parse_decision("<thinking>hmm</thinking>\n  \n", &req),
            Err(DecisionError::Malformed(_))
        ));
    }

    struct AlwaysFold;

    impl DecisionProvider for AlwaysFold {
        async fn decide(&self, _req: &DecisionRequest) -> Result<Decision> {
            Ok(Decision::fold())
        }
    }

    #[tokio::test]
    async fn shared_provider() {
        let provider = Arc::new(AlwaysFold);
        let d = provider.decide(&facing_bet()).await.unwrap();
        assert_eq!(d, Decision::fold());
    }
}
