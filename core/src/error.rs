//! Error types for action resolution.
//!
//! Every error here is recoverable: the match controller reports the
//! rejection as a [`crate::CombatEvent::AbilityRejected`] event and the turn
//! proceeds. Nothing in the engine panics or aborts a match.

use thiserror::Error;

use crate::types::AbilityKind;

/// Why a chosen action could not resolve
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Ability slot index past the end of the unit's roster
    #[error("ability slot {slot} is out of range")]
    SlotOutOfRange { slot: usize },
    /// Activation attempted before the cooldown elapsed; no state was touched
    #[error("{ability} is still on cooldown ({remaining} turns left)")]
    OnCooldown {
        ability: AbilityKind,
        remaining: i32,
    },
}

/// Result type alias for action resolution
pub type ActionResult<T> = Result<T, ActionError>;
