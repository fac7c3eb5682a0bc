use serde::{Deserialize, Serialize};

use crate::types::AbilityKind;

/// How a match ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    Victory,
    Defeat,
}

/// What an ability activation did, for narration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AbilityOutcome {
    /// Dealt direct damage (armor-bypassing, shield-reduced amount)
    Damage { amount: i32 },
    /// Restored energy
    Restored { amount: i32 },
    /// Shield raised for the given number of turns
    ShieldRaised { turns: i32 },
    /// Shield was already up; nothing changed
    ShieldAlreadyActive,
}

/// Events generated during combat for narration and replay.
///
/// Emission order follows the order operations resolve in: an attack event
/// precedes the defeat it caused, a regen event follows the removal sweep
/// that spared the unit, and so on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CombatEvent {
    #[serde(rename_all = "camelCase")]
    TurnStarted { name: String },
    #[serde(rename_all = "camelCase")]
    AttackPerformed {
        attacker: String,
        target: String,
        damage: i32,
    },
    #[serde(rename_all = "camelCase")]
    AbilityUsed {
        performer: String,
        target: String,
        ability: AbilityKind,
        outcome: AbilityOutcome,
    },
    /// Chosen ability could not activate (bad slot or on cooldown); the turn
    /// still completes and cooldowns still tick.
    #[serde(rename_all = "camelCase")]
    AbilityRejected { performer: String, reason: String },
    /// Unit backed out of the ability menu
    #[serde(rename_all = "camelCase")]
    ActionCancelled { name: String },
    #[serde(rename_all = "camelCase")]
    StunApplied { name: String, turns: i32 },
    /// Attack suppressed by an active stun; the counter just went down by one
    #[serde(rename_all = "camelCase")]
    AttackStunned { name: String, remaining: i32 },
    #[serde(rename_all = "camelCase")]
    ShieldExpired { name: String },
    #[serde(rename_all = "camelCase")]
    UnitDefeated { name: String },
    #[serde(rename_all = "camelCase")]
    RoundRegen { name: String, amount: i32 },
    #[serde(rename_all = "camelCase")]
    MatchEnded { outcome: MatchOutcome },
}
