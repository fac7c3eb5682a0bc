//! View types for front ends.
//!
//! Snapshots of match state for rendering between events (status lines,
//! ability menus). Serializable so front ends can ship them anywhere.

use serde::{Deserialize, Serialize};

use crate::state::MatchState;
use crate::types::Unit;

/// One ability menu entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbilityView {
    pub name: String,
    pub cooldown: i32,
    pub ready: bool,
}

/// Snapshot of a single unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitView {
    pub name: String,
    pub energy: i32,
    pub armor: i32,
    pub attack: i32,
    pub shield_active: bool,
    pub stun_turns: i32,
    pub abilities: Vec<AbilityView>,
}

impl From<&Unit> for UnitView {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name.clone(),
            energy: unit.energy,
            armor: unit.armor,
            attack: unit.attack,
            shield_active: unit.shield_active,
            stun_turns: unit.stun_turns,
            abilities: unit
                .abilities
                .iter()
                .map(|a| AbilityView {
                    name: a.kind.name().to_string(),
                    cooldown: a.cooldown_remaining,
                    ready: a.is_ready(),
                })
                .collect(),
        }
    }
}

/// The whole battlefield at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub round: i32,
    pub team: Vec<UnitView>,
    pub boss: UnitView,
}

impl MatchView {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            round: state.round,
            team: state.team.iter().map(UnitView::from).collect(),
            boss: UnitView::from(&state.boss),
        }
    }
}
