use serde::{Deserialize, Serialize};

use crate::events::MatchOutcome;
use crate::types::{Archetype, Unit};

/// Number of units a team is built from
pub const TEAM_SIZE: usize = 3;
/// Energy every survivor (and the boss) regains at the end of a round
pub const ROUND_REGEN: i32 = 10;
/// Name of the single boss unit
pub const BOSS_NAME: &str = "Mega Boss";

/// The complete match state: team roster, boss, round counter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    /// Active team roster in turn order; defeated units are removed
    pub team: Vec<Unit>,
    /// The boss is never removed; its energy reaching 0 ends the match
    pub boss: Unit,
    /// Current round, 1-indexed once the match loop starts
    pub round: i32,
}

impl MatchState {
    /// Build a match from exactly three archetype picks. Units are named
    /// `<Label>-<n>` in pick order.
    pub fn new(picks: [Archetype; TEAM_SIZE]) -> Self {
        let team = picks
            .iter()
            .enumerate()
            .map(|(i, archetype)| {
                Unit::from_archetype(*archetype, &format!("{}-{}", archetype.label(), i + 1))
            })
            .collect();
        Self {
            team,
            boss: Unit::from_archetype(Archetype::Boss, BOSS_NAME),
            round: 0,
        }
    }

    /// Drop every team unit whose energy hit zero
    pub fn remove_defeated(&mut self) {
        self.team.retain(|unit| unit.is_alive());
    }

    /// Terminal result, if the match is over. Boss defeat wins even when the
    /// roster also looks bad, since the win check runs first each round.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.boss.is_alive() {
            Some(MatchOutcome::Victory)
        } else if self.team.is_empty() {
            Some(MatchOutcome::Defeat)
        } else {
            None
        }
    }
}
