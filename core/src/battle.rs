//! The match controller: sequences team turns, boss retaliation, roster
//! cleanup and end-of-round regeneration until one side is done.
//!
//! Round shape: TeamPhase -> BossPhase -> CleanupPhase -> RegenPhase.
//! Victory is checked right after TeamPhase (the boss can die mid-phase);
//! defeat is checked after CleanupPhase, and a terminated match skips regen.

use log::{debug, info};

use crate::chooser::{ActionChoice, Chooser};
use crate::combat::{perform_ability, perform_basic_attack};
use crate::events::{CombatEvent, MatchOutcome};
use crate::presenter::Presenter;
use crate::state::{MatchState, ROUND_REGEN};

/// Run a match to completion and return how it ended.
///
/// Every event is forwarded to `presenter` in resolution order; `chooser`
/// is consulted for each team unit's action and the boss's target.
pub fn run_match(
    state: &mut MatchState,
    chooser: &mut dyn Chooser,
    presenter: &mut dyn Presenter,
) -> MatchOutcome {
    loop {
        state.round += 1;
        debug!("round {} begins", state.round);

        team_phase(state, chooser, presenter);
        if !state.boss.is_alive() {
            return finish(MatchOutcome::Victory, presenter);
        }

        boss_phase(state, chooser, presenter);
        cleanup_phase(state);
        if state.team.is_empty() {
            return finish(MatchOutcome::Defeat, presenter);
        }

        regen_phase(state, presenter);
    }
}

fn finish(outcome: MatchOutcome, presenter: &mut dyn Presenter) -> MatchOutcome {
    info!("match over: {:?}", outcome);
    presenter.present(&CombatEvent::MatchEnded { outcome });
    outcome
}

/// Each living team unit acts once against the boss, then ticks its own
/// cooldowns exactly once, action or not. Once the boss is down the
/// remaining units still run their turn loop, but their actions resolve to
/// nothing.
pub(crate) fn team_phase(
    state: &mut MatchState,
    chooser: &mut dyn Chooser,
    presenter: &mut dyn Presenter,
) {
    for idx in 0..state.team.len() {
        let name = state.team[idx].name.clone();
        let mut events = vec![CombatEvent::TurnStarted { name: name.clone() }];

        match chooser.choose_action(&state.team[idx], &state.boss) {
            ActionChoice::BasicAttack => {
                if state.boss.is_alive() {
                    perform_basic_attack(&state.team[idx], &mut state.boss, &mut events);
                }
            }
            ActionChoice::UseAbility => {
                let pick = chooser.choose_ability_slot(&state.team[idx]);
                if pick == 0 {
                    events.push(CombatEvent::ActionCancelled { name: name.clone() });
                } else if state.boss.is_alive() {
                    if let Err(err) =
                        perform_ability(&mut state.team[idx], pick - 1, &mut state.boss, &mut events)
                    {
                        events.push(CombatEvent::AbilityRejected {
                            performer: name.clone(),
                            reason: err.to_string(),
                        });
                    }
                }
            }
        }

        if state.team[idx].tick_cooldowns().shield_expired {
            events.push(CombatEvent::ShieldExpired { name });
        }
        flush(presenter, &mut events);
    }
}

/// The boss swings at one random living team unit, unless stunned, in which
/// case the stun counter ticks down instead. Its own cooldowns tick once
/// either way.
pub(crate) fn boss_phase(
    state: &mut MatchState,
    chooser: &mut dyn Chooser,
    presenter: &mut dyn Presenter,
) {
    let mut events = vec![CombatEvent::TurnStarted {
        name: state.boss.name.clone(),
    }];

    if state.boss.stun_turns > 0 {
        state.boss.stun_turns -= 1;
        events.push(CombatEvent::AttackStunned {
            name: state.boss.name.clone(),
            remaining: state.boss.stun_turns,
        });
    } else if !state.team.is_empty() {
        let idx = chooser
            .choose_boss_target(&state.team)
            .min(state.team.len() - 1);
        perform_basic_attack(&state.boss, &mut state.team[idx], &mut events);
    }

    if state.boss.tick_cooldowns().shield_expired {
        events.push(CombatEvent::ShieldExpired {
            name: state.boss.name.clone(),
        });
    }
    flush(presenter, &mut events);
}

/// Sweep defeated units out of the roster. Defeat events were already
/// emitted when the fatal hit landed.
pub(crate) fn cleanup_phase(state: &mut MatchState) {
    state.remove_defeated();
}

/// Every survivor and the boss regain a fixed amount of energy
pub(crate) fn regen_phase(state: &mut MatchState, presenter: &mut dyn Presenter) {
    let mut events = Vec::new();
    for unit in &mut state.team {
        unit.change_energy(ROUND_REGEN);
        events.push(CombatEvent::RoundRegen {
            name: unit.name.clone(),
            amount: ROUND_REGEN,
        });
    }
    state.boss.change_energy(ROUND_REGEN);
    events.push(CombatEvent::RoundRegen {
        name: state.boss.name.clone(),
        amount: ROUND_REGEN,
    });
    flush(presenter, &mut events);
}

fn flush(presenter: &mut dyn Presenter, events: &mut Vec<CombatEvent>) {
    for event in events.drain(..) {
        presenter.present(&event);
    }
}
