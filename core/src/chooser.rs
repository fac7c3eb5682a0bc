//! The decision boundary: everything nondeterministic or interactive in a
//! match is asked of a [`Chooser`], so the engine stays a pure state
//! machine and tests can script entire battles.

use std::collections::VecDeque;

use crate::rng::{BattleRng, XorShiftRng};
use crate::types::Unit;

/// Top-level action a team unit takes on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    BasicAttack,
    UseAbility,
}

/// External decision provider for a match.
///
/// Implementations may block (console prompt) or answer instantly (scripts,
/// seeded RNG); the controller waits synchronously either way.
pub trait Chooser {
    /// Pick the action for a team unit's turn. The boss is passed along so
    /// interactive front ends can show what the unit is up against.
    fn choose_action(&mut self, unit: &Unit, boss: &Unit) -> ActionChoice;

    /// Pick an ability from the unit's menu: 0 cancels the action (the turn
    /// still completes with its cooldown tick), `1..=len` is the 1-based slot.
    fn choose_ability_slot(&mut self, unit: &Unit) -> usize;

    /// Index of the boss's target among the currently living team units
    fn choose_boss_target(&mut self, living: &[Unit]) -> usize;
}

/// Replays a pre-recorded decision script; used by tests and replays.
///
/// Each queue is consumed independently. When a queue runs dry the chooser
/// falls back to a basic attack / cancel / front target.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    actions: VecDeque<ActionChoice>,
    slots: VecDeque<usize>,
    targets: VecDeque<usize>,
}

impl ScriptedChooser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(mut self, actions: &[ActionChoice]) -> Self {
        self.actions = actions.iter().copied().collect();
        self
    }

    pub fn with_slots(mut self, slots: &[usize]) -> Self {
        self.slots = slots.iter().copied().collect();
        self
    }

    pub fn with_targets(mut self, targets: &[usize]) -> Self {
        self.targets = targets.iter().copied().collect();
        self
    }
}

impl Chooser for ScriptedChooser {
    fn choose_action(&mut self, _unit: &Unit, _boss: &Unit) -> ActionChoice {
        self.actions.pop_front().unwrap_or(ActionChoice::BasicAttack)
    }

    fn choose_ability_slot(&mut self, _unit: &Unit) -> usize {
        self.slots.pop_front().unwrap_or(0)
    }

    fn choose_boss_target(&mut self, _living: &[Unit]) -> usize {
        self.targets.pop_front().unwrap_or(0)
    }
}

/// Headless chooser: every unit basic-attacks and the boss picks its target
/// uniformly at random from a seeded RNG.
#[derive(Debug)]
pub struct SeededChooser {
    rng: XorShiftRng,
}

impl SeededChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Chooser for SeededChooser {
    fn choose_action(&mut self, _unit: &Unit, _boss: &Unit) -> ActionChoice {
        ActionChoice::BasicAttack
    }

    fn choose_ability_slot(&mut self, _unit: &Unit) -> usize {
        0
    }

    fn choose_boss_target(&mut self, living: &[Unit]) -> usize {
        self.rng.pick_index(living.len())
    }
}
