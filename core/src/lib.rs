//! Scrapclash core: a turn-based boss-battle combat engine.
//!
//! A team of three player-built mech units fights a single boss with basic
//! attacks and cooldown-gated abilities. The engine is a deterministic,
//! synchronous state machine; everything interactive or random (action
//! menus, boss targeting) sits behind the [`Chooser`] boundary, and all
//! narration flows out through the [`Presenter`] boundary as structured
//! [`CombatEvent`]s.

mod battle;
mod chooser;
mod combat;
mod error;
mod events;
mod presenter;
mod rng;
mod state;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use battle::run_match;
pub use chooser::{ActionChoice, Chooser, ScriptedChooser, SeededChooser};
pub use combat::{
    ability_damage, basic_damage, perform_ability, perform_basic_attack, restore_amount,
    SHIELD_DURATION, STUN_DURATION,
};
pub use error::{ActionError, ActionResult};
pub use events::{AbilityOutcome, CombatEvent, MatchOutcome};
pub use presenter::{EventLog, NullPresenter, Presenter};
pub use rng::{BattleRng, XorShiftRng};
pub use state::{MatchState, BOSS_NAME, ROUND_REGEN, TEAM_SIZE};
pub use types::{Ability, AbilityKind, Archetype, DamageOutcome, TickReport, Unit};
pub use view::{AbilityView, MatchView, UnitView};
