//! Combat resolution: the pure damage/restore math plus the apply functions
//! that mutate units and record narration events.
//!
//! Basic attacks are mitigated by armor; ability damage bypasses armor
//! entirely. Both paths go through [`Unit::receive_damage`], so an active
//! shield halves either kind.

use crate::error::{ActionError, ActionResult};
use crate::events::{AbilityOutcome, CombatEvent};
use crate::types::{AbilityKind, Unit};

/// Turns a freshly raised shield stays in force
pub const SHIELD_DURATION: i32 = 2;
/// Turns of stun an electric shock puts on the boss
pub const STUN_DURATION: i32 = 1;

/// Damage a basic attack deals before shields: attack minus armor, never
/// negative.
pub fn basic_damage(attack: i32, armor: i32) -> i32 {
    (attack - armor).max(0)
}

/// Raw damage an ability deals for a performer with the given attack stat;
/// `None` for non-damaging kinds.
pub fn ability_damage(kind: AbilityKind, attack: i32) -> Option<i32> {
    match kind {
        AbilityKind::ElectricShock => Some(attack / 2),
        AbilityKind::PlasmaCannon => Some(attack * 2),
        AbilityKind::SniperShot => Some(attack * 3),
        _ => None,
    }
}

/// Energy a restorative ability grants; `None` for non-restorative kinds
pub fn restore_amount(kind: AbilityKind) -> Option<i32> {
    match kind {
        AbilityKind::Repair => Some(30),
        AbilityKind::Heal => Some(40),
        _ => None,
    }
}

/// Resolve a basic attack from `attacker` against `target`. Always succeeds;
/// zero damage is permitted.
pub fn perform_basic_attack(attacker: &Unit, target: &mut Unit, events: &mut Vec<CombatEvent>) {
    let raw = basic_damage(attacker.attack, target.armor);
    let hit = target.receive_damage(raw);
    events.push(CombatEvent::AttackPerformed {
        attacker: attacker.name.clone(),
        target: target.name.clone(),
        damage: hit.inflicted,
    });
    if hit.defeated {
        events.push(CombatEvent::UnitDefeated {
            name: target.name.clone(),
        });
    }
}

/// Activate the ability in `slot` (0-based) against `target`.
///
/// Rejects without touching any state when the slot is out of range or the
/// ability is cooling down. On success the cooldown starts, except for a
/// redundant shield activation, which narrates and leaves every timer alone.
pub fn perform_ability(
    performer: &mut Unit,
    slot: usize,
    target: &mut Unit,
    events: &mut Vec<CombatEvent>,
) -> ActionResult<()> {
    let ability = performer
        .abilities
        .get(slot)
        .ok_or(ActionError::SlotOutOfRange { slot })?;
    if !ability.is_ready() {
        return Err(ActionError::OnCooldown {
            ability: ability.kind,
            remaining: ability.cooldown_remaining,
        });
    }
    let kind = ability.kind;

    match kind {
        AbilityKind::SuperShield => {
            if performer.shield_active {
                events.push(CombatEvent::AbilityUsed {
                    performer: performer.name.clone(),
                    target: performer.name.clone(),
                    ability: kind,
                    outcome: AbilityOutcome::ShieldAlreadyActive,
                });
                return Ok(());
            }
            performer.shield_active = true;
            performer.abilities[slot].active_turns_remaining = SHIELD_DURATION;
            events.push(CombatEvent::AbilityUsed {
                performer: performer.name.clone(),
                target: performer.name.clone(),
                ability: kind,
                outcome: AbilityOutcome::ShieldRaised {
                    turns: SHIELD_DURATION,
                },
            });
        }
        AbilityKind::Repair | AbilityKind::Heal => {
            let amount = restore_amount(kind).unwrap_or(0);
            target.change_energy(amount);
            events.push(CombatEvent::AbilityUsed {
                performer: performer.name.clone(),
                target: target.name.clone(),
                ability: kind,
                outcome: AbilityOutcome::Restored { amount },
            });
        }
        AbilityKind::ElectricShock | AbilityKind::PlasmaCannon | AbilityKind::SniperShot => {
            let raw = ability_damage(kind, performer.attack).unwrap_or(0);
            let hit = target.receive_damage(raw);
            events.push(CombatEvent::AbilityUsed {
                performer: performer.name.clone(),
                target: target.name.clone(),
                ability: kind,
                outcome: AbilityOutcome::Damage {
                    amount: hit.inflicted,
                },
            });
            if hit.defeated {
                events.push(CombatEvent::UnitDefeated {
                    name: target.name.clone(),
                });
            }
            if kind == AbilityKind::ElectricShock && target.is_boss() {
                target.receive_stun(STUN_DURATION);
                events.push(CombatEvent::StunApplied {
                    name: target.name.clone(),
                    turns: STUN_DURATION,
                });
            }
        }
    }

    performer.abilities[slot].trigger_cooldown();
    Ok(())
}
