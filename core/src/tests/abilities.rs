use super::*;

#[test]
fn test_repair_restores_30_and_starts_cooldown() {
    let mut defender = make_unit(Archetype::Defender, "Defender-1");
    let mut boss = make_boss();
    boss.energy = 200;
    let mut events = Vec::new();

    perform_ability(&mut defender, 1, &mut boss, &mut events).unwrap();

    assert_eq!(boss.energy, 230);
    assert_eq!(defender.abilities[1].cooldown_remaining, 3);
    assert_eq!(
        events,
        vec![CombatEvent::AbilityUsed {
            performer: "Defender-1".to_string(),
            target: BOSS_NAME.to_string(),
            ability: AbilityKind::Repair,
            outcome: AbilityOutcome::Restored { amount: 30 },
        }]
    );
}

#[test]
fn test_heal_restores_40() {
    let mut healer = make_unit(Archetype::Healer, "Healer-1");
    let mut target = make_unit(Archetype::Attacker, "Attacker-1");
    target.energy = 10;
    let mut events = Vec::new();

    perform_ability(&mut healer, 0, &mut target, &mut events).unwrap();

    assert_eq!(target.energy, 50);
    assert_eq!(healer.abilities[0].cooldown_remaining, 3);
}

#[test]
fn test_plasma_cannon_doubles_attack_and_bypasses_armor() {
    let mut attacker = make_unit(Archetype::Attacker, "Attacker-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut attacker, 0, &mut boss, &mut events).unwrap();

    // 25 * 2, untouched by the boss's 20 armor
    assert_eq!(boss.energy, 250);
    assert_eq!(attacker.abilities[0].cooldown_remaining, 4);
}

#[test]
fn test_sniper_shot_triples_attack_with_cooldown_5() {
    let mut sniper = make_unit(Archetype::Sniper, "Sniper-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut sniper, 0, &mut boss, &mut events).unwrap();

    assert_eq!(boss.energy, 180, "300 - 40 * 3");
    assert_eq!(sniper.abilities[0].cooldown_remaining, 5);
}

#[test]
fn test_electric_shock_stuns_only_the_boss() {
    let mut support = make_unit(Archetype::Support, "Support-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut support, 1, &mut boss, &mut events).unwrap();

    assert_eq!(boss.energy, 291, "18 / 2 = 9 damage");
    assert_eq!(boss.stun_turns, 1);
    assert!(events.contains(&CombatEvent::StunApplied {
        name: BOSS_NAME.to_string(),
        turns: 1,
    }));

    // Same move against a team unit deals damage but never stuns
    let mut other = make_unit(Archetype::Attacker, "Attacker-1");
    support.abilities[1].cooldown_remaining = 0;
    let mut events = Vec::new();
    perform_ability(&mut support, 1, &mut other, &mut events).unwrap();
    assert_eq!(other.stun_turns, 0);
    assert!(!events
        .iter()
        .any(|e| matches!(e, CombatEvent::StunApplied { .. })));
}

#[test]
fn test_activation_rejected_while_on_cooldown() {
    let mut sniper = make_unit(Archetype::Sniper, "Sniper-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut sniper, 0, &mut boss, &mut events).unwrap();
    let energy_after_first = boss.energy;
    let cooldown_after_first = sniper.abilities[0].cooldown_remaining;
    let events_after_first = events.len();

    let err = perform_ability(&mut sniper, 0, &mut boss, &mut events).unwrap_err();
    assert_eq!(
        err,
        ActionError::OnCooldown {
            ability: AbilityKind::SniperShot,
            remaining: 5,
        }
    );
    // Rejection mutates nothing and narrates nothing by itself
    assert_eq!(boss.energy, energy_after_first);
    assert_eq!(sniper.abilities[0].cooldown_remaining, cooldown_after_first);
    assert_eq!(events.len(), events_after_first);
}

#[test]
fn test_out_of_range_slot_rejected() {
    let mut healer = make_unit(Archetype::Healer, "Healer-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    let err = perform_ability(&mut healer, 5, &mut boss, &mut events).unwrap_err();
    assert_eq!(err, ActionError::SlotOutOfRange { slot: 5 });
    assert!(events.is_empty());
    assert_eq!(boss.energy, 300);
}

#[test]
fn test_super_shield_raises_and_sets_timers() {
    let mut defender = make_unit(Archetype::Defender, "Defender-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut defender, 0, &mut boss, &mut events).unwrap();

    assert!(defender.shield_active);
    assert_eq!(defender.abilities[0].active_turns_remaining, SHIELD_DURATION);
    assert_eq!(defender.abilities[0].cooldown_remaining, 4);
    assert_eq!(
        events,
        vec![CombatEvent::AbilityUsed {
            performer: "Defender-1".to_string(),
            target: "Defender-1".to_string(),
            ability: AbilityKind::SuperShield,
            outcome: AbilityOutcome::ShieldRaised { turns: SHIELD_DURATION },
        }]
    );
}

#[test]
fn test_redundant_super_shield_is_a_narrated_noop() {
    let mut defender = make_unit(Archetype::Defender, "Defender-1");
    let mut boss = make_boss();
    let mut events = Vec::new();

    perform_ability(&mut defender, 0, &mut boss, &mut events).unwrap();
    defender.abilities[0].cooldown_remaining = 0;
    let duration_before = defender.abilities[0].active_turns_remaining;

    let mut events = Vec::new();
    perform_ability(&mut defender, 0, &mut boss, &mut events).unwrap();

    assert_eq!(
        events,
        vec![CombatEvent::AbilityUsed {
            performer: "Defender-1".to_string(),
            target: "Defender-1".to_string(),
            ability: AbilityKind::SuperShield,
            outcome: AbilityOutcome::ShieldAlreadyActive,
        }]
    );
    assert_eq!(
        defender.abilities[0].active_turns_remaining, duration_before,
        "reapplying never extends the duration"
    );
    assert_eq!(
        defender.abilities[0].cooldown_remaining, 0,
        "cooldown is not reset by a redundant activation"
    );
}

#[test]
fn test_shielded_target_takes_half_ability_damage() {
    let mut attacker = make_unit(Archetype::Attacker, "Attacker-1");
    let mut boss = make_boss();
    boss.shield_active = true;
    let mut events = Vec::new();

    perform_ability(&mut attacker, 0, &mut boss, &mut events).unwrap();

    assert_eq!(boss.energy, 275, "plasma 50 halved to 25 by the shield");
    assert!(events.contains(&CombatEvent::AbilityUsed {
        performer: "Attacker-1".to_string(),
        target: BOSS_NAME.to_string(),
        ability: AbilityKind::PlasmaCannon,
        outcome: AbilityOutcome::Damage { amount: 25 },
    }));
}

#[test]
fn test_ability_kill_emits_defeated() {
    let mut sniper = make_unit(Archetype::Sniper, "Sniper-1");
    let mut boss = make_boss();
    boss.energy = 100;
    let mut events = Vec::new();

    perform_ability(&mut sniper, 0, &mut boss, &mut events).unwrap();

    assert_eq!(boss.energy, 0);
    assert_eq!(
        events.last(),
        Some(&CombatEvent::UnitDefeated {
            name: BOSS_NAME.to_string(),
        })
    );
}
