use super::*;

#[test]
fn test_archetype_base_stats() {
    let attacker = make_unit(Archetype::Attacker, "Attacker-1");
    assert_eq!(
        (attacker.energy, attacker.armor, attacker.attack),
        (100, 5, 25)
    );
    assert_eq!(
        attacker.abilities.iter().map(|a| a.kind).collect::<Vec<_>>(),
        vec![AbilityKind::PlasmaCannon, AbilityKind::ElectricShock]
    );

    let sniper = make_unit(Archetype::Sniper, "Sniper-1");
    assert_eq!((sniper.energy, sniper.armor, sniper.attack), (90, 8, 40));
    assert_eq!(sniper.abilities.len(), 1);

    let boss = make_boss();
    assert_eq!((boss.energy, boss.armor, boss.attack), (300, 20, 40));
    assert!(boss.is_boss());
    assert!(!attacker.is_boss());
}

#[test]
fn test_defeat_fires_only_on_the_killing_hit() {
    let mut unit = make_unit(Archetype::Healer, "Healer-1");
    unit.energy = 5;

    let hit = unit.receive_damage(5);
    assert!(hit.defeated, "reaching exactly 0 counts as defeated");
    assert!(!unit.is_alive());

    let again = unit.receive_damage(10);
    assert!(!again.defeated, "a dead unit cannot be defeated twice");
    assert_eq!(unit.energy, 0);
}

#[test]
fn test_stun_overwrites_instead_of_stacking() {
    let mut boss = make_boss();
    boss.receive_stun(3);
    boss.receive_stun(1);
    assert_eq!(boss.stun_turns, 1);
}

#[test]
fn test_tick_floors_cooldowns_at_zero() {
    let mut unit = make_unit(Archetype::Sniper, "Sniper-1");
    assert_eq!(unit.abilities[0].cooldown_remaining, 0);
    unit.tick_cooldowns();
    assert_eq!(
        unit.abilities[0].cooldown_remaining, 0,
        "ticking a ready ability leaves it at 0"
    );
}

#[test]
fn test_tick_reports_shield_expiry_and_clears_flag() {
    let mut unit = make_unit(Archetype::Defender, "Defender-1");
    unit.shield_active = true;
    unit.abilities[0].active_turns_remaining = 2;

    let first = unit.tick_cooldowns();
    assert!(!first.shield_expired);
    assert!(unit.shield_active, "one turn of shield left");

    let second = unit.tick_cooldowns();
    assert!(second.shield_expired);
    assert!(!unit.shield_active, "flag cleared when the duration ran out");

    let third = unit.tick_cooldowns();
    assert!(!third.shield_expired, "expiry only fires once");
}
