use core::fmt;

use serde::{Deserialize, Serialize};

/// The six special moves a unit can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AbilityKind {
    Repair,
    ElectricShock,
    PlasmaCannon,
    SuperShield,
    SniperShot,
    Heal,
}

impl AbilityKind {
    /// Display name used in narration and menus
    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::Repair => "Repair",
            AbilityKind::ElectricShock => "Electric Shock",
            AbilityKind::PlasmaCannon => "Plasma Cannon",
            AbilityKind::SuperShield => "Super Shield",
            AbilityKind::SniperShot => "Sniper Shot",
            AbilityKind::Heal => "Heal",
        }
    }

    /// Turns until the ability can be used again after a successful activation
    pub fn cooldown(&self) -> i32 {
        match self {
            AbilityKind::Repair => 3,
            AbilityKind::ElectricShock => 3,
            AbilityKind::PlasmaCannon => 4,
            AbilityKind::SuperShield => 4,
            AbilityKind::SniperShot => 5,
            AbilityKind::Heal => 3,
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ability instance owned by a single unit (tracks its own timers)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub kind: AbilityKind,
    /// Turns remaining before the ability may activate again
    pub cooldown_remaining: i32,
    /// Turns a timed effect (shield) stays in force; 0 for everything else
    pub active_turns_remaining: i32,
}

impl Ability {
    pub fn new(kind: AbilityKind) -> Self {
        Self {
            kind,
            cooldown_remaining: 0,
            active_turns_remaining: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    /// Start the cooldown after a successful activation
    pub fn trigger_cooldown(&mut self) {
        self.cooldown_remaining = self.kind.cooldown();
    }

    /// Decrement both timers once, flooring at zero.
    ///
    /// Returns true when the timed effect ran out on this tick.
    pub fn tick(&mut self) -> bool {
        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
        }
        if self.active_turns_remaining > 0 {
            self.active_turns_remaining -= 1;
            return self.active_turns_remaining == 0;
        }
        false
    }
}

/// Stat/ability template selectable at team-build time (plus the fixed boss)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Archetype {
    Attacker,
    Defender,
    Support,
    Sniper,
    Healer,
    Boss,
}

impl Archetype {
    /// The five archetypes a player may pick from
    pub const SELECTABLE: [Archetype; 5] = [
        Archetype::Attacker,
        Archetype::Defender,
        Archetype::Support,
        Archetype::Sniper,
        Archetype::Healer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Attacker => "Attacker",
            Archetype::Defender => "Defender",
            Archetype::Support => "Support",
            Archetype::Sniper => "Sniper",
            Archetype::Healer => "Healer",
            Archetype::Boss => "Boss",
        }
    }

    /// Base stats as (energy, armor, attack)
    pub fn base_stats(&self) -> (i32, i32, i32) {
        match self {
            Archetype::Attacker => (100, 5, 25),
            Archetype::Defender => (150, 15, 15),
            Archetype::Support => (120, 8, 18),
            Archetype::Sniper => (90, 8, 40),
            Archetype::Healer => (100, 10, 10),
            Archetype::Boss => (300, 20, 40),
        }
    }

    /// Fixed ability roster for the archetype
    pub fn abilities(&self) -> &'static [AbilityKind] {
        match self {
            Archetype::Attacker => &[AbilityKind::PlasmaCannon, AbilityKind::ElectricShock],
            Archetype::Defender => &[AbilityKind::SuperShield, AbilityKind::Repair],
            Archetype::Support => &[AbilityKind::Repair, AbilityKind::ElectricShock],
            Archetype::Sniper => &[AbilityKind::SniperShot],
            Archetype::Healer => &[AbilityKind::Heal],
            Archetype::Boss => &[AbilityKind::PlasmaCannon, AbilityKind::SuperShield],
        }
    }
}

/// Result of applying damage to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Amount subtracted from energy after shield reduction
    pub inflicted: i32,
    /// True when this hit brought the unit to exactly zero energy
    pub defeated: bool,
}

/// What changed during a unit's end-of-turn cooldown tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub shield_expired: bool,
}

/// A combat participant: team member or boss
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub archetype: Archetype,
    pub energy: i32,
    pub armor: i32,
    pub attack: i32,
    pub shield_active: bool,
    /// Turns the unit's attack stays suppressed; only ever set on the boss
    pub stun_turns: i32,
    pub abilities: Vec<Ability>,
}

impl Unit {
    pub fn from_archetype(archetype: Archetype, name: &str) -> Self {
        let (energy, armor, attack) = archetype.base_stats();
        Self {
            name: name.to_string(),
            archetype,
            energy,
            armor,
            attack,
            shield_active: false,
            stun_turns: 0,
            abilities: archetype.abilities().iter().copied().map(Ability::new).collect(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    pub fn is_boss(&self) -> bool {
        self.archetype == Archetype::Boss
    }

    /// Apply incoming damage: the active shield halves it (integer floor),
    /// then energy is subtracted and clamped at zero.
    pub fn receive_damage(&mut self, raw: i32) -> DamageOutcome {
        let was_alive = self.is_alive();
        let inflicted = if self.shield_active { raw / 2 } else { raw };
        self.energy = (self.energy - inflicted).max(0);
        DamageOutcome {
            inflicted,
            defeated: was_alive && self.energy == 0,
        }
    }

    /// Add or subtract energy; the result never drops below zero and has no
    /// upper bound.
    pub fn change_energy(&mut self, delta: i32) {
        self.energy = (self.energy + delta).max(0);
    }

    /// Overwrite (not stack) the stun counter
    pub fn receive_stun(&mut self, turns: i32) {
        self.stun_turns = turns;
    }

    /// Tick every owned ability exactly once; called once per own turn.
    pub fn tick_cooldowns(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for ability in &mut self.abilities {
            if ability.tick() {
                report.shield_expired = true;
            }
        }
        if report.shield_expired {
            self.shield_active = false;
        }
        report
    }
}
