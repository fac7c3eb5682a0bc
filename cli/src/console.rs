//! Stdin/stdout front end: menu prompts, status lines, event narration.

use std::io::{self, Write};

use log::warn;
use scrapclash_core::{
    AbilityOutcome, ActionChoice, Archetype, BattleRng, Chooser, CombatEvent, MatchView, Presenter,
    Unit, XorShiftRng, TEAM_SIZE,
};

/// Interactively pick the three team archetypes. Invalid input is
/// re-prompted until a valid pick comes in.
pub fn prompt_team() -> io::Result<[Archetype; TEAM_SIZE]> {
    println!("Build your team: pick {TEAM_SIZE} units.");
    let mut picks = Vec::with_capacity(TEAM_SIZE);
    while picks.len() < TEAM_SIZE {
        print_archetype_menu();
        let line = read_line(&format!("pick #{}> ", picks.len() + 1))?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=Archetype::SELECTABLE.len()).contains(&n) => {
                let pick = Archetype::SELECTABLE[n - 1];
                println!("-> {}", pick.label());
                picks.push(pick);
            }
            _ => println!("invalid choice, try again"),
        }
    }
    Ok([picks[0], picks[1], picks[2]])
}

fn print_archetype_menu() {
    for (i, archetype) in Archetype::SELECTABLE.iter().enumerate() {
        let (energy, armor, attack) = archetype.base_stats();
        let abilities = archetype
            .abilities()
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {}) {:<8} energy {:>3}  armor {:>2}  attack {:>2}  [{}]",
            i + 1,
            archetype.label(),
            energy,
            armor,
            attack,
            abilities
        );
    }
}

/// Multi-line status block for the whole battlefield
pub fn render_status(view: &MatchView) -> String {
    let mut out = format!("=== round {} ===\n", view.round + 1);
    for unit in view.team.iter().chain(std::iter::once(&view.boss)) {
        out.push_str(&format!(
            "  {:<12} energy {:>3}  armor {:>2}  attack {:>2}",
            unit.name, unit.energy, unit.armor, unit.attack
        ));
        if unit.shield_active {
            out.push_str("  [shield up]");
        }
        for ability in &unit.abilities {
            if ability.ready {
                out.push_str(&format!("  {}: ready", ability.name));
            } else {
                out.push_str(&format!("  {}: cd {}", ability.name, ability.cooldown));
            }
        }
        out.push('\n');
    }
    out
}

fn status_line(unit: &Unit) -> String {
    let mut line = format!(
        "{}: energy {}  armor {}  attack {}",
        unit.name, unit.energy, unit.armor, unit.attack
    );
    if unit.shield_active {
        line.push_str("  [shield up]");
    }
    if unit.stun_turns > 0 {
        line.push_str(&format!("  [stunned {}]", unit.stun_turns));
    }
    line
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf)
}

/// Interactive chooser: the player drives every team unit from stdin; the
/// boss picks its target from a seeded RNG.
///
/// When stdin goes away mid-match the chooser falls back to a basic attack
/// (or a cancelled ability pick) so the match can still run to completion.
pub struct ConsoleChooser {
    rng: XorShiftRng,
}

impl ConsoleChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Chooser for ConsoleChooser {
    fn choose_action(&mut self, unit: &Unit, boss: &Unit) -> ActionChoice {
        println!("  you:  {}", status_line(unit));
        println!("  boss: {}", status_line(boss));
        loop {
            println!("  1) Basic attack");
            println!("  2) Use an ability");
            match read_line("action> ") {
                Ok(line) => match line.trim() {
                    "1" => return ActionChoice::BasicAttack,
                    "2" => return ActionChoice::UseAbility,
                    _ => println!("invalid choice, try again"),
                },
                Err(err) => {
                    warn!("stdin unavailable ({err}), falling back to a basic attack");
                    return ActionChoice::BasicAttack;
                }
            }
        }
    }

    fn choose_ability_slot(&mut self, unit: &Unit) -> usize {
        loop {
            for (i, ability) in unit.abilities.iter().enumerate() {
                if ability.is_ready() {
                    println!("  {}) {}", i + 1, ability.kind.name());
                } else {
                    println!(
                        "  {}) {} (cooldown: {})",
                        i + 1,
                        ability.kind.name(),
                        ability.cooldown_remaining
                    );
                }
            }
            println!("  0) Cancel");
            match read_line("ability> ") {
                Ok(line) => match line.trim().parse::<usize>() {
                    Ok(n) if n <= unit.abilities.len() => return n,
                    _ => println!("invalid choice, try again"),
                },
                Err(err) => {
                    warn!("stdin unavailable ({err}), cancelling the action");
                    return 0;
                }
            }
        }
    }

    fn choose_boss_target(&mut self, living: &[Unit]) -> usize {
        self.rng.pick_index(living.len())
    }
}

/// Narrates every combat event to stdout and keeps the full log around for
/// the optional JSON dump.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    pub events: Vec<CombatEvent>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, event: &CombatEvent) {
        match event {
            CombatEvent::TurnStarted { name } => println!("-- {name}'s turn --"),
            CombatEvent::AttackPerformed {
                attacker,
                target,
                damage,
            } => println!("{attacker} hits {target} for {damage} damage."),
            CombatEvent::AbilityUsed {
                performer,
                target,
                ability,
                outcome,
            } => match outcome {
                AbilityOutcome::Damage { amount } => {
                    println!("{performer} fires {ability} at {target} for {amount} damage.")
                }
                AbilityOutcome::Restored { amount } => {
                    println!("{performer} uses {ability}: {target} regains {amount} energy.")
                }
                AbilityOutcome::ShieldRaised { turns } => {
                    println!("{performer} raises {ability} for {turns} turns.")
                }
                AbilityOutcome::ShieldAlreadyActive => {
                    println!("{performer}'s shield is already up; nothing happens.")
                }
            },
            CombatEvent::AbilityRejected { performer, reason } => {
                println!("{performer} cannot do that: {reason}.")
            }
            CombatEvent::ActionCancelled { name } => println!("{name} holds back."),
            CombatEvent::StunApplied { name, turns } => {
                println!("{name} is stunned for {turns} turn(s)!")
            }
            CombatEvent::AttackStunned { name, remaining } => {
                println!("{name} is stunned and cannot attack ({remaining} turn(s) left).")
            }
            CombatEvent::ShieldExpired { name } => println!("{name}'s shield wears off."),
            CombatEvent::UnitDefeated { name } => println!("{name} is destroyed!"),
            CombatEvent::RoundRegen { name, amount } => {
                println!("{name} recovers {amount} energy.")
            }
            CombatEvent::MatchEnded { .. } => println!("=== match over ==="),
        }
        self.events.push(event.clone());
    }
}
