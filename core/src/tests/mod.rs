mod abilities;
mod units;

use crate::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn make_unit(archetype: Archetype, name: &str) -> Unit {
    Unit::from_archetype(archetype, name)
}

fn make_boss() -> Unit {
    Unit::from_archetype(Archetype::Boss, BOSS_NAME)
}

fn make_state(picks: [Archetype; TEAM_SIZE]) -> MatchState {
    MatchState::new(picks)
}

/// Run a full match against a scripted chooser, returning the outcome and
/// the complete event log.
fn run_scripted(
    state: &mut MatchState,
    chooser: &mut ScriptedChooser,
) -> (MatchOutcome, Vec<CombatEvent>) {
    let mut log = EventLog::new();
    let outcome = run_match(state, chooser, &mut log);
    (outcome, log.events)
}

fn count_events(events: &[CombatEvent], pred: impl Fn(&CombatEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}
