//! Event sink boundary. The controller narrates the match as a stream of
//! [`CombatEvent`]s; a presenter renders, records, or drops them.

use crate::events::CombatEvent;

/// Fire-and-forget sink for combat narration, in resolution order
pub trait Presenter {
    fn present(&mut self, event: &CombatEvent);
}

/// Presenter that just records everything; the test suite's main witness,
/// also used for JSON log dumps.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for EventLog {
    fn present(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }
}

/// Presenter that discards every event
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _event: &CombatEvent) {}
}
