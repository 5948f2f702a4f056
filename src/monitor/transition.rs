//! Operational/down state machine.
//!
//! ```text
//! last         down?  → transition        notify      persist
//! operational  true   → WentDown          "DOWN"      down
//! down         true   → StillDown         -           -
//! down         false  → Recovered         "RECOVERED" operational
//! operational  false  → StillOperational  -           -
//! ```

use crate::probe::CheckOutcome;
use crate::state::MonitorState;

/// What a single check means relative to the last persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// First detection of an outage.
    WentDown { phrase: String },
    /// Outage continues; an alert was already sent.
    StillDown,
    /// Outage over.
    Recovered,
    StillOperational,
}

impl Transition {
    /// Decide the transition for a check outcome given the last persisted state.
    pub fn decide(last: MonitorState, outcome: &CheckOutcome) -> Self {
        match (last, outcome.is_down) {
            (MonitorState::Operational, true) => Transition::WentDown {
                phrase: outcome.matched_phrase.clone().unwrap_or_default(),
            },
            (MonitorState::Down, true) => Transition::StillDown,
            (MonitorState::Down, false) => Transition::Recovered,
            (MonitorState::Operational, false) => Transition::StillOperational,
        }
    }

    /// State to write back, `None` when the stored state is already correct.
    pub fn next_state(&self) -> Option<MonitorState> {
        match self {
            Transition::WentDown { .. } => Some(MonitorState::Down),
            Transition::Recovered => Some(MonitorState::Operational),
            Transition::StillDown | Transition::StillOperational => None,
        }
    }

    pub fn notifies(&self) -> bool {
        self.next_state().is_some()
    }
}
