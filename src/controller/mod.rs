//! Interaction controller
//!
//! The controller owns the `(generation, coordinate, outcome)` triple. Every
//! click bumps the generation and starts exactly one lookup tagged with it;
//! a finished lookup is only accepted while its tag is still the current
//! generation, so a slow answer for an old click can never replace the
//! answer for a newer one.
//!
//! [`ControllerState::apply`] is the whole state machine and is pure.
//! [`driver`] runs it on a task, spawns the lookups it asks for and
//! publishes every accepted transition.

pub mod driver;

use crate::coord::Coordinates;
use crate::predict::Outcome;
use crate::present::{present, DisplayState};
use serde::Serialize;

pub use driver::{Controller, ControllerHandle};

/// Identifies which click a lookup belongs to
///
/// Generation 0 is the state before the first click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user clicked the map
    Clicked(Coordinates),
    /// A lookup started for `generation` finished
    Completed {
        generation: Generation,
        outcome: Outcome,
    },
}

/// What the caller must do after applying an event
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// State moved to `Pending`; start one lookup tagged with `generation`
    Lookup {
        generation: Generation,
        coordinate: Coordinates,
    },
    /// A lookup result was stored; publish the new state
    Accepted,
    /// The result belonged to a superseded click; nothing changed
    Discarded,
}

/// Current click and its lookup outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerState {
    pub generation: Generation,
    pub coordinate: Option<Coordinates>,
    pub outcome: Outcome,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            coordinate: None,
            outcome: Outcome::Idle,
        }
    }
}

impl ControllerState {
    /// Apply one event
    pub fn apply(&mut self, event: Event) -> Transition {
        match event {
            Event::Clicked(coordinate) => {
                self.generation = self.generation.next();
                self.coordinate = Some(coordinate);
                self.outcome = Outcome::Pending;
                Transition::Lookup {
                    generation: self.generation,
                    coordinate,
                }
            }
            Event::Completed { generation, .. } if generation != self.generation => {
                Transition::Discarded
            }
            Event::Completed { outcome, .. } => {
                self.outcome = if outcome.is_resolved() {
                    outcome
                } else {
                    Outcome::protocol(format!("lookup finished without a result: {:?}", outcome))
                };
                Transition::Accepted
            }
        }
    }

    /// What the result panel shows for this state
    pub fn display(&self) -> DisplayState {
        present(&self.outcome)
    }
}
