//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in progress; timers do not run.
    #[default]
    Lobby,
    /// Round running, systems ticking.
    Active,
    /// Round frozen; event-driven transitions still apply.
    Paused,
}
