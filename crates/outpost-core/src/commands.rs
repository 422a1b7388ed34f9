//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::templates::TeamId;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    // --- Round control ---
    /// Start a new round: create the station map and begin ticking.
    StartRound,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// End the round and clear all state back to the lobby.
    RestartRound,

    // --- Reinforcement calls ---
    /// Request a response team. Rejected while another call is pending.
    CallTeam { team: TeamId },
    /// Form a team immediately, bypassing the arrival timer.
    FormTeam { team: TeamId },
    /// Attach an operator to a unit (entity bits from a snapshot view).
    AssignOperator { unit: u64 },
}
