//! Round snapshot — the complete visible state sent to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;
use crate::events::{Announcement, SimEvent};
use crate::templates::{ProtoId, RuleId, TeamId};
use crate::types::{GridId, MapId, SimTime, WatchId};

/// Complete round state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub pending_call: Option<PendingCallView>,
    pub watches: Vec<WatchView>,
    pub maps: Vec<MapView>,
    pub units: Vec<UnitView>,
    pub rules: Vec<RuleView>,
    pub announcements: Vec<Announcement>,
    pub events: Vec<SimEvent>,
}

/// The one in-flight call, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingCallView {
    pub team: TeamId,
    /// Seconds until the team forms.
    pub remaining_secs: f64,
}

/// A vanguard watch still waiting for an operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchView {
    pub id: WatchId,
    pub map: MapId,
    pub team: TeamId,
    /// Seconds until the watch cancels.
    pub remaining_secs: f64,
}

/// A live map and its grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub id: MapId,
    pub grids: Vec<GridId>,
}

/// A spawned unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    /// Entity bits, usable in `HostCommand::AssignOperator`.
    pub id: u64,
    pub proto: ProtoId,
    pub map: MapId,
    pub pos: Vec2,
    /// Whether this unit is a vanguard still awaiting an operator.
    pub awaiting_operator: bool,
}

/// A formed team's deployment rule instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleView {
    /// Entity bits of the rule instance.
    pub id: u64,
    pub team: TeamId,
    pub rule: RuleId,
}
