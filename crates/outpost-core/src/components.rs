//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Orchestration logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::templates::{ProtoId, RuleId, TeamId};
use crate::types::WatchId;

/// A spawned unit and the prototype it instantiates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub proto: ProtoId,
}

/// Marks an entity as a spawn anchor: a location where a team or escort
/// may be instantiated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnAnchor;

/// Attached to a formed team's rule entity; carries the team whose
/// deployment the rule drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRule {
    pub team: TeamId,
    pub rule: RuleId,
}

/// Attached to a posted vanguard unit. Carries only the arena key of its
/// watch, never a reference into the watch collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VanguardRole {
    pub watch: Option<WatchId>,
}

/// Marks a vanguard unit that an operator has attached to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Operated;
