//! Fundamental identifier and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identifies a map (an independent playable area).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(pub u32);

impl MapId {
    /// The placeless map. Entities here have no playable area and are
    /// exempt from dead-map cleanup.
    pub const NULLSPACE: MapId = MapId(0);
}

/// Identifies a grid within a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridId(pub u32);

/// Arena key for a vanguard watch. Spawned vanguard units carry this key
/// instead of a reference into the watch collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchId(pub u32);

/// Spatial component for every placed entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub map: MapId,
    /// Owning grid, if the entity sits on one. Nullspace entities have none.
    pub grid: Option<GridId>,
    /// Position within the map (meters).
    pub pos: Vec2,
}

impl Transform {
    /// A placeless transform: nullspace, no grid, origin.
    pub fn nullspace() -> Self {
        Self {
            map: MapId::NULLSPACE,
            grid: None,
            pos: Vec2::ZERO,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
