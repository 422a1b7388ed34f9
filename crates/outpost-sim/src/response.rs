//! Reinforcement orchestrator data model.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Handlers receive this
//! state explicitly; there are no ambient singletons.

use outpost_core::templates::TeamId;
use outpost_core::timing::TimedWindow;
use outpost_core::types::{MapId, WatchId};

/// The one in-flight call: which team is expected and when it arrives.
#[derive(Debug, Clone)]
pub struct PendingCall {
    pub team: TeamId,
    pub window: TimedWindow,
}

/// A posted vanguard waiting for an operator. Uniquely owned by
/// `ResponseState::watches`; the vanguard entity carries only the `id` key.
#[derive(Debug, Clone)]
pub struct VanguardWatch {
    pub id: WatchId,
    /// Staging map torn down if the watch expires unanswered.
    pub map: MapId,
    pub window: TimedWindow,
    pub team: TeamId,
    /// Anchor entity where the escort eventually spawns.
    pub anchor: hecs::Entity,
}

/// All orchestrator state, cleared as one unit at the round boundary.
#[derive(Debug, Default)]
pub struct ResponseState {
    /// At most one call is in flight at any time.
    pub pending: Option<PendingCall>,
    /// Insertion order = creation order.
    pub watches: Vec<VanguardWatch>,
    next_watch: u32,
}

impl ResponseState {
    /// Allocate the next watch key.
    pub fn alloc_watch_id(&mut self) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch += 1;
        id
    }

    /// Clear everything unconditionally, regardless of timer state.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.pending = None;
        self.watches.clear();
        self.next_watch = 0;
    }
}
