//! Snapshot system: queries the ECS world and builds a complete
//! RoundSnapshot.
//!
//! This system is read-only — it never modifies the world. Every view is
//! sorted by a stable key so serialization order never depends on hash-map
//! or archetype iteration order.

use hecs::World;

use outpost_core::components::{DeploymentRule, Operated, Unit, VanguardRole};
use outpost_core::enums::RoundPhase;
use outpost_core::events::{Announcement, SimEvent};
use outpost_core::state::*;
use outpost_core::types::{SimTime, Transform};

use crate::maps::MapDirectory;
use crate::response::ResponseState;

/// Build a complete RoundSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: RoundPhase,
    response: &ResponseState,
    maps: &MapDirectory,
    announcements: Vec<Announcement>,
    events: Vec<SimEvent>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        phase,
        pending_call: build_pending_call(response, time),
        watches: build_watches(response, time),
        maps: build_maps(maps),
        units: build_units(world),
        rules: build_rules(world),
        announcements,
        events,
    }
}

fn build_pending_call(response: &ResponseState, time: &SimTime) -> Option<PendingCallView> {
    response.pending.as_ref().map(|call| PendingCallView {
        team: call.team.clone(),
        remaining_secs: call.window.remaining_secs(time.elapsed_secs),
    })
}

fn build_watches(response: &ResponseState, time: &SimTime) -> Vec<WatchView> {
    let mut watches: Vec<WatchView> = response
        .watches
        .iter()
        .map(|watch| WatchView {
            id: watch.id,
            map: watch.map,
            team: watch.team.clone(),
            remaining_secs: watch.window.remaining_secs(time.elapsed_secs),
        })
        .collect();

    watches.sort_by_key(|w| w.id);
    watches
}

fn build_maps(maps: &MapDirectory) -> Vec<MapView> {
    let mut views: Vec<MapView> = maps
        .iter()
        .map(|(id, record)| MapView {
            id,
            grids: record.grids.clone(),
        })
        .collect();

    views.sort_by_key(|m| m.id);
    views
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &Transform)>()
        .iter()
        .map(|(entity, (unit, transform))| {
            let awaiting_operator = world
                .get::<&VanguardRole>(entity)
                .map(|role| role.watch.is_some())
                .unwrap_or(false)
                && world.get::<&Operated>(entity).is_err();
            UnitView {
                id: entity.to_bits().get(),
                proto: unit.proto.clone(),
                map: transform.map,
                pos: transform.pos,
                awaiting_operator,
            }
        })
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

fn build_rules(world: &World) -> Vec<RuleView> {
    let mut rules: Vec<RuleView> = world
        .query::<&DeploymentRule>()
        .iter()
        .map(|(entity, rule)| RuleView {
            id: entity.to_bits().get(),
            team: rule.team.clone(),
            rule: rule.rule.clone(),
        })
        .collect();

    rules.sort_by_key(|r| r.id);
    rules
}
