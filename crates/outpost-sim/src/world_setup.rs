//! Entity spawn factories for populating the simulation world.
//!
//! Creates units, spawn anchors, and deployment rule entities with
//! appropriate component bundles.

use glam::Vec2;
use hecs::World;

use outpost_core::components::{DeploymentRule, SpawnAnchor, Unit, VanguardRole};
use outpost_core::templates::{ProtoId, RuleId, TeamId};
use outpost_core::types::{GridId, MapId, Transform, WatchId};

use crate::maps::MapDirectory;

/// Create the round's station map with a single primary grid.
/// Station geometry beyond that is the host's concern; the orchestrator
/// only needs the map to exist.
pub fn setup_station(maps: &mut MapDirectory) -> MapId {
    let map = maps.create_map();
    maps.add_grid(map);
    map
}

/// Spawn a plain unit instantiating `proto` at the given transform.
pub fn spawn_unit(world: &mut World, proto: ProtoId, at: Transform) -> hecs::Entity {
    world.spawn((Unit { proto }, at))
}

/// Spawn a vanguard unit carrying its watch key.
pub fn spawn_vanguard(
    world: &mut World,
    proto: ProtoId,
    at: Transform,
    watch: WatchId,
) -> hecs::Entity {
    world.spawn((
        Unit { proto },
        VanguardRole { watch: Some(watch) },
        at,
    ))
}

/// Spawn a spawn-anchor marker on a grid.
pub fn spawn_anchor(world: &mut World, map: MapId, grid: GridId, pos: Vec2) -> hecs::Entity {
    world.spawn((
        SpawnAnchor,
        Transform {
            map,
            grid: Some(grid),
            pos,
        },
    ))
}

/// Spawn a team's deployment rule instance at a placeless location.
pub fn spawn_rule_entity(world: &mut World, team: TeamId, rule: RuleId) -> hecs::Entity {
    world.spawn((DeploymentRule { team, rule }, Transform::nullspace()))
}
