//! Cleanup system: reaps entities left on maps that no longer exist.

use hecs::{Entity, World};

use outpost_core::types::{MapId, Transform};

use crate::maps::MapDirectory;

/// Remove every entity whose map has been deleted from the directory.
/// Nullspace entities are exempt. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, maps: &MapDirectory, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, transform) in world.query_mut::<&Transform>() {
        if transform.map != MapId::NULLSPACE && !maps.contains(transform.map) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
