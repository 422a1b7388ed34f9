//! Vanguard watch tracker — expiry sweep and the operator-attached
//! success path.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use outpost_core::components::{Operated, VanguardRole};
use outpost_core::events::{Announcement, SimEvent};
use outpost_core::spawn_table::resolve_spawns;
use outpost_core::templates::TemplateRegistry;
use outpost_core::types::{SimTime, Transform};

use crate::maps::MapDirectory;
use crate::response::ResponseState;
use crate::world_setup;

/// Per-tick sweep, in reverse so removal is safe mid-iteration. An expired
/// watch is always removed and its map always torn down, even when the
/// team template no longer resolves; only the announcement is best-effort.
pub fn run(
    state: &mut ResponseState,
    maps: &mut MapDirectory,
    registry: &TemplateRegistry,
    announcements: &mut Vec<Announcement>,
    events: &mut Vec<SimEvent>,
    time: &SimTime,
) {
    for i in (0..state.watches.len()).rev() {
        if !state.watches[i].window.is_expired(time.elapsed_secs) {
            continue;
        }

        let watch = state.watches.remove(i);
        maps.delete_map(watch.map);
        events.push(SimEvent::WatchExpired {
            watch: watch.id,
            map: watch.map,
            team: watch.team.clone(),
        });

        let Some(template) = registry.team(&watch.team) else {
            continue;
        };
        if let Some(message) = &template.cancel_message {
            announcements.push(Announcement::global(message.clone()));
        }
    }
}

/// Success path: an operator attached to a vanguard unit. Removes the
/// matching watch (no-op if it is already gone) and spawns the escort at
/// the stored anchor. The staging map survives on this path.
pub fn on_operator_attached(
    world: &mut World,
    state: &mut ResponseState,
    registry: &TemplateRegistry,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
    unit: hecs::Entity,
) {
    let watch_id = match world.get::<&VanguardRole>(unit) {
        Ok(role) => match role.watch {
            Some(id) => id,
            None => return,
        },
        Err(_) => return,
    };

    let Some(index) = state.watches.iter().position(|w| w.id == watch_id) else {
        return;
    };
    let watch = state.watches.remove(index);

    let Some(template) = registry.team(&watch.team) else {
        return;
    };
    let anchor_transform = match world.get::<&Transform>(watch.anchor) {
        Ok(transform) => *transform,
        Err(_) => return,
    };

    let protos = resolve_spawns(&template.spawns, rng);
    let count = protos.len() as u32;
    for proto in protos {
        world_setup::spawn_unit(world, proto, anchor_transform);
    }

    let _ = world.insert_one(unit, Operated);
    events.push(SimEvent::EscortDeployed {
        map: watch.map,
        team: watch.team,
        count,
    });
}
