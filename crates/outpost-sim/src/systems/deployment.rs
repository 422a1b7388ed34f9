//! Spawn coordinator — places an arriving team on its freshly loaded site.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use outpost_core::components::{DeploymentRule, SpawnAnchor};
use outpost_core::constants::VANGUARD_WAIT_SECS;
use outpost_core::events::SimEvent;
use outpost_core::spawn_table::resolve_spawns;
use outpost_core::templates::TemplateRegistry;
use outpost_core::timing::{TimedWindow, WindowBounds};
use outpost_core::types::{GridId, MapId, SimTime, Transform};

use crate::response::{ResponseState, VanguardWatch};
use crate::world_setup;

/// Handle a grids-loaded event: find the first spawn anchor on the newly
/// available grids and place the team there.
///
/// Teams with a vanguard post exactly one vanguard unit and register a
/// watch instead of spawning the composition; the rest of the team waits
/// for an operator to attach.
#[allow(clippy::too_many_arguments)]
pub fn on_grids_loaded(
    world: &mut World,
    state: &mut ResponseState,
    registry: &TemplateRegistry,
    rng: &mut ChaCha8Rng,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
    map: MapId,
    grids: &[GridId],
    rule_entity: hecs::Entity,
) {
    let team = match world.get::<&DeploymentRule>(rule_entity) {
        Ok(rule) => rule.team.clone(),
        Err(_) => return,
    };

    let Some(template) = registry.team(&team) else {
        return;
    };

    // First discovered anchor on the loaded grids wins.
    let anchor = {
        let mut query = world.query::<(&SpawnAnchor, &Transform)>();
        query.iter().find_map(|(entity, (_, transform))| {
            let on_site = transform.map == map
                && transform.grid.is_some_and(|grid| grids.contains(&grid));
            on_site.then(|| (entity, *transform))
        })
    };
    let Some((anchor_entity, anchor_transform)) = anchor else {
        return;
    };

    if let Some(vanguard) = &template.vanguard {
        let id = state.alloc_watch_id();
        world_setup::spawn_vanguard(world, vanguard.clone(), anchor_transform, id);

        let mut window = TimedWindow::new(WindowBounds::fixed(VANGUARD_WAIT_SECS));
        window.reset(time.elapsed_secs, rng);
        state.watches.push(VanguardWatch {
            id,
            map,
            window,
            team: team.clone(),
            anchor: anchor_entity,
        });

        events.push(SimEvent::VanguardPosted {
            watch: id,
            map,
            team,
        });
        return;
    }

    let protos = resolve_spawns(&template.spawns, rng);
    let count = protos.len() as u32;
    for proto in protos {
        world_setup::spawn_unit(world, proto, anchor_transform);
    }
    events.push(SimEvent::EscortDeployed { map, team, count });
}
