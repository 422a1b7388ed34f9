//! Staging loader — builds the site a deployment rule calls for.

use std::collections::VecDeque;

use hecs::World;

use outpost_core::components::DeploymentRule;
use outpost_core::events::SimEvent;
use outpost_core::templates::TemplateRegistry;

use crate::engine::EngineEvent;
use crate::maps::MapDirectory;
use crate::world_setup;

/// Handle a rule-added event: when the entity carries a `DeploymentRule`,
/// load its staging site (one fresh map, the planned grids and anchors)
/// and raise grids-loaded at the rule. Entities without the component are
/// ledger-only rules with no site of their own.
pub fn on_rule_added(
    world: &mut World,
    maps: &mut MapDirectory,
    registry: &TemplateRegistry,
    engine_events: &mut VecDeque<EngineEvent>,
    events: &mut Vec<SimEvent>,
    rule_entity: hecs::Entity,
) {
    let rule_id = match world.get::<&DeploymentRule>(rule_entity) {
        Ok(rule) => rule.rule.clone(),
        Err(_) => return,
    };

    let Some(template) = registry.rule(&rule_id) else {
        return;
    };

    let map = maps.create_map();
    let mut grids = Vec::with_capacity(template.site.grids.len());
    for plan in &template.site.grids {
        let Some(grid) = maps.add_grid(map) else {
            continue;
        };
        for pos in &plan.anchors {
            world_setup::spawn_anchor(world, map, grid, *pos);
        }
        grids.push(grid);
    }

    events.push(SimEvent::SitePrepared {
        map,
        grids: grids.clone(),
    });
    engine_events.push_back(EngineEvent::GridsLoaded {
        map,
        grids,
        rule_entity,
    });
}
