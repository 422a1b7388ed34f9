//! Built-in template catalog — hardcoded team and rule definitions.
//!
//! Hosts can replace these wholesale via `TemplateRegistry::from_json`;
//! the catalog covers the stock reinforcement roster.

use glam::Vec2;

use outpost_core::spawn_table::SpawnEntry;
use outpost_core::templates::{
    GridPlan, RuleTemplate, SitePlan, TeamTemplate, TemplateRegistry,
};
use outpost_core::timing::WindowBounds;

/// Build the registry with every stock team and rule.
pub fn builtin_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();

    registry.add_team(build_cbu_12());
    registry.add_team(build_xeno_envoy());
    registry.add_team(build_salvage_crew());

    registry.add_rule(build_shuttle_rule());
    registry.add_rule(build_envoy_rule());

    registry
}

/// "cbu-12": the standard Central Bureau response unit.
/// No vanguard — the full composition deploys on arrival.
fn build_cbu_12() -> TeamTemplate {
    TeamTemplate {
        id: "cbu-12".into(),
        name: "Central Bureau Unit 12".to_owned(),
        description: "Standard armed response unit.".to_owned(),
        cancel_message: None,
        rule: "response-shuttle".into(),
        arrival_window: WindowBounds::default(),
        price: 30_000,
        vanguard: None,
        spawns: vec![
            SpawnEntry {
                proto: "cbu-sergeant".into(),
                amount: 1,
                max_amount: None,
                prob: 1.0,
                group: None,
            },
            SpawnEntry {
                proto: "cbu-operative".into(),
                amount: 2,
                max_amount: Some(4),
                prob: 1.0,
                group: None,
            },
            SpawnEntry {
                proto: "cbu-medic".into(),
                amount: 1,
                max_amount: None,
                prob: 1.0,
                group: None,
            },
        ],
    }
}

/// "xeno-envoy": a diplomatic escort led by a vanguard envoy. The escort
/// only deploys once an operator takes the envoy; otherwise the visit is
/// called off.
fn build_xeno_envoy() -> TeamTemplate {
    TeamTemplate {
        id: "xeno-envoy".into(),
        name: "Xenospecies Envoy".to_owned(),
        description: "Diplomatic envoy with honor guard.".to_owned(),
        cancel_message: Some(
            "The envoy delegation has withdrawn its visit to the station.".to_owned(),
        ),
        rule: "envoy-vessel".into(),
        arrival_window: WindowBounds {
            min_secs: 300.0,
            max_secs: 600.0,
        },
        price: 45_000,
        vanguard: Some("envoy-emissary".into()),
        spawns: vec![
            SpawnEntry {
                proto: "envoy-guard".into(),
                amount: 2,
                max_amount: None,
                prob: 1.0,
                group: None,
            },
            SpawnEntry {
                proto: "envoy-attendant".into(),
                amount: 1,
                max_amount: None,
                prob: 1.0,
                group: None,
            },
        ],
    }
}

/// "salvage-crew": an irregular crew with a weighted one-of foreman pick.
fn build_salvage_crew() -> TeamTemplate {
    TeamTemplate {
        id: "salvage-crew".into(),
        name: "Contract Salvage Crew".to_owned(),
        description: "Hired hands of uneven provenance.".to_owned(),
        cancel_message: None,
        rule: "response-shuttle".into(),
        arrival_window: WindowBounds {
            min_secs: 450.0,
            max_secs: 750.0,
        },
        price: 12_000,
        vanguard: None,
        spawns: vec![
            SpawnEntry {
                proto: "salvage-hand".into(),
                amount: 2,
                max_amount: Some(3),
                prob: 1.0,
                group: None,
            },
            SpawnEntry {
                proto: "salvage-foreman".into(),
                amount: 1,
                max_amount: None,
                prob: 0.75,
                group: Some("foreman".to_owned()),
            },
            SpawnEntry {
                proto: "salvage-veteran-foreman".into(),
                amount: 1,
                max_amount: None,
                prob: 0.25,
                group: Some("foreman".to_owned()),
            },
        ],
    }
}

/// Single-grid response shuttle with fore and aft anchors.
fn build_shuttle_rule() -> RuleTemplate {
    RuleTemplate {
        id: "response-shuttle".into(),
        site: SitePlan {
            grids: vec![GridPlan {
                anchors: vec![Vec2::new(4.0, 0.0), Vec2::new(-4.0, 0.0)],
            }],
        },
    }
}

/// Envoy vessel: one grid, one ceremonial anchor.
fn build_envoy_rule() -> RuleTemplate {
    RuleTemplate {
        id: "envoy-vessel".into(),
        site: SitePlan {
            grids: vec![GridPlan {
                anchors: vec![Vec2::new(0.0, 6.0)],
            }],
        },
    }
}
