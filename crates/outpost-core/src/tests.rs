//! Tests for core types: timers, spawn tables, templates, serde surfaces.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::commands::HostCommand;
use crate::constants::*;
use crate::spawn_table::{resolve_spawns, SpawnEntry};
use crate::templates::{TeamId, TemplateRegistry};
use crate::timing::{TimedWindow, WindowBounds};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn entry(proto: &str) -> SpawnEntry {
    SpawnEntry {
        proto: proto.into(),
        amount: 1,
        max_amount: None,
        prob: 1.0,
        group: None,
    }
}

// ---- Timed windows ----

#[test]
fn test_window_not_expired_before_reset() {
    let window = TimedWindow::new(WindowBounds::fixed(10.0));
    assert!(
        !window.is_expired(1e9),
        "Window should never expire before its first reset"
    );
    assert_eq!(window.remaining_secs(0.0), 0.0);
}

#[test]
fn test_window_fixed_bounds_expire_exactly() {
    let mut window = TimedWindow::new(WindowBounds::fixed(10.0));
    window.reset(5.0, &mut rng(1));

    assert!(!window.is_expired(14.9));
    assert!(window.is_expired(15.0));
    assert!((window.remaining_secs(5.0) - 10.0).abs() < 1e-9);
}

#[test]
fn test_window_reset_rerolls_within_bounds() {
    let bounds = WindowBounds {
        min_secs: 600.0,
        max_secs: 900.0,
    };
    let mut window = TimedWindow::new(bounds);
    let mut rng = rng(7);

    for _ in 0..50 {
        window.reset(0.0, &mut rng);
        let deadline = window.deadline_secs.expect("reset should arm a deadline");
        assert!(
            (600.0..=900.0).contains(&deadline),
            "Rolled duration {deadline} outside bounds"
        );
    }
}

#[test]
fn test_default_bounds_match_arrival_constants() {
    let bounds = WindowBounds::default();
    assert_eq!(bounds.min_secs, ARRIVAL_WINDOW_MIN_SECS);
    assert_eq!(bounds.max_secs, ARRIVAL_WINDOW_MAX_SECS);
}

// ---- Spawn table ----

#[test]
fn test_spawn_prob_zero_yields_nothing() {
    let entries = vec![SpawnEntry {
        prob: 0.0,
        ..entry("guard")
    }];
    assert!(resolve_spawns(&entries, &mut rng(1)).is_empty());
}

#[test]
fn test_spawn_prob_one_yields_amount() {
    let entries = vec![SpawnEntry {
        amount: 3,
        ..entry("guard")
    }];
    let spawns = resolve_spawns(&entries, &mut rng(1));
    assert_eq!(spawns.len(), 3);
    assert!(spawns.iter().all(|p| p.0 == "guard"));
}

#[test]
fn test_spawn_amount_range_respected() {
    let entries = vec![SpawnEntry {
        amount: 2,
        max_amount: Some(5),
        ..entry("guard")
    }];
    for seed in 0..20 {
        let count = resolve_spawns(&entries, &mut rng(seed)).len();
        assert!(
            (2..=5).contains(&count),
            "Rolled count {count} outside [2, 5]"
        );
    }
}

#[test]
fn test_spawn_group_picks_exactly_one() {
    let entries = vec![
        SpawnEntry {
            prob: 1.0,
            group: Some("loadout".into()),
            ..entry("rifle")
        },
        SpawnEntry {
            prob: 1.0,
            group: Some("loadout".into()),
            ..entry("shotgun")
        },
    ];
    for seed in 0..20 {
        let spawns = resolve_spawns(&entries, &mut rng(seed));
        assert_eq!(spawns.len(), 1, "Group should contribute exactly one entry");
        assert!(spawns[0].0 == "rifle" || spawns[0].0 == "shotgun");
    }
}

#[test]
fn test_spawn_groups_and_ungrouped_combine() {
    let entries = vec![
        SpawnEntry {
            amount: 2,
            ..entry("guard")
        },
        SpawnEntry {
            group: Some("lead".into()),
            ..entry("sergeant")
        },
        SpawnEntry {
            group: Some("lead".into()),
            ..entry("lieutenant")
        },
    ];
    let spawns = resolve_spawns(&entries, &mut rng(3));
    assert_eq!(spawns.len(), 3, "Two guards plus one group pick");
}

// ---- Templates ----

#[test]
fn test_registry_loads_json_set() {
    let json = r#"{
        "teams": [{
            "id": "cbu-12",
            "name": "Central Bureau Unit 12",
            "rule": "cbu-standard"
        }],
        "rules": [{
            "id": "cbu-standard",
            "site": { "grids": [{ "anchors": [[0.0, 0.0]] }] }
        }]
    }"#;

    let registry = TemplateRegistry::from_json(json).expect("valid template set");
    let team = registry
        .team(&TeamId::from("cbu-12"))
        .expect("team should resolve");

    // Omitted fields fall back to the documented defaults.
    assert_eq!(team.arrival_window.min_secs, ARRIVAL_WINDOW_MIN_SECS);
    assert_eq!(team.arrival_window.max_secs, ARRIVAL_WINDOW_MAX_SECS);
    assert_eq!(team.price, DEFAULT_TEAM_PRICE);
    assert!(team.vanguard.is_none());
    assert!(team.cancel_message.is_none());

    let rule = registry.rule(&team.rule).expect("rule should resolve");
    assert_eq!(rule.site.grids.len(), 1);
}

#[test]
fn test_registry_bad_json_reports_error() {
    let err = TemplateRegistry::from_json("{ not json").unwrap_err();
    assert!(
        err.starts_with("Failed to parse template set"),
        "Unexpected error: {err}"
    );
}

#[test]
fn test_registry_unknown_ids_do_not_resolve() {
    let registry = TemplateRegistry::new();
    assert!(registry.team(&TeamId::from("nope")).is_none());
}

// ---- Serde surfaces ----

#[test]
fn test_command_serde_tagged() {
    let json = serde_json::to_string(&HostCommand::CallTeam {
        team: TeamId::from("cbu-12"),
    })
    .unwrap();
    assert!(json.contains(r#""type":"CallTeam""#));
    assert!(json.contains(r#""team":"cbu-12""#));

    let back: HostCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(back, HostCommand::CallTeam { team } if team.0 == "cbu-12"));
}
