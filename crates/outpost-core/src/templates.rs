//! Externally authored templates resolved by identifier.
//!
//! Templates are immutable per round: the registry is filled once (from the
//! built-in catalog or a JSON set) and only read afterwards.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TEAM_PRICE;
use crate::spawn_table::SpawnEntry;
use crate::timing::WindowBounds;

/// Identifies a response-team template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

/// Identifies a deployment-rule template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

/// Identifies an entity prototype (what a spawned unit instantiates).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtoId(pub String);

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for ProtoId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A named response team: composition, timing, and messaging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamTemplate {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Broadcast when a vanguard watch for this team expires unanswered.
    #[serde(default)]
    pub cancel_message: Option<String>,
    /// Deployment rule instantiated when the team forms.
    pub rule: RuleId,
    /// Randomized arrival delay after a call.
    #[serde(default)]
    pub arrival_window: WindowBounds,
    /// Requisition cost. Carried for hosts; unused by the orchestrator.
    #[serde(default = "default_price")]
    pub price: u32,
    /// Optional vanguard prototype. When set, deployment posts this single
    /// unit and defers the rest of the team to an operator attaching.
    #[serde(default)]
    pub vanguard: Option<ProtoId>,
    /// Weighted composition of the team proper.
    #[serde(default)]
    pub spawns: Vec<SpawnEntry>,
}

fn default_price() -> u32 {
    DEFAULT_TEAM_PRICE
}

/// A deployment rule: the staging site it loads for an arriving team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTemplate {
    pub id: RuleId,
    pub site: SitePlan,
}

/// Layout of a staging site: one map holding these grids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitePlan {
    pub grids: Vec<GridPlan>,
}

/// One grid of a staging site and the anchor positions on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridPlan {
    pub anchors: Vec<Vec2>,
}

/// An externally authored template set, as loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateSet {
    #[serde(default)]
    pub teams: Vec<TeamTemplate>,
    #[serde(default)]
    pub rules: Vec<RuleTemplate>,
}

/// Resolves template identifiers to their records.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    teams: HashMap<TeamId, TeamTemplate>,
    rules: HashMap<RuleId, RuleTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON template set.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let set: TemplateSet =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse template set: {e}"))?;
        let mut registry = Self::new();
        for team in set.teams {
            registry.add_team(team);
        }
        for rule in set.rules {
            registry.add_rule(rule);
        }
        Ok(registry)
    }

    pub fn add_team(&mut self, team: TeamTemplate) {
        self.teams.insert(team.id.clone(), team);
    }

    pub fn add_rule(&mut self, rule: RuleTemplate) {
        self.rules.insert(rule.id.clone(), rule);
    }

    /// Resolve a team template, or `None` if the id is unknown.
    pub fn team(&self, id: &TeamId) -> Option<&TeamTemplate> {
        self.teams.get(id)
    }

    /// Resolve a rule template, or `None` if the id is unknown.
    pub fn rule(&self, id: &RuleId) -> Option<&RuleTemplate> {
        self.rules.get(id)
    }
}
