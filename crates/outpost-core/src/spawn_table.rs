//! Weighted spawn-list resolution.
//!
//! The selection law: ungrouped entries roll their probability
//! independently and contribute their amount on success; entries sharing a
//! group form a weighted one-of selection where a single roll over the
//! cumulative probabilities picks exactly one entry. Group buckets are
//! collected in first-seen order so resolution is deterministic for a
//! given RNG state.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::templates::ProtoId;

/// One weighted entry of a team's composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub proto: ProtoId,
    /// Copies contributed when the entry is selected.
    #[serde(default = "default_amount")]
    pub amount: u32,
    /// When set, the contributed count is rolled uniformly in
    /// `[amount, max_amount]` instead.
    #[serde(default)]
    pub max_amount: Option<u32>,
    /// Selection probability for ungrouped entries; relative weight within
    /// a group.
    #[serde(default = "default_prob")]
    pub prob: f64,
    /// Entries sharing a group are a one-of selection.
    #[serde(default)]
    pub group: Option<String>,
}

fn default_amount() -> u32 {
    1
}

fn default_prob() -> f64 {
    1.0
}

/// Resolve a weighted spawn list into a concrete prototype list.
pub fn resolve_spawns(entries: &[SpawnEntry], rng: &mut ChaCha8Rng) -> Vec<ProtoId> {
    let mut picked = Vec::new();
    let mut groups: Vec<(&str, Vec<&SpawnEntry>)> = Vec::new();

    for entry in entries {
        match &entry.group {
            Some(group) => match groups.iter_mut().find(|(name, _)| *name == group.as_str()) {
                Some((_, bucket)) => bucket.push(entry),
                None => groups.push((group.as_str(), vec![entry])),
            },
            None => {
                if entry.prob >= 1.0 || rng.gen_bool(entry.prob.clamp(0.0, 1.0)) {
                    push_amount(&mut picked, entry, rng);
                }
            }
        }
    }

    for (_, bucket) in groups {
        let total: f64 = bucket.iter().map(|e| e.prob).sum();
        if total <= 0.0 {
            continue;
        }
        let mut roll = rng.gen_range(0.0..total);
        for entry in bucket {
            roll -= entry.prob;
            if roll <= 0.0 {
                push_amount(&mut picked, entry, rng);
                break;
            }
        }
    }

    picked
}

/// Contribute an entry's rolled amount to the picked list.
fn push_amount(picked: &mut Vec<ProtoId>, entry: &SpawnEntry, rng: &mut ChaCha8Rng) {
    let count = match entry.max_amount {
        Some(max) if max > entry.amount => rng.gen_range(entry.amount..=max),
        _ => entry.amount,
    };
    for _ in 0..count {
        picked.push(entry.proto.clone());
    }
}
