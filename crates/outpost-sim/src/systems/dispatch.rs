//! Call manager — accepts call requests, runs the arrival clock, and
//! forms teams when it expires.

use std::collections::VecDeque;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use outpost_core::events::{Announcement, SimEvent};
use outpost_core::templates::{TeamId, TemplateRegistry};
use outpost_core::timing::TimedWindow;
use outpost_core::types::SimTime;

use crate::engine::EngineEvent;
use crate::response::{PendingCall, ResponseState};
use crate::world_setup;

/// Request a response team. Returns false with no state change while
/// another call is pending or when the team does not resolve.
pub fn try_call_team(
    state: &mut ResponseState,
    registry: &TemplateRegistry,
    rng: &mut ChaCha8Rng,
    time: &SimTime,
    announcements: &mut Vec<Announcement>,
    events: &mut Vec<SimEvent>,
    team: &TeamId,
) -> bool {
    if state.pending.is_some() {
        return false;
    }

    let Some(template) = registry.team(team) else {
        return false;
    };

    announcements.push(Announcement::global(format!(
        "{} has been dispatched to the station and will arrive shortly.",
        template.name
    )));

    let mut window = TimedWindow::new(template.arrival_window);
    window.reset(time.elapsed_secs, rng);
    state.pending = Some(PendingCall {
        team: team.clone(),
        window,
    });
    events.push(SimEvent::CallPlaced { team: team.clone() });

    true
}

/// Form a team now, bypassing any arrival clock. Silent no-op when the
/// team does not resolve.
pub fn form_team(
    world: &mut World,
    state: &mut ResponseState,
    registry: &TemplateRegistry,
    engine_events: &mut VecDeque<EngineEvent>,
    events: &mut Vec<SimEvent>,
    team: &TeamId,
) {
    let Some(template) = registry.team(team) else {
        return;
    };

    state.pending = None;

    let rule_entity = world_setup::spawn_rule_entity(world, team.clone(), template.rule.clone());

    // Not a round rule of its own, so it never enters the started-rules
    // ledger; the rule-added event is still raised at the instance.
    engine_events.push_back(EngineEvent::RuleAdded { rule_entity });
    events.push(SimEvent::TeamFormed { team: team.clone() });
}

/// Per-tick arrival check: form the pending team once its clock expires.
pub fn run(
    world: &mut World,
    state: &mut ResponseState,
    registry: &TemplateRegistry,
    engine_events: &mut VecDeque<EngineEvent>,
    events: &mut Vec<SimEvent>,
    time: &SimTime,
) {
    let Some(pending) = &state.pending else {
        return;
    };
    if !pending.window.is_expired(time.elapsed_secs) {
        return;
    }

    let team = pending.team.clone();
    form_team(world, state, registry, engine_events, events, &team);
}
