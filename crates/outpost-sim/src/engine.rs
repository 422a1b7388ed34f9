//! Simulation engine — the core of the station simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `RoundSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outpost_core::commands::HostCommand;
use outpost_core::enums::RoundPhase;
use outpost_core::events::{Announcement, SimEvent};
use outpost_core::state::RoundSnapshot;
use outpost_core::templates::{RuleId, TeamId, TemplateRegistry};
use outpost_core::types::{GridId, MapId, SimTime};

use crate::catalog;
use crate::maps::MapDirectory;
use crate::response::ResponseState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Internal events raised by command handlers and systems, drained through
/// the dispatch table within the same tick they were raised.
pub enum EngineEvent {
    /// A rule instance was added; staging reacts to it.
    RuleAdded { rule_entity: Entity },
    /// Grids became available on a map for a rule instance.
    GridsLoaded {
        map: MapId,
        grids: Vec<GridId>,
        rule_entity: Entity,
    },
    /// An operator attached to a unit.
    OperatorAttached { unit: Entity },
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<HostCommand>,
    engine_events: VecDeque<EngineEvent>,
    response: ResponseState,
    maps: MapDirectory,
    registry: TemplateRegistry,
    started_rules: Vec<RuleId>,
    station: Option<MapId>,
    despawn_buffer: Vec<Entity>,
    announcements: Vec<Announcement>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the built-in template catalog.
    pub fn new(config: SimConfig) -> Self {
        Self::with_registry(config, catalog::builtin_registry())
    }

    /// Create a new simulation engine with an externally authored registry.
    pub fn with_registry(config: SimConfig, registry: TemplateRegistry) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RoundPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            engine_events: VecDeque::new(),
            response: ResponseState::default(),
            maps: MapDirectory::new(),
            registry,
            started_rules: Vec::new(),
            station: None,
            despawn_buffer: Vec::new(),
            announcements: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Command-driven and event-driven transitions apply in any phase;
    /// timers only run while the round is active. Within an active tick the
    /// watch sweep always runs before the arrival check.
    pub fn tick(&mut self) -> RoundSnapshot {
        self.process_commands();
        self.drain_events();

        if self.phase == RoundPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let announcements = std::mem::take(&mut self.announcements);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.response,
            &self.maps,
            announcements,
            events,
        )
    }

    /// Request a response team. See `systems::dispatch::try_call_team`.
    pub fn try_call_team(&mut self, team: &TeamId) -> bool {
        systems::dispatch::try_call_team(
            &mut self.response,
            &self.registry,
            &mut self.rng,
            &self.time,
            &mut self.announcements,
            &mut self.events,
            team,
        )
    }

    /// Form a team immediately, bypassing the arrival clock. The staging
    /// cascade resolves synchronously before this returns.
    pub fn form_team(&mut self, team: &TeamId) {
        systems::dispatch::form_team(
            &mut self.world,
            &mut self.response,
            &self.registry,
            &mut self.engine_events,
            &mut self.events,
            team,
        );
        self.drain_events();
    }

    /// Start a round rule and record it in the started-rules ledger.
    /// Ledger rules have no deployment of their own; the rule-added event
    /// is still raised at the instance.
    pub fn start_rule(&mut self, rule: &RuleId) -> Option<Entity> {
        self.registry.rule(rule)?;

        let rule_entity = self
            .world
            .spawn((outpost_core::types::Transform::nullspace(),));
        self.started_rules.push(rule.clone());
        self.engine_events
            .push_back(EngineEvent::RuleAdded { rule_entity });
        self.drain_events();
        Some(rule_entity)
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the round's station map, if a round is in progress.
    pub fn station(&self) -> Option<MapId> {
        self.station
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the orchestrator state.
    #[cfg(test)]
    pub fn response(&self) -> &ResponseState {
        &self.response
    }

    /// Get a read-only reference to the map directory.
    #[cfg(test)]
    pub fn maps(&self) -> &MapDirectory {
        &self.maps
    }

    /// Get the started-rules ledger.
    #[cfg(test)]
    pub fn started_rules(&self) -> &[RuleId] {
        &self.started_rules
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartRound => {
                if self.phase == RoundPhase::Lobby {
                    self.station = Some(world_setup::setup_station(&mut self.maps));
                    self.time = SimTime::default();
                    self.phase = RoundPhase::Active;
                }
            }
            HostCommand::Pause => {
                if self.phase == RoundPhase::Active {
                    self.phase = RoundPhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == RoundPhase::Paused {
                    self.phase = RoundPhase::Active;
                }
            }
            HostCommand::RestartRound => {
                self.restart_round();
            }
            HostCommand::CallTeam { team } => {
                self.try_call_team(&team);
            }
            HostCommand::FormTeam { team } => {
                self.form_team(&team);
            }
            HostCommand::AssignOperator { unit } => {
                if let Some(entity) = Entity::from_bits(unit) {
                    self.engine_events
                        .push_back(EngineEvent::OperatorAttached { unit: entity });
                }
            }
        }
    }

    /// Round-reset entry point: clears the orchestrator state and, because
    /// the engine owns them, the world, maps, ledger, and clock with it.
    /// Idempotent.
    fn restart_round(&mut self) {
        self.response.reset();
        self.world.clear();
        self.maps.clear();
        self.started_rules.clear();
        self.engine_events.clear();
        self.station = None;
        self.time = SimTime::default();
        self.phase = RoundPhase::Lobby;
    }

    /// Drain queued engine events through the dispatch table. Handlers may
    /// raise further events; those resolve within the same drain.
    fn drain_events(&mut self) {
        while let Some(event) = self.engine_events.pop_front() {
            match event {
                EngineEvent::RuleAdded { rule_entity } => {
                    systems::staging::on_rule_added(
                        &mut self.world,
                        &mut self.maps,
                        &self.registry,
                        &mut self.engine_events,
                        &mut self.events,
                        rule_entity,
                    );
                }
                EngineEvent::GridsLoaded {
                    map,
                    grids,
                    rule_entity,
                } => {
                    systems::deployment::on_grids_loaded(
                        &mut self.world,
                        &mut self.response,
                        &self.registry,
                        &mut self.rng,
                        &self.time,
                        &mut self.events,
                        map,
                        &grids,
                        rule_entity,
                    );
                }
                EngineEvent::OperatorAttached { unit } => {
                    systems::vanguard::on_operator_attached(
                        &mut self.world,
                        &mut self.response,
                        &self.registry,
                        &mut self.rng,
                        &mut self.events,
                        unit,
                    );
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Vanguard watch sweep (always before the arrival check).
        systems::vanguard::run(
            &mut self.response,
            &mut self.maps,
            &self.registry,
            &mut self.announcements,
            &mut self.events,
            &self.time,
        );
        // 2. Arrival check — may raise the staging cascade.
        systems::dispatch::run(
            &mut self.world,
            &mut self.response,
            &self.registry,
            &mut self.engine_events,
            &mut self.events,
            &self.time,
        );
        self.drain_events();
        // 3. Cleanup (entities on deleted maps).
        systems::cleanup::run(&mut self.world, &self.maps, &mut self.despawn_buffer);
    }
}
