//! Simulation engine for OUTPOST.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces RoundSnapshots for the embedding host.

pub mod catalog;
pub mod engine;
pub mod maps;
pub mod response;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use outpost_core as core;
