//! Core types and definitions for the OUTPOST station simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, templates, timers, snapshot views, events,
//! and constants. It has no dependency on the engine or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod spawn_table;
pub mod state;
pub mod templates;
pub mod timing;
pub mod types;

#[cfg(test)]
mod tests;
