//! Per-tick systems and event handlers, invoked by the engine in a fixed
//! order.

pub mod cleanup;
pub mod deployment;
pub mod dispatch;
pub mod snapshot;
pub mod staging;
pub mod vanguard;
