//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Response team timing ---

/// Default minimum arrival delay for a called team (seconds).
pub const ARRIVAL_WINDOW_MIN_SECS: f64 = 600.0;

/// Default maximum arrival delay for a called team (seconds).
pub const ARRIVAL_WINDOW_MAX_SECS: f64 = 900.0;

/// How long a posted vanguard waits for an operator before the deployment
/// is cancelled (seconds, fixed). Independent of any team's arrival bounds.
pub const VANGUARD_WAIT_SECS: f64 = 300.0;

// --- Announcements ---

/// Display color for dispatch announcements.
pub const ANNOUNCEMENT_COLOR: &str = "#1d8bad";

/// Sender name attached to dispatch announcements.
pub const ANNOUNCEMENT_SENDER: &str = "Central Command";

/// Language tag for voiced announcements.
pub const DEFAULT_LANGUAGE: &str = "common";

// --- Templates ---

/// Default requisition price of a response team (carried on the template,
/// unused by the orchestrator).
pub const DEFAULT_TEAM_PRICE: u32 = 30_000;
