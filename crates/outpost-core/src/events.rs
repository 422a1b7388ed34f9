//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::constants::{ANNOUNCEMENT_COLOR, ANNOUNCEMENT_SENDER, DEFAULT_LANGUAGE};
use crate::templates::TeamId;
use crate::types::{GridId, MapId, WatchId};

/// Feed of orchestration milestones, collected per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A call was accepted and the arrival clock started.
    CallPlaced { team: TeamId },
    /// A team formed (arrival clock expired, or forced directly).
    TeamFormed { team: TeamId },
    /// A staging site finished loading for a formed team.
    SitePrepared { map: MapId, grids: Vec<GridId> },
    /// A vanguard unit was posted and its waiting clock started.
    VanguardPosted {
        watch: WatchId,
        map: MapId,
        team: TeamId,
    },
    /// A vanguard watch ran out without an operator; the site was torn down.
    WatchExpired {
        watch: WatchId,
        map: MapId,
        team: TeamId,
    },
    /// A team's composition was spawned at its anchor.
    EscortDeployed {
        map: MapId,
        team: TeamId,
        count: u32,
    },
}

/// A global broadcast for the host's messaging surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub message: String,
    pub sender: String,
    pub color: String,
    pub play_sound: bool,
    pub voiced: bool,
    pub language: String,
}

impl Announcement {
    /// A colored, voiced global announcement from Central Command.
    pub fn global(message: String) -> Self {
        Self {
            message,
            sender: ANNOUNCEMENT_SENDER.to_owned(),
            color: ANNOUNCEMENT_COLOR.to_owned(),
            play_sound: true,
            voiced: true,
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}
