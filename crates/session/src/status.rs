use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::SESSION_FINISHED;

/// What the session expects next, rendered as the lane's status line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Status {
    NextShot { player: String, frame: u8, roll: u8 },
    Finished,
}

impl Status {
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Finished)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NextShot {
                player,
                frame,
                roll,
            } => write!(
                f,
                "Prochain tir : joueur {}, tour n° {}, boule n° {}",
                player, frame, roll
            ),
            Status::Finished => f.write_str(SESSION_FINISHED),
        }
    }
}
