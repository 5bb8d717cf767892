use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::status::Status;
use crate::types::RotationPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub game: GameSnapshot,
}

/// Serializable view of a whole session, players in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rotation: RotationPolicy,
    pub started: bool,
    pub current_player: Option<String>,
    pub status: Option<Status>,
    pub players: Vec<PlayerSnapshot>,
}
