use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Serializable view of a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rolls: Vec<u8>,
    pub frames: Vec<Frame>,
    /// Running total per frame; `null` until the frame's bonus is known.
    pub cumulative: Vec<Option<u32>>,
    pub score: u32,
    pub finished: bool,
    pub current_frame: Option<u8>,
    pub next_roll: Option<u8>,
}
