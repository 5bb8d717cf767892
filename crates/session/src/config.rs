use serde::{Deserialize, Serialize};

use crate::types::RotationPolicy;

/// Session tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub rotation: RotationPolicy,
}

impl SessionConfig {
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }
}
