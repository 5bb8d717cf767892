//! Core types module - shared constants and small value types
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the scoring core, the
//! multiplayer session, input parsing and scoreboard rendering alike.
//!
//! # Game Dimensions
//!
//! Standard ten-pin rules:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS_PER_RACK` | 10 | Pins standing at the start of a frame |
//! | `FRAMES_PER_GAME` | 10 | Scoring frames per player |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Balls in frames 1-9 |
//! | `MAX_ROLLS_LAST_FRAME` | 3 | Balls in frame 10 (with fill balls) |
//! | `MAX_ROLLS_PER_GAME` | 21 | Nine open frames plus a three-ball tenth |
//!
//! # Examples
//!
//! ```
//! use bowling_types::{Mark, RotationPolicy, PINS_PER_RACK};
//!
//! let policy = RotationPolicy::from_str("per-roll").unwrap();
//! assert_eq!(policy, RotationPolicy::PerRoll);
//! assert_eq!(RotationPolicy::default(), RotationPolicy::PerFrame);
//!
//! assert_eq!(Mark::from_char('x'), Some(Mark::Strike));
//! assert_eq!(Mark::Strike.as_char(), 'X');
//! assert_eq!(PINS_PER_RACK, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Pins standing at the start of every frame
pub const PINS_PER_RACK: u8 = 10;

/// Frames per game
pub const FRAMES_PER_GAME: u8 = 10;

/// Maximum balls thrown in frames 1 through 9
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Maximum balls thrown in the tenth frame (two fill balls after a strike)
pub const MAX_ROLLS_LAST_FRAME: usize = 3;

/// Longest possible roll log for a single game
pub const MAX_ROLLS_PER_GAME: usize =
    (FRAMES_PER_GAME as usize - 1) * MAX_ROLLS_PER_FRAME + MAX_ROLLS_LAST_FRAME;

/// Perfect game total
pub const PERFECT_SCORE: u32 = 300;

/// Status line reported once every player's game is complete.
pub const SESSION_FINISHED: &str = "Partie terminée";

/// When the multiplayer session hands the turn to the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationPolicy {
    /// A player bowls a whole frame before ceding the lane.
    #[default]
    PerFrame,
    /// The turn moves on after every single ball.
    PerRoll,
}

impl RotationPolicy {
    /// Parse policy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "per-frame" | "perframe" | "frame" => Some(RotationPolicy::PerFrame),
            "per-roll" | "perroll" | "roll" => Some(RotationPolicy::PerRoll),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationPolicy::PerFrame => "per-frame",
            RotationPolicy::PerRoll => "per-roll",
        }
    }
}

/// Score sheet notation for a single ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// All ten pins on the first ball of a rack
    Strike,
    /// The remaining pins on the second ball of a rack
    Spare,
    /// No pins
    Gutter,
    /// 1 to 9 pins that neither strike nor spare
    Pins(u8),
}

impl Mark {
    /// Parse a mark from its score sheet character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Mark::Strike),
            '/' => Some(Mark::Spare),
            '-' => Some(Mark::Gutter),
            '1'..='9' => c.to_digit(10).map(|d| Mark::Pins(d as u8)),
            _ => None,
        }
    }

    /// Score sheet character
    pub fn as_char(&self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Gutter => '-',
            Mark::Pins(n) => char::from_digit(*n as u32, 10).unwrap_or('?'),
        }
    }
}
