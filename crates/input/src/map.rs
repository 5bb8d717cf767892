//! Shot and player-list parsing from typed text.

use crate::core::{BowlingError, Result};
use crate::types::{Mark, PINS_PER_RACK};

/// Map one typed shot to a pin count.
///
/// `standing` is the number of pins up for this ball; it gives `/` its value
/// and decides whether `X` is legal. Range checks beyond that are left to the
/// game itself.
pub fn parse_shot(input: &str, standing: u8) -> Result<u8> {
    let text = input.trim();
    let invalid = || BowlingError::InvalidShot {
        input: input.to_string(),
    };

    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(mark) = Mark::from_char(c) {
            return match mark {
                Mark::Strike if standing == PINS_PER_RACK => Ok(PINS_PER_RACK),
                Mark::Spare if standing < PINS_PER_RACK => Ok(standing),
                Mark::Strike | Mark::Spare => Err(invalid()),
                Mark::Gutter => Ok(0),
                Mark::Pins(n) => Ok(n),
            };
        }
    }

    let pins: i64 = text.parse().map_err(|_| invalid())?;
    if !(0..=PINS_PER_RACK as i64).contains(&pins) {
        return Err(BowlingError::PinsOutOfRange { pins });
    }
    Ok(pins as u8)
}

/// Split a player list on commas and/or whitespace.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check if the line asks to leave the lane.
pub fn should_quit(input: &str) -> bool {
    matches!(input.trim(), "q" | "Q" | "quit" | "exit")
}
