//! Frame module - derives frame boundaries from a flat roll log
//!
//! Frames are never stored. They are recomputed from the roll sequence each
//! time they are needed, so the roll log stays the single source of truth.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Mark, FRAMES_PER_GAME, MAX_ROLLS_LAST_FRAME, PINS_PER_RACK};

/// One scoring frame, as derived from the roll log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// 1-based frame number (1-10)
    pub number: u8,
    /// Index of this frame's first ball in the game's roll log.
    pub first_roll: usize,
    pub rolls: ArrayVec<u8, MAX_ROLLS_LAST_FRAME>,
}

impl Frame {
    pub(crate) fn new(number: u8, first_roll: usize) -> Self {
        Self {
            number,
            first_roll,
            rolls: ArrayVec::new(),
        }
    }

    pub fn is_last(&self) -> bool {
        self.number == FRAMES_PER_GAME
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PINS_PER_RACK)
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.rolls.len() >= 2
            && self.rolls[0] as u16 + self.rolls[1] as u16 == PINS_PER_RACK as u16
    }

    /// Two balls thrown and pins left standing
    pub fn is_open(&self) -> bool {
        self.rolls.len() >= 2 && !self.is_strike() && !self.is_spare()
    }

    /// Check whether no further ball belongs to this frame
    ///
    /// Frames 1-9 end on a strike or after two balls. The tenth frame ends
    /// after two balls when open, otherwise after the third (fill) ball.
    pub fn is_complete(&self) -> bool {
        if self.is_last() {
            self.rolls.len() == MAX_ROLLS_LAST_FRAME || self.is_open()
        } else {
            self.is_strike() || self.rolls.len() == 2
        }
    }

    /// Pins available to the next ball of this frame.
    ///
    /// The rack is reset whenever it is cleared, which only matters in the
    /// tenth frame where fill balls follow a strike or spare.
    pub fn pins_standing(&self) -> u8 {
        let mut standing = PINS_PER_RACK;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            if standing == 0 {
                standing = PINS_PER_RACK;
            }
        }
        standing
    }

    /// Sum of the first two balls (fill balls are bonus, not base).
    pub fn base_pins(&self) -> u32 {
        self.rolls.iter().take(2).map(|&p| p as u32).sum()
    }

    /// Score sheet marks for each ball thrown in this frame.
    ///
    /// Only the first ball into a fresh rack can be a strike; a later ball
    /// that clears the rack is a spare, even after a gutter ball.
    pub fn marks(&self) -> ArrayVec<Mark, MAX_ROLLS_LAST_FRAME> {
        let mut out = ArrayVec::new();
        let mut standing = PINS_PER_RACK;
        let mut first_ball = true;
        for &pins in &self.rolls {
            let mark = if first_ball && pins == PINS_PER_RACK {
                Mark::Strike
            } else if !first_ball && pins == standing {
                Mark::Spare
            } else if pins == 0 {
                Mark::Gutter
            } else {
                Mark::Pins(pins)
            };
            out.push(mark);

            standing = standing.saturating_sub(pins);
            first_ball = standing == 0;
            if first_ball {
                standing = PINS_PER_RACK;
            }
        }
        out
    }
}

/// Split a roll log into frames.
///
/// Only frames with at least one ball are returned. Rolls beyond a complete
/// tenth frame are ignored (the game never records them).
pub fn split_frames(rolls: &[u8]) -> ArrayVec<Frame, { FRAMES_PER_GAME as usize }> {
    let mut frames = ArrayVec::new();
    let mut i = 0;

    for number in 1..=FRAMES_PER_GAME {
        if i >= rolls.len() {
            break;
        }
        let mut frame = Frame::new(number, i);
        while i < rolls.len() && !frame.is_complete() {
            frame.rolls.push(rolls[i]);
            i += 1;
        }
        frames.push(frame);
    }

    frames
}
