//! Scoring module - standard ten-pin scoring over a roll log
//!
//! Rules:
//! - Open frame: pins knocked down by its two balls.
//! - Spare: 10 plus the next ball.
//! - Strike: 10 plus the next two balls, wherever they fall (later frames or
//!   tenth-frame fill balls).
//!
//! Everything here is a pure function of the roll log. Bonuses are looked up
//! in the flat sequence, so chained strikes and tenth-frame fill balls need no
//! special casing.

use arrayvec::ArrayVec;

use crate::frame::{split_frames, Frame};
use crate::types::{FRAMES_PER_GAME, PINS_PER_RACK};

/// Per-frame breakdown of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    /// Pins of the frame's own first two balls (strike counts as 10).
    pub base: u32,
    /// Bonus balls already thrown.
    pub bonus: u32,
    /// True once the frame and all of its bonus balls are known.
    pub settled: bool,
}

impl FrameScore {
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}

/// Number of look-ahead balls a frame earns
fn bonus_balls(frame: &Frame) -> usize {
    if frame.is_strike() {
        2
    } else if frame.is_spare() {
        1
    } else {
        0
    }
}

/// Score a single frame against the full roll log
pub fn score_frame(frame: &Frame, rolls: &[u8]) -> FrameScore {
    let (own, base) = if frame.is_strike() {
        (1, PINS_PER_RACK as u32)
    } else {
        (2, frame.base_pins())
    };

    let wanted = bonus_balls(frame);
    let start = (frame.first_roll + own).min(rolls.len());
    let bonus_rolls = &rolls[start..(start + wanted).min(rolls.len())];
    let bonus = bonus_rolls.iter().map(|&p| p as u32).sum();

    let own_done = frame.is_strike() || frame.rolls.len() >= 2;
    FrameScore {
        base,
        bonus,
        settled: own_done && bonus_rolls.len() == wanted,
    }
}

/// Score every frame that has at least one ball
pub fn score_frames(rolls: &[u8]) -> ArrayVec<FrameScore, { FRAMES_PER_GAME as usize }> {
    split_frames(rolls)
        .iter()
        .map(|frame| score_frame(frame, rolls))
        .collect()
}

/// Total score for a roll log.
///
/// Frames still in progress contribute what is known so far. The log is not
/// validated here; [`SingleGame`](crate::SingleGame) only ever records legal
/// balls of 0-10 pins.
pub fn calculate_score(rolls: &[u8]) -> u32 {
    score_frames(rolls).iter().map(FrameScore::total).sum()
}

/// Running totals as written on a score sheet.
///
/// A frame's cumulative total is `None` until it and every earlier frame are
/// settled.
pub fn cumulative_scores(rolls: &[u8]) -> ArrayVec<Option<u32>, { FRAMES_PER_GAME as usize }> {
    let mut running = Some(0u32);
    score_frames(rolls)
        .iter()
        .map(|fs| {
            running = match running {
                Some(total) if fs.settled => Some(total + fs.total()),
                _ => None,
            };
            running
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(pins: u8, n: usize) -> Vec<u8> {
        vec![pins; n]
    }

    #[test]
    fn test_gutter_game() {
        assert_eq!(calculate_score(&repeat(0, 20)), 0);
    }

    #[test]
    fn test_all_ones() {
        assert_eq!(calculate_score(&repeat(1, 20)), 20);
    }

    #[test]
    fn test_single_spare() {
        let mut rolls = vec![5, 5, 3];
        rolls.extend(repeat(0, 17));
        assert_eq!(calculate_score(&rolls), 16);
    }

    #[test]
    fn test_single_strike() {
        let mut rolls = vec![10, 3, 4];
        rolls.extend(repeat(0, 16));
        assert_eq!(calculate_score(&rolls), 24);
    }

    #[test]
    fn test_perfect_game() {
        assert_eq!(calculate_score(&repeat(10, 12)), 300);
    }

    #[test]
    fn test_all_spares() {
        // 21 balls of 5: every frame is 5/ followed by 5
        assert_eq!(calculate_score(&repeat(5, 21)), 150);
    }

    #[test]
    fn test_tenth_frame_spare_with_fill() {
        let mut rolls = repeat(0, 18);
        rolls.extend([7, 3, 10]);
        assert_eq!(calculate_score(&rolls), 20);
    }

    #[test]
    fn test_strike_in_ninth_reads_tenth_frame_balls() {
        let mut rolls = repeat(0, 16);
        rolls.extend([10, 10, 10, 10]);
        // ninth: 10 + 10 + 10, tenth: 10 + 10 + 10
        assert_eq!(calculate_score(&rolls), 60);
    }

    #[test]
    fn test_live_score_counts_known_bonus() {
        // strike followed by one ball so far
        let scores = score_frames(&[10, 4]);
        assert_eq!(scores[0].total(), 14);
        assert!(!scores[0].settled);
        assert_eq!(scores[1].total(), 4);
        assert!(!scores[1].settled);
        assert_eq!(calculate_score(&[10, 4]), 18);
    }

    #[test]
    fn test_cumulative_scores() {
        let cumulative = cumulative_scores(&[10, 3, 4, 5, 5]);
        assert_eq!(cumulative.as_slice(), &[Some(17), Some(24), None]);

        let cumulative = cumulative_scores(&repeat(10, 12));
        assert_eq!(cumulative[0], Some(30));
        assert_eq!(cumulative[9], Some(300));
    }

    #[test]
    fn test_unvalidated_log_does_not_panic() {
        assert_eq!(calculate_score(&[200, 200]), 400);
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(calculate_score(&[]), 0);
        assert!(cumulative_scores(&[]).is_empty());
    }
}
