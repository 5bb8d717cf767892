//! Single-player game - roll log, legality checks and score queries
//!
//! The game owns an append-only roll log. Frame boundaries, the current frame,
//! the next ball number and the score are all derived from that log on demand.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::{BowlingError, Result};
use crate::frame::{split_frames, Frame};
use crate::scoring::{calculate_score, cumulative_scores};
use crate::snapshot::GameSnapshot;
use crate::types::{FRAMES_PER_GAME, MAX_ROLLS_PER_GAME, PINS_PER_RACK};

/// One player's game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleGame {
    rolls: ArrayVec<u8, MAX_ROLLS_PER_GAME>,
}

impl SingleGame {
    /// Create an empty game
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one ball.
    ///
    /// Returns `true` when the same frame expects another ball and `false`
    /// when this ball completed the frame (the tenth frame completing also
    /// ends the game). Rejected balls are not recorded.
    pub fn record_roll(&mut self, pins: u8) -> Result<bool> {
        let frame = self.open_frame()?;

        if pins > PINS_PER_RACK {
            return Err(BowlingError::PinsOutOfRange { pins: pins as i64 });
        }
        let standing = frame.pins_standing();
        if pins > standing {
            return Err(BowlingError::TooManyPins { pins, standing });
        }

        self.rolls.push(pins);

        let frames = split_frames(&self.rolls);
        let continues = frames.last().is_some_and(|f| !f.is_complete());
        debug!(
            frame = frame.number,
            ball = frame.rolls.len() + 1,
            pins,
            continues,
            "roll recorded"
        );
        Ok(continues)
    }

    /// Check whether the tenth frame is complete
    pub fn is_finished(&self) -> bool {
        let frames = split_frames(&self.rolls);
        frames.len() == FRAMES_PER_GAME as usize && frames.last().is_some_and(Frame::is_complete)
    }

    /// 1-based number of the frame the next ball belongs to
    pub fn current_frame_number(&self) -> Result<u8> {
        Ok(self.open_frame()?.number)
    }

    /// 1-based number of the next ball within the current frame
    pub fn next_roll_number(&self) -> Result<u8> {
        Ok(self.open_frame()?.rolls.len() as u8 + 1)
    }

    /// Pins available to the next ball
    pub fn pins_standing(&self) -> Result<u8> {
        Ok(self.open_frame()?.pins_standing())
    }

    /// Total score so far
    pub fn score(&self) -> u32 {
        calculate_score(&self.rolls)
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn frames(&self) -> Vec<Frame> {
        split_frames(&self.rolls).into_iter().collect()
    }

    /// Running totals per frame, `None` while a frame's bonus is pending
    pub fn frame_scores(&self) -> Vec<Option<u32>> {
        cumulative_scores(&self.rolls).into_iter().collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rolls.clear();
        out.rolls.extend(self.rolls.iter().copied());
        out.frames = self.frames();
        out.cumulative = self.frame_scores();
        out.score = self.score();
        out.finished = self.is_finished();
        out.current_frame = self.current_frame_number().ok();
        out.next_roll = self.next_roll_number().ok();
    }

    /// The frame the next ball belongs to, possibly with no balls yet.
    fn open_frame(&self) -> Result<Frame> {
        let frames = split_frames(&self.rolls);
        match frames.last() {
            None => Ok(Frame::new(1, 0)),
            Some(last) if !last.is_complete() => Ok(last.clone()),
            Some(last) if last.is_last() => Err(BowlingError::GameFinished),
            Some(last) => Ok(Frame::new(last.number + 1, self.rolls.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn play(game: &mut SingleGame, rolls: &[u8]) {
        for &pins in rolls {
            game.record_roll(pins).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = SingleGame::new();
        assert!(!game.is_finished());
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_frame_number().unwrap(), 1);
        assert_eq!(game.next_roll_number().unwrap(), 1);
        assert_eq!(game.pins_standing().unwrap(), 10);
    }

    #[test]
    fn test_record_roll_reports_frame_continuation() {
        let mut game = SingleGame::new();
        assert!(game.record_roll(3).unwrap());
        assert_eq!(game.next_roll_number().unwrap(), 2);
        assert!(!game.record_roll(4).unwrap());
        assert_eq!(game.current_frame_number().unwrap(), 2);
        assert_eq!(game.next_roll_number().unwrap(), 1);
    }

    #[test]
    fn test_strike_completes_frame() {
        let mut game = SingleGame::new();
        assert!(!game.record_roll(10).unwrap());
        assert_eq!(game.current_frame_number().unwrap(), 2);
    }

    #[test]
    fn test_tenth_frame_open_ends_game() {
        let mut game = SingleGame::new();
        play(&mut game, &[0; 18]);
        assert_eq!(game.current_frame_number().unwrap(), 10);
        assert!(game.record_roll(3).unwrap());
        assert!(!game.record_roll(4).unwrap());
        assert!(game.is_finished());
        assert_eq!(game.score(), 7);
    }

    #[test]
    fn test_tenth_frame_strike_grants_two_fill_balls() {
        let mut game = SingleGame::new();
        play(&mut game, &[0; 18]);
        assert!(game.record_roll(10).unwrap());
        assert_eq!(game.next_roll_number().unwrap(), 2);
        assert!(game.record_roll(10).unwrap());
        assert_eq!(game.next_roll_number().unwrap(), 3);
        assert!(!game.record_roll(10).unwrap());
        assert!(game.is_finished());
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn test_perfect_game() {
        let mut game = SingleGame::new();
        play(&mut game, &[10; 12]);
        assert!(game.is_finished());
        assert_eq!(game.score(), 300);
    }

    #[test]
    fn test_roll_after_finish_is_invalid_state() {
        let mut game = SingleGame::new();
        play(&mut game, &[0; 20]);
        let err = game.record_roll(5).unwrap_err();
        assert_eq!(err, BowlingError::GameFinished);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(game.rolls().len(), 20);
    }

    #[test]
    fn test_prompt_queries_fail_after_finish() {
        let mut game = SingleGame::new();
        play(&mut game, &[0; 20]);
        assert_eq!(game.current_frame_number(), Err(BowlingError::GameFinished));
        assert_eq!(game.next_roll_number(), Err(BowlingError::GameFinished));
    }

    #[test]
    fn test_rejects_more_than_ten_pins() {
        let mut game = SingleGame::new();
        let err = game.record_roll(11).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(game.rolls().is_empty());
    }

    #[test]
    fn test_rejects_more_pins_than_standing() {
        let mut game = SingleGame::new();
        game.record_roll(7).unwrap();
        let err = game.record_roll(4).unwrap_err();
        assert_eq!(err, BowlingError::TooManyPins { pins: 4, standing: 3 });
        assert_eq!(game.rolls(), &[7]);
        assert!(game.record_roll(3).is_ok());
    }

    #[test]
    fn test_tenth_frame_fill_ball_limited_by_standing_pins() {
        let mut game = SingleGame::new();
        play(&mut game, &[0; 18]);
        play(&mut game, &[10, 6]);
        assert_eq!(game.pins_standing().unwrap(), 4);
        assert!(game.record_roll(5).is_err());
        assert!(!game.record_roll(4).unwrap());
        assert_eq!(game.score(), 20);
    }

    #[test]
    fn test_frame_scores() {
        let mut game = SingleGame::new();
        play(&mut game, &[10, 3, 4, 6]);
        assert_eq!(game.frame_scores(), vec![Some(17), Some(24), None]);
    }
}
