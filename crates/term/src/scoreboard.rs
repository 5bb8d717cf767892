//! Scoreboard: maps a session snapshot into a plain-text score sheet.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{Frame, GameSnapshot};
use crate::session::{PlayerSnapshot, SessionSnapshot};
use crate::types::FRAMES_PER_GAME;

/// Box widths in characters: frames 1-9 hold up to "7 /", the tenth "X X X".
const FRAME_W: usize = 3;
const LAST_FRAME_W: usize = 5;

/// A score sheet renderer, one pair of rows per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    /// Minimum width of the name column.
    name_w: usize,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self { name_w: 6 }
    }
}

impl Scoreboard {
    pub fn new(name_w: usize) -> Self {
        Self { name_w }
    }

    /// Render every player of the session, in turn order.
    pub fn render(&self, snap: &SessionSnapshot) -> String {
        let name_w = snap
            .players
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.name_w);

        let mut out = header(name_w);
        for player in &snap.players {
            out.push('\n');
            out.push_str(&self.render_player(player, name_w));
        }
        out
    }

    /// Marks row and running-total row for one player.
    pub fn render_player(&self, player: &PlayerSnapshot, name_w: usize) -> String {
        let game = &player.game;
        let mut marks = format!("{:<name_w$} |", player.name);
        let mut totals = format!("{:<name_w$} |", "");

        for number in 1..=FRAMES_PER_GAME {
            let idx = number as usize - 1;
            let w = box_width(number);
            let frame = game.frames.get(idx);
            let cumulative = game.cumulative.get(idx).copied().flatten();

            let _ = write!(marks, " {:<w$} |", frame.map(frame_marks).unwrap_or_default());
            let _ = match cumulative {
                Some(total) => write!(totals, " {:>w$} |", total),
                None => write!(totals, " {:w$} |", ""),
            };
        }
        let _ = write!(marks, " {:>5}", game.score);

        format!("{}\n{}", marks, totals)
    }
}

fn box_width(frame_number: u8) -> usize {
    if frame_number == FRAMES_PER_GAME {
        LAST_FRAME_W
    } else {
        FRAME_W
    }
}

fn header(name_w: usize) -> String {
    let mut out = format!("{:<name_w$} |", "Frame");
    for number in 1..=FRAMES_PER_GAME {
        let w = box_width(number);
        let _ = write!(out, " {:^w$} |", number);
    }
    out.push_str(" Total");
    out
}

/// Score sheet marks of one frame, separated by spaces
pub fn frame_marks(frame: &Frame) -> String {
    let marks: Vec<String> = frame.marks().iter().map(|m| m.as_char().to_string()).collect();
    marks.join(" ")
}

/// One-line summary of a game, e.g. `X 7 / - 5 (35)`
pub fn summary_line(game: &GameSnapshot) -> String {
    let frames: Vec<String> = game.frames.iter().map(frame_marks).collect();
    format!("{} ({})", frames.join(" | "), game.score)
}
