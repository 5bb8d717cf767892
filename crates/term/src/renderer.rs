//! TerminalRenderer: writes status lines and the scoreboard to a terminal.
//!
//! Output is line-oriented (no alternate screen), so it works the same on an
//! interactive terminal and when stdout is piped.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::session::Status;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    color: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            color: true,
        }
    }

    /// Disable ANSI styling (plain text only).
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn status(&mut self, status: &Status) -> Result<()> {
        self.buf.clear();
        encode_status_into(status, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.buf.clear();
        encode_line_into(message, Some(Color::Red), false, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn scoreboard(&mut self, board: &str) -> Result<()> {
        self.buf.clear();
        for line in board.lines() {
            encode_line_into(line, None, false, self.color, &mut self.buf)?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode one status line into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_status_into(status: &Status, color: bool, out: &mut Vec<u8>) -> Result<()> {
    let (fg, bold) = match status {
        Status::NextShot { .. } => (Color::Cyan, false),
        Status::Finished => (Color::Green, true),
    };
    encode_line_into(&status.to_string(), Some(fg), bold, color, out)
}

fn encode_line_into(
    text: &str,
    fg: Option<Color>,
    bold: bool,
    color: bool,
    out: &mut Vec<u8>,
) -> Result<()> {
    if color {
        if let Some(fg) = fg {
            out.queue(SetForegroundColor(fg))?;
        }
        if bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    out.queue(Print(text))?;
    if color {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    out.queue(Print("\n"))?;
    Ok(())
}
