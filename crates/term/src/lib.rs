//! Terminal presentation module.
//!
//! A small, lane-oriented output layer: the status line after every ball and
//! a plain-text score sheet at the end.
//!
//! - [`scoreboard`] is pure and renders a [`SessionSnapshot`](crate::session::SessionSnapshot)
//!   into text
//! - [`renderer`] writes that text to stdout with crossterm styling

pub mod renderer;
pub mod scoreboard;

pub use bowling_core as core;
pub use bowling_session as session;
pub use bowling_types as types;

pub use renderer::{encode_status_into, TerminalRenderer};
pub use scoreboard::{frame_marks, summary_line, Scoreboard};
