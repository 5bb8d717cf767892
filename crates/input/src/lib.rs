//! Text input module (scorer-facing).
//!
//! Maps what a scorer types at the lane into pin counts and player lists.
//! Accepts plain numbers as well as score sheet notation (`X`, `/`, `-`).

pub mod map;

pub use bowling_core as core;
pub use bowling_types as types;

pub use map::{parse_names, parse_shot, should_quit};
