//! Core scoring module - pure, deterministic, and testable
//!
//! This crate contains the ten-pin rules: frame derivation, bonus scoring and
//! the single-player game. It has no dependencies on terminals, input parsing
//! or multiplayer coordination.
//!
//! # Module Structure
//!
//! - [`frame`]: derives frames (and score sheet marks) from a flat roll log
//! - [`scoring`]: strike/spare look-ahead scoring as pure functions
//! - [`game`]: [`SingleGame`], the append-only roll log with legality checks
//! - [`snapshot`]: serializable view of a game
//! - [`error`]: [`BowlingError`] and its [`ErrorKind`] categories
//!
//! # Example
//!
//! ```
//! use bowling_core::SingleGame;
//!
//! let mut game = SingleGame::new();
//! assert!(game.record_roll(7).unwrap()); // same frame continues
//! assert!(!game.record_roll(3).unwrap()); // spare ends the frame
//! game.record_roll(5).unwrap();
//!
//! assert_eq!(game.score(), 20); // 10 + 5 bonus, plus 5
//! assert_eq!(game.current_frame_number().unwrap(), 2);
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use bowling_types as types;

pub use error::{BowlingError, ErrorKind, Result};
pub use frame::{split_frames, Frame};
pub use game::SingleGame;
pub use scoring::{calculate_score, cumulative_scores, score_frames, FrameScore};
pub use snapshot::GameSnapshot;
