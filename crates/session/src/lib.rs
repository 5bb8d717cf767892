//! Multiplayer session module - several players sharing one lane
//!
//! [`MultiplayerSession`] keeps one [`SingleGame`](crate::core::SingleGame)
//! per player and interleaves them into a single sequence of shots. After each
//! ball it reports a [`Status`]: either the next shot prompt or the end of the
//! session.
//!
//! # Turn Rotation
//!
//! Controlled by [`SessionConfig::rotation`]:
//!
//! - **Per frame** (default): a player keeps the lane until their frame is
//!   complete. A strike cedes the turn after one ball, an open frame after two.
//! - **Per roll**: the lane passes on after every ball.
//!
//! Either way, players whose game is already over are skipped.
//!
//! # Example
//!
//! ```
//! use bowling_session::MultiplayerSession;
//!
//! let mut session = MultiplayerSession::new();
//! let status = session.start(&["Joris", "Riyad"]).unwrap();
//! assert_eq!(status.to_string(), "Prochain tir : joueur Joris, tour n° 1, boule n° 1");
//!
//! let status = session.record_roll(10).unwrap();
//! assert_eq!(status.to_string(), "Prochain tir : joueur Riyad, tour n° 1, boule n° 1");
//! assert_eq!(session.score_for("Joris").unwrap(), 10);
//! ```
//!
//! # Concurrency
//!
//! Sessions are plain synchronous values. Callers sharing one across threads
//! must serialize access (one mutex per session).

pub mod config;
pub mod session;
pub mod snapshot;
pub mod status;

pub use bowling_core as core;
pub use bowling_types as types;

pub use config::SessionConfig;
pub use session::MultiplayerSession;
pub use snapshot::{PlayerSnapshot, SessionSnapshot};
pub use status::Status;
