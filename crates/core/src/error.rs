use thiserror::Error;

/// Broad category of a [`BowlingError`].
///
/// Every error is caller misuse: either the arguments were wrong or the
/// call came at the wrong point in the game's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// All errors the scoring engine and session can return.
///
/// A call that returns an error leaves the game or session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BowlingError {
    #[error("at least one player is required to start a session")]
    NoPlayers,

    #[error("player {name} is listed more than once")]
    DuplicatePlayer { name: String },

    #[error("player {name} is not part of this session")]
    UnknownPlayer { name: String },

    #[error("a roll knocks down at most 10 pins, got {pins}")]
    PinsOutOfRange { pins: i64 },

    #[error("only {standing} pins are standing, cannot knock down {pins}")]
    TooManyPins { pins: u8, standing: u8 },

    #[error("cannot read a shot from {input:?}")]
    InvalidShot { input: String },

    #[error("the session has not been started")]
    NotStarted,

    #[error("the game is already finished")]
    GameFinished,
}

impl BowlingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BowlingError::NoPlayers
            | BowlingError::DuplicatePlayer { .. }
            | BowlingError::UnknownPlayer { .. }
            | BowlingError::PinsOutOfRange { .. }
            | BowlingError::TooManyPins { .. }
            | BowlingError::InvalidShot { .. } => ErrorKind::InvalidArgument,
            BowlingError::NotStarted | BowlingError::GameFinished => ErrorKind::InvalidState,
        }
    }
}

pub type Result<T> = std::result::Result<T, BowlingError>;
