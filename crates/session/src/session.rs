//! Multiplayer session - round-robin turn rotation over single-player games
//!
//! The session owns one [`SingleGame`] per player, keyed by name, plus the
//! turn order fixed at start. Every roll goes to the current player's game;
//! the session then decides whether the lane passes to the next player.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::core::{BowlingError, Result, SingleGame};
use crate::snapshot::{PlayerSnapshot, SessionSnapshot};
use crate::status::Status;
use crate::types::RotationPolicy;

/// A shared lane: several players, one sequence of shots.
#[derive(Debug, Clone, Default)]
pub struct MultiplayerSession {
    config: SessionConfig,
    /// Turn order, fixed at start.
    players: Vec<String>,
    games: HashMap<String, SingleGame>,
    /// Index into `players` of whoever bowls next.
    current: usize,
    started: bool,
}

impl MultiplayerSession {
    /// Create a session with the default (per-frame) rotation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Start a fresh game for every named player.
    ///
    /// Names are the lookup key for [`score_for`](Self::score_for), so the
    /// list must be non-empty and free of duplicates. Starting again discards
    /// any previous games.
    pub fn start<S: AsRef<str>>(&mut self, player_names: &[S]) -> Result<Status> {
        if player_names.is_empty() {
            return Err(BowlingError::NoPlayers);
        }

        let mut players = Vec::with_capacity(player_names.len());
        let mut games = HashMap::with_capacity(player_names.len());
        for name in player_names {
            let name = name.as_ref().to_string();
            if games.insert(name.clone(), SingleGame::new()).is_some() {
                return Err(BowlingError::DuplicatePlayer { name });
            }
            players.push(name);
        }

        info!(
            players = ?players,
            rotation = self.config.rotation.as_str(),
            "session started"
        );

        self.players = players;
        self.games = games;
        self.current = 0;
        self.started = true;
        self.status()
    }

    /// Record a ball for whoever is up and report what comes next.
    pub fn record_roll(&mut self, pins: u8) -> Result<Status> {
        if !self.started {
            return Err(BowlingError::NotStarted);
        }

        let name = &self.players[self.current];
        let game = self
            .games
            .get_mut(name)
            .ok_or_else(|| BowlingError::UnknownPlayer { name: name.clone() })?;
        let continues = game.record_roll(pins)?;

        let rotate = match self.config.rotation {
            RotationPolicy::PerFrame => !continues,
            RotationPolicy::PerRoll => true,
        };
        if rotate {
            self.advance();
        }

        let status = self.status()?;
        if status.is_finished() {
            info!("all games finished");
        }
        Ok(status)
    }

    /// Current score of the named player.
    pub fn score_for(&self, player_name: &str) -> Result<u32> {
        self.game_for(player_name)
            .map(SingleGame::score)
            .ok_or_else(|| BowlingError::UnknownPlayer {
                name: player_name.to_string(),
            })
    }

    /// Status line for the lane as it stands.
    pub fn status(&self) -> Result<Status> {
        let name = self.current_player().ok_or(BowlingError::NotStarted)?;
        let game = self
            .game_for(name)
            .ok_or_else(|| BowlingError::UnknownPlayer {
                name: name.to_string(),
            })?;

        if game.is_finished() {
            return Ok(Status::Finished);
        }
        Ok(Status::NextShot {
            player: name.to_string(),
            frame: game.current_frame_number()?,
            roll: game.next_roll_number()?,
        })
    }

    /// Pins up for the current player's next ball
    pub fn pins_standing(&self) -> Result<u8> {
        let name = self.current_player().ok_or(BowlingError::NotStarted)?;
        self.game_for(name)
            .ok_or_else(|| BowlingError::UnknownPlayer {
                name: name.to_string(),
            })?
            .pins_standing()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once every player's game is complete
    pub fn is_finished(&self) -> bool {
        self.started && self.games.values().all(SingleGame::is_finished)
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn current_player(&self) -> Option<&str> {
        if !self.started {
            return None;
        }
        self.players.get(self.current).map(String::as_str)
    }

    pub fn game_for(&self, player_name: &str) -> Option<&SingleGame> {
        self.games.get(player_name)
    }

    /// Scores in turn order
    pub fn scores(&self) -> Vec<(&str, u32)> {
        self.players
            .iter()
            .filter_map(|name| self.games.get(name).map(|g| (name.as_str(), g.score())))
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rotation: self.config.rotation,
            started: self.started,
            current_player: self.current_player().map(str::to_string),
            status: self.status().ok(),
            players: self
                .players
                .iter()
                .filter_map(|name| {
                    self.games.get(name).map(|game| PlayerSnapshot {
                        name: name.clone(),
                        game: game.snapshot(),
                    })
                })
                .collect(),
        }
    }

    /// Hand the lane to the next player whose game is still running.
    ///
    /// When nobody is left, the index still moves one seat on so that the
    /// current player is a finished one.
    fn advance(&mut self) {
        let n = self.players.len();
        let from = self.current;
        self.current = (from + 1) % n;

        for step in 1..=n {
            let idx = (from + step) % n;
            let running = self
                .games
                .get(&self.players[idx])
                .is_some_and(|g| !g.is_finished());
            if running {
                self.current = idx;
                break;
            }
        }
        debug!(
            from = %self.players[from],
            to = %self.players[self.current],
            "turn passed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn prompt(player: &str, frame: u8, roll: u8) -> Status {
        Status::NextShot {
            player: player.to_string(),
            frame,
            roll,
        }
    }

    #[test]
    fn test_start_prompts_first_player() {
        let mut session = MultiplayerSession::new();
        let status = session.start(&["Joris", "Riyad"]).unwrap();
        assert_eq!(status, prompt("Joris", 1, 1));
        assert!(session.is_started());
        assert_eq!(session.current_player(), Some("Joris"));
    }

    #[test]
    fn test_start_rejects_empty_list() {
        let mut session = MultiplayerSession::new();
        let names: [&str; 0] = [];
        let err = session.start(&names).unwrap_err();
        assert_eq!(err, BowlingError::NoPlayers);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!session.is_started());
    }

    #[test]
    fn test_start_rejects_duplicate_names() {
        let mut session = MultiplayerSession::new();
        let err = session.start(&["Joris", "Riyad", "Joris"]).unwrap_err();
        assert_eq!(
            err,
            BowlingError::DuplicatePlayer {
                name: "Joris".to_string()
            }
        );
        assert!(!session.is_started());
    }

    #[test]
    fn test_roll_before_start_is_invalid_state() {
        let mut session = MultiplayerSession::new();
        let err = session.record_roll(5).unwrap_err();
        assert_eq!(err, BowlingError::NotStarted);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_per_frame_rotation_waits_for_frame_end() {
        let mut session = MultiplayerSession::new();
        session.start(&["Joris", "Riyad"]).unwrap();

        assert_eq!(session.record_roll(5).unwrap(), prompt("Joris", 1, 2));
        assert_eq!(session.record_roll(3).unwrap(), prompt("Riyad", 1, 1));
        assert_eq!(session.record_roll(10).unwrap(), prompt("Joris", 2, 1));
    }

    #[test]
    fn test_per_roll_rotation_moves_every_ball() {
        let config = SessionConfig::default().with_rotation(RotationPolicy::PerRoll);
        let mut session = MultiplayerSession::with_config(config);
        session.start(&["Joris", "Riyad"]).unwrap();

        assert_eq!(session.record_roll(5).unwrap(), prompt("Riyad", 1, 1));
        assert_eq!(session.record_roll(7).unwrap(), prompt("Joris", 1, 2));
        assert_eq!(session.record_roll(4).unwrap(), prompt("Riyad", 1, 2));
        assert_eq!(session.record_roll(2).unwrap(), prompt("Joris", 2, 1));
        assert_eq!(session.score_for("Joris").unwrap(), 9);
        assert_eq!(session.score_for("Riyad").unwrap(), 9);
    }

    #[test]
    fn test_rejected_roll_keeps_turn() {
        let mut session = MultiplayerSession::new();
        session.start(&["Joris", "Riyad"]).unwrap();
        session.record_roll(8).unwrap();

        let err = session.record_roll(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(session.status().unwrap(), prompt("Joris", 1, 2));
        assert_eq!(session.score_for("Joris").unwrap(), 8);
    }

    #[test]
    fn test_score_for_unknown_player() {
        let mut session = MultiplayerSession::new();
        session.start(&["Joris", "Riyad"]).unwrap();
        let err = session.score_for("Charlie").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_single_player_session_finishes() {
        let mut session = MultiplayerSession::new();
        session.start(&["Solo"]).unwrap();
        for _ in 0..11 {
            assert!(!session.record_roll(10).unwrap().is_finished());
        }
        assert_eq!(session.record_roll(10).unwrap(), Status::Finished);
        assert_eq!(session.score_for("Solo").unwrap(), 300);
        assert!(session.is_finished());
    }

    #[test]
    fn test_restart_discards_previous_games() {
        let mut session = MultiplayerSession::new();
        session.start(&["Joris"]).unwrap();
        session.record_roll(7).unwrap();

        let status = session.start(&["Riyad", "Joris"]).unwrap();
        assert_eq!(status, prompt("Riyad", 1, 1));
        assert_eq!(session.score_for("Joris").unwrap(), 0);
    }

    #[test]
    fn test_scores_in_turn_order() {
        let mut session = MultiplayerSession::new();
        session.start(&["B", "A"]).unwrap();
        session.record_roll(10).unwrap();
        session.record_roll(4).unwrap();
        assert_eq!(session.scores(), vec![("B", 10), ("A", 4)]);
    }
}
