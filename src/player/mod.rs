//! Player trait and implementations
//!
//! A Player decides where its mark goes and is told what happened:
//! - AiPlayer: picks winning/blocking cells, otherwise centre, corners, random
//! - CliPlayer: interactive console player reading rows and columns

use crate::core::{Board, Mark, Move};

/// Interface implemented by the participants driving a node.
///
/// Nodes own the protocol; a player only chooses moves and presents what the
/// node reports back.
pub trait Player: Send {
    /// Choose the next cell for `mark` given the current board.
    fn select_move(&mut self, board: &Board, mark: Mark) -> anyhow::Result<Move>;

    /// The last move landed on an occupied cell; `select_move` follows.
    fn handle_rejected(&mut self, _mv: Move, _message: &str, _board: &Board) {}

    /// A move was accepted and the game continues.
    fn handle_update(&mut self, _message: &str, _board: &Board) {}

    /// The game ended; `banner` is the result from this player's side.
    fn handle_game_over(&mut self, _banner: &str, _board: &Board) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{Axis, CliPlayer};
