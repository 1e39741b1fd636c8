//! Core Tic-Tac-Toe game engine (no_std compatible)
//!
//! Pure game logic: the board, move validation and turn alternation. Nothing
//! here touches I/O, so the same engine backs the TCP server, the in-process
//! `local` mode and the tests.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod rules;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::{BoardError, Cell, Mark, Move, Participant, TurnError, TurnOutcome};
pub use config::*;
pub use game::{GameEngine, GameStatus, SessionPhase};
pub use rules::apply_move;
