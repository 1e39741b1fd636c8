//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, GameEngine, GameStatus, Mark, Move, Participant, Player, TurnOutcome};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, ClientNode, ServerNode};

#[cfg(feature = "std")]
pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
