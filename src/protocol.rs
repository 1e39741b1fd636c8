#![cfg(feature = "std")]
//! JSON envelopes exchanged between server and client.
//!
//! The client sends `{"row":2,"column":3}` for each move attempt; the server
//! answers every move (its own and the client's) with
//! `{"status_message":"…","game_board":"…"}`. Coordinates travel as plain
//! decimal values.

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, Move, Participant, TurnOutcome};

pub const MSG_SPOT_UNAVAILABLE: &str = "Spot unavailable. Please try again.";
pub const MSG_CLIENT_WON: &str = "You win";
pub const MSG_SERVER_WON: &str = "Server won";
pub const MSG_TIE: &str = "TIE GAME";
pub const MSG_SERVER_MOVED: &str = "Player X move:";
pub const MSG_CLIENT_MOVED: &str = "Your move was a success.";

/// Client → server move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEnvelope {
    pub row: u8,
    pub column: u8,
}

impl MoveEnvelope {
    /// Range-checked move carried by this envelope.
    pub fn to_move(self) -> Result<Move, BoardError> {
        Move::new(self.row, self.column)
    }
}

impl From<Move> for MoveEnvelope {
    fn from(mv: Move) -> Self {
        Self {
            row: mv.row(),
            column: mv.column(),
        }
    }
}

/// Server → client status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub status_message: String,
    pub game_board: String,
}

impl StatusEnvelope {
    pub fn new(status_message: impl Into<String>, board: &Board) -> Self {
        Self {
            status_message: status_message.into(),
            game_board: board.render(),
        }
    }

    /// Status to send after `mover`'s attempt produced `outcome`.
    pub fn for_outcome(mover: Participant, outcome: TurnOutcome, board: &Board) -> Self {
        let message = match (mover, outcome) {
            (_, TurnOutcome::Tie) => MSG_TIE,
            (Participant::Server, TurnOutcome::Win) => MSG_SERVER_WON,
            (Participant::Client, TurnOutcome::Win) => MSG_CLIENT_WON,
            (Participant::Server, TurnOutcome::Continue) => MSG_SERVER_MOVED,
            (Participant::Client, TurnOutcome::Continue) => MSG_CLIENT_MOVED,
            (_, TurnOutcome::RejectedOccupied) => MSG_SPOT_UNAVAILABLE,
        };
        Self::new(message, board)
    }

    pub fn kind(&self) -> StatusKind {
        StatusKind::classify(&self.status_message)
    }

    /// Parses `game_board` back into a [`Board`].
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::parse_rendered(&self.game_board)
    }
}

/// How the client reacts to a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Last client move hit an occupied cell; prompt again.
    Rejected,
    ClientWon,
    ServerWon,
    Tie,
    /// Any other message: print it and carry on.
    Update,
}

impl StatusKind {
    pub fn classify(message: &str) -> Self {
        match message {
            MSG_SPOT_UNAVAILABLE => StatusKind::Rejected,
            MSG_CLIENT_WON => StatusKind::ClientWon,
            MSG_SERVER_WON => StatusKind::ServerWon,
            MSG_TIE => StatusKind::Tie,
            _ => StatusKind::Update,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StatusKind::ClientWon | StatusKind::ServerWon | StatusKind::Tie
        )
    }
}

/// Messages exchanged between the server and a client.
///
/// Untagged on the wire: the two envelopes are told apart by their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Move(MoveEnvelope),
    Status(StatusEnvelope),
}

impl From<MoveEnvelope> for Message {
    fn from(env: MoveEnvelope) -> Self {
        Message::Move(env)
    }
}

impl From<StatusEnvelope> for Message {
    fn from(env: StatusEnvelope) -> Self {
        Message::Status(env)
    }
}

/// Errors raised while converting messages to or from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Encode(String),
    /// Malformed JSON, a missing field, or a value of the wrong type.
    Decode(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Encode(e) => write!(f, "Serialization error: {}", e),
            CodecError::Decode(e) => write!(f, "Deserialization error: {}", e),
        }
    }
}

impl std::error::Error for CodecError {}

/// Serialize a message to compact JSON.
pub fn encode(msg: &Message) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(msg).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Parse one complete JSON document into a message.
pub fn decode(data: &[u8]) -> Result<Message, CodecError> {
    serde_json::from_slice(data).map_err(|e| CodecError::Decode(e.to_string()))
}
