//! Common types for Tic-Tac-Toe: marks, moves, turn outcomes and errors.

use core::fmt;

use super::bitboard::BitBoardError;
use super::config::{BOARD_SIZE, EMPTY_SYMBOL};

/// Symbol identifying which participant occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Cell::Occupied(Mark::X)),
            'O' => Some(Cell::Occupied(Mark::O)),
            c if c == EMPTY_SYMBOL => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// The two sides of a session. The server hosts the board and plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    Server,
    Client,
}

impl Participant {
    pub fn mark(self) -> Mark {
        match self {
            Participant::Server => Mark::X,
            Participant::Client => Mark::O,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Participant::Server => Participant::Client,
            Participant::Client => Participant::Server,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Server => write!(f, "server"),
            Participant::Client => write!(f, "client"),
        }
    }
}

/// A target cell, 1-based in both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: u8,
    column: u8,
}

impl Move {
    /// Validates that both coordinates lie in `1..=BOARD_SIZE`.
    pub fn new(row: u8, column: u8) -> Result<Self, BoardError> {
        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&column) {
            return Err(BoardError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Zero-based `(row, col)` used for indexing.
    pub(crate) fn index(&self) -> (usize, usize) {
        (self.row as usize - 1, self.column as usize - 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Result of applying one move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move placed; play passes to the other participant.
    Continue,
    /// Move placed and completed a line for the mover.
    Win,
    /// Move placed, filled the board and completed no line.
    Tie,
    /// Target cell already held a mark; board unchanged.
    RejectedOccupied,
}

impl TurnOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, TurnOutcome::RejectedOccupied)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TurnOutcome::Win | TurnOutcome::Tie)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Row or column outside `1..=3`.
    OutOfRange { row: u8, column: u8 },
    /// Rendered board text has the wrong shape or an unknown symbol.
    InvalidRender,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfRange { row, column } => write!(
                f,
                "Move ({}, {}) is outside the board (rows and columns are 1-{})",
                row, column, BOARD_SIZE
            ),
            BoardError::InvalidRender => write!(f, "Rendered board is malformed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned when a move is submitted out of turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The submitting participant is not the one to move.
    NotYourTurn(Participant),
    /// The session already reached a win or a tie.
    GameOver,
    /// The board rejected the write.
    Board(BoardError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn(p) => write!(f, "It is not the {}'s turn", p),
            TurnError::GameOver => write!(f, "The game is already over"),
            TurnError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
