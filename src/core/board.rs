//! The 3x3 game board: cell state, rendering and win detection.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::str::FromStr;

use super::bitboard::BitBoard;
use super::common::{BoardError, Cell, Mark, Move};
use super::config::BOARD_SIZE;

type BB = BitBoard<u16, { BOARD_SIZE as usize }>;

const N: usize = BOARD_SIZE as usize;

/// The eight winning lines in evaluation order: rows, columns, diagonals.
/// Raw masks are row-major with bit `row * 3 + col`.
const LINES: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// Board state: one occupancy mask per mark.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            x: BB::new(),
            o: BB::new(),
        }
    }

    fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn marks_mut(&mut self, mark: Mark) -> &mut BB {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Contents of the cell at `mv`.
    pub fn cell(&self, mv: Move) -> Cell {
        let (r, c) = mv.index();
        // Move guarantees in-range indices.
        if self.x.get(r, c).unwrap_or(false) {
            Cell::Occupied(Mark::X)
        } else if self.o.get(r, c).unwrap_or(false) {
            Cell::Occupied(Mark::O)
        } else {
            Cell::Empty
        }
    }

    pub fn is_cell_empty(&self, mv: Move) -> bool {
        self.cell(mv) == Cell::Empty
    }

    /// Writes `mark` into the cell unconditionally. Callers check
    /// [`Board::is_cell_empty`] first; see [`crate::apply_move`].
    pub fn place_mark(&mut self, mv: Move, mark: Mark) -> Result<(), BoardError> {
        let (r, c) = mv.index();
        self.marks_mut(mark.opponent()).clear(r, c)?;
        self.marks_mut(mark).set(r, c)?;
        Ok(())
    }

    /// Number of cells holding a mark.
    pub fn filled(&self) -> usize {
        (self.x | self.o).count_ones()
    }

    pub fn is_full(&self) -> bool {
        (self.x | self.o) == BB::full()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> {
        (!(self.x | self.o))
            .iter_set_bits()
            .filter_map(|(r, c)| Move::new(r as u8 + 1, c as u8 + 1).ok())
    }

    /// True iff at least one row, column or diagonal is fully `mark`.
    pub fn has_winning_line(&self, mark: Mark) -> bool {
        let held = self.marks(mark);
        LINES
            .iter()
            .any(|&line| held.contains_all(BB::from_raw(line)))
    }

    /// Mark owning a complete line, if any.
    ///
    /// Rows are scanned first and the first complete row sets the verdict;
    /// any complete column then overrides it, and a complete diagonal
    /// overrides both. Only boards that cannot arise in alternating play hold
    /// lines for both marks, so the ordering never matters in a real game.
    pub fn winner(&self) -> Option<Mark> {
        let owner = |line: &u16| {
            let line = BB::from_raw(*line);
            if self.x.contains_all(line) {
                Some(Mark::X)
            } else if self.o.contains_all(line) {
                Some(Mark::O)
            } else {
                None
            }
        };
        let mut winner = LINES[..3].iter().find_map(owner);
        for line in LINES[3..].iter() {
            if let Some(mark) = owner(line) {
                winner = Some(mark);
            }
        }
        winner
    }

    /// Grid as newline-terminated rows of single characters, top to bottom.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(N * (N + 1));
        for r in 1..=BOARD_SIZE {
            for c in 1..=BOARD_SIZE {
                let cell = Move::new(r, c)
                    .map(|mv| self.cell(mv))
                    .unwrap_or(Cell::Empty);
                out.push(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Inverse of [`Board::render`]. A missing final newline is tolerated.
    pub fn parse_rendered(text: &str) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let mut rows = 0;
        for (r, line) in text.lines().enumerate() {
            if r >= N || line.chars().count() != N {
                return Err(BoardError::InvalidRender);
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(BoardError::InvalidRender)?;
                if let Cell::Occupied(mark) = cell {
                    board.place_mark(Move::new(r as u8 + 1, c as u8 + 1)?, mark)?;
                }
            }
            rows += 1;
        }
        if rows != N {
            return Err(BoardError::InvalidRender);
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse_rendered(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ x: {:?}, o: {:?} }}", self.x, self.o)
    }
}
