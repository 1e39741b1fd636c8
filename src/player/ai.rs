#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{Board, Mark, Move};

use super::Player;

/// Computer player: take a win, block a loss, then prefer the centre and
/// corners, falling back to a random empty cell.
pub struct AiPlayer {
    rng: SmallRng,
}

const CENTER: (u8, u8) = (2, 2);
const CORNERS: [(u8, u8); 4] = [(1, 1), (1, 3), (3, 1), (3, 3)];

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// AI with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// First empty cell where `mark` completes a line.
    fn completing_move(board: &Board, mark: Mark) -> Option<Move> {
        board.empty_cells().find(|&mv| {
            let mut probe = *board;
            probe.place_mark(mv, mark).is_ok() && probe.has_winning_line(mark)
        })
    }

    fn preferred(&mut self, board: &Board) -> Option<Move> {
        let center = Move::new(CENTER.0, CENTER.1).ok()?;
        if board.is_cell_empty(center) {
            return Some(center);
        }
        let corners: Vec<Move> = CORNERS
            .iter()
            .filter_map(|&(r, c)| Move::new(r, c).ok())
            .filter(|&mv| board.is_cell_empty(mv))
            .collect();
        if !corners.is_empty() {
            return Some(corners[self.rng.random_range(0..corners.len())]);
        }
        let rest: Vec<Move> = board.empty_cells().collect();
        if rest.is_empty() {
            return None;
        }
        Some(rest[self.rng.random_range(0..rest.len())])
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, board: &Board, mark: Mark) -> anyhow::Result<Move> {
        let choice = Self::completing_move(board, mark)
            .or_else(|| Self::completing_move(board, mark.opponent()))
            .or_else(|| self.preferred(board))
            .ok_or_else(|| anyhow::anyhow!("No empty cell left for {}", mark))?;
        log::debug!("AI {} chooses {}", mark, choice);
        Ok(choice)
    }

    fn handle_rejected(&mut self, mv: Move, message: &str, _board: &Board) {
        log::warn!("AI move {} rejected: {}", mv, message);
    }

    fn handle_update(&mut self, message: &str, board: &Board) {
        log::debug!("{}\n{}", message, board.render());
    }

    fn handle_game_over(&mut self, banner: &str, board: &Board) {
        log::info!("{}\n{}", banner, board.render());
    }
}
