#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::core::{Board, Mark, Move, BOARD_SIZE};
use crate::ui;

use super::Player;

/// Which coordinate is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Console player. Reads whitespace-separated numbers, so `2 3` on one line
/// answers both the row and the column prompt.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl CliPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn prompt_turn(&mut self, mark: Mark) -> io::Result<()> {
        writeln!(self.output, "Player {} it is your move.", mark)
    }

    pub fn prompt_row(&mut self) -> io::Result<()> {
        write!(self.output, "Please enter a row number(1-{}): ", BOARD_SIZE)?;
        self.output.flush()
    }

    pub fn prompt_column(&mut self) -> io::Result<()> {
        write!(self.output, "Please enter a column number(1-{}): ", BOARD_SIZE)?;
        self.output.flush()
    }

    pub fn prompt_validation_error(&mut self, low: u8, high: u8, axis: Axis) -> io::Result<()> {
        write!(
            self.output,
            "Invalid selection. Please enter a {} number from {} to {}: ",
            axis, low, high
        )?;
        self.output.flush()
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("Input closed while waiting for a move"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Read an integer in `low..=high`, re-prompting until one arrives.
    /// Fails only when the input is exhausted.
    pub fn read_validated(&mut self, low: u8, high: u8, axis: Axis) -> anyhow::Result<u8> {
        loop {
            let token = self.next_token()?;
            match token.parse::<u8>() {
                Ok(value) if (low..=high).contains(&value) => return Ok(value),
                _ => {
                    // the rest of the offending line is discarded
                    self.pending.clear();
                    self.prompt_validation_error(low, high, axis)?;
                }
            }
        }
    }
}

impl<R, W> Player for CliPlayer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn select_move(&mut self, _board: &Board, mark: Mark) -> anyhow::Result<Move> {
        self.prompt_turn(mark)?;
        self.prompt_row()?;
        let row = self.read_validated(1, BOARD_SIZE, Axis::Row)?;
        self.prompt_column()?;
        let column = self.read_validated(1, BOARD_SIZE, Axis::Column)?;
        Move::new(row, column).map_err(|e| anyhow::anyhow!(e))
    }

    fn handle_rejected(&mut self, _mv: Move, message: &str, board: &Board) {
        if let Err(e) = ui::write_status(&mut self.output, message, board) {
            log::warn!("Failed to write to console: {}", e);
        }
    }

    fn handle_update(&mut self, message: &str, board: &Board) {
        if let Err(e) = ui::write_status(&mut self.output, message, board) {
            log::warn!("Failed to write to console: {}", e);
        }
    }

    fn handle_game_over(&mut self, banner: &str, board: &Board) {
        if let Err(e) = ui::write_final(&mut self.output, banner, board) {
            log::warn!("Failed to write to console: {}", e);
        }
    }
}
