/// Rows and columns on the board.
pub const BOARD_SIZE: u8 = 3;

/// Accepted moves that fill the board; the game is tied when the last one
/// completes no line.
pub const MAX_MOVES: u8 = BOARD_SIZE * BOARD_SIZE;

/// Character used for an empty cell in rendered boards.
pub const EMPTY_SYMBOL: char = '*';

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CONNECT_ADDR: &str = "127.0.0.1:8080";

/// Largest JSON frame accepted on the wire, in bytes.
pub const MAX_FRAME_SIZE: u32 = 4096;

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
