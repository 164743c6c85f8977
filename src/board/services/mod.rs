//! Application services for board state ownership.

mod board_state;

pub use board_state::{BoardService, BoardServiceError, BoardServiceResult};
