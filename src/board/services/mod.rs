//! Application services for the task board.

mod board_service;

pub use board_service::{BoardService, BoardServiceError, BoardServiceResult, SyncOutcome};
