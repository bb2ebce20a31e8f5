//! HTTP adapter for the board gateway.

mod gateway;
mod session;

pub use gateway::HttpBoardGateway;
pub use session::{ApiSession, BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
