//! Port contracts for the task board.
//!
//! Ports define the infrastructure-agnostic interfaces the board services
//! call through; the only one is the remote persistence gateway.

pub mod gateway;

pub use gateway::{
    BoardGateway, BoardRecord, ColumnRecord, GatewayError, GatewayResult, TaskRecord,
};
