//! Task board management for Eventify.
//!
//! This module implements the kanban board: an in-memory aggregate of
//! columns and tasks whose every mutation is attempted against the remote
//! API and applied locally regardless of the remote outcome, so the board
//! stays usable while the API is unreachable. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Wire-record conversion in [`mapping`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod mapping;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
