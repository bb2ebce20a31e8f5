//! Eventify board: the task board core of the Eventify application.
//!
//! This crate provides the in-memory kanban aggregate (boards, columns,
//! tasks) and the persistence plumbing it talks through. Mutations are
//! optimistic: each operation attempts the remote call and advances local
//! state whether or not the call succeeded, so the board the UI renders
//! from is never blocked by an unreachable API.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure aggregate logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote gateway
//! - **Adapters**: Concrete gateway implementations (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: the kanban board aggregate, gateway contract and services

pub mod board;
