//! Core module - configuration, state and lifecycle
//!
//! # Contents
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared service handles
//! - [`Server`] - HTTP server
//! - [`BackgroundTasks`] - background task manager
//! - [`ServerError`] - lifecycle errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod tasks;

pub use config::{AggregatorVisibility, Config};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
pub use tasks::{BackgroundTasks, TaskKind};
