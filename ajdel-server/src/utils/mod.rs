//! Utility module - common helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error type
//! - [`AppResponse`] - API response envelope
//! - logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult, ok};
pub use logger::{init_logger, init_logger_with_file};
