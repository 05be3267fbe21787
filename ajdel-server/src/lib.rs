//! Ajdel Storefront Server - backend for the AJDEL pastry shop landing page
//!
//! # Architecture overview
//!
//! A single edge binary behind the bilingual link-in-bio page:
//!
//! - **Business hours** (`hours`): the open/closed computation and the
//!   once-per-second status poller - the one genuinely stateful piece
//! - **Database** (`db`): embedded SurrealDB storage for the menu
//! - **Auth** (`auth`): passcode login with in-memory session tokens
//! - **HTTP API** (`api`): routes for the landing page and admin portal
//!
//! # Module structure
//!
//! ```text
//! ajdel-server/src/
//! ├── core/          # config, state, server, background tasks
//! ├── hours/         # business-hours core + status poller
//! ├── auth/          # admin sessions
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer (storage port + adapter)
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod hours;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use hours::{BusinessHours, BusinessStatus, StatusPoller};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: .env file, then logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___       _     __     __
   /   |     (_)___/ /__  / /
  / /| |    / / __  / _ \/ /
 / ___ |   / / /_/ /  __/ /
/_/  |_|__/ /\__,_/\___/_/
       /___/
    "#
    );
}
