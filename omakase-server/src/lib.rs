//! Omakase Server - set-menu configurator service
//!
//! # Architecture overview
//!
//! - **Catalog** (`catalog`): menu data ingestion from a tabular source
//!   with an ordered fallback retrieval chain
//! - **Sessions** (`session`): the selection/validation state machine,
//!   one instance per configuring guest
//! - **Submission** (`submission`): outbound email/message channels
//! - **HTTP API** (`api`): RESTful session and catalog endpoints
//!
//! # Module structure
//!
//! ```text
//! omakase-server/src/
//! ├── core/          # config, state, server
//! ├── catalog/       # CSV ingestion, fallback retrieval
//! ├── session/       # selection state machine, validation, summary
//! ├── submission/    # email and messaging channels
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logger, date window, encoding
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod session;
pub mod submission;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogFetcher, MenuCatalog};
pub use core::{Config, Server, ServerState};
pub use session::{MenuSession, SessionService};
pub use submission::SubmissionService;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging from the environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____                  __
  / __ \____ ___  ____ _/ /______ _________
 / / / / __ `__ \/ __ `/ //_/ __ `/ ___/ _ \
/ /_/ / / / / / / /_/ / ,< / /_/ (__  )  __/
\____/_/ /_/ /_/\__,_/_/|_|\__,_/____/\___/
    "#
    );
}
