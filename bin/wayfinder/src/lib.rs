//! Wayfinder CLI Library
//!
//! Command implementations and the development server behind the
//! `wayfinder` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (resolve, render, serve, check)
//! - [`server`] - Development server for the compiled app
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use wayfinder::cmd;
//!
//! // Print the screen after clicking through to a user
//! let links = ["Users".to_string(), "User 2".to_string()];
//! cmd::render::run(Path::new("wayfinder.toml"), "/", &links, false, None).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use wayfinder_core::{Config, MatchMode, Page, Session};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
