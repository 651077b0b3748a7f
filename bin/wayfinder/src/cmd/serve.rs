//! Serve command - development server for the compiled app

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use wayfinder_core::Config;

use super::check::quick_validate;
use crate::server::{ServerState, create_router};

/// Run the serve command.
///
/// Serves `pkg/` from the configured site root and the app shell for every
/// other path.
pub async fn run(config_path: &Path, port: Option<u16>, open_browser: bool) -> Result<()> {
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    if let Some(port) = port {
        config.server.port = port;
    }
    tracing::info!(?config_path, port = config.server.port, "Starting server");

    let warnings = quick_validate(&config);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let state = Arc::new(ServerState::new(&config));
    let app = create_router(Path::new(&config.server.site_root), state);
    let addr = config.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", config.app.title);
    println!("  Routing mode: {}", config.routing.mode);
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!(error = %e, "Failed to open browser");
        }
    }

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
