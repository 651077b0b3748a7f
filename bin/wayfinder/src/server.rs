//! Development server for the compiled client-side app.
//!
//! `/pkg/*` serves the wasm bundle. Every other path gets the HTML shell, so
//! deep links like `/users/2` boot the app, which then routes on its own. The
//! shell's status comes from the same route table the app uses: paths that
//! resolve to NotFound (or to nothing) are served with 404.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
};
use http::{StatusCode, Uri};
use tower_http::{services::ServeDir, trace::TraceLayer};
use wayfinder_core::{Config, Page, RouteTable, site};

/// Shared, read-only server state.
#[derive(Debug)]
pub struct ServerState {
    /// The app's top-level route table.
    pub routes: RouteTable<Page>,
    /// The rendered HTML shell.
    pub shell: String,
}

impl ServerState {
    /// Build the server state for `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            routes: site::configured_routes(config),
            shell: app_shell(&config.app.title),
        }
    }

    /// The status the shell is served with for `pathname`.
    pub fn status_for(&self, pathname: &str) -> StatusCode {
        let found = self
            .routes
            .dispatch(pathname)
            .iter()
            .any(|(_, page)| **page != Page::NotFound);

        if found {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }
}

/// Create the server router.
pub fn create_router(site_root: &Path, state: Arc<ServerState>) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(shell_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves the HTML shell for any app path.
async fn shell_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> impl IntoResponse {
    let status = state.status_for(uri.path());
    tracing::debug!(path = uri.path(), %status, "shell");
    (status, Html(state.shell.clone()))
}

/// The HTML page that loads the wasm bundle.
pub fn app_shell(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="modulepreload" href="/pkg/wayfinder.js" />
  </head>
  <body>
    <script type="module">
      import init from '/pkg/wayfinder.js';
      init({{ module_or_path: '/pkg/wayfinder.wasm' }});
    </script>
  </body>
</html>
"#,
        title = html_escape(title)
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
