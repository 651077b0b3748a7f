//! Resolve command - show which routes match a path

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use serde_json::{Value, json};
use wayfinder_core::{Config, Location, MatchMode, Page, RouteMatch, site};

/// One matched route, top-level or nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Nesting depth (0 for the top-level table).
    pub depth: usize,
    /// Name of the rendered page.
    pub page: String,
    /// The match result.
    pub matched: RouteMatch,
}

impl Resolution {
    fn to_json(&self) -> Value {
        let params: serde_json::Map<String, Value> = self
            .matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(v)))
            .collect();

        json!({
            "depth": self.depth,
            "page": self.page,
            "path": self.matched.path(),
            "url": self.matched.url,
            "params": params,
        })
    }
}

/// Resolve `pathname` against the site's route tables, nested tables included.
pub fn resolve(config: &Config, pathname: &str) -> Vec<Resolution> {
    let routes = site::configured_routes(config);
    let mut resolutions = Vec::new();

    for (matched, page) in routes.dispatch(pathname) {
        let nested = if *page == Page::Users {
            site::user_routes(&matched)
                .case_sensitive(config.routing.case_sensitive)
                .resolve(pathname)
        } else {
            Vec::new()
        };

        resolutions.push(Resolution {
            depth: 0,
            page: page.name().to_string(),
            matched,
        });
        resolutions.extend(nested.into_iter().map(|matched| Resolution {
            depth: 1,
            page: "UserDetail".to_string(),
            matched,
        }));
    }

    resolutions
}

/// Run the resolve command.
pub fn run(config_path: &Path, href: &str, mode: Option<MatchMode>, json: bool) -> Result<()> {
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    if let Some(mode) = mode {
        config.routing.mode = mode;
    }

    let Some(location) = Location::parse(href) else {
        bail!("'{href}' is not a local path");
    };
    tracing::info!(%location, mode = %config.routing.mode, "Resolving");

    let resolutions = resolve(&config, &location.pathname);

    if json {
        let report = json!({
            "location": location.href(),
            "mode": config.routing.mode.to_string(),
            "matches": resolutions.iter().map(Resolution::to_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Resolving {} ({} mode)", location.href(), config.routing.mode);
    if resolutions.is_empty() {
        println!("  (no route matched)");
    }
    for resolution in &resolutions {
        let indent = "  ".repeat(resolution.depth + 1);
        let params: Vec<String> = resolution
            .matched
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!(
            "{indent}{:<10} path={:<12} url={:<12} params=[{}]",
            resolution.page,
            resolution.matched.path(),
            resolution.matched.url,
            params.join(", ")
        );
    }

    Ok(())
}
