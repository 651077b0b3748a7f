//! Check command - validate configuration and the site's routes

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use wayfinder_core::{Config, MatchMode, Page, site};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and that every link the app renders lands on
/// a real page.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and routes");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = load_config(config_path, &mut result);

    if let Some(ref cfg) = config {
        println!("\nChecking links...");
        check_links(cfg, &mut result);

        println!("\nChecking site root...");
        for warning in quick_validate(cfg) {
            result.add_warning(warning);
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Load the configuration the other commands run with: the file (or the
/// defaults when it is missing) with `WAYFINDER__*` overrides applied.
fn load_config(config_path: &Path, result: &mut ValidationResult) -> Option<Config> {
    if !config_path.exists() {
        result.add_warning(format!(
            "{} not found, checking built-in defaults",
            config_path.display()
        ));
    }

    match Config::load_or_default(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    }
}

/// Non-fatal issues worth printing before serving.
pub fn quick_validate(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.routing.mode == MatchMode::Inclusive {
        warnings.push("Inclusive routing renders nothing for unknown paths".to_string());
    }

    let pkg = Path::new(&config.server.site_root).join("pkg");
    if !pkg.is_dir() {
        warnings.push(format!(
            "{} does not exist - build the frontend with `cargo leptos build` first",
            pkg.display()
        ));
    }

    warnings
}

/// Resolve every nav link and user link and flag the ones that miss.
fn check_links(config: &Config, result: &mut ValidationResult) {
    let routes = site::configured_routes(config);
    let mut checked = 0;

    for link in site::nav_links() {
        checked += 1;
        let pages: Vec<Page> = routes
            .dispatch(&link.href)
            .into_iter()
            .map(|(_, page)| *page)
            .filter(|page| *page != Page::NotFound)
            .collect();

        if pages.is_empty() {
            result.add_error(format!("Link '{}' ({}) matches no page", link.label, link.href));
        } else {
            tracing::debug!(label = %link.label, ?pages, "link resolves");
        }
    }

    let users = routes
        .resolve("/users")
        .into_iter()
        .find(|matched| routes.view(matched) == Some(&Page::Users));

    match users {
        Some(parent) => {
            let nested = site::user_routes(&parent).case_sensitive(config.routing.case_sensitive);
            for link in site::user_links(&parent.url, config.app.users) {
                checked += 1;
                let top = routes.resolve(&link.href);
                let users_mounted = top
                    .iter()
                    .any(|matched| routes.view(matched) == Some(&Page::Users));

                if !users_mounted {
                    result.add_warning(format!(
                        "Link '{}' ({}) leaves the Users page; the detail view never renders",
                        link.label, link.href
                    ));
                } else if nested.resolve(&link.href).is_empty() {
                    result.add_error(format!(
                        "Link '{}' ({}) matches no user route",
                        link.label, link.href
                    ));
                }
            }
        }
        None => result.add_error("/users does not render the Users page"),
    }

    println!("  Checked {checked} link(s)");
}
