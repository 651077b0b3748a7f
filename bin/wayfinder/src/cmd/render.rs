//! Render command - drive a headless session and print the screen

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use wayfinder_core::{Config, ContactForm, Location, MatchMode, Session};

/// Open `href`, follow `links` in order, optionally submit the contact form,
/// and return the final session.
pub fn drive(config: Config, href: &str, links: &[String], submit: bool) -> Result<Session> {
    if Location::parse(href).is_none() {
        bail!("'{href}' is not a local path");
    }

    let mut session = Session::open(config, href);

    for label in links {
        if session.follow(label).is_none() {
            let screen = session.screen();
            let available: Vec<&str> = screen.links().map(|link| link.label.as_str()).collect();
            bail!(
                "No link labelled '{label}' at {} (available: {})",
                session.location(),
                available.join(", ")
            );
        }
        tracing::info!(label = %label, location = %session.location(), "Followed link");
    }

    if submit {
        let form = ContactForm::new("", "");
        if session.submit_contact(&form).is_none() {
            bail!("No contact form on screen at {}", session.location());
        }
        tracing::info!(location = %session.location(), "Submitted contact form");
    }

    Ok(session)
}

/// Run the render command.
pub fn run(
    config_path: &Path,
    href: &str,
    links: &[String],
    submit: bool,
    mode: Option<MatchMode>,
) -> Result<()> {
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    if let Some(mode) = mode {
        config.routing.mode = mode;
    }

    let session = drive(config, href, links, submit)?;
    println!("Location: {}", session.location().href());
    print!("{}", session.screen().to_text());

    Ok(())
}
