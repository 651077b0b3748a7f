//! Wayfinder CLI
//!
//! Resolve paths against the demo's route tables, click through it without a
//! browser, and serve the compiled app.

use clap::Parser;
use color_eyre::eyre::Result;
use wayfinder::MatchMode;

/// Command-line interface for Wayfinder.
#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "A client-side routing demo: route tables, links and nested routes"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "wayfinder.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    // None runs `serve`; `cargo leptos serve` launches the binary without arguments.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Show which routes match a path
    Resolve {
        /// Path to resolve (e.g., /users/2)
        path: String,
        /// Override the configured match mode (inclusive, exclusive)
        #[arg(short, long)]
        mode: Option<MatchMode>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the screen at a path, optionally clicking through links
    Render {
        /// Path to open
        #[arg(default_value = "/")]
        path: String,
        /// Follow the link with this label (repeatable)
        #[arg(short, long = "follow", value_name = "LABEL")]
        follow: Vec<String>,
        /// Submit the contact form after following links
        #[arg(long)]
        submit: bool,
        /// Override the configured match mode (inclusive, exclusive)
        #[arg(short, long)]
        mode: Option<MatchMode>,
    },
    /// Serve the compiled app
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Validate configuration and links
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    wayfinder::init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        open: false,
    });

    match command {
        Commands::Resolve { path, mode, json } => {
            wayfinder::cmd::resolve::run(&cli.config, &path, mode, json)?;
        }
        Commands::Render {
            path,
            follow,
            submit,
            mode,
        } => {
            wayfinder::cmd::render::run(&cli.config, &path, &follow, submit, mode)?;
        }
        Commands::Serve { port, open } => {
            wayfinder::cmd::serve::run(&cli.config, port, open).await?;
        }
        Commands::Check { strict } => {
            wayfinder::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_resolve_command_parsing() {
        let args = ["wayfinder", "resolve", "/users/2"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("wayfinder.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command.unwrap() {
            Commands::Resolve { path, mode, json } => {
                assert_eq!(path, "/users/2");
                assert!(mode.is_none());
                assert!(!json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_with_mode() {
        let args = ["wayfinder", "resolve", "/", "--mode", "inclusive", "--json"];
        let cli = Cli::parse_from(args);

        match cli.command.unwrap() {
            Commands::Resolve { mode, json, .. } => {
                assert_eq!(mode, Some(MatchMode::Inclusive));
                assert!(json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let args = ["wayfinder", "resolve", "/", "--mode", "greedy"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_render_command_parsing() {
        let args = [
            "wayfinder", "render", "/", "--follow", "Users", "-f", "User 2", "--submit",
        ];
        let cli = Cli::parse_from(args);

        match cli.command.unwrap() {
            Commands::Render {
                path,
                follow,
                submit,
                mode,
            } => {
                assert_eq!(path, "/");
                assert_eq!(follow, vec!["Users".to_string(), "User 2".to_string()]);
                assert!(submit);
                assert!(mode.is_none());
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_defaults_to_root() {
        let cli = Cli::parse_from(["wayfinder", "render"]);

        match cli.command.unwrap() {
            Commands::Render { path, follow, .. } => {
                assert_eq!(path, "/");
                assert!(follow.is_empty());
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["wayfinder", "serve", "--port", "8080", "--open"];
        let cli = Cli::parse_from(args);

        match cli.command.unwrap() {
            Commands::Serve { port, open } => {
                assert_eq!(port, Some(8080));
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["wayfinder", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command.unwrap() {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["wayfinder", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config() {
        let args = ["wayfinder", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }

    #[test]
    fn test_cli_without_command_serves() {
        let cli = Cli::parse_from(["wayfinder"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["wayfinder", "-v", "--config", "site.toml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 1);
    }
}
