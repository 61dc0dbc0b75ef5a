//! appraisal-sandbox: Appraisal Sandbox Main Binary
//!
//! Usage:
//!   appraisal-sandbox                  - Start server mode (HTTP API)
//!   appraisal-sandbox --cli            - Start the interactive agent shell
//!   appraisal-sandbox --config <path>  - Use an explicit config file
//!   appraisal-sandbox --help           - Show help

mod cli;
mod prompt;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use appraisal_core::Config;
use tracing_subscriber::EnvFilter;

/// Run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunMode {
    /// Server mode (HTTP API)
    Server,
    /// Interactive shell mode
    Cli,
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: RunMode,
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    match args.mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("appraisal-sandbox {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server | RunMode::Cli => {}
    }

    // Keep the shell quiet unless RUST_LOG asks for more
    let default_level = if args.mode == RunMode::Cli { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    dotenvy::dotenv().ok();

    match args.mode {
        RunMode::Cli => {
            tracing::info!("Running in CLI mode");
            cli::run_cli()
        }
        _ => {
            let config = Config::load(args.config_path.as_deref())
                .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
            run_server(config).await
        }
    }
}

/// Parse command line arguments
fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = RunMode::Server;
    let mut config_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cli" | "-c" => mode = RunMode::Cli,
            "--help" | "-h" => return Ok(Args { mode: RunMode::Help, config_path }),
            "--version" | "-v" => return Ok(Args { mode: RunMode::Version, config_path }),
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    config_path = Some(PathBuf::from(path));
                } else {
                    anyhow::bail!("Unknown argument: {} (see --help)", other);
                }
            }
        }
    }

    Ok(Args { mode, config_path })
}

/// Print help message
fn print_help() {
    println!("appraisal-sandbox - Appraisal Sandbox");
    println!();
    println!("Usage:");
    println!("  appraisal-sandbox                  Start server mode (HTTP API)");
    println!("  appraisal-sandbox --cli            Start the interactive agent shell");
    println!("  appraisal-sandbox --config <path>  Load settings from a TOML file");
    println!("  appraisal-sandbox --help           Show this help message");
    println!("  appraisal-sandbox --version        Show version");
    println!();
    println!("Environment Variables:");
    println!("  API_HOST             Interface to bind (default: 127.0.0.1)");
    println!("  API_PORT             HTTP API port (default: 8000)");
    println!("  API_ALLOWED_ORIGINS  Comma-separated CORS origins (default: any)");
    println!("  RUST_LOG             Log filter (default: info, warn in --cli)");
}

/// Run server mode until Ctrl+C
async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting appraisal-sandbox on {}", config.bind_address());

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down...");
    };

    appraisal_api::start_server_with_shutdown(config, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_default_is_server() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.mode, RunMode::Server);
        assert!(args.config_path.is_none());
    }

    #[test]
    fn test_cli_flags() {
        assert_eq!(parse(&["--cli"]).unwrap().mode, RunMode::Cli);
        assert_eq!(parse(&["-c"]).unwrap().mode, RunMode::Cli);
        assert_eq!(parse(&["--help"]).unwrap().mode, RunMode::Help);
        assert_eq!(parse(&["-v"]).unwrap().mode, RunMode::Version);
    }

    #[test]
    fn test_config_path() {
        let args = parse(&["--config", "custom.toml"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("custom.toml")));

        let args = parse(&["--config=other.toml", "--cli"]).unwrap();
        assert_eq!(args.mode, RunMode::Cli);
        assert_eq!(args.config_path, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn test_config_without_path_fails() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn test_unknown_argument_fails() {
        let err = parse(&["--serve"]).unwrap_err();
        assert!(err.to_string().contains("--serve"));
    }
}
