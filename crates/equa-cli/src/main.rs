//! Equa CLI
//!
//! Runs the equation API server or solves a single equation offline.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod serve;
mod solve;

/// Equa - quadratic equation solver
#[derive(Parser, Debug)]
#[command(name = "equa")]
#[command(author, version, about = "Quadratic equation solving service", long_about = None)]
struct Cli {
    /// TOML configuration file for the server
    #[arg(short, long, global = true, env = "EQUA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Solve one equation and print the result
    #[command(allow_negative_numbers = true)]
    Solve(SolveArgs),
}

/// Overrides applied on top of the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "EQUA_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Database URL (`sqlite://equa.db`, `sqlite::memory:`, `memory://`)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Connection pool size
    #[arg(long, env = "EQUA_DB_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,
}

/// Coefficients of `ax² + bx + c = 0`.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Coefficient of x²
    #[arg(value_parser = coefficient)]
    pub a: f64,
    /// Coefficient of x
    #[arg(value_parser = coefficient)]
    pub b: f64,
    /// Constant term
    #[arg(value_parser = coefficient)]
    pub c: f64,

    /// Print the step-by-step derivation
    #[arg(long)]
    pub steps: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Accepts finite numbers only; `NaN` and infinities are rejected.
fn coefficient(raw: &str) -> std::result::Result<f64, String> {
    equa_core::parse_coefficient("coefficient", raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,equa=debug".into()),
        )
        .init();

    match cli.command {
        Command::Serve(args) => serve::run(cli.config.as_deref(), &args).await,
        Command::Solve(args) => {
            println!("{}", solve::render(&args)?);
            Ok(())
        }
    }
}
