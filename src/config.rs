use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::allocation::DEFAULT_MAX_PER_TEAM;
use crate::error::{AllocationError, Result};

#[derive(Parser, Debug)]
#[command(name = "seat-planner")]
#[command(version, about = "Seats a roster into teams while spreading affinity groups apart")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Allocate a roster read from a JSON request file and print the teams
    Allocate(AllocateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, env = "SEAT_PLANNER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SEAT_PLANNER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory served at `/` when it exists
    #[arg(long, env = "SEAT_PLANNER_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, env = "SEAT_PLANNER_MAX_PER_TEAM", default_value_t = DEFAULT_MAX_PER_TEAM)]
    pub max_per_team: usize,
}

impl ServeArgs {
    pub fn into_config(self) -> Result<ServerConfig> {
        let config = ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir,
            max_per_team: self.max_per_team,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug, Clone)]
pub struct AllocateArgs {
    /// JSON file shaped like the `/api/allocate` body: `{"members": [...], "groups": {...}}`
    pub request: PathBuf,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_MAX_PER_TEAM)]
    pub max_per_team: usize,

    /// Also write the seating as CSV
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_per_team: usize,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_per_team == 0 {
            return Err(AllocationError::configuration(
                "max_per_team must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["seat-planner", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_per_team, DEFAULT_MAX_PER_TEAM);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_serve_rejects_zero_cap() {
        let cli = Cli::try_parse_from(["seat-planner", "serve", "--max-per-team", "0"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert!(matches!(
            args.into_config(),
            Err(AllocationError::Configuration(_))
        ));
    }

    #[test]
    fn test_allocate_args() {
        let cli = Cli::try_parse_from([
            "seat-planner",
            "allocate",
            "roster.json",
            "--seed",
            "7",
            "--output",
            "seats.csv",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let Command::Allocate(args) = cli.command else {
            panic!("expected allocate");
        };
        assert_eq!(args.request, PathBuf::from("roster.json"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output, Some(PathBuf::from("seats.csv")));
        assert_eq!(cli.log_level, "debug");
    }
}
