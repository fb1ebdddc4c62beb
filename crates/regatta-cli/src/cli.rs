//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Regatta - score a club racing series from loose finishing reports.
#[derive(Debug, Parser)]
#[command(name = "regatta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REGATTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable report (default)
    Summary,
    /// JSON format
    Json,
    /// Quiet format (boats in standings order)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every week of a season file
    Score(ScoreArgs),

    /// Recompute standings from a saved series state
    Standings(StandingsArgs),

    /// Show the active scoring rules
    Rules,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Season file (.json or .toml) listing weeks and their claims
    pub season: PathBuf,

    /// Saved series state to continue from
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Write the resulting series state to this path
    #[arg(long)]
    pub save_state: Option<PathBuf>,

    /// Include the boat-by-week results grid
    #[arg(short, long)]
    pub grid: bool,
}

/// Arguments for the standings command.
#[derive(Debug, Parser)]
pub struct StandingsArgs {
    /// Saved series state (JSON)
    pub state: PathBuf,

    /// Include the boat-by-week results grid
    #[arg(short, long)]
    pub grid: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Summary => crate::config::OutputFormat::Summary,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_command() {
        let cli = Cli::parse_from([
            "regatta",
            "score",
            "season.json",
            "--state",
            "prior.json",
            "--save-state",
            "next.json",
        ]);
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.season, PathBuf::from("season.json"));
                assert_eq!(args.state, Some(PathBuf::from("prior.json")));
                assert_eq!(args.save_state, Some(PathBuf::from("next.json")));
                assert!(!args.grid);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["regatta", "rules", "--format", "json", "-v", "--no-color"]);
        assert!(matches!(cli.command, Command::Rules));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
