//! Standings command implementation.

use crate::cli::StandingsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::load_state;
use crate::output::{Formatter, Report};
use regatta_engine::standings::throwouts;
use regatta_engine::{season_grid, SeriesScorer};

/// Execute the standings command.
pub fn execute_standings(args: StandingsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let scorer = SeriesScorer::new(config.scoring.clone())?;
    let state = load_state(&args.state)?;

    let report = Report {
        rules: scorer.config().summary(),
        weeks: &[],
        standings: scorer.standings(&state),
        throwouts: throwouts(state.races_with_starters(), scorer.config()),
        boats_seen: state.boats_seen(),
        grid: args.grid.then(|| season_grid(&state)),
    };
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
