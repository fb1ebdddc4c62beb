//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{load_state, save_state, SeasonInput};
use crate::output::{Formatter, Report};
use regatta_domain::SeriesState;
use regatta_engine::standings::throwouts;
use regatta_engine::{season_grid, SeriesScorer};
use tracing::info;

/// Score a season file on top of an optional prior state.
///
/// Returns the advanced state and how many weeks it held beforehand.
pub fn score_season(args: &ScoreArgs, config: &Config) -> Result<(SeriesState, usize)> {
    let scorer = SeriesScorer::new(config.scoring.clone())?;
    let prior = match &args.state {
        Some(path) => load_state(path)?,
        None => SeriesState::new(),
    };
    let already = prior.weeks.len();

    let season = SeasonInput::load(&args.season)?;
    info!(
        "Scoring {} week(s) on top of {} recorded",
        season.weeks.len(),
        already
    );
    let state = scorer.extend_season(prior, season.weeks)?;
    Ok((state, already))
}

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (state, already) = score_season(&args, config)?;

    let report = Report {
        rules: config.scoring.summary(),
        weeks: &state.weeks[already..],
        standings: regatta_engine::standings(&state, &config.scoring),
        throwouts: throwouts(state.races_with_starters(), &config.scoring),
        boats_seen: state.boats_seen(),
        grid: args.grid.then(|| season_grid(&state)),
    };
    println!("{}", formatter.format_report(&report)?);

    if let Some(path) = &args.save_state {
        save_state(path, &state)?;
        eprintln!(
            "{}",
            formatter.success(&format!("Saved series state to {}", path.display()))
        );
    }

    Ok(())
}
