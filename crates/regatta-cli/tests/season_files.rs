//! Integration tests for season files, config files and saved state

use regatta_cli::cli::ScoreArgs;
use regatta_cli::commands::score::score_season;
use regatta_cli::config::{Config, OutputFormat};
use regatta_cli::input::{load_state, save_state};
use regatta_cli::output::{Formatter, Report};
use regatta_domain::{FinishStatus, WeekStatus};
use regatta_engine::{season_grid, standings};
use std::fs;
use std::path::Path;

const SEASON_TOML: &str = r#"
[[weeks]]
date = "2025-05-07"
claims = [
    { type = "relative_position", ahead = "psycho killer", behind = "danger zone" },
    { type = "relative_position", ahead = "danger zone", behind = "fred" },
    { type = "novice", boat = "fred", count = 2 },
]

[[weeks]]
date = "2025-05-14"
claims = [
    { type = "relative_position", ahead = "fred", behind = "danger zone" },
    { type = "relative_position", ahead = "danger zone", behind = "fred" },
]

[[weeks]]
date = "2025-05-21"

[[weeks]]
date = "2025-05-28"
claims = [
    { type = "complete_order", sequence = ["danger zone", "psycho killer", "fred"] },
    { type = "penalty", boat = "psycho killer", kind = "DSQ" },
]
"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn score_args(season: std::path::PathBuf) -> ScoreArgs {
    ScoreArgs {
        season,
        state: None,
        save_state: None,
        grid: true,
    }
}

#[test]
fn test_toml_season_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let season = write(dir.path(), "season.toml", SEASON_TOML);

    let (state, _) = score_season(&score_args(season), &Config::default()).unwrap();
    assert_eq!(state.weeks.len(), 4);

    // Week one: a clean chain; fred's novice credit brings 3 down to 1
    let first = &state.weeks[0];
    assert_eq!(first.status, WeekStatus::Ok);
    assert_eq!(first.entry(&"fred".into()).unwrap().score, 1);

    // Week two: contradictory reports, psycho killer absent
    let second = &state.weeks[1];
    assert_eq!(second.status, WeekStatus::Ambiguous);
    let absent = second.entry(&"psycho killer".into()).unwrap();
    assert_eq!(absent.status, FinishStatus::Dnc);
    assert_eq!(absent.score, 4);

    // Week three: no evidence at all
    assert_eq!(state.weeks[2].status, WeekStatus::NoRace);

    // Week four: DSQ scores starters + 1
    let fourth = &state.weeks[3];
    let dsq = fourth.entry(&"psycho killer".into()).unwrap();
    assert_eq!(dsq.status, FinishStatus::Dsq);
    assert_eq!(dsq.score, 4);

    assert_eq!(season_grid(&state).dates.len(), 3);
}

#[test]
fn test_config_file_changes_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let season = write(dir.path(), "season.toml", SEASON_TOML);
    let config_path = write(
        dir.path(),
        "regatta.toml",
        "[scoring]\nnovice_credit_cap = 0\nraces_per_throwout = 2\n\n[settings]\nformat = \"quiet\"\ncolor = false\n",
    );
    let config = Config::load(Some(&config_path)).unwrap();
    assert_eq!(config.settings.format, OutputFormat::Quiet);

    let (state, _) = score_season(&score_args(season), &config).unwrap();
    assert_eq!(state.weeks[0].entry(&"fred".into()).unwrap().score, 3);

    // Three races with one throwout per two
    let table = standings(&state, &config.scoring);
    assert!(table.iter().all(|s| s.dropped.len() == 1));
}

#[test]
fn test_saved_state_feeds_standings() {
    let dir = tempfile::tempdir().unwrap();
    let season = write(dir.path(), "season.toml", SEASON_TOML);
    let (state, _) = score_season(&score_args(season), &Config::default()).unwrap();

    let saved = dir.path().join("out").join("state.json");
    save_state(&saved, &state).unwrap();
    let restored = load_state(&saved).unwrap();
    assert_eq!(restored, state);

    let config = Config::default();
    let report = Report {
        rules: config.scoring.summary(),
        weeks: &[],
        standings: standings(&restored, &config.scoring),
        throwouts: 0,
        boats_seen: restored.boats_seen(),
        grid: None,
    };
    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["standings"].as_array().unwrap().len(), 3);
    assert_eq!(value["boats_seen"].as_array().unwrap().len(), 3);
    assert!(value.get("grid").is_none());
}

#[test]
fn test_malformed_season_file() {
    let dir = tempfile::tempdir().unwrap();
    let season = write(dir.path(), "season.json", "{\"weeks\": [{\"claims\": []}]}");
    assert!(score_season(&score_args(season), &Config::default()).is_err());
}
