//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use regatta_domain::{BoatId, FinishStatus, Standing, WeekResult, WeekStatus};
use regatta_engine::{ScoringSummary, SeasonGrid};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Everything a report can show about a series.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Scoring rules in words
    pub rules: ScoringSummary,
    /// Weeks to list (new weeks for `score`, none for `standings`)
    pub weeks: &'a [WeekResult],
    /// Ranked standings
    pub standings: Vec<Standing>,
    /// Throwouts in effect
    pub throwouts: usize,
    /// Boats with at least one non-DNC result
    pub boats_seen: BTreeSet<BoatId>,
    /// Boat-by-week grid, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<SeasonGrid>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full report.
    pub fn format_report(&self, report: &Report<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Summary => Ok(self.format_report_summary(report)),
            OutputFormat::Quiet => Ok(self.format_standings_quiet(&report.standings)),
        }
    }

    /// Format the scoring rules.
    pub fn format_rules(&self, rules: &ScoringSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
            OutputFormat::Summary | OutputFormat::Quiet => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", self.colorize(&rules.system, "cyan"));
                let _ = writeln!(out, "  Finisher:  {}", rules.novice_credit);
                let _ = writeln!(out, "  DSQ/DNF:   {}", rules.dsq_dnf_penalty);
                let _ = writeln!(out, "  DNC:       {}", rules.dnc_penalty);
                let _ = write!(out, "  Throwouts: {}", rules.throwouts);
                Ok(out)
            }
        }
    }

    fn format_report_summary(&self, report: &Report<'_>) -> String {
        let mut out = String::new();
        for week in report.weeks {
            out.push_str(&self.format_week(week));
            out.push('\n');
        }
        out.push_str(&self.format_standings(&report.standings, report.throwouts));
        if !report.boats_seen.is_empty() {
            let boats: Vec<&str> = report.boats_seen.iter().map(BoatId::as_str).collect();
            let _ = write!(
                out,
                "\n{} boat(s) seen: {}",
                boats.len(),
                boats.join(", ")
            );
        }
        if let Some(grid) = &report.grid {
            out.push_str("\n\n");
            out.push_str(&format_grid(grid));
        }
        out
    }

    /// Format one week's result block.
    pub fn format_week(&self, week: &WeekResult) -> String {
        let mut out = String::new();
        let status = match week.status {
            WeekStatus::Ok => self.colorize("OK", "green"),
            WeekStatus::Ambiguous => self.colorize("AMBIGUOUS", "yellow"),
            WeekStatus::NoRace => self.colorize("NO RACE", "magenta"),
        };
        let _ = writeln!(
            out,
            "{}  {}  {} starter(s)",
            week.date,
            status,
            week.starters.len()
        );

        if !week.entries.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Pos", "Boat", "Range", "Status", "Score", "Novices"]);
            for entry in &week.entries {
                let position = entry
                    .position
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let novices = if entry.novices > 0 {
                    entry.novices.to_string()
                } else {
                    String::new()
                };
                builder.push_record([
                    position,
                    entry.boat.to_string(),
                    entry.range.to_string(),
                    entry.status.as_str().to_string(),
                    entry.score.to_string(),
                    novices,
                ]);
            }
            let _ = writeln!(out, "{}", render(builder));
        }

        for diagnostic in &week.diagnostics {
            let _ = writeln!(out, "  {}", self.warning(&diagnostic.to_string()));
        }
        out
    }

    /// Format ranked standings.
    pub fn format_standings(&self, standings: &[Standing], throwouts: usize) -> String {
        if standings.is_empty() {
            return self.colorize("No races scored yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Boat", "Net", "Raw", "Races", "Dropped"]);
        for (rank, standing) in standings.iter().enumerate() {
            let dropped: Vec<String> = standing.dropped.iter().map(u32::to_string).collect();
            builder.push_record([
                (rank + 1).to_string(),
                standing.boat.to_string(),
                standing.net.to_string(),
                standing.raw_total.to_string(),
                standing.races.to_string(),
                dropped.join(", "),
            ]);
        }

        format!(
            "{}\n{}",
            self.colorize(&format!("Standings ({} throwout(s))", throwouts), "cyan"),
            render(builder)
        )
    }

    /// Format standings in quiet mode (boats only).
    fn format_standings_quiet(&self, standings: &[Standing]) -> String {
        let boats: Vec<&str> = standings.iter().map(|s| s.boat.as_str()).collect();
        boats.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render the boat-by-week results grid.
///
/// Finishers show their score; any other status appends its first letter
/// (`3D` for a DNC scored 3). Weeks before a boat's first start stay blank.
pub fn format_grid(grid: &SeasonGrid) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["Boat".to_string()];
    header.extend(grid.dates.iter().map(|d| d.format("%m/%d").to_string()));
    builder.push_record(header);

    for row in &grid.rows {
        let mut record = vec![row.boat.to_string()];
        record.extend(row.cells.iter().map(|cell| match cell {
            None => String::new(),
            Some(cell) if cell.status == FinishStatus::Fin => cell.score.to_string(),
            Some(cell) => format!("{}{}", cell.score, &cell.status.as_str()[..1]),
        }));
        builder.push_record(record);
    }

    render(builder)
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
