//! Status module - per-boat and per-week outcome codes

use serde::{Deserialize, Serialize};

/// Penalty reported against a boat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyKind {
    /// Disqualified
    #[serde(rename = "DSQ")]
    Dsq,

    /// Did not finish
    #[serde(rename = "DNF")]
    Dnf,
}

impl PenaltyKind {
    /// Get the penalty code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PenaltyKind::Dsq => "DSQ",
            PenaltyKind::Dnf => "DNF",
        }
    }
}

impl From<PenaltyKind> for FinishStatus {
    fn from(kind: PenaltyKind) -> Self {
        match kind {
            PenaltyKind::Dsq => FinishStatus::Dsq,
            PenaltyKind::Dnf => FinishStatus::Dnf,
        }
    }
}

/// Outcome of a single boat in a single week
///
/// - Fin: Finished and scored by position
/// - Dsq / Dnf: Started but scored as one worse than the number of starters
/// - Dnc: Absent this week although active earlier in the series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishStatus {
    /// Finished
    #[serde(rename = "FIN")]
    Fin,

    /// Disqualified
    #[serde(rename = "DSQ")]
    Dsq,

    /// Did not finish
    #[serde(rename = "DNF")]
    Dnf,

    /// Did not compete
    #[serde(rename = "DNC")]
    Dnc,
}

impl FinishStatus {
    /// Get the status code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishStatus::Fin => "FIN",
            FinishStatus::Dsq => "DSQ",
            FinishStatus::Dnf => "DNF",
            FinishStatus::Dnc => "DNC",
        }
    }

    /// Whether the status overrides the position-based score
    pub fn is_penalty(&self) -> bool {
        matches!(self, FinishStatus::Dsq | FinishStatus::Dnf)
    }

    /// Whether the boat was absent this week
    pub fn is_absent(&self) -> bool {
        matches!(self, FinishStatus::Dnc)
    }
}

/// Overall outcome of a race week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekStatus {
    /// A definite finish order was established
    Ok,

    /// Evidence was contradictory; entries are provisional
    Ambiguous,

    /// No usable finishing evidence
    NoRace,
}

impl WeekStatus {
    /// Get the status code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Ok => "OK",
            WeekStatus::Ambiguous => "AMBIGUOUS",
            WeekStatus::NoRace => "NO_RACE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(FinishStatus::Dnc.as_str(), "DNC");
        assert_eq!(FinishStatus::Fin.as_str(), "FIN");
        assert!(FinishStatus::Dnc.is_absent());
        assert!(!FinishStatus::Dsq.is_absent());
    }

    #[test]
    fn test_penalty_maps_to_status() {
        assert_eq!(FinishStatus::from(PenaltyKind::Dsq), FinishStatus::Dsq);
        assert_eq!(FinishStatus::from(PenaltyKind::Dnf), FinishStatus::Dnf);
        assert!(FinishStatus::Dnf.is_penalty());
        assert!(!FinishStatus::Dnc.is_penalty());
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&WeekStatus::NoRace).unwrap(), "\"NO_RACE\"");
        assert_eq!(serde_json::to_string(&FinishStatus::Dnc).unwrap(), "\"DNC\"");
    }
}
