//! Scoring configuration
//!
//! Defaults reproduce the club's low-point rules exactly; the knobs exist so a
//! series can be rescored under a variant without touching the engine.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for weekly scoring and series standings
///
/// # Examples
///
/// ```
/// use regatta_engine::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.novice_credit_cap, 2);
/// assert_eq!(config.races_per_throwout, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum points of novice credit a boat can earn in one week
    /// Default: 2
    #[serde(default = "default_novice_credit_cap")]
    pub novice_credit_cap: u32,

    /// Lowest score a finisher can receive after novice credit
    /// Default: 1
    #[serde(default = "default_min_finisher_score")]
    pub min_finisher_score: u32,

    /// One throwout per this many weeks with starters
    /// Default: 4
    #[serde(default = "default_races_per_throwout")]
    pub races_per_throwout: u32,
}

fn default_novice_credit_cap() -> u32 {
    2
}

fn default_min_finisher_score() -> u32 {
    1
}

fn default_races_per_throwout() -> u32 {
    4
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            novice_credit_cap: default_novice_credit_cap(),
            min_finisher_score: default_min_finisher_score(),
            races_per_throwout: default_races_per_throwout(),
        }
    }
}

impl ScoringConfig {
    /// Default rules with throwouts effectively disabled
    pub fn no_throwouts() -> Self {
        Self {
            races_per_throwout: u32::MAX,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.races_per_throwout == 0 {
            return Err(EngineError::Config(
                "races_per_throwout must be greater than 0".to_string(),
            ));
        }
        if self.min_finisher_score == 0 {
            return Err(EngineError::Config(
                "min_finisher_score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Plain-language description of the active rules
    pub fn summary(&self) -> ScoringSummary {
        let throwouts = if self.races_per_throwout == u32::MAX {
            "none".to_string()
        } else {
            format!("1 worst per {} races", self.races_per_throwout)
        };
        ScoringSummary {
            system: "Low Point".to_string(),
            novice_credit: format!(
                "max({}, finish_position - min({}, novice_count))",
                self.min_finisher_score, self.novice_credit_cap
            ),
            dsq_dnf_penalty: "starters + 1".to_string(),
            dnc_penalty: "boats_in_series + 1".to_string(),
            throwouts,
        }
    }
}

/// Human-readable statement of the scoring rules, shipped with results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSummary {
    /// Scoring system name
    pub system: String,
    /// Finisher formula
    pub novice_credit: String,
    /// Penalty score for DSQ/DNF
    pub dsq_dnf_penalty: String,
    /// Penalty score for absence
    pub dnc_penalty: String,
    /// Throwout rule
    pub throwouts: String,
}
