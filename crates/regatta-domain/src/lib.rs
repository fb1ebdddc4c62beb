//! Regatta Domain Layer
//!
//! This crate defines the data model shared by the scoring engine and its
//! callers. It holds no scoring logic: every type here is a plain record or a
//! tagged variant that the engine produces or consumes.
//!
//! ## Key Concepts
//!
//! - **Claim**: One atomic piece of evidence about a week's race
//! - **Position Range**: `[min, max]` bounds on where a boat may have finished
//! - **Resolution**: Either a definite finish order or an ambiguity report
//! - **Week Result**: Scored entries for one race week plus its diagnostics
//! - **Series State**: Append-only history carried from week to week
//!
//! ## Architecture
//!
//! - Only `serde` and `chrono` as external dependencies
//! - Boat identity is an already-canonicalized string
//! - All derived values (standings, grids) are computed elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boat;
pub mod claim;
pub mod diagnostic;
pub mod order;
pub mod range;
pub mod result;
pub mod series;
pub mod standing;
pub mod status;

// Re-exports for convenience
pub use boat::BoatId;
pub use claim::Claim;
pub use diagnostic::Diagnostic;
pub use order::{AmbiguityReason, AmbiguityReport, FinishOrder, Resolution};
pub use range::PositionRange;
pub use result::{ResultEntry, WeekResult};
pub use series::{BoatScores, SeriesState};
pub use standing::Standing;
pub use status::{FinishStatus, PenaltyKind, WeekStatus};
