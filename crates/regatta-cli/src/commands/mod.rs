//! Command implementations.

pub mod rules;
pub mod score;
pub mod standings;

pub use self::rules::execute_rules;
pub use self::score::execute_score;
pub use self::standings::execute_standings;
