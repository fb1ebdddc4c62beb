//! Rules command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the rules command.
pub fn execute_rules(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_rules(&config.scoring.summary())?);
    Ok(())
}
