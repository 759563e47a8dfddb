use covscan_core::error::CovscanError;
use covscan_core::model::{Batch, RunOutcome};

pub fn print_outcome(outcome: &RunOutcome) -> Result<(), CovscanError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}

pub fn print_batches(batches: &[Batch]) -> Result<(), CovscanError> {
    let json = serde_json::to_string_pretty(batches)?;
    println!("{json}");
    Ok(())
}
