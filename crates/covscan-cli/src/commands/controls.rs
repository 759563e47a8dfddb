use covscan_core::controls::{self, builtin};
use covscan_core::error::CovscanError;
use std::path::Path;

pub fn list() -> Result<(), CovscanError> {
    println!("Available taxonomies:");
    for preset in builtin::PRESETS {
        let taxonomy = builtin::load_preset(preset)?;
        println!("  {preset:<10} {} ({} controls)", taxonomy.name, taxonomy.len());
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), CovscanError> {
    let taxonomy = builtin::load_preset(preset)?;
    println!("{} (version {})\n", taxonomy.name, taxonomy.version);
    for control in &taxonomy.controls {
        println!("  {:<6} {}", control.id, control.description);
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CovscanError> {
    let taxonomy = controls::load_taxonomy(file)?;
    println!(
        "OK: '{}' is valid ({} controls)",
        taxonomy.name,
        taxonomy.len()
    );
    Ok(())
}
