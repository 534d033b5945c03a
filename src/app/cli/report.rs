//! Output for the read-only and single-step commands.

use std::path::Path;

use crate::app::commands::deploy::print_published;
use crate::domain::AppError;

pub fn run_publish(root: Option<&Path>, config: Option<&Path>) -> Result<(), AppError> {
    let published = crate::publish(root, config)?;
    for artifact in &published {
        print_published(artifact);
    }
    Ok(())
}

pub fn run_plan(root: Option<&Path>, config: Option<&Path>) -> Result<(), AppError> {
    for (index, step) in crate::plan(root, config)?.iter().enumerate() {
        println!("{}. {:<13} {}", index + 1, step.kind, step.describe());
        println!("   in {}", step.cwd.display());
    }
    Ok(())
}

pub fn run_status(root: Option<&Path>, config: Option<&Path>) -> Result<(), AppError> {
    let report = crate::status(root, config)?;

    let daemon = if report.daemon_initialized { "initialized" } else { "not initialized" };
    println!("Daemon: {} ({})", daemon, report.daemon_state_dir.display());

    println!("Artifacts:");
    for artifact in &report.artifacts {
        let state = match (artifact.source_exists, artifact.dest_exists, artifact.in_sync) {
            (false, _, _) => "not built",
            (true, false, _) => "not published",
            (true, true, false) => "stale",
            (true, true, true) => "in sync",
        };
        match &artifact.address {
            Some(address) => println!("  {:<20} {} ({})", artifact.name, state, address),
            None => println!("  {:<20} {}", artifact.name, state),
        }
    }
    Ok(())
}

pub fn run_config(root: Option<&Path>, config: Option<&Path>) -> Result<(), AppError> {
    print!("{}", crate::effective_config(root, config)?);
    Ok(())
}
