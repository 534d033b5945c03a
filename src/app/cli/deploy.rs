//! Deploy command implementation.

use std::path::Path;

use crate::DeployOptions;
use crate::domain::AppError;

pub fn run_deploy(
    root: Option<&Path>,
    config: Option<&Path>,
    no_serve: bool,
) -> Result<i32, AppError> {
    let outcome = crate::deploy(root, config, DeployOptions { serve: !no_serve })?;
    if no_serve {
        println!("✅ Stack deployed ({} artifacts published)", outcome.published.len());
    } else {
        println!("Dev server exited with code {}", outcome.exit_code);
    }
    Ok(outcome.exit_code)
}
