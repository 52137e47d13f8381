//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Press;

/// Remove the generated output
pub fn run(press: &Press) -> Result<()> {
    if press.public_dir.exists() {
        fs::remove_dir_all(&press.public_dir)?;
        tracing::info!("Deleted: {:?}", press.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", press.public_dir);
    }

    Ok(())
}
