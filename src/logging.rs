// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Log output setup for applications embedding the engine.

use anyhow::{anyhow, Context, Result};
use tracing::Level;

/// Install a global fmt subscriber at the given level ("info", "debug", ...).
///
/// Fails if the level does not parse or a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let level: Level = level
        .parse()
        .with_context(|| format!("Invalid log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
