// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use eyre::Result;
use rune_cfg::RuneConfig;

use crate::core::config::{ControllerConfig, DEFAULT_DISPLAY_MS, DEFAULT_MIN_SKIP_MS};

/// Reads the `skip_prompt:` block. Missing keys fall back to defaults; both
/// `snake_case` and `kebab-case` spellings are accepted.
pub fn parse_controller_config(config: &RuneConfig) -> Result<ControllerConfig> {
    let min_skip_ms = config
        .get::<u64>("skip_prompt.min_skip_ms")
        .or_else(|_| config.get::<u64>("skip_prompt.min-skip-ms"))
        .unwrap_or(DEFAULT_MIN_SKIP_MS);

    let display_ms = config
        .get::<u64>("skip_prompt.display_ms")
        .or_else(|_| config.get::<u64>("skip_prompt.display-ms"))
        .unwrap_or(DEFAULT_DISPLAY_MS);

    let enabled = config
        .get::<bool>("skip_prompt.enabled")
        .unwrap_or(true);

    tracing::debug!(
        "config: min_skip_ms={}, display_ms={}, enabled={}",
        min_skip_ms,
        display_ms,
        enabled
    );

    let cfg = ControllerConfig::new(
        Duration::from_millis(min_skip_ms),
        Duration::from_millis(display_ms),
        enabled,
    )?;

    Ok(cfg)
}
