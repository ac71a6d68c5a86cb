// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use crate::core::error::{ConfigError, Error};

pub const DEFAULT_MIN_SKIP_MS: u64 = 3_000;
pub const DEFAULT_DISPLAY_MS: u64 = 8_000;

/// Construction-time settings for one controller.
///
/// Nothing here can change once the controller exists; a new overlay gets a
/// new controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Minimum remaining gap before the segment end required to offer a skip.
    pub min_skip: Duration,

    /// How long the prompt may stay up before the target is dropped.
    pub display: Duration,

    /// Starting value of the enabled flag.
    pub initial_enabled: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_skip: Duration::from_millis(DEFAULT_MIN_SKIP_MS),
            display: Duration::from_millis(DEFAULT_DISPLAY_MS),
            initial_enabled: true,
        }
    }
}

impl ControllerConfig {
    pub fn new(min_skip: Duration, display: Duration, initial_enabled: bool) -> Result<Self, Error> {
        let cfg = Self {
            min_skip,
            display,
            initial_enabled,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// A zero display duration would hide every target the moment it is set.
    pub fn validate(&self) -> Result<(), Error> {
        if self.display.is_zero() {
            return Err(Error::InvalidConfig(ConfigError::ZeroDisplayDuration));
        }
        Ok(())
    }

    pub fn min_skip_ms(&self) -> u64 {
        duration_ms(self.min_skip)
    }

    pub fn display_ms(&self) -> u64 {
        duration_ms(self.display)
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
