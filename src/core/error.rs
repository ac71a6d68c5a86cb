// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Controller settings were rejected at construction.
    InvalidConfig(ConfigError),

    /// The controller was disposed (or its driver task ended) before the
    /// request could be applied.
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `display` must be strictly positive.
    ZeroDisplayDuration,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "invalid config: {e}"),
            Error::Disposed => write!(f, "controller disposed"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDisplayDuration =>
                write!(f, "display duration must be greater than zero"),
        }
    }
}

impl std::error::Error for Error {}
