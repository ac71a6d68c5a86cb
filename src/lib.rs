// Author: Dustin Pilgrim
// License: MIT

//! Visibility controller for a skip-intro / skip-credits prompt.
//!
//! [`core`] holds the pure state machine: the visibility predicate and the
//! epoch-tagged auto-hide countdown. [`daemon`] runs it on a tokio task and
//! hands out cloneable [`daemon::SkipPromptHandle`]s to the position
//! source, the segment detector and the renderer.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod daemon;

pub use crate::core::{
    config::ControllerConfig,
    driver_msg::SkipRequest,
    error::Error,
    info::PromptView,
};
pub use crate::daemon::{SkipPrompt, SkipPromptHandle};
