// Author: Dustin Pilgrim
// License: MIT

mod engine;

use std::time::Duration;

use crate::core::{config::ControllerConfig, info::PromptView, state::State};

/// Decides prompt visibility from `State` and turns input events into
/// runtime actions. Holds no clock and spawns nothing; the driver owns
/// time and feeds expiries back in as events.
#[derive(Debug, Clone)]
pub struct Controller {
    cfg: ControllerConfig,
}

impl Controller {
    pub fn new(cfg: ControllerConfig) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &ControllerConfig {
        &self.cfg
    }

    /// Fresh state for this controller's configuration.
    pub fn initial_state(&self) -> State {
        State::new(self.cfg.initial_enabled)
    }

    /// `enabled && target.is_some() && position <= target - min_skip`.
    ///
    /// A target closer to zero than `min_skip` has a negative threshold, so
    /// no position qualifies.
    pub fn visible(&self, state: &State) -> bool {
        if !state.enabled() {
            return false;
        }

        let Some(target_ms) = state.target_ms() else {
            return false;
        };

        // Compared as `Duration` so a sub-millisecond `min_skip` is not truncated.
        match Duration::from_millis(target_ms).checked_sub(self.cfg.min_skip) {
            Some(threshold) => Duration::from_millis(state.position_ms()) <= threshold,
            None => false,
        }
    }

    pub fn view(&self, state: &State) -> PromptView {
        if self.visible(state) {
            PromptView::shown(state.target_ms())
        } else {
            PromptView::hidden(state.target_ms())
        }
    }
}
