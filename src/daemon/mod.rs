// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod handle;
mod run;

#[cfg(test)]
mod tests;

pub use handle::SkipPromptHandle;

use crate::core::{
    config::ControllerConfig,
    controller::Controller,
    driver_msg::{DriverMsg, SkipRequest},
    error::Error,
    events::Event,
    info::PromptView,
    state::State,
};

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

const CHANNEL_CAPACITY: usize = 256;
const SKIP_CHANNEL_CAPACITY: usize = 16;

/// The single execution context that owns one controller's state.
///
/// Every write, query and timer expiry is a `DriverMsg` on one channel, so
/// state is only ever touched from this task.
pub struct SkipPrompt {
    controller: Controller,
    state: State,

    view_tx: watch::Sender<PromptView>,
    skip_tx: broadcast::Sender<SkipRequest>,

    // Weak so that pending countdowns never keep the driver alive.
    self_tx: mpsc::WeakSender<DriverMsg>,
    hide_task: Option<JoinHandle<()>>,
}

impl SkipPrompt {
    /// Starts a driver task on the current tokio runtime.
    ///
    /// The task ends when `dispose` is called on any handle or when every
    /// handle has been dropped.
    pub fn spawn(cfg: ControllerConfig) -> Result<(SkipPromptHandle, JoinHandle<()>), Error> {
        cfg.validate()?;

        let (tx, rx) = mpsc::channel::<DriverMsg>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let controller = Controller::new(cfg);
        let state = controller.initial_state();

        let (view_tx, view_rx) = watch::channel(controller.view(&state));
        let (skip_tx, _) = broadcast::channel(SKIP_CHANNEL_CAPACITY);

        tracing::debug!(
            "skip-prompt: min_skip={}ms, display={}ms, initial_enabled={}",
            cfg.min_skip_ms(),
            cfg.display_ms(),
            cfg.initial_enabled,
        );

        let driver = Self {
            controller,
            state,
            view_tx,
            skip_tx,
            self_tx: tx.downgrade(),
            hide_task: None,
        };

        let handle = SkipPromptHandle::new(tx, view_rx, Arc::new(shutdown_tx));
        let join = tokio::spawn(driver.run(rx, shutdown_rx));

        Ok((handle, join))
    }

    fn handle_one_event(&mut self, event: Event) {
        if matches!(event, Event::PositionChanged { .. }) {
            tracing::trace!("incoming: {:?}", event);
        } else {
            tracing::debug!("incoming: {:?}", event);
        }

        let actions = self.controller.handle_event(&mut self.state, event);

        for action in actions {
            self.exec_action(action);
        }

        self.publish_view();
    }

    /// Pushes the derived view; subscribers only wake when it differs.
    fn publish_view(&self) {
        let next = self.controller.view(&self.state);

        self.view_tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }

            tracing::debug!(
                "prompt: visible={} target={:?} label={:?}",
                next.visible,
                next.target_ms,
                next.label
            );
            *current = next;
            true
        });
    }
}
