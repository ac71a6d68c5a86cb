// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    driver_msg::{DriverMsg, SkipRequest},
    events::Event,
};

use std::time::Duration;

use tokio::time::sleep;

use super::SkipPrompt;

impl SkipPrompt {
    pub(super) fn exec_action(&mut self, action: Action) {
        match action {
            Action::ArmAutoHide { epoch, after } => {
                self.spawn_auto_hide(epoch, after);
            }

            Action::RequestSkip { to_ms } => {
                tracing::info!("skip: requested seek to {}ms", to_ms);
                if self.skip_tx.send(SkipRequest { to_ms }).is_err() {
                    tracing::warn!("skip: no playback listener subscribed");
                }
            }
        }
    }

    /// Replaces the pending countdown. Aborting the old task is not enough on
    /// its own: its expiry may already sit in the channel, which is why the
    /// core checks the epoch it carries.
    fn spawn_auto_hide(&mut self, epoch: u64, after: Duration) {
        if let Some(prev) = self.hide_task.take() {
            prev.abort();
        }

        let tx = self.self_tx.clone();

        self.hide_task = Some(tokio::spawn(async move {
            sleep(after).await;

            let Some(tx) = tx.upgrade() else {
                return;
            };

            let _ = tx
                .send(DriverMsg::Event(Event::AutoHideExpired { epoch }))
                .await;
        }));
    }

    pub(super) fn cancel_auto_hide(&mut self) {
        if let Some(task) = self.hide_task.take() {
            task.abort();
        }
        self.state.cancel_hide();
    }
}
