// Author: Dustin Pilgrim
// License: MIT

use crate::core::driver_msg::DriverMsg;

use tokio::sync::{mpsc, watch};

use super::SkipPrompt;

impl SkipPrompt {
    pub(super) async fn run(
        mut self,
        mut rx: mpsc::Receiver<DriverMsg>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        tracing::info!("skip-prompt: controller started");

        loop {
            tokio::select! {
                biased;

                res = shutdown.changed() => {
                    // A closed channel means every handle is gone.
                    if res.is_err() || *shutdown.borrow() {
                        tracing::info!("skip-prompt: controller stopping (disposed)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        tracing::info!("skip-prompt: controller stopping (all handles dropped)");
                        break;
                    };

                    self.handle_msg(msg);
                }
            }
        }

        // Writes accepted before dispose still land and get published.
        rx.close();
        let mut drained = 0usize;
        while let Some(msg) = rx.recv().await {
            self.handle_msg(msg);
            drained += 1;
        }
        if drained > 0 {
            tracing::debug!("skip-prompt: applied {} queued message(s) on shutdown", drained);
        }

        self.cancel_auto_hide();
    }

    fn handle_msg(&mut self, msg: DriverMsg) {
        match msg {
            DriverMsg::Event(event) => {
                self.handle_one_event(event);
            }

            DriverMsg::GetVisible { reply } => {
                let _ = reply.send(self.controller.visible(&self.state));
            }

            DriverMsg::GetView { reply } => {
                let _ = reply.send(self.controller.view(&self.state));
            }

            DriverMsg::SubscribeSkips { reply } => {
                let _ = reply.send(self.skip_tx.subscribe());
            }
        }
    }
}
