// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use futures::Stream;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

use crate::core::{
    driver_msg::{DriverMsg, SkipRequest},
    error::Error,
    events::Event,
    info::PromptView,
};

/// Cloneable front door to a running controller.
///
/// Position sources, segment detectors, preference plumbing and renderers
/// can each hold their own clone; all writes are serialized by the driver.
#[derive(Debug, Clone)]
pub struct SkipPromptHandle {
    tx: mpsc::Sender<DriverMsg>,
    view_rx: watch::Receiver<PromptView>,
    shutdown: Arc<watch::Sender<bool>>,
}

impl SkipPromptHandle {
    pub(super) fn new(
        tx: mpsc::Sender<DriverMsg>,
        view_rx: watch::Receiver<PromptView>,
        shutdown: Arc<watch::Sender<bool>>,
    ) -> Self {
        Self {
            tx,
            view_rx,
            shutdown,
        }
    }

    // ---------------- writes ----------------

    pub async fn set_current_position(&self, position_ms: u64) -> Result<(), Error> {
        self.push(Event::PositionChanged { position_ms }).await
    }

    pub async fn set_target(&self, target_ms: Option<u64>) -> Result<(), Error> {
        self.push(Event::TargetChanged { target_ms }).await
    }

    pub async fn set_enabled(&self, enabled: bool) -> Result<(), Error> {
        self.push(Event::EnabledChanged { enabled }).await
    }

    /// The viewer accepted the prompt. Ignored unless it is visible.
    pub async fn skip(&self) -> Result<(), Error> {
        self.push(Event::SkipRequested).await
    }

    async fn push(&self, event: Event) -> Result<(), Error> {
        if self.is_disposed() {
            return Err(Error::Disposed);
        }

        self.tx
            .send(DriverMsg::Event(event))
            .await
            .map_err(|_| Error::Disposed)
    }

    // ---------------- reads ----------------

    /// Visibility evaluated after every write sent before this call.
    pub async fn visible(&self) -> Result<bool, Error> {
        self.request(|reply| DriverMsg::GetVisible { reply }).await
    }

    pub async fn view(&self) -> Result<PromptView, Error> {
        self.request(|reply| DriverMsg::GetView { reply }).await
    }

    /// Skip requests accepted from now on.
    pub async fn on_skip(&self) -> Result<broadcast::Receiver<SkipRequest>, Error> {
        self.request(|reply| DriverMsg::SubscribeSkips { reply }).await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> DriverMsg,
    ) -> Result<T, Error> {
        if self.is_disposed() {
            return Err(Error::Disposed);
        }

        let (reply, rx) = oneshot::channel();
        self.tx.send(build(reply)).await.map_err(|_| Error::Disposed)?;
        rx.await.map_err(|_| Error::Disposed)
    }

    // ---------------- observation ----------------

    /// Latest published prompt view; wakes only when the view changes.
    pub fn subscribe(&self) -> watch::Receiver<PromptView> {
        self.view_rx.clone()
    }

    /// Current visibility first, then every change. Consecutive duplicates
    /// are dropped; the settled value after a burst is always delivered.
    /// Ends once the controller is disposed.
    pub fn observe_visible(&self) -> impl Stream<Item = bool> + Send + 'static {
        let rx = self.view_rx.clone();

        futures::stream::unfold((rx, None::<bool>), |(mut rx, last)| async move {
            loop {
                if last.is_some() && rx.changed().await.is_err() {
                    return None;
                }

                let visible = rx.borrow_and_update().visible;
                if last != Some(visible) {
                    return Some((visible, (rx, Some(visible))));
                }
            }
        })
    }

    // ---------------- lifecycle ----------------

    /// Stops the driver: the pending countdown is cancelled, observation
    /// streams end and further writes fail with `Error::Disposed`.
    /// Calling it again is harmless.
    pub fn dispose(&self) {
        let already = self.shutdown.send_replace(true);
        if !already {
            tracing::debug!("skip-prompt: dispose requested");
        }
    }

    pub fn is_disposed(&self) -> bool {
        *self.shutdown.borrow() || self.tx.is_closed()
    }
}
