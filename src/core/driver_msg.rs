// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::{broadcast, oneshot};

use crate::core::{events::Event, info::PromptView};

/// A skip the viewer accepted; playback control should seek to `to_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRequest {
    pub to_ms: u64,
}

/// Everything that reaches the driver task goes through this one channel,
/// so writes from different producers are applied in arrival order.
#[derive(Debug)]
pub enum DriverMsg {
    Event(Event),

    GetVisible { reply: oneshot::Sender<bool> },

    GetView { reply: oneshot::Sender<PromptView> },

    SubscribeSkips { reply: oneshot::Sender<broadcast::Receiver<SkipRequest>> },
}
