// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cancel whatever countdown is pending and start a new one.
    ///
    /// When it runs out the runtime must feed back
    /// `Event::AutoHideExpired { epoch }` with this exact epoch.
    ArmAutoHide {
        epoch: u64,
        after: Duration,
    },

    /// Ask playback control to jump to the end of the segment.
    /// How (and whether) the seek happens is up to the receiver.
    RequestSkip {
        to_ms: u64,
    },
}
