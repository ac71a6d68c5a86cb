// Author: Dustin Pilgrim
// License: MIT

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Periodic report from the playback position source. May go backward on seek.
    PositionChanged {
        position_ms: u64,
    },

    /// Segment detector entered a segment (`Some(end)`) or left it (`None`).
    TargetChanged {
        target_ms: Option<u64>,
    },

    /// User preference toggled the prompt on or off.
    EnabledChanged {
        enabled: bool,
    },

    /// An auto-hide countdown ran out. Only the countdown tagged with the
    /// current epoch is allowed to clear the target.
    AutoHideExpired {
        epoch: u64,
    },

    /// The viewer accepted the prompt.
    SkipRequested,
}

impl Event {
    /// Writes that restart the auto-hide countdown.
    pub fn rearms_auto_hide(&self) -> bool {
        matches!(self, Event::TargetChanged { .. } | Event::EnabledChanged { .. })
    }
}
