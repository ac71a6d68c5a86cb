// Author: Dustin Pilgrim
// License: MIT

/// The three input cells plus the bookkeeping for the single auto-hide countdown.
///
/// Visibility is intentionally absent: it is always recomputed from these
/// fields by `Controller::visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    // Inputs
    position_ms: u64,
    target_ms: Option<u64>,
    enabled: bool,

    // Auto-hide countdown. Every arm bumps the epoch; an expiry is honoured
    // only if it carries the current epoch and the countdown is still armed.
    hide_epoch: u64,
    hide_armed: bool,
}

impl State {
    pub fn new(enabled: bool) -> Self {
        Self {
            position_ms: 0,
            target_ms: None,
            enabled,
            hide_epoch: 0,
            hide_armed: false,
        }
    }

    // ---------------- inputs ----------------

    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    pub fn set_position_ms(&mut self, position_ms: u64) {
        self.position_ms = position_ms;
    }

    pub fn target_ms(&self) -> Option<u64> {
        self.target_ms
    }

    pub fn set_target_ms(&mut self, target_ms: Option<u64>) {
        self.target_ms = target_ms;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ---------------- auto-hide ----------------

    pub fn hide_epoch(&self) -> u64 {
        self.hide_epoch
    }

    pub fn hide_armed(&self) -> bool {
        self.hide_armed
    }

    /// Supersedes any pending countdown and returns the epoch of the new one.
    pub fn arm_hide(&mut self) -> u64 {
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.hide_armed = true;
        self.hide_epoch
    }

    /// Consumes the countdown if `epoch` is the live one.
    pub fn take_hide(&mut self, epoch: u64) -> bool {
        if self.hide_armed && self.hide_epoch == epoch {
            self.hide_armed = false;
            true
        } else {
            false
        }
    }

    /// Invalidates the pending countdown without starting a new one.
    pub fn cancel_hide(&mut self) {
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.hide_armed = false;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}
