// Author: Dustin Pilgrim
// License: MIT

use crate::core::{action::Action, events::Event, state::State};

use super::Controller;

impl Controller {
    pub fn handle_event(&self, state: &mut State, event: Event) -> Vec<Action> {
        let mut out = Vec::new();

        match event {
            Event::PositionChanged { position_ms } => {
                state.set_position_ms(position_ms);
            }

            Event::TargetChanged { target_ms } => {
                state.set_target_ms(target_ms);
            }

            Event::EnabledChanged { enabled } => {
                state.set_enabled(enabled);
            }

            Event::AutoHideExpired { epoch } => {
                if state.take_hide(epoch) {
                    if let Some(target_ms) = state.target_ms() {
                        tracing::debug!("auto-hide: dropping target {}ms", target_ms);
                    }
                    state.set_target_ms(None);
                } else {
                    tracing::debug!(
                        "auto-hide: ignoring stale expiry (epoch {}, live {}, armed {})",
                        epoch,
                        state.hide_epoch(),
                        state.hide_armed()
                    );
                }
            }

            Event::SkipRequested => {
                if !self.visible(state) {
                    tracing::debug!("skip: prompt not visible, ignoring");
                    return out;
                }

                if let Some(to_ms) = state.target_ms() {
                    out.push(Action::RequestSkip { to_ms });
                }

                // Accepting the prompt closes the segment like a detector clear would.
                state.set_target_ms(None);
                out.push(self.arm_auto_hide(state));
                return out;
            }
        }

        if event.rearms_auto_hide() {
            out.push(self.arm_auto_hide(state));
        }

        out
    }

    fn arm_auto_hide(&self, state: &mut State) -> Action {
        Action::ArmAutoHide {
            epoch: state.arm_hide(),
            after: self.cfg().display,
        }
    }
}
