// Author: Dustin Pilgrim
// License: MIT

use crate::core::utils::format_position;

/// What a renderer needs to draw the prompt.
///
/// Published by the driver after every processed write. It is a view of
/// `State`, never fed back into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptView {
    pub visible: bool,
    pub target_ms: Option<u64>,

    /// Skip-to position as `MM:SS` / `H:MM:SS`; only set while visible.
    pub label: Option<String>,
}

impl PromptView {
    pub fn shown(target_ms: Option<u64>) -> Self {
        Self {
            visible: true,
            target_ms,
            label: target_ms.map(format_position),
        }
    }

    pub fn hidden(target_ms: Option<u64>) -> Self {
        Self {
            visible: false,
            target_ms,
            label: None,
        }
    }
}
