// Author: Dustin Pilgrim
// License: MIT

/// Formats a playback position for the prompt label.
///
/// `MM:SS` below one hour, `H:MM:SS` from there on. Sub-second precision is
/// truncated.
pub fn format_position(position_ms: u64) -> String {
    let secs = position_ms / 1000;

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
