// Author: Dustin Pilgrim
// License: MIT

pub mod command;
pub mod info;
pub mod logging;
pub mod play;
pub mod scenario;
