// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod config;
pub mod controller;
pub mod driver_msg;
pub mod error;
pub mod events;
pub mod info;
pub mod state;
pub mod utils;
