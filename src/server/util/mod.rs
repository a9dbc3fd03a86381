//! Small helpers shared by the controller and service layers.

pub mod parse;
pub mod time;
