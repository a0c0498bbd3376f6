#![recursion_limit = "256"]
pub mod card;
pub mod infinite_scroll;
pub mod skeleton;
