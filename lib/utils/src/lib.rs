#![recursion_limit = "256"]
pub mod constants;
pub mod errors;
pub mod error_template;
pub mod geometry;
pub mod icons;
