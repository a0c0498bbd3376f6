pub mod config;
pub mod dom;
pub mod engine;
pub mod hook;
