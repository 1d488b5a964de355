pub mod cli;
pub mod config;
pub mod core;
pub mod filesystem;
pub mod logging;
