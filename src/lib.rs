pub mod auth;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod crypto;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod vault;
