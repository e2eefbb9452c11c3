//! Configuration: project settings file and resolved vault paths.

pub mod paths;
pub mod settings;

pub use paths::{write_private, VaultPaths};
pub use settings::Settings;
