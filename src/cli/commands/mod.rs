//! One module per subcommand.
//!
//! Each module exposes `execute`, which unlocks the vault and does the
//! work. Commands that are also reachable from `shell` split the work
//! into a `run` taking an already unlocked engine.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod delete_all;
pub mod info;
pub mod list;
pub mod shell;
