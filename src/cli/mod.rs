//! CLI argument parsing and command handling.

mod args;

pub use args::{Cli, ClipArgs, Command, ConfigAction};
