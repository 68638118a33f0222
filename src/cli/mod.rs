pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
mod shell;

pub use context::{CliMode, ShellContext};
pub use shell::{run_cli, run_script};
