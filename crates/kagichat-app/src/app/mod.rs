pub mod setup;
pub mod ask;
pub mod repl;

pub use setup::{setup_from_cli, config_from_cli};
pub use ask::run_ask_mode;
pub use repl::{run_repl_mode, parse_repl_command, ReplCommand};
