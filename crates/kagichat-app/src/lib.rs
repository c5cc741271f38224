//! Kagichat Application Library
//!
//! Command line front end for the Kagi assistant client.

pub use kagichat_llm_api as api;
pub use kagichat_models as models;

pub mod cli;
pub mod app;
pub mod session;

pub use cli::{Cli, Commands};
pub use app::{setup_from_cli, config_from_cli, run_ask_mode, run_repl_mode};
pub use session::ChatSession;
