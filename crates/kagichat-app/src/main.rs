use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use kagichat::{run_ask_mode, run_repl_mode, setup_from_cli, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = setup_from_cli(&cli);

    if !config.has_credential() {
        eprintln!(
            "{}",
            "Error: KAGI_COOKIE environment variable not set. Please set it before running.".red()
        );
        std::process::exit(1);
    }

    match cli.command {
        Some(ref command @ Commands::Ask { .. }) => {
            let prompt = command.prompt_text().unwrap_or_default();
            run_ask_mode(config, &prompt).await
        }
        Some(Commands::Repl) | None => run_repl_mode(config).await,
    }
}
