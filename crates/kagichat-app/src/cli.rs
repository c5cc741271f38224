use clap::{Parser, Subcommand};

/// CLI arguments for kagichat
#[derive(Parser, Debug)]
#[command(name = "kagichat")]
#[command(about = "Chat with Kagi Assistant from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model tier identifier (e.g. ki_quick, ki_research, ki_deep_research)
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,

    /// Answer without searching the web
    #[arg(long)]
    pub no_internet: bool,

    /// Topic lens identifier
    #[arg(long, value_name = "ID")]
    pub lens: Option<String>,

    /// Prompt endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// How long replies to new-conversation prompts are cached, in seconds
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Print HTTP request and response details
    #[arg(short, long)]
    pub verbose: bool,

    /// Save raw response bodies under ~/.kagichat/logs
    #[arg(long)]
    pub log_raw: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// The prompt text
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Interactive conversation (default)
    Repl,
}

impl Commands {
    /// Prompt words of `ask` joined back into one string
    pub fn prompt_text(&self) -> Option<String> {
        match self {
            Commands::Ask { prompt } => Some(prompt.join(" ")),
            Commands::Repl => None,
        }
    }
}
