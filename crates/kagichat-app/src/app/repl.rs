use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use kagichat_llm_api::{parse_bool, KagiConfig};
use kagichat_logging::{get_kagichat_dir, ConversationLogger};
use kagichat_models::ModelTier;

use crate::session::ChatSession;

/// A line typed at the REPL prompt
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Empty,
    Exit,
    Help,
    NewConversation,
    State,
    Model(String),
    Internet(bool),
    Lens(Option<String>),
    Prompt(String),
    Invalid(String),
}

/// Interpret one REPL line
pub fn parse_repl_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    if line == "exit" || line == "quit" {
        return ReplCommand::Exit;
    }
    if !line.starts_with('/') {
        return ReplCommand::Prompt(line.to_string());
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match (command, arg) {
        ("/exit", _) | ("/quit", _) => ReplCommand::Exit,
        ("/help", _) => ReplCommand::Help,
        ("/new", _) | ("/reset", _) => ReplCommand::NewConversation,
        ("/state", _) => ReplCommand::State,
        ("/model", Some(model)) => ReplCommand::Model(model.to_string()),
        ("/internet", Some(flag)) => match parse_bool(flag) {
            Some(enabled) => ReplCommand::Internet(enabled),
            None => ReplCommand::Invalid(format!("expected on/off, got '{}'", flag)),
        },
        ("/lens", Some("none")) => ReplCommand::Lens(None),
        ("/lens", Some(lens)) => ReplCommand::Lens(Some(lens.to_string())),
        ("/model", None) | ("/internet", None) | ("/lens", None) => {
            ReplCommand::Invalid(format!("{} needs an argument", command))
        }
        _ => ReplCommand::Invalid(format!("unknown command '{}'", command)),
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /new                 start a new conversation");
    println!("  /model <id>          switch model tier (ki_quick, ki_research, ki_deep_research)");
    println!("  /internet on|off     allow or forbid web access");
    println!("  /lens <id|none>      set or clear the topic lens");
    println!("  /state               show conversation state");
    println!("  exit, quit           leave");
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: KagiConfig) -> Result<()> {
    println!("{}", "🔎 Kagi Chat".bright_cyan().bold());
    println!("{}", "Type 'exit' or 'quit' to exit, '/help' for commands\n".bright_black());

    let mut session = ChatSession::new(config)?;

    let mut logger = match get_kagichat_dir() {
        Ok(dir) => match ConversationLogger::new(&dir).await {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        },
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let mut rl = DefaultEditor::new()?;

    loop {
        let model_indicator = format!("[{}]", session.config().model.display_name()).bright_magenta();
        let readline = rl.readline(&format!("{} {} ", model_indicator, "You:".bright_green().bold()));

        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Input error:".red(), e);
                break;
            }
        };

        let command = parse_repl_command(&line);
        if !matches!(command, ReplCommand::Empty) {
            let _ = rl.add_history_entry(line.trim());
        }

        match command {
            ReplCommand::Empty => continue,
            ReplCommand::Exit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::NewConversation => {
                session.reset();
                println!("{}", "✨ Started a new conversation".bright_black());
            }
            ReplCommand::State => {
                println!(
                    "{}",
                    format!(
                        "Conversation: {} • thread: {} • model: {} • internet: {}",
                        session.phase(),
                        session.thread_id().unwrap_or("-"),
                        session.config().model,
                        session.config().internet_access,
                    )
                    .bright_black()
                );
            }
            ReplCommand::Model(model) => {
                let config = KagiConfig {
                    model: ModelTier::from_str(&model),
                    ..session.config().clone()
                };
                report_config_change(session.apply_config(config)?);
            }
            ReplCommand::Internet(enabled) => {
                let config = KagiConfig {
                    internet_access: enabled,
                    ..session.config().clone()
                };
                report_config_change(session.apply_config(config)?);
            }
            ReplCommand::Lens(lens_id) => {
                let config = KagiConfig {
                    lens_id,
                    ..session.config().clone()
                };
                report_config_change(session.apply_config(config)?);
            }
            ReplCommand::Invalid(reason) => {
                println!("{} {}", "⚠️".yellow(), reason);
            }
            ReplCommand::Prompt(prompt) => {
                let model = session.config().model.to_string();
                if let Some(logger) = &mut logger {
                    logger.log("user", &prompt, Some(&model), session.thread_id()).await;
                }

                let reply = session.send(&prompt).await;
                println!("\n{} {}\n", "Kagi:".bright_blue().bold(), reply);

                if let Some(logger) = &mut logger {
                    logger.log("assistant", &reply, Some(&model), session.thread_id()).await;
                }
            }
        }
    }

    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }
    println!("{}", "Goodbye!".bright_black());
    Ok(())
}

fn report_config_change(rebuilt: bool) {
    if rebuilt {
        println!("{}", "🔁 Settings changed; the next prompt starts a new conversation".bright_black());
    } else {
        println!("{}", "Settings unchanged".bright_black());
    }
}
