use anyhow::Result;

use kagichat_llm_api::KagiConfig;

use crate::session::ChatSession;

/// Send one prompt and print the reply
pub async fn run_ask_mode(config: KagiConfig, prompt: &str) -> Result<()> {
    let mut session = ChatSession::new(config)?;
    let reply = session.send(prompt).await;
    println!("{}", reply);
    Ok(())
}
