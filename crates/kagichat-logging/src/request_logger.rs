use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use kagichat_models::{ModelTier, PromptRequest};
use crate::{safe_truncate, get_logs_dir};

const MAX_CONSOLE_BODY_CHARS: usize = 5000;

/// Show only the first few characters of a credential
pub fn mask_secret(secret: &str) -> String {
    format!("{}***", secret.chars().take(10).collect::<String>())
}

/// Header lines as sent, with the cookie masked
pub fn display_headers(headers: &[(&str, String)]) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("cookie") {
                format!("{}: {}", name, mask_secret(value))
            } else {
                format!("{}: {}", name, value)
            }
        })
        .collect()
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &PromptRequest, headers: &[(&str, String)], verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    for line in display_headers(headers) {
        println!("  {}", line);
    }

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(&request) {
        Ok(json) => print_truncated(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    // The body is a marker-delimited stream, not JSON
    println!("\n{}", "Response Body:".bright_yellow());
    print_truncated(body);

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

/// Write the raw response body to the logs directory, untouched.
/// Returns the path of the written file.
pub fn log_raw_response_to_file(
    raw_response: &str,
    request_timestamp: u64,
    model: &ModelTier,
) -> Result<PathBuf> {
    let logs_dir = get_logs_dir()?;

    let model_name = model.as_str().replace('/', "-");
    let filename = format!("resp-raw-{}-{}.txt", request_timestamp, model_name);
    let file_path = logs_dir.join(&filename);

    fs::write(&file_path, raw_response)
        .with_context(|| format!("Failed to write raw response log to {}", file_path.display()))?;

    println!("{}", format!("📄 Raw response logged to: {}", filename).bright_blue());

    Ok(file_path)
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_CONSOLE_BODY_CHARS {
        println!("{}", safe_truncate(text, MAX_CONSOLE_BODY_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}
