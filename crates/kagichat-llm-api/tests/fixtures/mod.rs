#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kagichat_llm_api::KagiConfig;

pub const PROMPT_PATH: &str = "/assistant/prompt";
pub const TEST_COOKIE: &str = "test_cookie_12345";

/// Mock assistant endpoint for client tests
pub struct KagiMockServer {
    server: MockServer,
}

impl KagiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn prompt_url(&self) -> String {
        format!("{}{}", self.server.uri(), PROMPT_PATH)
    }

    /// Client configuration pointed at this server
    pub fn config(&self) -> KagiConfig {
        KagiConfig {
            url: self.prompt_url(),
            cookie: TEST_COOKIE.to_string(),
            user_agent: "TestAgent".to_string(),
            ..KagiConfig::default()
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Answer every prompt with `body`, expecting exactly `calls` requests
    pub async fn mock_stream_reply(&self, body: &str, calls: u64) {
        Mock::given(method("POST"))
            .and(path(PROMPT_PATH))
            .respond_with(stream_response(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Answer only prompts whose text is `prompt`
    pub async fn mock_stream_reply_for_prompt(&self, prompt: &str, body: &str) {
        Mock::given(method("POST"))
            .and(path(PROMPT_PATH))
            .and(body_partial_json(json!({ "focus": { "prompt": prompt } })))
            .respond_with(stream_response(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer every prompt with an HTTP error status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(PROMPT_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .mount(&self.server)
            .await;
    }

    /// Answer every prompt with `body` after `delay`
    pub async fn mock_delayed_reply(&self, body: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(PROMPT_PATH))
            .respond_with(stream_response(body).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Bodies of all requests received so far, parsed as JSON
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).expect("request body is JSON"))
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or_default()
    }
}

fn stream_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/vnd.kagi.stream")
        .set_body_string(body)
}

/// A response body the way the endpoint streams a finished turn
pub fn turn_body(thread_id: &str, message_id: &str, reply: &str) -> String {
    let thread = json!({ "id": thread_id, "title": "Test thread" });
    let message = json!({ "id": message_id, "state": "done", "reply": reply });
    format!(
        "hi: {{\"v\":\"1\"}}\nthread.json: {}\nnew_message.json: {{\"id\":\"{}\",\"state\":\"waiting\"}}\nnew_message.json: {}\n",
        thread, message_id, message
    )
}
