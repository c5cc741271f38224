use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use kagichat_logging::{log_raw_response_to_file, log_request, log_response};
use kagichat_models::{Focus, MessageDescriptor, Profile, PromptRequest, ThreadDescriptor};

use crate::cache::ResponseCache;
use crate::config::KagiConfig;
use crate::conversation::ConversationState;
use crate::error::KagiError;
use crate::extract::{extract, MESSAGE_MARKER, THREAD_MARKER};
use crate::normalize::normalize;

/// Content type of the assistant's marker-delimited stream
pub const STREAM_CONTENT_TYPE: &str = "application/vnd.kagi.stream";

const SEC_CH_UA: &str = "\"Not:A-Brand\";v=\"99\", \"Google Chrome\";v=\"145\", \"Chromium\";v=\"145\"";

/// Client for one Kagi assistant conversation.
///
/// `send` mutates the conversation state, so a client serves one logical
/// session at a time. Clients may share a [`ResponseCache`].
pub struct KagiClient {
    config: KagiConfig,
    http: reqwest::Client,
    state: ConversationState,
    cache: Arc<ResponseCache>,
}

impl KagiClient {
    /// Create a client with its own response cache
    pub fn new(config: KagiConfig) -> Result<Self, KagiError> {
        let cache = Arc::new(ResponseCache::new(config.cache_ttl));
        Self::with_cache(config, cache)
    }

    /// Create a client that reads and fills a shared response cache
    pub fn with_cache(config: KagiConfig, cache: Arc<ResponseCache>) -> Result<Self, KagiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http,
            state: ConversationState::Fresh,
            cache,
        })
    }

    pub fn config(&self) -> &KagiConfig {
        &self.config
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// Start a new conversation on the next `send`
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Send a prompt and return the reply, or a description of what went wrong.
    pub async fn send(&mut self, prompt: &str) -> String {
        match self.try_send(prompt).await {
            Ok(reply) => reply,
            Err(e) => e.to_string(),
        }
    }

    /// Send a prompt, continuing the current conversation if there is one.
    ///
    /// Outside a conversation the reply cache is consulted first and filled
    /// afterwards. Conversation identifiers are committed only once the whole
    /// response body has been received.
    pub async fn try_send(&mut self, prompt: &str) -> Result<String, KagiError> {
        if !self.config.has_credential() {
            return Err(KagiError::MissingCredential);
        }

        let fresh = self.state.is_fresh();
        if fresh {
            if let Some(cached) = self.cache.get(prompt) {
                if self.config.verbose {
                    println!("💾 Cache hit for prompt ({} chars)", prompt.chars().count());
                }
                return Ok(cached);
            }
        }

        let body = self.post(prompt).await?;
        let reply = self.absorb_response(&body).ok_or(KagiError::Parse)?;

        let text = normalize(&reply);
        if fresh {
            self.cache.put(prompt, &text);
        }
        Ok(text)
    }

    /// Request body for `prompt` given the current conversation state
    pub fn build_request(&self, prompt: &str) -> PromptRequest {
        let thread_id = self.state.thread_id().map(str::to_string);
        // A message id only exists once a thread does
        let message_id = self.state.message_id().map(str::to_string);

        PromptRequest {
            focus: Focus::new(prompt, thread_id, message_id),
            profile: Profile::new(
                self.config.model.clone(),
                self.config.internet_access,
                self.config.lens_id.clone(),
            ),
        }
    }

    /// Headers sent with every prompt
    pub fn build_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sec-ch-ua-platform", "Windows".to_string()),
            ("Referer", self.config.referer(self.state.thread_id())),
            ("sec-ch-ua", SEC_CH_UA.to_string()),
            ("sec-ch-ua-mobile", "?0".to_string()),
            ("User-Agent", self.config.user_agent.clone()),
            ("Accept", STREAM_CONTENT_TYPE.to_string()),
            ("Content-Type", "application/json".to_string()),
            ("rtt", self.config.rtt.clone()),
            ("Cookie", self.config.cookie_header()),
        ]
    }

    async fn post(&self, prompt: &str) -> Result<String, KagiError> {
        let request = self.build_request(prompt);
        let headers = self.build_headers();
        log_request(&self.config.url, &request, &headers, self.config.verbose);

        let request_timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let mut builder = self.http.post(&self.config.url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder = builder.json(&request);

        let response = builder.send().await?.error_for_status()?;
        let status = response.status();
        let headers = response.headers().clone();

        // The stream is UTF-8 whatever charset the server declares
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        log_response(&status, &headers, &body, self.config.verbose);
        if self.config.log_raw_responses {
            if let Err(e) = log_raw_response_to_file(&body, request_timestamp, &self.config.model) {
                eprintln!("[Logging error] {}", e);
            }
        }

        Ok(body)
    }

    /// Pull both descriptors out of a response body, advance the conversation
    /// state and return the reply of a completed turn.
    pub(crate) fn absorb_response(&mut self, body: &str) -> Option<String> {
        let thread = self.descriptor::<ThreadDescriptor>(body, THREAD_MARKER);
        let message = self.descriptor::<MessageDescriptor>(body, MESSAGE_MARKER);

        if let Some(thread_id) = thread.as_ref().and_then(|t| t.identifier()) {
            self.state.apply_thread(thread_id);
        }
        if let Some(message_id) = message.as_ref().and_then(|m| m.identifier()) {
            self.state.apply_message(message_id);
        }

        message.and_then(|m| m.completed_reply().map(str::to_string))
    }

    fn descriptor<T>(&self, body: &str, marker: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let json = extract(body, marker)?;
        match serde_json::from_str(json) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                if self.config.verbose {
                    eprintln!("⚠️  Ignoring malformed {} payload: {}", marker, e);
                }
                None
            }
        }
    }
}
