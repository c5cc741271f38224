use std::env;
use std::time::Duration;

use kagichat_models::ModelTier;

/// Default assistant prompt endpoint
pub const KAGI_PROMPT_URL: &str = "https://kagi.com/assistant/prompt";

/// Base of the `Referer` header; the thread identifier is appended once known
pub const ASSISTANT_REFERER: &str = "https://kagi.com/assistant";

/// Browser user agent the endpoint expects
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/145.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RTT: &str = "0";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Name of the session cookie carrying the credential
pub const SESSION_COOKIE_NAME: &str = "kagi_session";

/// Configuration for a Kagi assistant client
#[derive(Debug, Clone, PartialEq)]
pub struct KagiConfig {
    /// Prompt endpoint URL
    pub url: String,
    pub user_agent: String,
    /// Bound on the whole request/response exchange
    pub timeout: Duration,
    /// Value of the real-time-typing (`rtt`) header
    pub rtt: String,
    pub model: ModelTier,
    /// Session credential; requests are refused while empty
    pub cookie: String,
    pub internet_access: bool,
    /// Optional topic lens sent as `profile.lens_id`
    pub lens_id: Option<String>,
    /// How long a fresh-conversation reply stays cached
    pub cache_ttl: Duration,
    /// Dump requests and responses to the console
    pub verbose: bool,
    /// Persist raw response bodies under ~/.kagichat/logs
    pub log_raw_responses: bool,
}

impl Default for KagiConfig {
    fn default() -> Self {
        Self {
            url: KAGI_PROMPT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rtt: DEFAULT_RTT.to_string(),
            model: ModelTier::KiQuick,
            cookie: String::new(),
            internet_access: true,
            lens_id: None,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            verbose: false,
            log_raw_responses: false,
        }
    }
}

impl KagiConfig {
    /// Defaults overridden by `KAGI_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `KAGI_*` keys.
    /// Values that fail to parse leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(cookie) = lookup("KAGI_COOKIE") {
            config.cookie = cookie.trim().to_string();
        }
        if let Some(url) = lookup("KAGI_URL").filter(|u| !u.trim().is_empty()) {
            config.url = url.trim().to_string();
        }
        if let Some(model) = lookup("KAGI_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = ModelTier::from_str(&model);
        }
        if let Some(secs) = lookup("KAGI_TIMEOUT").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(flag) = lookup("KAGI_INTERNET_ACCESS").and_then(|v| parse_bool(&v)) {
            config.internet_access = flag;
        }
        if let Some(lens) = lookup("KAGI_LENS_ID").filter(|l| !l.trim().is_empty()) {
            config.lens_id = Some(lens.trim().to_string());
        }
        if let Some(secs) = lookup("KAGI_CACHE_TTL").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.cache_ttl = Duration::from_secs(secs);
        }

        config
    }

    pub fn has_credential(&self) -> bool {
        !self.cookie.trim().is_empty()
    }

    /// `Cookie` header value. A bare token is wrapped as the session cookie;
    /// a value that already holds `name=value` pairs is sent as is.
    pub fn cookie_header(&self) -> String {
        let cookie = self.cookie.trim();
        if cookie.contains('=') {
            cookie.to_string()
        } else {
            format!("{}={}", SESSION_COOKIE_NAME, cookie)
        }
    }

    pub fn referer(&self, thread_id: Option<&str>) -> String {
        match thread_id {
            Some(id) => format!("{}/{}", ASSISTANT_REFERER, id),
            None => ASSISTANT_REFERER.to_string(),
        }
    }
}

/// Parse the usual spellings of a boolean flag
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
