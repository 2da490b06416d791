use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Bind address for the recommendation gateway.
    pub bind_addr: SocketAddr,
    /// Bind address for the chat relay.
    pub relay_bind_addr: SocketAddr,
    pub log_level: String,
    /// Origins granted CORS access to the gateway.
    pub allowed_origins: Vec<String>,
    /// Upstream inference credential. Absent or empty means every chat
    /// request degrades to the apology path.
    pub hf_api_key: Option<String>,
    pub hf_model: String,
    pub upstream_timeout_secs: u64,
    /// Pause between simulated-stream tokens.
    pub stream_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("relay_bind_addr", &self.relay_bind_addr)
            .field("log_level", &self.log_level)
            .field("allowed_origins", &self.allowed_origins)
            .field(
                "hf_api_key",
                &self.hf_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("hf_model", &self.hf_model)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("stream_delay_ms", &self.stream_delay_ms)
            .finish()
    }
}
