use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Where the signed-in identity is kept between restarts. `None` keeps
    /// it in memory only.
    pub identity_slot_path: Option<String>,
    pub sign_in_latency_ms: u64,
    pub reset_latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    pub seed: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    pub history_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { history_capacity: 50 }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.base_url", "http://localhost:8080")?
            .set_default("auth.identity_slot_path", "data/ecell_user.json")?
            .set_default("auth.sign_in_latency_ms", 1000)?
            .set_default("auth.reset_latency_ms", 1500)?
            .set_default("content.seed", true)?
            .set_default("notifications.history_capacity", 50)?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with ECELL__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("ECELL").separator("__"))

            .build()?;

        config.try_deserialize()
    }

    /// Settings for tests: no simulated latency, identity kept in memory.
    pub fn for_tests() -> Self {
        let mut settings = Self::default();
        settings.auth.identity_slot_path = None;
        settings.auth.sign_in_latency_ms = 0;
        settings.auth.reset_latency_ms = 0;
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            auth: AuthConfig {
                identity_slot_path: Some("data/ecell_user.json".to_string()),
                sign_in_latency_ms: 1000,
                reset_latency_ms: 1500,
            },
            content: ContentConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}
