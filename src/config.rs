use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const ENV_PREFIX: &str = "DASHBOARD_";
const APP_DIR: &str = "reel-dashboard";
const SESSION_FILE: &str = "session.json";

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the backend REST API, including the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Where to send the user when no session identity is stored
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Location of the stored session identity
    #[serde(default)]
    pub session_path: Option<PathBuf>,

    /// Delay between a successful interaction report and the dashboard reload
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u64,

    /// Watch duration reported by the hero's play button
    #[serde(default = "default_hero_watch_seconds")]
    pub hero_watch_seconds: u32,

    /// Watch duration reported by card and modal play buttons
    #[serde(default = "default_play_watch_seconds")]
    pub play_watch_seconds: u32,

    /// Per-request timeout for backend calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_login_url() -> String {
    "/login".to_string()
}

fn default_reload_delay_ms() -> u64 {
    500
}

fn default_hero_watch_seconds() -> u32 {
    300
}

fn default_play_watch_seconds() -> u32 {
    600
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            login_url: default_login_url(),
            session_path: None,
            reload_delay_ms: default_reload_delay_ms(),
            hero_watch_seconds: default_hero_watch_seconds(),
            play_watch_seconds: default_play_watch_seconds(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Runtime knobs consumed by the dashboard services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub reload_delay: Duration,
    pub hero_watch_time: u32,
    pub play_watch_time: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn settings(&self) -> Settings {
        Settings {
            reload_delay: Duration::from_millis(self.reload_delay_ms),
            hero_watch_time: self.hero_watch_seconds,
            play_watch_time: self.play_watch_seconds,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolves the session file, falling back to the platform data directory
    pub fn session_file(&self) -> PathBuf {
        if let Some(path) = &self.session_path {
            return path.clone();
        }

        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(SESSION_FILE)
    }
}
