use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub max_results: u32,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    // When false the query is embedded into the request URL as typed
    pub escape_query: bool,
    pub storage_path: String,
}

impl AppConfig {
    /// Config pointing at `api_base_url` with every other setting left
    /// at its default. Used by tests to aim the client at a mock server.
    pub fn with_api_base_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            escape_query: false,
            storage_path: String::from("./"),
        }
    }

    pub fn state_file(&self) -> String {
        format!("{}/booklist_state.json", self.storage_path.trim_end_matches('/'))
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url =
            env::var("BOOKLIST_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let max_results = env_parse("BOOKLIST_MAX_RESULTS", DEFAULT_MAX_RESULTS);
        let connect_timeout = Duration::from_secs(env_parse(
            "BOOKLIST_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        ));
        let read_timeout = Duration::from_secs(env_parse(
            "BOOKLIST_READ_TIMEOUT_SECS",
            DEFAULT_READ_TIMEOUT_SECS,
        ));
        let escape_query = env_flag("BOOKLIST_ESCAPE_QUERY");
        let storage_path = env::var("BOOKLIST_STORAGE_PATH").unwrap_or("./".to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            max_results,
            connect_timeout,
            read_timeout,
            escape_query,
            storage_path,
        }
    }
}
