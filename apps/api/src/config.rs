use anyhow::{Context, Result};

const DEFAULT_JOB_SEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_search_api_key: String,
    pub job_search_api_host: String,
    pub job_search_base_url: String,
    pub job_search_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let job_search_api_host = std::env::var("JOB_SEARCH_API_HOST")
            .unwrap_or_else(|_| DEFAULT_JOB_SEARCH_HOST.to_string());
        let job_search_base_url = std::env::var("JOB_SEARCH_BASE_URL")
            .unwrap_or_else(|_| format!("https://{job_search_api_host}"));

        Ok(Config {
            job_search_api_key: require_env("JOB_SEARCH_API_KEY")?,
            job_search_api_host,
            job_search_base_url: job_search_base_url.trim_end_matches('/').to_string(),
            job_search_timeout_secs: parse_env("JOB_SEARCH_TIMEOUT_SECS", 15)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            job_search_api_key: "test-key".to_string(),
            job_search_api_host: DEFAULT_JOB_SEARCH_HOST.to_string(),
            job_search_base_url: "http://127.0.0.1:9".to_string(),
            job_search_timeout_secs: 1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
