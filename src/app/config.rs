use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://developers.decidir.com/api/v2";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub private_api_key: String,
    pub timeout_ms: u64,
}

impl Config {
    pub fn new(api_url: impl Into<String>, private_api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            private_api_key: private_api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn from_env() -> Self {
        Self {
            api_url: env::var("DECIDIR_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            private_api_key: env::var("DECIDIR_PRIVATE_API_KEY")
                .unwrap_or_default(),
            timeout_ms: env::var("DECIDIR_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolves `path` under `api_url`, keeping any path prefix the base has.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut base = self.api_url.trim_end_matches('/').to_string();
        base.push('/');
        Url::parse(&base)?.join(path.trim_start_matches('/'))
    }
}
