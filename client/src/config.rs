use botdo_shared::DEFAULT_API_URL;

/// Client configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base address, without a trailing slash
    pub api_url: String,
}

impl Config {
    pub fn new(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };

        Self {
            api_url: api_url.to_string(),
        }
    }

    /// `API_URL` from the environment (or `.env`), falling back to localhost
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&api_url)
    }
}
