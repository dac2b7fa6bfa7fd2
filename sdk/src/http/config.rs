use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub api_url: String,
    pub retries: u32,
    /// Where the refresh token and cached identity are persisted. With no
    /// path the session lives in memory only and dies with the process.
    pub session_file: Option<PathBuf>,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: "http://127.0.0.1:8000".to_string(),
            retries: 3,
            session_file: None,
        }
    }
}
