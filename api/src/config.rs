use url::Url;

use crate::Error;

/// Base URL of the auth API when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Name of the environment variable holding the API base URL. It is read at
/// build time, and additionally at run time on native targets.
pub const API_URL_VAR: &str = "SKILLSYNC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self, Error> {
        let trimmed = api_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| Error::InvalidApiUrl {
            url: api_url.to_string(),
            source,
        })?;

        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        if let Some(url) = runtime_api_url() {
            return Self::new(&url);
        }

        match option_env!("SKILLSYNC_API_URL") {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    std::env::var(API_URL_VAR).ok()
}

// No process environment in the browser.
#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    None
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
