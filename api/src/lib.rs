mod auth;
mod config;
mod error;

use secrecy::ExposeSecret;

pub use auth::{AuthOutcome, LoginRequest, RegisterRequest};
pub use config::{API_URL_VAR, Config, DEFAULT_API_URL};
pub use error::Error;

/// The two calls the auth forms make against the backend.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> AuthOutcome;
    async fn register(&self, request: &RegisterRequest) -> AuthOutcome;
}

#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: Config,
}

impl HttpAuthApi {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn exchange(&self, request: reqwest::RequestBuilder) -> Result<(bool, String), Error> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Auth API answered {}", status);
        }
        Ok((status.is_success(), body))
    }

    fn outcome(url: &str, result: Result<(bool, String), Error>) -> AuthOutcome {
        match result {
            Ok((success, body)) => AuthOutcome::from_body(success, &body),
            Err(e) => {
                tracing::warn!("Auth request to {} failed: {}", url, e);
                AuthOutcome::Network
            }
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> AuthOutcome {
        let url = self.config.endpoint("auth/login");
        let form = [
            ("username", request.email.as_str()),
            ("password", request.password.expose_secret()),
        ];

        let result = self.exchange(self.client.post(&url).form(&form)).await;
        Self::outcome(&url, result)
    }

    async fn register(&self, request: &RegisterRequest) -> AuthOutcome {
        let url = self.config.endpoint("auth/register");

        let result = self.exchange(self.client.post(&url).json(request)).await;
        Self::outcome(&url, result)
    }
}
