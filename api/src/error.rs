use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API url '{url}'")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to the auth API failed")]
    Http(#[from] reqwest::Error),
}
