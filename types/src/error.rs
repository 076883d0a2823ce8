use thiserror::Error;

/// Why a session token could not be decoded.
///
/// Callers that only care whether the token is usable can treat every variant
/// the same way; the distinction exists for logs.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayloadSegment,
    #[error("token payload is not valid base64")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a valid claims object")]
    Payload(#[from] serde_json::Error),
}
