//! Decoding of the bearer token handed out by the auth API.
//!
//! The token is a compact JWT (`header.payload.signature`). Only the payload
//! is read here and the signature is NOT verified: anyone can craft a token
//! claiming any role. The claims only pick which view to render; every
//! privileged action must still be authorized by the backend.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{RoleClaim, TokenError};

/// Storage slot name the token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "token";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_NO_PAD: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, GeneralPurposeConfig::new().with_encode_padding(false));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// User id.
    pub sub: String,
    pub role: RoleClaim,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenPayload {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        i128::from(self.exp) * 1000 < i128::from(now.as_millisecond())
    }

    /// Build an unsigned token carrying these claims. The signature segment is
    /// empty, which is fine for a decoder that never checks it.
    pub fn to_unsigned_token(&self) -> Result<String, serde_json::Error> {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(self)?);
        Ok(format!("{header}.{payload}."))
    }
}

pub fn decode_token(token: &str) -> Result<TokenPayload, TokenError> {
    let segment = token
        .split('.')
        .nth(1)
        .ok_or(TokenError::MissingPayloadSegment)?;

    let engine = if segment.contains(['+', '/']) {
        &STANDARD_LENIENT
    } else {
        &URL_SAFE_LENIENT
    };
    let bytes = engine.decode(segment)?;

    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use pretty_assertions::assert_eq;

    fn payload(role: RoleClaim, exp: i64) -> TokenPayload {
        TokenPayload {
            sub: "64f1c0ffee".to_string(),
            role,
            exp,
        }
    }

    #[test]
    fn decodes_payload_segment() {
        let claims = payload(Role::Contractor.into(), 1_900_000_000);
        let token = claims.to_unsigned_token().unwrap();

        assert_eq!(decode_token(&token).unwrap(), claims);
    }

    #[test]
    fn decodes_real_backend_token() {
        // HS256 token as issued by the auth API, with an `iat` claim we ignore.
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                     eyJzdWIiOiI2NWEwIiwicm9sZSI6ImNsaWVudCIsImV4cCI6MTcwMDAwMDAwMCwiaWF0IjoxNjk5OTk2NDAwfQ.\
                     c2lnbmF0dXJl";
        let claims = decode_token(token).unwrap();

        assert_eq!(claims.sub, "65a0");
        assert_eq!(claims.role, RoleClaim::Known(Role::Client));
        assert_eq!(claims.exp, 1_700_000_000);
    }

    #[test]
    fn padded_and_standard_alphabet_payloads_decode() {
        use base64::prelude::*;

        let json = br#"{"sub":"a?b>","role":"admin","exp":5}"#;
        let padded = format!("h.{}.s", BASE64_URL_SAFE.encode(json));
        let standard = format!("h.{}.s", BASE64_STANDARD.encode(json));

        assert_eq!(decode_token(&padded).unwrap().role, RoleClaim::Known(Role::Admin));
        assert_eq!(decode_token(&standard).unwrap().sub, "a?b>");
    }

    #[test]
    fn token_without_dots_is_missing_segment() {
        assert!(matches!(
            decode_token("not-a-jwt"),
            Err(TokenError::MissingPayloadSegment)
        ));
        assert!(matches!(
            decode_token(""),
            Err(TokenError::MissingPayloadSegment)
        ));
    }

    #[test]
    fn garbage_payload_is_encoding_error() {
        assert!(matches!(
            decode_token("header.@@@.sig"),
            Err(TokenError::Encoding(_))
        ));
    }

    #[test]
    fn non_claims_payload_is_payload_error() {
        use base64::prelude::*;

        let cases: [&[u8]; 4] = [
            b"not json",
            br#"{"role":"client","exp":1}"#,
            br#"{"sub":"x","role":"client","exp":"soon"}"#,
            b"[1,2,3]",
        ];
        for json in cases {
            let token = format!("h.{}.s", BASE64_URL_SAFE_NO_PAD.encode(json));
            assert!(
                matches!(decode_token(&token), Err(TokenError::Payload(_))),
                "expected payload error for {:?}",
                String::from_utf8_lossy(json)
            );
        }
    }

    #[test]
    fn unknown_role_still_decodes() {
        let claims = payload(RoleClaim::Unknown("moderator".to_string()), 1);
        let token = claims.to_unsigned_token().unwrap();

        assert_eq!(
            decode_token(&token).unwrap().role,
            RoleClaim::Unknown("moderator".to_string())
        );
    }

    #[test]
    fn non_string_role_still_decodes() {
        use base64::prelude::*;

        let json = br#"{"sub":"1","role":5,"exp":4000000000}"#;
        let token = format!("h.{}.s", BASE64_URL_SAFE_NO_PAD.encode(json));

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.role, RoleClaim::Unknown("5".to_string()));
        assert_eq!(claims.exp, 4_000_000_000);
    }

    #[test]
    fn expiry_is_compared_in_milliseconds() {
        let claims = payload(Role::Client.into(), 1_700_000_000);

        let just_before = Timestamp::from_millisecond(1_700_000_000_000).unwrap();
        let just_after = Timestamp::from_millisecond(1_700_000_000_001).unwrap();

        assert!(!claims.is_expired_at(just_before));
        assert!(claims.is_expired_at(just_after));
    }

    #[test]
    fn extreme_expiry_values_do_not_overflow() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();

        assert!(!payload(Role::Client.into(), i64::MAX).is_expired_at(now));
        assert!(payload(Role::Client.into(), i64::MIN).is_expired_at(now));
    }
}
