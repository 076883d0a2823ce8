use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;
use types::Role;

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
    pub role: Role,
}

mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(secret.expose_secret())
    }
}

/// What the auth API said about a login or registration attempt.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Authenticated(SecretString),
    /// The API answered but refused. `detail` is the server's explanation
    /// when it sent one.
    Rejected { detail: Option<String> },
    /// No usable answer: the request never completed or the body was not JSON.
    Network,
}

impl AuthOutcome {
    pub fn from_body(success: bool, body: &str) -> Self {
        let Ok(json) = serde_json::from_str::<Value>(body) else {
            return AuthOutcome::Network;
        };

        if success {
            return match json.get("access_token").and_then(Value::as_str) {
                Some(token) => AuthOutcome::Authenticated(token.to_string().into()),
                None => AuthOutcome::Rejected { detail: None },
            };
        }

        AuthOutcome::Rejected {
            detail: detail_message(&json),
        }
    }
}

/// `detail` is a plain string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
fn detail_message(json: &Value) -> Option<String> {
    match json.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(issues) => issues
            .iter()
            .find_map(|issue| issue.get("msg").and_then(Value::as_str))
            .map(String::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    #[test]
    fn success_with_token_is_authenticated() {
        let outcome = AuthOutcome::from_body(
            true,
            r#"{"access_token":"abc","token_type":"bearer","role":"client"}"#,
        );

        match outcome {
            AuthOutcome::Authenticated(token) => assert_eq!(token.expose_secret(), "abc"),
            other => panic!("expected authenticated, got {other:?}"),
        }
    }

    #[test]
    fn success_without_token_is_rejected() {
        assert!(matches!(
            AuthOutcome::from_body(true, r#"{"id":"1","email":"a@b.c"}"#),
            AuthOutcome::Rejected { detail: None }
        ));
    }

    #[test]
    fn failure_carries_detail() {
        match AuthOutcome::from_body(false, r#"{"detail":"Invalid credentials"}"#) {
            AuthOutcome::Rejected { detail } => {
                assert_eq!(detail.as_deref(), Some("Invalid credentials"))
            }
            other => panic!("expected rejected, got {other:?}"),
        }
    }

    #[test]
    fn validation_failure_uses_first_message() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","password"],"msg":"field required","type":"missing"}
        ]}"#;

        match AuthOutcome::from_body(false, body) {
            AuthOutcome::Rejected { detail } => {
                assert_eq!(detail.as_deref(), Some("value is not a valid email address"))
            }
            other => panic!("expected rejected, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_detail_has_none() {
        for body in [r#"{}"#, r#"{"detail":""}"#, r#"{"detail":42}"#, r#""oops""#] {
            assert!(
                matches!(
                    AuthOutcome::from_body(false, body),
                    AuthOutcome::Rejected { detail: None }
                ),
                "body {body}"
            );
        }
    }

    #[test]
    fn non_json_body_is_network_failure() {
        assert!(matches!(
            AuthOutcome::from_body(false, "<html>502 Bad Gateway</html>"),
            AuthOutcome::Network
        ));
        assert!(matches!(
            AuthOutcome::from_body(true, ""),
            AuthOutcome::Network
        ));
    }

    #[test]
    fn register_body_matches_api_contract() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string().into(),
            role: Role::Contractor,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter22",
                "role": "contractor",
            })
        );
        assert!(!format!("{request:?}").contains("hunter22"));
    }
}
