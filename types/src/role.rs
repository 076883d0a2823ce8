use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Contractor,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Contractor => "contractor",
            Role::Admin => "admin",
        }
    }

    /// Role picked on the registration form. Admin accounts are never
    /// self-service, so anything but `contractor` falls back to client.
    pub fn from_signup_query(query: Option<&str>) -> Self {
        match query {
            Some("contractor") => Role::Contractor,
            _ => Role::Client,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "contractor" => Ok(Role::Contractor),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The role as claimed by a token.
///
/// Tokens are minted by the backend, so a role string we do not know about
/// still decodes; it is kept verbatim in [`RoleClaim::Unknown`], as is the
/// JSON text of a role that is not a string at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    Known(Role),
    Unknown(String),
}

impl RoleClaim {
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.as_str(),
            RoleClaim::Unknown(raw) => raw,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}

impl From<String> for RoleClaim {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(role) => RoleClaim::Known(role),
            Err(UnknownRole(raw)) => RoleClaim::Unknown(raw),
        }
    }
}

impl Serialize for RoleClaim {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoleClaim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything that is not a string still decodes, so the claim can reach
        // the unknown-role screen instead of failing the whole payload.
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => RoleClaim::from(raw),
            other => RoleClaim::Unknown(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_role_strings_parse() {
        assert_eq!("client".parse::<Role>(), Ok(Role::Client));
        assert_eq!("contractor".parse::<Role>(), Ok(Role::Contractor));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn role_parsing_is_case_sensitive() {
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(UnknownRole("Admin".to_string()))
        );
    }

    #[test]
    fn unknown_claim_keeps_raw_value() {
        let claim: RoleClaim = serde_json::from_str(r#""superuser""#).unwrap();
        assert_eq!(claim, RoleClaim::Unknown("superuser".to_string()));
        assert_eq!(claim.role(), None);
        assert_eq!(serde_json::to_string(&claim).unwrap(), r#""superuser""#);
    }

    #[test]
    fn non_string_claims_are_unknown() {
        let number: RoleClaim = serde_json::from_str("5").unwrap();
        assert_eq!(number, RoleClaim::Unknown("5".to_string()));

        let null: RoleClaim = serde_json::from_str("null").unwrap();
        assert_eq!(null, RoleClaim::Unknown("null".to_string()));

        let list: RoleClaim = serde_json::from_str(r#"["admin"]"#).unwrap();
        assert_eq!(list, RoleClaim::Unknown(r#"["admin"]"#.to_string()));
        assert_eq!(list.role(), None);
    }

    #[test]
    fn signup_query_never_grants_admin() {
        assert_eq!(Role::from_signup_query(Some("contractor")), Role::Contractor);
        assert_eq!(Role::from_signup_query(Some("client")), Role::Client);
        assert_eq!(Role::from_signup_query(Some("admin")), Role::Client);
        assert_eq!(Role::from_signup_query(None), Role::Client);
    }
}
