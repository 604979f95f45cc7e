//! JWT claim structure for bearer tokens.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Role value granting write access to the catalog.
pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by a bearer token.
///
/// Only `exp` is required. A `role` that is absent or not a string is kept
/// as `None`, so such a token still verifies but holds no role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, usually the operator or user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Role name, compared verbatim
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}

impl Claims {
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_minimal() {
        let json = r#"{"role":"admin","exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert_eq!(claims.exp, 9999999999);
        assert!(claims.sub.is_none());
        assert!(claims.iat.is_none());
    }

    #[test]
    fn test_claims_without_string_role_have_no_role() {
        for json in [
            r#"{"sub":"someone","exp":9999999999}"#,
            r#"{"role":1,"exp":9999999999}"#,
            r#"{"role":null,"exp":9999999999}"#,
            r#"{"role":["admin"],"exp":9999999999}"#,
        ] {
            let claims: Claims = serde_json::from_str(json).unwrap();
            assert!(claims.role.is_none(), "{json}");
            assert!(!claims.has_role(ADMIN_ROLE), "{json}");
        }
    }

    #[test]
    fn test_claims_without_exp_rejected() {
        let json = r#"{"role":"admin"}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_claims_serialize_skips_absent_fields() {
        let claims = Claims {
            sub: None,
            role: Some("user".to_string()),
            exp: 1234567890,
            iat: None,
        };
        let serialized = serde_json::to_string(&claims).unwrap();

        assert_eq!(serialized, r#"{"role":"user","exp":1234567890}"#);
    }

    #[test]
    fn test_has_role_is_exact() {
        let mut claims = Claims {
            sub: None,
            role: Some("admin".to_string()),
            exp: 1234567890,
            iat: None,
        };
        assert!(claims.has_role(ADMIN_ROLE));

        for role in ["Admin", "ADMIN", " admin", "administrator", ""] {
            claims.role = Some(role.to_string());
            assert!(!claims.has_role(ADMIN_ROLE), "{role:?} must not be admin");
        }
    }
}
