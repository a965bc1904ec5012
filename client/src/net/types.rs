//! Wire DTOs for the rental REST API.
//!
//! DESIGN
//! ======
//! Optional fields default to `None` so partially populated payloads from the
//! API (or older deployments) still decode. Item identifiers arrive either as
//! strings or integers and are normalized to `String`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated user identity returned by `/users/me` and auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_owner: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name shown in the navbar: full name when set, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }

    /// Avatar letter: first character of the full name, `U` when there is none.
    pub fn initial(&self) -> char {
        self.full_name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .unwrap_or('U')
    }
}

/// A rentable equipment listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_day: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_stock: Option<i64>,
    #[serde(default)]
    pub available_stock: Option<i64>,
    /// Stock remaining for the requested date window, when the API computed it.
    #[serde(default)]
    pub real_available_stock: Option<i64>,
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Login/signup response. Any field may be missing; the rental API issues
/// the credential as `access_token`, and some deployments send `token` too.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// The issued credential: `token`, else `access_token`. Blank values
    /// count as missing.
    pub fn credential(&self) -> Option<&str> {
        let non_blank = |t: &&str| !t.is_empty();
        self.token
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.access_token.as_deref().filter(non_blank))
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
