//! Authenticated user identity.
//!
//! A [`User`] is created from a successful sign-in response and lives inside
//! the session slice for as long as the session is authenticated. Each account
//! carries exactly one [`Role`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Role granted to an account.
///
/// Serialized in lower case. Deserialization also accepts the granted-authority
/// form (`ROLE_STAFF`) the backend puts in its sign-in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Staff,
    Teacher,
    Chief,
    Student,
}

const ROLE_NAMES: &[&str] = &["administrator", "staff", "teacher", "chief", "student"];

impl Role {
    /// Parses a granted-authority string such as `ROLE_STAFF`.
    ///
    /// Returns `None` for unknown authorities.
    ///
    /// ```
    /// use staff_portal::domain::Role;
    ///
    /// assert_eq!(Role::from_authority("ROLE_STAFF"), Some(Role::Staff));
    /// assert_eq!(Role::from_authority("ROLE_JANITOR"), None);
    /// ```
    #[must_use]
    pub fn from_authority(authority: &str) -> Option<Self> {
        match authority {
            "ROLE_ADMINISTRATOR" => Some(Self::Administrator),
            "ROLE_STAFF" => Some(Self::Staff),
            "ROLE_TEACHER" => Some(Self::Teacher),
            "ROLE_CHIEF" => Some(Self::Chief),
            "ROLE_STUDENT" => Some(Self::Student),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "administrator" => Some(Self::Administrator),
            "staff" => Some(Self::Staff),
            "teacher" => Some(Self::Teacher),
            "chief" => Some(Self::Chief),
            "student" => Some(Self::Student),
            _ => None,
        }
    }

    /// Returns `true` for roles allowed on the staff pages.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Staff | Self::Administrator)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_authority(&name)
            .or_else(|| Self::from_name(&name))
            .ok_or_else(|| de::Error::unknown_variant(&name, ROLE_NAMES))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Administrator => "Administrator",
            Self::Staff => "Staff",
            Self::Teacher => "Teacher",
            Self::Chief => "Chief",
            Self::Student => "Student",
        };
        f.write_str(label)
    }
}

/// Identity of the signed-in account.
///
/// Decodes the backend's sign-in response as is: a numeric or string `id`, the
/// role as a granted authority, the JWT under `accessToken` (or `token`) and
/// the birth date as `YYYY-MM-DD` or epoch milliseconds. Only `id` and `role`
/// are required; other fields default to empty and unknown ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "date_from_string_or_millis")]
    pub birth_date: Option<NaiveDate>,
    /// Bearer token issued at sign-in. Replaced on token refresh.
    #[serde(default, alias = "token")]
    pub access_token: Option<String>,
}

fn id_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn date_from_string_or_millis<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Date(NaiveDate),
        Millis(i64),
    }

    match Option::<RawDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDate::Date(date)) => Ok(Some(date)),
        Some(RawDate::Millis(millis)) => DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|at| Some(at.date_naive()))
            .ok_or_else(|| de::Error::custom(format!("birth date out of range: {millis}"))),
    }
}

impl User {
    /// Creates a user with just an identifier and a role.
    ///
    /// ```
    /// use staff_portal::domain::{Role, User};
    ///
    /// let user = User::new("u1", Role::Staff);
    /// assert_eq!(user.id, "u1");
    /// assert!(user.access_token.is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            birth_date: None,
            access_token: None,
        }
    }

    /// Sets the account holder's first and last name.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the login name.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Name shown in the navigation bar.
    ///
    /// Falls back to the username, then the id, when the account has no
    /// personal names.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.id.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accepts_authority_and_lowercase_forms() {
        let roles: Vec<Role> = serde_json::from_str(r#"["ROLE_STAFF", "teacher", "ROLE_CHIEF"]"#).unwrap();
        assert_eq!(roles, vec![Role::Staff, Role::Teacher, Role::Chief]);
        assert_eq!(serde_json::to_string(&Role::Administrator).unwrap(), r#""administrator""#);
        assert!(serde_json::from_str::<Role>(r#""ROLE_JANITOR""#).is_err());
    }

    #[test]
    fn display_name_prefers_personal_names() {
        let user = User::new("7", Role::Staff).with_username("jdoe");
        assert_eq!(user.display_name(), "jdoe");

        let user = user.with_name("Jane", "Doe");
        assert_eq!(user.display_name(), "Jane Doe");

        assert_eq!(User::new("7", Role::Staff).display_name(), "7");
    }

    #[test]
    fn deserializes_sign_in_response() {
        let json = r#"{
            "accessToken": "eyJhbGciOiJIUzUxMiJ9.e30.sig",
            "tokenType": "Bearer",
            "id": 42,
            "username": "mpop",
            "email": "mpop@school.ro",
            "role": "ROLE_STAFF",
            "firstName": "Maria",
            "lastName": "Pop",
            "birthDate": 639878400000
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.email, "mpop@school.ro");
        assert_eq!(user.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(user.access_token.as_deref(), Some("eyJhbGciOiJIUzUxMiJ9.e30.sig"));
        assert_eq!(user.display_name(), "Maria Pop");
    }

    #[test]
    fn optional_fields_may_be_null_or_missing() {
        let user: User =
            serde_json::from_str(r#"{"id": "u1", "role": "student", "birthDate": null, "token": "t"}"#).unwrap();
        assert_eq!(user.birth_date, None);
        assert_eq!(user.access_token.as_deref(), Some("t"));
        assert!(user.username.is_empty());
    }
}
