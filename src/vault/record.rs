//! Credential records and the inputs that create or change them.
//!
//! The serde shape of `CredentialRecord` is the boundary format a UI or
//! API layer binds to:
//!
//! ```text
//! { id, title, username, password, url,
//!   strength: "weak"|"medium"|"strong", lastUpdated: "YYYY-MM-DD" }
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder stored when a record has no URL.
pub const NO_URL: &str = "#";

/// Derived strength category of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One saved credential.
///
/// `strength` and `last_updated` are derived by the store; callers never
/// set them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub id: String,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub strength: Strength,
    pub last_updated: NaiveDate,
}

/// Fields supplied by the caller when adding a record.
#[derive(Debug, Clone, Default)]
pub struct NewCredential {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: Option<String>,
}

impl NewCredential {
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A partial update.  `None` leaves the stored field alone.
#[derive(Debug, Clone, Default)]
pub struct CredentialPatch {
    pub title: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
}

impl CredentialPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.url.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Map an absent or empty URL to the `#` placeholder.
pub fn normalize_url(url: Option<&str>) -> String {
    match url {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => NO_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CredentialRecord {
        CredentialRecord {
            id: "1".into(),
            title: "Gmail".into(),
            username: "user@gmail.com".into(),
            password: "P@ssw0rd123".into(),
            url: "gmail.com".into(),
            strength: Strength::Strong,
            last_updated: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
        }
    }

    #[test]
    fn serializes_to_boundary_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","title":"Gmail","username":"user@gmail.com","password":"P@ssw0rd123","url":"gmail.com","strength":"strong","lastUpdated":"2023-10-15"}"#
        );
    }

    #[test]
    fn rejects_unknown_strength() {
        let json = r##"{"id":"1","title":"t","username":"u","password":"p","url":"#","strength":"excellent","lastUpdated":"2023-10-15"}"##;
        assert!(serde_json::from_str::<CredentialRecord>(json).is_err());
    }

    #[test]
    fn empty_url_becomes_placeholder() {
        assert_eq!(normalize_url(None), "#");
        assert_eq!(normalize_url(Some("")), "#");
        assert_eq!(normalize_url(Some("example.com")), "example.com");
    }

    #[test]
    fn patch_builder_tracks_fields() {
        assert!(CredentialPatch::default().is_empty());
        let patch = CredentialPatch::default().title("New");
        assert!(!patch.is_empty());
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.password.is_none());
    }
}
