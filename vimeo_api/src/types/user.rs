//! User-related types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::Pictures;

/// A web site listed on a user's profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSite {
    pub name: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// A Vimeo user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Canonical URI, e.g. `/users/42`.
    #[serde(default)]
    pub uri: String,

    #[serde(default)]
    pub name: String,

    /// Profile URL on vimeo.com.
    #[serde(default)]
    pub link: String,

    pub location: Option<String>,

    pub bio: Option<String>,

    pub created_time: Option<DateTime<Utc>>,

    /// Membership level (`basic`, `plus`, `pro`, ...).
    pub account: Option<String>,

    pub pictures: Option<Pictures>,

    #[serde(default)]
    pub websites: Vec<WebSite>,

    #[serde(default)]
    pub content_filter: Vec<String>,

    pub resource_key: Option<String>,
}

impl User {
    /// Trailing id segment of [`User::uri`].
    pub fn id(&self) -> Option<&str> {
        self.uri.rsplit('/').next().filter(|s| !s.is_empty())
    }
}

/// Tri-state value for PATCH bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the field untouched; not sent.
    #[default]
    Keep,
    /// Clear the field; sent as `null`.
    Clear,
    /// Replace the field with a new value.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets, `None` keeps.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Keep,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
        }
    }
}

/// Body of a user edit. Only fields not set to [`Patch::Keep`] are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub location: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub bio: Patch<String>,
}

impl UserRequest {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Patch::Set(name.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Patch::Set(location.to_string());
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = Patch::Set(bio.to_string());
        self
    }

    pub fn clear_location(mut self) -> Self {
        self.location = Patch::Clear;
        self
    }

    pub fn clear_bio(mut self) -> Self {
        self.bio = Patch::Clear;
        self
    }

    /// True when nothing would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_keep() && self.location.is_keep() && self.bio.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn untouched_fields_are_not_sent() {
        let req = UserRequest::default().with_name("Jane");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"name": "Jane"}));
        assert!(!req.is_empty());
        assert!(UserRequest::default().is_empty());
        assert_eq!(serde_json::to_value(UserRequest::default()).unwrap(), json!({}));
    }

    #[test]
    fn cleared_fields_are_sent_as_null() {
        let req = UserRequest::default().with_location("Paris").clear_bio();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"location": "Paris", "bio": null})
        );
    }

    #[test]
    fn explicit_empty_string_is_a_value() {
        let req = UserRequest::default().with_bio("");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"bio": ""}));
    }

    #[test]
    fn patch_from_option() {
        assert_eq!(Patch::from(Some(1)), Patch::Set(1));
        assert_eq!(Patch::<i32>::from(None), Patch::Keep);
    }

    #[test]
    fn user_id_from_uri() {
        let user = User {
            uri: "/users/42".to_string(),
            ..Default::default()
        };
        assert_eq!(user.id(), Some("42"));
        assert_eq!(User::default().id(), None);
    }
}
