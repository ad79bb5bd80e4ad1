//! Resolution of `me/...` versus `users/{id}/...` resource paths.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Error;

/// Characters left as-is inside a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Placeholder substituted in explicit templates.
const ID_PLACEHOLDER: &str = "{id}";

/// Who a request is about: the authenticated caller or a specific entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Subject {
    /// The user owning the access token (`me`).
    #[default]
    Me,
    /// An entity addressed by its platform-assigned id.
    Id(String),
}

impl Subject {
    pub fn id(id: impl Into<String>) -> Self {
        Subject::Id(id.into())
    }

    /// `None` or an empty id selects the authenticated caller.
    pub fn from_optional(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Subject::Id(id.to_string()),
            _ => Subject::Me,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Me => write!(f, "me"),
            Subject::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Percent-encodes a single path segment.
///
/// `.` and `..` are rejected: URL resolution collapses them as dot segments
/// whether or not they are percent-encoded.
pub fn escape_segment(segment: &str) -> Result<String, Error> {
    if segment == "." || segment == ".." {
        return Err(Error::Encoding {
            field: "id".to_string(),
            reason: format!("`{}` is not a valid path segment", segment),
        });
    }
    Ok(utf8_percent_encode(segment, SEGMENT).to_string())
}

/// Picks `self_template` for [`Subject::Me`] (or an empty id), otherwise
/// `explicit_template` with `{id}` replaced by the escaped identifier.
pub fn resolve(
    subject: &Subject,
    self_template: &str,
    explicit_template: &str,
) -> Result<String, Error> {
    match subject {
        Subject::Id(id) if !id.is_empty() => {
            Ok(explicit_template.replace(ID_PLACEHOLDER, &escape_segment(id)?))
        }
        _ => Ok(self_template.to_string()),
    }
}
