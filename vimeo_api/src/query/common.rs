//! Shared query infrastructure: the [`Query`] trait, [`ListOptions`] fields,
//! [`SortDirection`], and the [`add_options`] encoder.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::Error;

/// Trait implemented by all list option structs. Provides the shared builder
/// methods for pagination and sorting, and query-string serialization.
pub trait Query: Serialize {
    /// Returns a mutable reference to the pagination/sort fields.
    fn list_options(&mut self) -> &mut ListOptions;

    /// Appends this query's populated fields to `path`.
    fn add_to_path(&self, path: &str) -> Result<String, Error>
    where
        Self: Sized,
    {
        add_options(path, Some(self))
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.list_options().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.list_options().per_page = Some(per_page);
        self
    }

    /// Sets the sort field (e.g. `alphabetical`, `date`).
    fn with_sort(mut self, sort: &str) -> Self
    where
        Self: Sized,
    {
        self.list_options().sort = Some(sort.to_string());
        self
    }

    /// Sets the sort direction.
    fn with_direction(mut self, direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.list_options().direction = Some(direction);
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Pagination and sorting controls accepted by every list endpoint.
/// `None` fields are left out of the request and the API default applies.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListOptions {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Sort field.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: Option<SortDirection>,
}

impl Query for ListOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        self
    }
}

/// Appends the populated fields of `options` to `path` as query parameters.
///
/// Fields serializing to `null`, `""`, `0` or `false` are omitted. Parameters
/// keep the declaration order of the options struct, with flattened
/// [`ListOptions`] fields placed where the struct flattens them.
pub fn add_options<Q>(path: &str, options: Option<&Q>) -> Result<String, Error>
where
    Q: Serialize + ?Sized,
{
    let options = match options {
        Some(options) => options,
        None => return Ok(path.to_string()),
    };

    let value = serde_json::to_value(options).map_err(|e| Error::Encoding {
        field: String::new(),
        reason: e.to_string(),
    })?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(path.to_string()),
        other => {
            return Err(Error::Encoding {
                field: String::new(),
                reason: format!("options must serialize to an object, got {}", kind(&other)),
            })
        }
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut populated = false;
    for (name, value) in fields.iter() {
        if let Some(text) = query_value(name, value)? {
            serializer.append_pair(name, &text);
            populated = true;
        }
    }

    if !populated {
        return Ok(path.to_string());
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", path, separator, serializer.finish()))
}

fn query_value(name: &str, value: &Value) -> Result<Option<String>, Error> {
    Ok(match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            return Err(Error::Encoding {
                field: name.to_string(),
                reason: format!("{} is not a scalar query value", kind(value)),
            })
        }
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn none_leaves_path_untouched() {
        assert_eq!(
            add_options::<ListOptions>("me/feed", None).unwrap(),
            "me/feed"
        );
        assert_eq!(
            add_options("me/feed", Some(&ListOptions::default())).unwrap(),
            "me/feed"
        );
    }

    #[test]
    fn pagination_fields_in_declaration_order() {
        let opts = ListOptions::default()
            .with_per_page(10)
            .with_page(2)
            .with_direction(SortDirection::Desc)
            .with_sort("date");
        assert_eq!(
            opts.add_to_path("me/feed").unwrap(),
            "me/feed?page=2&per_page=10&sort=date&direction=desc"
        );
    }

    #[test]
    fn zero_values_are_omitted() {
        let opts = ListOptions::default().with_page(0).with_sort("");
        assert_eq!(opts.add_to_path("users").unwrap(), "users");
    }

    #[test]
    fn existing_query_is_extended() {
        let opts = ListOptions::default().with_page(3);
        assert_eq!(opts.add_to_path("users?x=1").unwrap(), "users?x=1&page=3");
    }

    #[test]
    fn nested_values_are_rejected() {
        #[derive(Serialize)]
        struct Nested {
            page: u32,
            tags: Vec<String>,
        }
        let err = add_options(
            "users",
            Some(&Nested {
                page: 1,
                tags: vec!["a".to_string()],
            }),
        )
        .unwrap_err();
        match err {
            Error::Encoding { field, .. } => assert_eq!(field, "tags"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_options_are_rejected() {
        let err = add_options("users", Some(&vec![1, 2])).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn composite_map_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "x");
        assert!(matches!(
            add_options("users", Some(&map)),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn direction_parses() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
