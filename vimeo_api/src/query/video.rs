use serde::Serialize;

use super::{common::ListOptions, Query};

/// Options for video listings such as a user's appearances.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListVideoOptions {
    pub query: Option<String>,
    pub filter: Option<String>,
    /// Restrict to videos that may be embedded. `false` is not sent.
    pub filter_embeddable: bool,
    #[serde(flatten)]
    pub list: ListOptions,
}

impl Query for ListVideoOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl ListVideoOptions {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn with_filter_embeddable(mut self, embeddable: bool) -> Self {
        self.filter_embeddable = embeddable;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ListVideoOptions, Query, SortDirection};

    #[test]
    fn test_video_options() {
        insta::assert_yaml_snapshot!(ListVideoOptions::default()
            .with_query("drone")
            .with_filter("embeddable")
            .with_filter_embeddable(true)
            .with_sort("date")
            .with_direction(SortDirection::Asc)
            .add_to_path("me/appearances")
            .unwrap(), @"me/appearances?query=drone&filter=embeddable&filter_embeddable=true&sort=date&direction=asc");
    }
}
