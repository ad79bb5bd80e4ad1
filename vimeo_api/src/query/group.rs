use serde::Serialize;

use super::{common::ListOptions, Query};

/// Options for listing joined groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListGroupOptions {
    pub query: Option<String>,
    pub filter: Option<String>,
    #[serde(flatten)]
    pub list: ListOptions,
}

impl Query for ListGroupOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl ListGroupOptions {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }
}
