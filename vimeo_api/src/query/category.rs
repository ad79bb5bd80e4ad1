use serde::Serialize;

use super::{common::ListOptions, Query};

/// Options for listing subscribed categories. Only paging and sorting apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListCategoryOptions {
    #[serde(flatten)]
    pub list: ListOptions,
}

impl Query for ListCategoryOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

/// Options for a user's activity feed. Only paging and sorting apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListFeedOptions {
    #[serde(flatten)]
    pub list: ListOptions,
}

impl Query for ListFeedOptions {
    fn list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}
