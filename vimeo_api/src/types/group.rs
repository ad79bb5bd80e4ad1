use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub link: String,
    pub created_time: Option<DateTime<Utc>>,
}
