use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pictures;

/// A video, as embedded in appearances and feed items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub link: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    pub created_time: Option<DateTime<Utc>>,
    pub pictures: Option<Pictures>,
}
