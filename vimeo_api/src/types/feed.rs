use serde::{Deserialize, Serialize};

use super::Video;

/// One activity feed item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub uri: String,
    pub clip: Option<Video>,
}
