use serde::{Deserialize, Serialize};

/// One rendition of a picture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PictureSize {
    pub width: u32,
    pub height: u32,
    pub link: String,
}

/// A set of picture renditions (avatar, thumbnail).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pictures {
    pub uri: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub sizes: Vec<PictureSize>,
}

impl Pictures {
    /// Widest available rendition.
    pub fn largest(&self) -> Option<&PictureSize> {
        self.sizes.iter().max_by_key(|s| s.width)
    }
}
