//! Face values and the asset path convention.

use serde::{Deserialize, Serialize};

/// Symbolic identity of a card face (e.g. `"cat"`).
///
/// Two slots showing the same face value form a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceValue(String);

impl FaceValue {
    /// Create a face value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The face name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaceValue {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FaceValue {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a face value becomes an image path: `<base_dir>/<face>.<extension>`.
///
/// The default reproduces the stock layout, `../assets/images/<face>.jpg`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConvention {
    /// Directory holding the face images, without a trailing slash.
    pub base_dir: String,
    /// Image file extension, without the dot.
    pub extension: String,
}

impl Default for AssetConvention {
    fn default() -> Self {
        Self {
            base_dir: "../assets/images".to_string(),
            extension: "jpg".to_string(),
        }
    }
}

impl AssetConvention {
    /// Create a convention with a custom directory and extension.
    pub fn new(base_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            extension: extension.into(),
        }
    }

    /// Image path for a face.
    #[must_use]
    pub fn path_for(&self, face: &FaceValue) -> String {
        format!("{}/{}.{}", self.base_dir, face.as_str(), self.extension)
    }
}
