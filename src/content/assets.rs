// SPDX-License-Identifier: MPL-2.0
//! Files embedded into the binary from `assets/`.

use rust_embed::RustEmbed;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// Path of the site fixture inside the embedded folder.
pub const SITE_FIXTURE: &str = "content/site.toml";

/// Image shown when a referenced asset is not embedded.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";

/// Reference to an embedded file, relative to `assets/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Whether the referenced file is embedded.
    #[must_use]
    pub fn exists(&self) -> bool {
        Asset::get(&self.0).is_some()
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw bytes of an embedded file.
#[must_use]
pub fn read(path: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(path).map(|file| file.data)
}

/// Bytes of an image, or of the placeholder when `image` is not embedded.
#[must_use]
pub fn image_bytes(image: &AssetRef) -> Cow<'static, [u8]> {
    read(image.path())
        .or_else(|| read(PLACEHOLDER_IMAGE))
        .unwrap_or(Cow::Borrowed(&[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_fixture_are_embedded() {
        assert!(read(PLACEHOLDER_IMAGE).is_some());
        assert!(read(SITE_FIXTURE).is_some());
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let missing = AssetRef::new("images/does-not-exist.svg");
        assert!(!missing.exists());
        let placeholder = read(PLACEHOLDER_IMAGE).expect("placeholder embedded");
        assert_eq!(image_bytes(&missing), placeholder);
    }
}
