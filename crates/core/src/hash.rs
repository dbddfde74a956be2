use std::fmt;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Marker that introduces an explicit hash inside a message.
pub const FILE_HASH_MARKER: &str = "file_hash:";

/// Hash used when a marker is present but nothing usable follows it.
pub const PLACEHOLDER_HASH: &str = "demo_file_123";

/// Number of hex characters kept from a synthesized content digest.
pub const DIGEST_HASH_LEN: usize = 16;

/// Short token standing in for a media file.
///
/// It is never checked against real content; it only seeds the mock analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileHash(String);

impl FileHash {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive the hash for a message routed to analysis.
    ///
    /// When the message carries [`FILE_HASH_MARKER`] the token after it is
    /// used, falling back to [`PLACEHOLDER_HASH`]. Otherwise the hash is
    /// synthesized from the message text with [`FileHash::digest`].
    pub fn from_message(text: &str) -> Self {
        if text.contains(FILE_HASH_MARKER) {
            Self::extract(text).unwrap_or_else(|| {
                warn!("no token after file hash marker, using placeholder");
                Self::placeholder()
            })
        } else {
            Self::digest(text)
        }
    }

    /// Take the first whitespace-delimited token between the first marker
    /// and the next one (or the end of the text).
    pub fn extract(text: &str) -> Option<Self> {
        text.split(FILE_HASH_MARKER)
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .map(Self::new)
    }

    /// First [`DIGEST_HASH_LEN`] lowercase hex characters of the MD5 of `text`.
    pub fn digest(text: &str) -> Self {
        let mut hex = hex::encode(Md5::digest(text.as_bytes()));
        hex.truncate(DIGEST_HASH_LEN);
        Self(hex)
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_HASH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_after_marker() {
        let hash = FileHash::from_message("file_hash: abc12345 please check");
        assert_eq!(hash.as_str(), "abc12345");
    }

    #[test]
    fn extracts_token_without_space_after_marker() {
        let hash = FileHash::from_message("analyze file_hash:deadbeef");
        assert_eq!(hash.as_str(), "deadbeef");
    }

    #[test]
    fn token_stops_at_second_marker() {
        let hash = FileHash::from_message("file_hash:abcfile_hash:def");
        assert_eq!(hash.as_str(), "abc");
    }

    #[test]
    fn empty_marker_falls_back_to_placeholder() {
        assert_eq!(FileHash::from_message("file_hash:"), FileHash::placeholder());
        assert_eq!(
            FileHash::from_message("analyze file_hash:    "),
            FileHash::placeholder()
        );
    }

    #[test]
    fn marker_is_matched_case_sensitively() {
        let hash = FileHash::from_message("FILE_HASH: abc12345");
        assert_eq!(hash, FileHash::digest("FILE_HASH: abc12345"));
    }

    #[test]
    fn digest_is_truncated_md5_hex() {
        let hash = FileHash::from_message("analyze this");
        assert_eq!(hash.as_str(), "a35d3d052e3febc8");
        assert_eq!(hash.as_str().len(), DIGEST_HASH_LEN);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&FileHash::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
