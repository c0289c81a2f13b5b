//! Parsing of opaque download URLs into bucket-relative object paths.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

/// Path segment marking the start of the object path in a download URL.
const OBJECT_PATH_MARKER: &str = "/o/";

/// A bucket-relative object path resolved from a download URL.
///
/// Never persisted; recomputed on demand. Parsing is a pure function of the
/// URL string and never fails loudly: anything unrecognizable yields `None`,
/// which every caller must treat as "assume valid, skip destructive action".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageReference(String);

impl StorageReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Parse a download URL into its object path.
    ///
    /// Returns `None` when the string is not a URL, the path carries no
    /// object-path marker, or the encoded path does not decode cleanly.
    pub fn from_download_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let path = parsed.path();
        let (_, encoded) = path.split_once(OBJECT_PATH_MARKER)?;
        if encoded.is_empty() {
            return None;
        }
        let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
        Some(Self(decoded.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append a cache-bypassing freshness token to a download URL.
///
/// Used after a transient render failure to force the next load to skip any
/// stale cached response.
pub fn with_freshness_token(url: &str, token: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}cb={token}")
}
