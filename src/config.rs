//! Codec configuration
//!
//! Decoding is deliberately free of validation (the records were checked when the toolchain
//! wrote them), so the only behavior left to configure is how version strings are parsed.

use crate::descriptor::VersionCache;

/// Configuration for decoding module attributes
///
/// # Examples
///
/// ```rust
/// use modscope::{CodecConfig, VersionCache};
///
/// // Shared process-wide cache (default)
/// let shared = CodecConfig::default();
///
/// // Parse every version string anew
/// let uncached = CodecConfig::uncached();
/// assert!(uncached.version_cache.is_none());
///
/// // Private cache, e.g. one per worker
/// let private = CodecConfig::with_cache(VersionCache::new());
/// assert!(private.version_cache.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Cache consulted when parsing version strings; `None` parses every string anew.
    /// The decoded descriptors are the same either way.
    pub version_cache: Option<VersionCache>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            version_cache: Some(VersionCache::shared()),
        }
    }
}

impl CodecConfig {
    /// Creates a configuration that parses every version string without caching
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            version_cache: None,
        }
    }

    /// Creates a configuration that parses version strings through `cache`
    #[must_use]
    pub fn with_cache(cache: VersionCache) -> Self {
        Self {
            version_cache: Some(cache),
        }
    }
}
