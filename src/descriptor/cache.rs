//! Single-slot cache of the most recently parsed [`Version`].
//!
//! Descriptors produced by one toolchain run almost always carry the same version string, so
//! remembering the last parsed version lets consecutive builders share one [`Version`] instead of
//! parsing it again. The slot is replaced atomically; a concurrent reader sees either the old or
//! the new entry, and an entry is reused only when its source string matches exactly. A cold,
//! warm or missing cache therefore never changes what a builder produces.

use std::{
    fmt,
    sync::{Arc, OnceLock},
};

use arc_swap::ArcSwapOption;

use crate::{descriptor::Version, Result};

/// Shared handle to a single-slot version cache.
///
/// Cloning the handle shares the slot. [`VersionCache::shared`] returns the process-wide
/// instance used by [`crate::ModuleBuilder::new`]; [`VersionCache::new`] creates an isolated one.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use modscope::VersionCache;
///
/// let cache = VersionCache::new();
/// let first = cache.parse("17.0.2")?;
/// let second = cache.parse("17.0.2")?;
///
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok::<(), modscope::Error>(())
/// ```
#[derive(Clone)]
pub struct VersionCache {
    slot: Arc<ArcSwapOption<Version>>,
}

impl VersionCache {
    /// Creates an empty, isolated cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Returns a handle to the process-wide cache.
    #[must_use]
    pub fn shared() -> Self {
        static SHARED: OnceLock<VersionCache> = OnceLock::new();
        SHARED.get_or_init(VersionCache::new).clone()
    }

    /// Parses `version`, reusing the cached instance when its source string is identical.
    ///
    /// On a miss the freshly parsed version replaces the cached one.
    ///
    /// # Errors
    /// Returns [`crate::Error::VersionParse`] if `version` is not a valid version string.
    pub fn parse(&self, version: &str) -> Result<Arc<Version>> {
        if let Some(cached) = self.slot.load_full() {
            if cached.as_str() == version {
                tracing::trace!(version, "version cache hit");
                return Ok(cached);
            }
        }

        tracing::trace!(version, "version cache miss");
        let parsed = Arc::new(Version::parse(version)?);
        self.slot.store(Some(Arc::clone(&parsed)));
        Ok(parsed)
    }

    /// The version currently held by the cache, if any.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<Version>> {
        self.slot.load_full()
    }

    /// Empties the cache.
    pub fn clear(&self) {
        self.slot.store(None);
    }
}

impl Default for VersionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VersionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionCache")
            .field("cached", &self.cached().map(|version| version.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::Error;

    #[test]
    fn miss_replaces_slot() -> Result<()> {
        let cache = VersionCache::new();
        assert!(cache.cached().is_none());

        let first = cache.parse("1.0")?;
        let other = cache.parse("2.0")?;
        let again = cache.parse("1.0")?;

        assert!(!Arc::ptr_eq(&first, &again));
        assert_eq!(first, again);
        assert_eq!(cache.cached().as_deref(), Some(&*again));
        assert_ne!(*other, *again);

        Ok(())
    }

    #[test]
    fn match_is_by_string_not_value() -> Result<()> {
        let cache = VersionCache::new();

        let short = cache.parse("1")?;
        let long = cache.parse("1.0")?;

        // Equal by value, yet each keeps its own canonical string
        assert_eq!(short, long);
        assert!(!Arc::ptr_eq(&short, &long));
        assert_eq!(long.as_str(), "1.0");

        Ok(())
    }

    #[test]
    fn parse_error_keeps_slot() -> Result<()> {
        let cache = VersionCache::new();
        let cached = cache.parse("9")?;

        assert!(matches!(cache.parse("x"), Err(Error::VersionParse { .. })));
        assert!(Arc::ptr_eq(&cache.cached().unwrap(), &cached));

        Ok(())
    }

    #[test]
    fn clones_share_slot() -> Result<()> {
        let cache = VersionCache::new();
        let clone = cache.clone();

        let parsed = cache.parse("11")?;
        assert!(Arc::ptr_eq(&clone.parse("11")?, &parsed));

        clone.clear();
        assert!(cache.cached().is_none());

        Ok(())
    }

    #[test]
    fn concurrent_parses_agree() {
        let cache = VersionCache::new();
        let inputs = ["1.0", "2.0-ea", "1.0", "3+b7"];

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                thread::spawn(move || {
                    (0..200)
                        .map(|j| {
                            let input = inputs[(i + j) % inputs.len()];
                            let parsed = cache.parse(input).unwrap();
                            (input, parsed.as_str().to_string())
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (input, parsed) in handle.join().unwrap() {
                assert_eq!(input, parsed);
            }
        }
    }
}
