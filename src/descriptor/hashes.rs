use indexmap::IndexMap;

/// Hashes of the modules a module was linked against, all computed with one algorithm.
///
/// Entries keep their insertion order so that encoding is reproducible. Equality ignores that
/// order.
///
/// # Examples
///
/// ```rust
/// use modscope::ModuleHashes;
///
/// let hashes = ModuleHashes::new("SHA-256", [("java.sql", "3f9a"), ("java.xml", "77c1")]);
///
/// assert_eq!(hashes.algorithm(), "SHA-256");
/// assert_eq!(hashes.hash_for("java.xml"), Some("77c1"));
/// assert_eq!(hashes.names().collect::<Vec<_>>(), vec!["java.sql", "java.xml"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHashes {
    algorithm: String,
    hashes: IndexMap<String, String>,
}

impl ModuleHashes {
    /// Creates a hash table; a later entry for the same module replaces an earlier one.
    pub fn new<I, N, H>(algorithm: impl Into<String>, hashes: I) -> Self
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: Into<String>,
    {
        Self {
            algorithm: algorithm.into(),
            hashes: hashes
                .into_iter()
                .map(|(name, hash)| (name.into(), hash.into()))
                .collect(),
        }
    }

    /// Name of the hash algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Module names with a recorded hash, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hashes.keys().map(String::as_str)
    }

    /// The hash recorded for module `name`.
    #[must_use]
    pub fn hash_for(&self, name: &str) -> Option<&str> {
        self.hashes.get(name).map(String::as_str)
    }

    /// `(name, hash)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.hashes
            .iter()
            .map(|(name, hash)| (name.as_str(), hash.as_str()))
    }

    /// Number of recorded hashes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns `true` if no hash is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
