//! # Module Builder
//!
//! Incremental builder that reassembles a [`ModuleDescriptor`] from decoded attribute pieces.
//!
//! The builder is tuned for input the toolchain already validated when it produced the records:
//! it skips name validation and dependency checking, moves its collections into the descriptor
//! without copying, and deduplicates version strings through a [`VersionCache`].
//!
//! ## Rules
//!
//! - Collection setters (`requires`, `exports`, `opens`, `uses`, `packages`, `provides`) replace
//!   any previous value
//! - Scalar setters (`version`, `main_class`, `os_name`, `os_arch`, `os_version`) fail with
//!   [`crate::Error::AlreadySet`] when called a second time
//! - [`ModuleBuilder::build`] consumes the builder
//!
//! ## Usage
//!
//! ```rust
//! use modscope::{ModuleBuilder, Requires, RequiresModifiers};
//!
//! let descriptor = ModuleBuilder::new("com.example.app")
//!     .requires([Requires::new(RequiresModifiers::MANDATED, "java.base")])
//!     .version("2.1.0")?
//!     .main_class("com.example.app.Main")?
//!     .build();
//!
//! assert_eq!(descriptor.version().map(|v| v.as_str()), Some("2.1.0"));
//! # Ok::<(), modscope::Error>(())
//! ```

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use strum::Display;

use crate::{
    descriptor::{
        Exports, ModuleDescriptor, ModuleHashes, Opens, Provides, Requires, Version, VersionCache,
    },
    Error, Result,
};

/// Scalar builder fields that may be assigned only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ScalarField {
    /// [`ModuleBuilder::version`]
    #[strum(serialize = "module version")]
    Version,
    /// [`ModuleBuilder::main_class`]
    #[strum(serialize = "main class")]
    MainClass,
    /// [`ModuleBuilder::os_name`]
    #[strum(serialize = "OS name")]
    OsName,
    /// [`ModuleBuilder::os_arch`]
    #[strum(serialize = "OS arch")]
    OsArch,
    /// [`ModuleBuilder::os_version`]
    #[strum(serialize = "OS version")]
    OsVersion,
}

/// Builder for [`ModuleDescriptor`]s.
///
/// See the [module documentation](self) for the rules it enforces.
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    name: String,
    open: bool,
    automatic: bool,
    synthetic: bool,
    requires: IndexSet<Requires>,
    exports: IndexSet<Exports>,
    opens: IndexSet<Opens>,
    packages: IndexSet<String>,
    uses: IndexSet<String>,
    provides: IndexMap<String, Provides>,
    version: Option<Arc<Version>>,
    main_class: Option<String>,
    os_name: Option<String>,
    os_arch: Option<String>,
    os_version: Option<String>,
    algorithm: Option<String>,
    hashes: Option<IndexMap<String, String>>,
    cache: Option<VersionCache>,
}

impl ModuleBuilder {
    /// Creates a builder for module `name` that parses versions through the shared cache.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_cache(name, Some(VersionCache::shared()))
    }

    /// Creates a builder for module `name` that parses versions through `cache`, or parses every
    /// version anew when `cache` is `None`.
    pub fn with_cache(name: impl Into<String>, cache: Option<VersionCache>) -> Self {
        Self {
            name: name.into(),
            open: false,
            automatic: false,
            synthetic: false,
            requires: IndexSet::new(),
            exports: IndexSet::new(),
            opens: IndexSet::new(),
            packages: IndexSet::new(),
            uses: IndexSet::new(),
            provides: IndexMap::new(),
            version: None,
            main_class: None,
            os_name: None,
            os_arch: None,
            os_version: None,
            algorithm: None,
            hashes: None,
            cache,
        }
    }

    /// Marks the module as open: all of its packages are open for deep reflection.
    #[must_use]
    pub fn open(mut self, value: bool) -> Self {
        self.open = value;
        self
    }

    /// Marks the module as automatic. Never persisted in attributes.
    #[must_use]
    pub fn automatic(mut self, value: bool) -> Self {
        self.automatic = value;
        self
    }

    /// Marks the module as synthetic.
    #[must_use]
    pub fn synthetic(mut self, value: bool) -> Self {
        self.synthetic = value;
        self
    }

    /// Sets the module dependences.
    #[must_use]
    pub fn requires<I: IntoIterator<Item = Requires>>(mut self, requires: I) -> Self {
        self.requires = requires.into_iter().collect();
        self
    }

    /// Sets the exported packages.
    #[must_use]
    pub fn exports<I: IntoIterator<Item = Exports>>(mut self, exports: I) -> Self {
        self.exports = exports.into_iter().collect();
        self
    }

    /// Sets the opened packages.
    #[must_use]
    pub fn opens<I: IntoIterator<Item = Opens>>(mut self, opens: I) -> Self {
        self.opens = opens.into_iter().collect();
        self
    }

    /// Sets the packages of the module.
    #[must_use]
    pub fn packages<I, T>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the services the module uses.
    #[must_use]
    pub fn uses<I, T>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.uses = uses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the services the module provides.
    ///
    /// When two entries name the same service, the later one wins.
    #[must_use]
    pub fn provides<I: IntoIterator<Item = Provides>>(mut self, provides: I) -> Self {
        self.provides = provides
            .into_iter()
            .map(|provides| (provides.service().to_string(), provides))
            .collect();
        self
    }

    /// Parses and sets the module version.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if a version was set before, or
    /// [`crate::Error::VersionParse`] if `version` is not a valid version string.
    pub fn version(self, version: &str) -> Result<Self> {
        if self.version.is_some() {
            return Err(Error::AlreadySet(ScalarField::Version));
        }

        let parsed = match &self.cache {
            Some(cache) => cache.parse(version)?,
            None => Arc::new(Version::parse(version)?),
        };
        self.parsed_version(parsed)
    }

    /// Sets an already parsed module version.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if a version was set before.
    pub fn parsed_version(mut self, version: Arc<Version>) -> Result<Self> {
        if self.version.is_some() {
            return Err(Error::AlreadySet(ScalarField::Version));
        }

        self.version = Some(version);
        Ok(self)
    }

    /// Sets the main class.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if a main class was set before.
    pub fn main_class(mut self, main_class: impl Into<String>) -> Result<Self> {
        set_once(&mut self.main_class, main_class.into(), ScalarField::MainClass)?;
        Ok(self)
    }

    /// Sets the target operating system name.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if the OS name was set before.
    pub fn os_name(mut self, name: impl Into<String>) -> Result<Self> {
        set_once(&mut self.os_name, name.into(), ScalarField::OsName)?;
        Ok(self)
    }

    /// Sets the target operating system architecture.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if the OS architecture was set before.
    pub fn os_arch(mut self, arch: impl Into<String>) -> Result<Self> {
        set_once(&mut self.os_arch, arch.into(), ScalarField::OsArch)?;
        Ok(self)
    }

    /// Sets the target operating system version.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if the OS version was set before.
    pub fn os_version(mut self, version: impl Into<String>) -> Result<Self> {
        set_once(&mut self.os_version, version.into(), ScalarField::OsVersion)?;
        Ok(self)
    }

    /// Sets the algorithm of the module hashes.
    #[must_use]
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Records the hash of module `name`.
    #[must_use]
    pub fn module_hash(mut self, name: impl Into<String>, hash: impl Into<String>) -> Self {
        self.hashes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), hash.into());
        self
    }

    /// Builds the descriptor.
    ///
    /// Empty platform strings are treated as absent. Module hashes are kept only when an
    /// algorithm was set.
    #[must_use]
    pub fn build(self) -> ModuleDescriptor {
        let hashes = match (self.algorithm, self.hashes) {
            (Some(algorithm), hashes) => {
                Some(ModuleHashes::new(algorithm, hashes.unwrap_or_default()))
            }
            (None, Some(hashes)) => {
                tracing::debug!(
                    module = %self.name,
                    count = hashes.len(),
                    "dropping module hashes without an algorithm"
                );
                None
            }
            (None, None) => None,
        };

        ModuleDescriptor {
            name: self.name,
            open: self.open,
            automatic: self.automatic,
            synthetic: self.synthetic,
            requires: self.requires,
            exports: self.exports,
            opens: self.opens,
            packages: self.packages,
            uses: self.uses,
            provides: self.provides,
            version: self.version,
            main_class: self.main_class,
            os_name: self.os_name.filter(|value| !value.is_empty()),
            os_arch: self.os_arch.filter(|value| !value.is_empty()),
            os_version: self.os_version.filter(|value| !value.is_empty()),
            hashes,
        }
    }
}

fn set_once(slot: &mut Option<String>, value: String, field: ScalarField) -> Result<()> {
    if slot.is_some() {
        return Err(Error::AlreadySet(field));
    }

    *slot = Some(value);
    Ok(())
}
