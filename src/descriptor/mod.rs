//! Module descriptor model.
//!
//! This module defines the immutable [`ModuleDescriptor`] and its parts, plus the
//! [`ModuleBuilder`] used to assemble one and the [`VersionCache`] it parses versions through.
//!
//! # Key Components
//!
//! - [`ModuleDescriptor`] - name, flags, dependences, packages, services, version, platform, hashes
//! - [`Requires`], [`Exports`], [`Opens`], [`Provides`] - the module relations
//! - [`ModuleHashes`] - hashes of the modules this module was linked against
//! - [`Version`] - parsed module version
//! - [`ModuleBuilder`] - incremental, validation-free builder
//! - [`VersionCache`] - single-slot cache shared by builders
//!
//! # Ordering and Equality
//!
//! Every collection is insertion ordered so that encoding a descriptor twice produces identical
//! bytes. Equality ignores that order, except for the providers of a service, whose order is part
//! of the descriptor.

mod builder;
mod cache;
mod exports;
mod hashes;
mod provides;
mod requires;
mod version;

pub use builder::{ModuleBuilder, ScalarField};
pub use cache::VersionCache;
pub use exports::{Exports, ExportsModifiers, Opens, OpensModifiers};
pub use hashes::ModuleHashes;
pub use provides::Provides;
pub use requires::{Requires, RequiresModifiers};
pub use version::Version;

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

/// An immutable module descriptor.
///
/// Created through [`ModuleBuilder`] or by decoding attributes.
///
/// # Examples
///
/// ```rust
/// use modscope::{Exports, ExportsModifiers, ModuleBuilder};
///
/// let descriptor = ModuleBuilder::new("com.example.lib")
///     .exports([Exports::new(ExportsModifiers::empty(), "com.example.api", ["com.example.app"])])
///     .packages(["com.example.api", "com.example.impl"])
///     .build();
///
/// assert_eq!(descriptor.name(), "com.example.lib");
/// assert!(descriptor.exports()[0].is_qualified());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
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
    hashes: Option<ModuleHashes>,
}

impl ModuleDescriptor {
    /// The module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if every package of the module is open for deep reflection.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` for automatic modules.
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    /// Returns `true` if the module was not declared in source.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// The module dependences.
    #[must_use]
    pub fn requires(&self) -> &IndexSet<Requires> {
        &self.requires
    }

    /// The exported packages.
    #[must_use]
    pub fn exports(&self) -> &IndexSet<Exports> {
        &self.exports
    }

    /// The packages opened for deep reflection.
    #[must_use]
    pub fn opens(&self) -> &IndexSet<Opens> {
        &self.opens
    }

    /// All packages of the module, in dotted form.
    #[must_use]
    pub fn packages(&self) -> &IndexSet<String> {
        &self.packages
    }

    /// The service types the module uses.
    #[must_use]
    pub fn uses(&self) -> &IndexSet<String> {
        &self.uses
    }

    /// The services the module provides, keyed by service type.
    #[must_use]
    pub fn provides(&self) -> &IndexMap<String, Provides> {
        &self.provides
    }

    /// The module version.
    #[must_use]
    pub fn version(&self) -> Option<&Version> {
        self.version.as_deref()
    }

    /// The module version as the shared instance it may have in common with other descriptors.
    #[must_use]
    pub fn shared_version(&self) -> Option<&Arc<Version>> {
        self.version.as_ref()
    }

    /// The main class, in dotted form.
    #[must_use]
    pub fn main_class(&self) -> Option<&str> {
        self.main_class.as_deref()
    }

    /// The target operating system name.
    #[must_use]
    pub fn os_name(&self) -> Option<&str> {
        self.os_name.as_deref()
    }

    /// The target operating system architecture.
    #[must_use]
    pub fn os_arch(&self) -> Option<&str> {
        self.os_arch.as_deref()
    }

    /// The target operating system version.
    #[must_use]
    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    /// Hashes of the modules this module was linked against.
    #[must_use]
    pub fn hashes(&self) -> Option<&ModuleHashes> {
        self.hashes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_collection_order() {
        let a = ModuleBuilder::new("m")
            .requires([
                Requires::new(RequiresModifiers::empty(), "x"),
                Requires::new(RequiresModifiers::STATIC, "y"),
            ])
            .uses(["s.A", "s.B"])
            .build();
        let b = ModuleBuilder::new("m")
            .requires([
                Requires::new(RequiresModifiers::STATIC, "y"),
                Requires::new(RequiresModifiers::empty(), "x"),
            ])
            .uses(["s.B", "s.A"])
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn equality_respects_provider_order() {
        let a = ModuleBuilder::new("m")
            .provides([Provides::new("s.S", ["p.A", "p.B"])])
            .build();
        let b = ModuleBuilder::new("m")
            .provides([Provides::new("s.S", ["p.B", "p.A"])])
            .build();

        assert_ne!(a, b);
    }

    #[test]
    fn version_compared_by_value() -> crate::Result<()> {
        let a = ModuleBuilder::with_cache("m", None).version("1")?.build();
        let b = ModuleBuilder::with_cache("m", None).version("1.0")?.build();

        assert_eq!(a, b);
        assert_eq!(a.version().map(Version::as_str), Some("1"));

        Ok(())
    }
}
