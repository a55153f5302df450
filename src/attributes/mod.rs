//! Module attribute codecs.
//!
//! A module descriptor is spread over up to six attributes in the container metadata. Each one
//! has its own record format and its own codec type:
//!
//! - [`ModuleAttribute`] - flags plus the requires, exports, opens, uses and provides tables
//! - [`PackagesAttribute`] - every package of the module
//! - [`VersionAttribute`] - the module version
//! - [`MainClassAttribute`] - the entry point
//! - [`TargetPlatformAttribute`] - OS name, architecture and version
//! - [`HashesAttribute`] - hashes of the modules linked against
//!
//! [`ModuleAttributes`] drives all six: it collects the raw records of one descriptor, decodes them
//! into a single [`ModuleDescriptor`], and encodes a descriptor back into the records it needs.
//!
//! # Examples
//!
//! ```rust
//! use modscope::{
//!     AttributeKind, CodecConfig, ConstantPool, ModuleAttributes, ModuleBuilder, Requires,
//!     RequiresModifiers,
//! };
//!
//! let descriptor = ModuleBuilder::new("com.example.app")
//!     .requires([Requires::new(RequiresModifiers::MANDATED, "java.base")])
//!     .version("1.4.2")?
//!     .main_class("com.example.app.Main")?
//!     .build();
//!
//! let mut pool = ConstantPool::new();
//! let attributes = ModuleAttributes::encode(&descriptor, &mut pool)?;
//! assert_eq!(
//!     attributes.kinds().collect::<Vec<_>>(),
//!     vec![AttributeKind::Module, AttributeKind::Version, AttributeKind::MainClass]
//! );
//!
//! let decoded = attributes.decode("com.example.app", &pool, &CodecConfig::default())?;
//! assert_eq!(decoded, descriptor);
//! # Ok::<(), modscope::Error>(())
//! ```

mod hashes;
mod mainclass;
mod module;
mod packages;
mod targetplatform;
mod version;

pub use hashes::HashesAttribute;
pub use mainclass::MainClassAttribute;
pub use module::{ModuleAttribute, ModuleFlags};
pub use packages::PackagesAttribute;
pub use targetplatform::TargetPlatformAttribute;
pub use version::VersionAttribute;

use std::str::FromStr;

use indexmap::IndexMap;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::{
    config::CodecConfig,
    descriptor::{ModuleBuilder, ModuleDescriptor},
    symbols::SymbolTable,
    Result,
};

/// The attributes that make up a module descriptor.
///
/// Displays and parses as the attribute name used in the container.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount,
)]
pub enum AttributeKind {
    /// [`ModuleAttribute`]
    Module,
    /// [`PackagesAttribute`]
    Packages,
    /// [`VersionAttribute`]
    Version,
    /// [`MainClassAttribute`]
    MainClass,
    /// [`TargetPlatformAttribute`]
    TargetPlatform,
    /// [`HashesAttribute`]
    Hashes,
}

/// The raw attribute records of one module descriptor.
///
/// Records are kept in the order they were inserted; [`ModuleAttributes::encode`] inserts them in
/// [`AttributeKind`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleAttributes {
    records: IndexMap<AttributeKind, Vec<u8>>,
}

impl ModuleAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the module attributes out of `(name, bytes)` pairs taken from a container.
    ///
    /// Names that are not module attributes are skipped.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a module attribute appears twice.
    pub fn from_named<I, N, B>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, B)>,
        N: AsRef<str>,
        B: Into<Vec<u8>>,
    {
        let mut set = Self::new();

        for (name, data) in attributes {
            let name = name.as_ref();
            match AttributeKind::from_str(name) {
                Ok(kind) => set.insert(kind, data)?,
                Err(_) => tracing::trace!(attribute = name, "skipping unrelated attribute"),
            }
        }

        Ok(set)
    }

    /// Adds the record of attribute `kind`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a record of that kind is already present.
    pub fn insert(&mut self, kind: AttributeKind, data: impl Into<Vec<u8>>) -> Result<()> {
        if self.records.contains_key(&kind) {
            return Err(malformed_error!("Duplicate {} attribute", kind));
        }

        self.records.insert(kind, data.into());
        Ok(())
    }

    /// The record of attribute `kind`.
    #[must_use]
    pub fn get(&self, kind: AttributeKind) -> Option<&[u8]> {
        self.records.get(&kind).map(Vec::as_slice)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The kinds present, in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.records.keys().copied()
    }

    /// `(kind, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &[u8])> {
        self.records
            .iter()
            .map(|(kind, data)| (*kind, data.as_slice()))
    }

    /// Decodes the records into a descriptor named `name`.
    ///
    /// The `Module` record is decoded first; every other record present is applied to the same
    /// builder.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the `Module` record is missing, or any error of the
    /// individual codecs.
    pub fn decode<S: SymbolTable + ?Sized>(
        &self,
        name: &str,
        symbols: &S,
        config: &CodecConfig,
    ) -> Result<ModuleDescriptor> {
        let Some(module) = self.get(AttributeKind::Module) else {
            return Err(malformed_error!("Missing {} attribute", AttributeKind::Module));
        };

        tracing::debug!(module = name, attributes = self.len(), "decoding module attributes");

        let builder = ModuleBuilder::with_cache(name, config.version_cache.clone());
        let mut builder = ModuleAttribute::decode_into(module, symbols, builder)?;

        for kind in AttributeKind::iter().skip(1) {
            let Some(data) = self.get(kind) else {
                continue;
            };

            tracing::trace!(module = name, attribute = %kind, len = data.len(), "decoding attribute");

            builder = match kind {
                AttributeKind::Module => builder,
                AttributeKind::Packages => PackagesAttribute::decode(data, symbols)?.apply(builder),
                AttributeKind::Version => {
                    VersionAttribute::decode(data, symbols, config)?.apply(builder)?
                }
                AttributeKind::MainClass => {
                    MainClassAttribute::decode(data, symbols)?.apply(builder)?
                }
                AttributeKind::TargetPlatform => {
                    TargetPlatformAttribute::decode(data, symbols)?.apply(builder)?
                }
                AttributeKind::Hashes => HashesAttribute::decode(data, symbols)?.apply(builder),
            };
        }

        Ok(builder.build())
    }

    /// Encodes `descriptor` into the records it needs, interning strings into `symbols`.
    ///
    /// `Module` is always written. `Packages` is written when there are packages, `TargetPlatform`
    /// when any platform field is set, and the remaining attributes when present.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if a table or the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(
        descriptor: &ModuleDescriptor,
        symbols: &mut S,
    ) -> Result<Self> {
        let mut set = Self::new();

        set.insert(
            AttributeKind::Module,
            module::encode_descriptor(descriptor, symbols)?,
        )?;
        if let Some(packages) = PackagesAttribute::from_descriptor(descriptor) {
            set.insert(AttributeKind::Packages, packages.encode(symbols)?)?;
        }
        if let Some(version) = VersionAttribute::from_descriptor(descriptor) {
            set.insert(AttributeKind::Version, version.encode(symbols)?)?;
        }
        if let Some(main_class) = MainClassAttribute::from_descriptor(descriptor) {
            set.insert(AttributeKind::MainClass, main_class.encode(symbols)?)?;
        }
        if let Some(platform) = TargetPlatformAttribute::from_descriptor(descriptor) {
            set.insert(AttributeKind::TargetPlatform, platform.encode(symbols)?)?;
        }
        if let Some(hashes) = HashesAttribute::from_descriptor(descriptor) {
            set.insert(AttributeKind::Hashes, hashes.encode(symbols)?)?;
        }

        tracing::debug!(
            module = descriptor.name(),
            attributes = set.len(),
            "encoded module attributes"
        );

        Ok(set)
    }
}

impl<'a> IntoIterator for &'a ModuleAttributes {
    type Item = (AttributeKind, &'a [u8]);
    type IntoIter = Box<dyn Iterator<Item = (AttributeKind, &'a [u8])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
