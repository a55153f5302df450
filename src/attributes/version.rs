//! `Version` attribute codec.
//!
//! # Format
//!
//! ```text
//! u2 version_utf8
//! ```

use std::sync::Arc;

use crate::{
    config::CodecConfig,
    descriptor::{ModuleBuilder, ModuleDescriptor, Version},
    record::{ByteVector, Parser},
    symbols::SymbolTable,
    Result,
};

/// The `Version` attribute: the module version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionAttribute {
    version: Arc<Version>,
}

impl VersionAttribute {
    /// Creates the attribute from a parsed version.
    #[must_use]
    pub fn new(version: Arc<Version>) -> Self {
        Self { version }
    }

    /// Takes the version of `descriptor`, or `None` if it has none.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Option<Self> {
        descriptor.shared_version().cloned().map(Self::new)
    }

    /// The module version.
    #[must_use]
    pub fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Decodes the attribute, parsing the version through the cache of `config`.
    ///
    /// # Errors
    /// Returns [`crate::Error::VersionParse`] if the referenced string is not a valid version,
    /// [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if the reference does not resolve.
    pub fn decode<S: SymbolTable + ?Sized>(
        data: &[u8],
        symbols: &S,
        config: &CodecConfig,
    ) -> Result<Self> {
        let mut parser = Parser::new(data);
        let version = symbols.resolve_utf8(parser.read_be::<u16>()?)?;

        let version = match &config.version_cache {
            Some(cache) => cache.parse(version)?,
            None => Arc::new(Version::parse(version)?),
        };

        Ok(Self { version })
    }

    /// Encodes the attribute, interning the version string into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        let mut out = ByteVector::with_capacity(2);
        out.put_be(symbols.intern_utf8(self.version.as_str())?);

        Ok(out.into_vec())
    }

    /// Sets the version on `builder`.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if `builder` already has a version.
    pub fn apply(self, builder: ModuleBuilder) -> Result<ModuleBuilder> {
        builder.parsed_version(self.version)
    }
}
