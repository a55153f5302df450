//! `TargetPlatform` attribute codec.
//!
//! # Format
//!
//! ```text
//! u2 os_name_utf8
//! u2 os_arch_utf8
//! u2 os_version_utf8
//! ```
//!
//! A field is `0` when absent. An empty string is written as `0` as well, so the record cannot
//! tell "not specified" apart from "explicitly empty".

use crate::{
    descriptor::{ModuleBuilder, ModuleDescriptor},
    record::{ByteVector, Parser},
    symbols::SymbolTable,
    Result,
};

/// The `TargetPlatform` attribute: the operating system the module is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetPlatformAttribute {
    /// Operating system name
    pub os_name: Option<String>,
    /// Operating system architecture
    pub os_arch: Option<String>,
    /// Operating system version
    pub os_version: Option<String>,
}

impl TargetPlatformAttribute {
    /// Takes the platform of `descriptor`, or `None` if no field is present.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Option<Self> {
        let attribute = Self {
            os_name: descriptor.os_name().map(str::to_string),
            os_arch: descriptor.os_arch().map(str::to_string),
            os_version: descriptor.os_version().map(str::to_string),
        };

        (!attribute.is_empty()).then_some(attribute)
    }

    /// Returns `true` if no field would be written with a non-zero reference.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.os_name, &self.os_arch, &self.os_version]
            .into_iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }

    /// Decodes the attribute.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if a non-zero reference does not resolve.
    pub fn decode<S: SymbolTable + ?Sized>(data: &[u8], symbols: &S) -> Result<Self> {
        let mut parser = Parser::new(data);

        Ok(Self {
            os_name: read_optional(&mut parser, symbols)?,
            os_arch: read_optional(&mut parser, symbols)?,
            os_version: read_optional(&mut parser, symbols)?,
        })
    }

    /// Encodes the attribute, interning present fields into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        let mut out = ByteVector::with_capacity(6);

        for field in [&self.os_name, &self.os_arch, &self.os_version] {
            let index = match field.as_deref() {
                Some(value) if !value.is_empty() => symbols.intern_utf8(value)?,
                _ => 0,
            };
            out.put_be(index);
        }

        Ok(out.into_vec())
    }

    /// Sets the present fields on `builder`.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if `builder` already has one of the present fields.
    pub fn apply(self, mut builder: ModuleBuilder) -> Result<ModuleBuilder> {
        if let Some(name) = self.os_name {
            builder = builder.os_name(name)?;
        }
        if let Some(arch) = self.os_arch {
            builder = builder.os_arch(arch)?;
        }
        if let Some(version) = self.os_version {
            builder = builder.os_version(version)?;
        }

        Ok(builder)
    }
}

fn read_optional<S: SymbolTable + ?Sized>(
    parser: &mut Parser<'_>,
    symbols: &S,
) -> Result<Option<String>> {
    match parser.read_be::<u16>()? {
        0 => Ok(None),
        index => Ok(Some(symbols.resolve_utf8(index)?.to_string())),
    }
}
