//! `Packages` attribute codec.
//!
//! # Format
//!
//! ```text
//! u2 packages_count
//! u2 package_utf8[packages_count]
//! ```
//!
//! Packages are stored in internal form (`com/example/api`) and exposed in dotted form.

use indexmap::IndexSet;

use crate::{
    descriptor::{ModuleBuilder, ModuleDescriptor},
    record::{ByteVector, Parser},
    symbols::{to_dotted_form, to_internal_form, SymbolTable},
    Result,
};

/// The `Packages` attribute: every package of the module.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackagesAttribute {
    packages: IndexSet<String>,
}

impl PackagesAttribute {
    /// Creates the attribute from dotted package names.
    pub fn new<I, T>(packages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Takes the packages of `descriptor`, or `None` if it has none.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Option<Self> {
        if descriptor.packages().is_empty() {
            return None;
        }

        Some(Self {
            packages: descriptor.packages().clone(),
        })
    }

    /// The packages in dotted form.
    #[must_use]
    pub fn packages(&self) -> &IndexSet<String> {
        &self.packages
    }

    /// Decodes the attribute.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if a reference does not resolve.
    pub fn decode<S: SymbolTable + ?Sized>(data: &[u8], symbols: &S) -> Result<Self> {
        let mut parser = Parser::new(data);

        let count = parser.read_be::<u16>()?;
        let mut packages = IndexSet::with_capacity(usize::from(count));
        for _ in 0..count {
            packages.insert(to_dotted_form(
                symbols.resolve_utf8(parser.read_be::<u16>()?)?,
            ));
        }

        Ok(Self { packages })
    }

    /// Encodes the attribute, interning names into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the table or the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        let mut out = ByteVector::with_capacity(2 + self.packages.len() * 2);

        out.put_count(self.packages.len(), "packages")?;
        for package in &self.packages {
            out.put_be(symbols.intern_utf8(&to_internal_form(package))?);
        }

        Ok(out.into_vec())
    }

    /// Sets the packages on `builder`.
    #[must_use]
    pub fn apply(self, builder: ModuleBuilder) -> ModuleBuilder {
        builder.packages(self.packages)
    }
}
