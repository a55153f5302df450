//! `MainClass` attribute codec.
//!
//! # Format
//!
//! ```text
//! u2 main_class
//! ```
//!
//! The reference points at a class entry; the name is exposed in dotted form and not validated.

use crate::{
    descriptor::{ModuleBuilder, ModuleDescriptor},
    record::{ByteVector, Parser},
    symbols::SymbolTable,
    Result,
};

/// The `MainClass` attribute: the entry point of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainClassAttribute {
    main_class: String,
}

impl MainClassAttribute {
    /// Creates the attribute from a dotted class name.
    pub fn new(main_class: impl Into<String>) -> Self {
        Self {
            main_class: main_class.into(),
        }
    }

    /// Takes the main class of `descriptor`, or `None` if it has none.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Option<Self> {
        descriptor.main_class().map(Self::new)
    }

    /// The main class in dotted form.
    #[must_use]
    pub fn main_class(&self) -> &str {
        &self.main_class
    }

    /// Decodes the attribute.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if the reference is not a class entry.
    pub fn decode<S: SymbolTable + ?Sized>(data: &[u8], symbols: &S) -> Result<Self> {
        let mut parser = Parser::new(data);

        Ok(Self {
            main_class: symbols.resolve_class_name(parser.read_be::<u16>()?)?,
        })
    }

    /// Encodes the attribute, interning the class into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        let mut out = ByteVector::with_capacity(2);
        out.put_be(symbols.intern_class_name(&self.main_class)?);

        Ok(out.into_vec())
    }

    /// Sets the main class on `builder`.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlreadySet`] if `builder` already has a main class.
    pub fn apply(self, builder: ModuleBuilder) -> Result<ModuleBuilder> {
        builder.main_class(self.main_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{symbols::ConstantPool, Error};

    #[test]
    fn passthrough() -> Result<()> {
        let attribute = MainClassAttribute::new("com.example.app.Main");

        let mut pool = ConstantPool::new();
        let data = attribute.encode(&mut pool)?;
        assert_eq!(data.len(), 2);
        assert_eq!(
            pool.resolve_class_name(u16::from_be_bytes([data[0], data[1]]))?,
            "com.example.app.Main"
        );

        assert_eq!(MainClassAttribute::decode(&data, &pool)?, attribute);

        Ok(())
    }

    #[test]
    fn requires_class_entry() -> Result<()> {
        let mut pool = ConstantPool::new();
        let utf8 = pool.intern_utf8("com/example/Main")?;

        assert!(matches!(
            MainClassAttribute::decode(&utf8.to_be_bytes(), &pool),
            Err(Error::InvalidSymbol { expected: "class", .. })
        ));

        Ok(())
    }

    #[test]
    fn truncated() {
        let pool = ConstantPool::new();
        assert!(matches!(
            MainClassAttribute::decode(&[0x00], &pool),
            Err(Error::OutOfBounds)
        ));
    }
}
