//! `Hashes` attribute codec.
//!
//! # Format
//!
//! ```text
//! u2 algorithm_utf8
//! u2 hash_count
//!   { u2 module_name_utf8; u2 hash_utf8 }[hash_count]
//! ```
//!
//! Entries are written in the insertion order of [`ModuleHashes`], which keeps the output
//! reproducible.

use crate::{
    descriptor::{ModuleBuilder, ModuleDescriptor, ModuleHashes},
    record::{ByteVector, Parser},
    symbols::SymbolTable,
    Result,
};

/// The `Hashes` attribute: hashes of the modules this module was linked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashesAttribute {
    hashes: ModuleHashes,
}

impl HashesAttribute {
    /// Wraps a hash table for encoding.
    #[must_use]
    pub fn new(hashes: ModuleHashes) -> Self {
        Self { hashes }
    }

    /// Takes the hashes of `descriptor`, or `None` if it has none.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Option<Self> {
        descriptor.hashes().cloned().map(Self::new)
    }

    /// The hash table.
    #[must_use]
    pub fn hashes(&self) -> &ModuleHashes {
        &self.hashes
    }

    /// Decodes the attribute.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if a reference does not resolve.
    pub fn decode<S: SymbolTable + ?Sized>(data: &[u8], symbols: &S) -> Result<Self> {
        let mut parser = Parser::new(data);

        let algorithm = symbols.resolve_utf8(parser.read_be::<u16>()?)?;

        let count = parser.read_be::<u16>()?;
        let mut entries = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let name = symbols.resolve_utf8(parser.read_be::<u16>()?)?;
            let hash = symbols.resolve_utf8(parser.read_be::<u16>()?)?;
            entries.push((name, hash));
        }

        Ok(Self {
            hashes: ModuleHashes::new(algorithm, entries),
        })
    }

    /// Encodes the attribute, interning strings into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the table or the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        let mut out = ByteVector::with_capacity(4 + self.hashes.len() * 4);

        out.put_be(symbols.intern_utf8(self.hashes.algorithm())?);
        out.put_count(self.hashes.len(), "module hashes")?;
        for (name, hash) in self.hashes.iter() {
            out.put_be(symbols.intern_utf8(name)?);
            out.put_be(symbols.intern_utf8(hash)?);
        }

        Ok(out.into_vec())
    }

    /// Records the algorithm and every hash on `builder`.
    #[must_use]
    pub fn apply(self, builder: ModuleBuilder) -> ModuleBuilder {
        self.hashes
            .iter()
            .fold(builder.algorithm(self.hashes.algorithm()), |builder, (name, hash)| {
                builder.module_hash(name, hash)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{symbols::ConstantPool, test::be_words};

    #[test]
    fn insertion_order_written() -> Result<()> {
        let attribute = HashesAttribute::new(ModuleHashes::new(
            "SHA-256",
            [("java.xml", "aa01"), ("java.base", "bb02")],
        ));

        let mut pool = ConstantPool::new();
        let data = attribute.encode(&mut pool)?;
        let words = be_words(&data);

        assert_eq!(words.len(), 6);
        assert_eq!(pool.resolve_utf8(words[0])?, "SHA-256");
        assert_eq!(words[1], 2);
        assert_eq!(pool.resolve_utf8(words[2])?, "java.xml");
        assert_eq!(pool.resolve_utf8(words[3])?, "aa01");
        assert_eq!(pool.resolve_utf8(words[4])?, "java.base");
        assert_eq!(pool.resolve_utf8(words[5])?, "bb02");

        assert_eq!(HashesAttribute::decode(&data, &pool)?, attribute);

        Ok(())
    }

    #[test]
    fn equality_ignores_order() {
        let a = ModuleHashes::new("MD5", [("a", "1"), ("b", "2")]);
        let b = ModuleHashes::new("MD5", [("b", "2"), ("a", "1")]);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_table() -> Result<()> {
        let attribute = HashesAttribute::new(ModuleHashes::new("SHA-512", Vec::<(String, String)>::new()));

        let mut pool = ConstantPool::new();
        let data = attribute.encode(&mut pool)?;
        assert_eq!(be_words(&data), vec![pool.intern_utf8("SHA-512")?, 0]);

        let decoded = HashesAttribute::decode(&data, &pool)?;
        assert!(decoded.hashes().is_empty());
        assert_eq!(decoded.hashes().algorithm(), "SHA-512");

        Ok(())
    }

    #[test]
    fn apply_to_builder() {
        let attribute = HashesAttribute::new(ModuleHashes::new("SHA-256", [("x", "ff")]));
        let descriptor = attribute.clone().apply(ModuleBuilder::new("m")).build();

        assert_eq!(descriptor.hashes(), Some(attribute.hashes()));
    }
}
