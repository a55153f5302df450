//! In-memory constant pool.
//!
//! [`ConstantPool`] stores UTF-8 and class entries in insertion order and hands out 1-based
//! indices. Interning deduplicates: asking twice for the same string returns the same index, so
//! encoding the same descriptor twice into fresh pools yields identical bytes.

use indexmap::IndexSet;

use crate::{
    symbols::{to_dotted_form, to_internal_form, SymbolTable},
    Error, Result,
};

/// One entry of a [`ConstantPool`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    /// A UTF-8 string
    Utf8(String),
    /// A class reference, holding the index of the UTF-8 entry with its internal name
    Class(u16),
}

/// Append-only symbol table backed by an ordered set of [`Constant`]s.
///
/// # Examples
///
/// ```rust
/// use modscope::{ConstantPool, SymbolTable};
///
/// let mut pool = ConstantPool::new();
/// let index = pool.intern_class_name("com.example.Service")?;
///
/// assert_eq!(pool.resolve_class_name(index)?, "com.example.Service");
/// assert_eq!(pool.resolve_utf8(index - 1)?, "com/example/Service");
/// # Ok::<(), modscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantPool {
    entries: IndexSet<Constant>,
}

impl ConstantPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexSet::new(),
        }
    }

    /// Number of entries in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, or `None` for index `0` and unused indices.
    #[must_use]
    pub fn get(&self, index: u16) -> Option<&Constant> {
        let position = usize::from(index).checked_sub(1)?;
        self.entries.get_index(position)
    }

    /// Iterates over `(index, entry)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Constant)> {
        // len() never exceeds u16::MAX, so the cast cannot truncate
        self.entries
            .iter()
            .enumerate()
            .map(|(position, constant)| ((position + 1) as u16, constant))
    }

    fn add(&mut self, constant: Constant) -> Result<u16> {
        if let Some(position) = self.entries.get_index_of(&constant) {
            return Self::index_of(position);
        }

        let index = Self::index_of(self.entries.len())?;
        self.entries.insert(constant);
        Ok(index)
    }

    fn index_of(position: usize) -> Result<u16> {
        let count = position + 1;
        u16::try_from(count).map_err(|_| Error::LimitExceeded {
            what: "constant pool entries",
            count,
        })
    }
}

impl SymbolTable for ConstantPool {
    fn resolve_utf8(&self, index: u16) -> Result<&str> {
        match self.get(index) {
            Some(Constant::Utf8(value)) => Ok(value),
            _ => Err(Error::InvalidSymbol {
                index,
                expected: "utf8",
            }),
        }
    }

    fn resolve_class_name(&self, index: u16) -> Result<String> {
        match self.get(index) {
            Some(Constant::Class(name_index)) => Ok(to_dotted_form(self.resolve_utf8(*name_index)?)),
            _ => Err(Error::InvalidSymbol {
                index,
                expected: "class",
            }),
        }
    }

    fn intern_utf8(&mut self, value: &str) -> Result<u16> {
        self.add(Constant::Utf8(value.to_string()))
    }

    fn intern_class_name(&mut self, name: &str) -> Result<u16> {
        let name_index = self.intern_utf8(&to_internal_form(name))?;
        self.add(Constant::Class(name_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates() -> Result<()> {
        let mut pool = ConstantPool::new();

        let first = pool.intern_utf8("java.base")?;
        let second = pool.intern_utf8("java.logging")?;
        let again = pool.intern_utf8("java.base")?;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(again, first);
        assert_eq!(pool.len(), 2);

        Ok(())
    }

    #[test]
    fn class_entries_share_utf8() -> Result<()> {
        let mut pool = ConstantPool::new();

        let utf8 = pool.intern_utf8("p/Service")?;
        let class = pool.intern_class_name("p.Service")?;

        assert_eq!(pool.get(class), Some(&Constant::Class(utf8)));
        assert_eq!(pool.resolve_class_name(class)?, "p.Service");
        assert_eq!(pool.intern_class_name("p.Service")?, class);
        assert_eq!(pool.len(), 2);

        Ok(())
    }

    #[test]
    fn resolve_wrong_kind() -> Result<()> {
        let mut pool = ConstantPool::new();
        let class = pool.intern_class_name("p.Impl")?;

        assert!(matches!(
            pool.resolve_utf8(class),
            Err(Error::InvalidSymbol {
                expected: "utf8",
                ..
            })
        ));
        assert!(matches!(
            pool.resolve_class_name(class - 1),
            Err(Error::InvalidSymbol {
                expected: "class",
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn resolve_missing() {
        let pool = ConstantPool::new();

        assert!(pool.get(0).is_none());
        assert!(matches!(
            pool.resolve_utf8(0),
            Err(Error::InvalidSymbol { index: 0, .. })
        ));
        assert!(matches!(
            pool.resolve_utf8(42),
            Err(Error::InvalidSymbol { index: 42, .. })
        ));
    }

    #[test]
    fn iter_in_index_order() -> Result<()> {
        let mut pool = ConstantPool::new();
        pool.intern_utf8("a")?;
        pool.intern_class_name("b")?;

        let entries: Vec<_> = pool.iter().collect();
        assert_eq!(
            entries,
            vec![
                (1, &Constant::Utf8("a".to_string())),
                (2, &Constant::Utf8("b".to_string())),
                (3, &Constant::Class(2)),
            ]
        );

        Ok(())
    }

    #[test]
    fn pool_full() -> Result<()> {
        let mut pool = ConstantPool::new();
        for i in 0..u16::MAX {
            pool.intern_utf8(&i.to_string())?;
        }
        assert_eq!(pool.len(), usize::from(u16::MAX));

        // Existing entries are still reachable, new ones are rejected
        assert_eq!(pool.intern_utf8("0")?, 1);
        assert!(matches!(
            pool.intern_utf8("overflow"),
            Err(Error::LimitExceeded { .. })
        ));
        assert_eq!(pool.len(), usize::from(u16::MAX));

        Ok(())
    }
}
