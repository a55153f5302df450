//! Symbol table interface shared by all attribute codecs.
//!
//! Attribute records never store strings inline. Every name is a `u2` index into a symbol table
//! owned by the surrounding container reader/writer. The codecs reach that table only through the
//! [`SymbolTable`] trait, so they stay independent of how symbols are physically stored.
//!
//! Two kinds of entries exist:
//! - **UTF-8 entries** hold a plain string (module names, package names, versions, hashes)
//! - **Class entries** point at a UTF-8 entry holding a class name in internal form
//!   (`com/example/Service`); resolving one yields the dotted form (`com.example.Service`)
//!
//! Package names are also stored in internal form but as plain UTF-8 entries; the codecs translate
//! them with [`to_internal_form`] and [`to_dotted_form`].
//!
//! [`ConstantPool`] is an in-memory, append-only implementation suitable for building records
//! from scratch and for tests.

mod pool;

pub use pool::{Constant, ConstantPool};

use crate::Result;

/// Bidirectional mapping between `u2` indices and strings or class references.
///
/// Index `0` is never a valid entry; records use it to mean "absent" where a field is optional.
pub trait SymbolTable {
    /// Resolves `index` to the UTF-8 string stored there.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidSymbol`] if the index is unused or not a UTF-8 entry.
    fn resolve_utf8(&self, index: u16) -> Result<&str>;

    /// Resolves `index` to a class reference and returns its name in dotted form.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidSymbol`] if the index is unused or not a class entry.
    fn resolve_class_name(&self, index: u16) -> Result<String>;

    /// Returns the index of a UTF-8 entry holding `value`, adding one if needed.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the table cannot grow any further.
    fn intern_utf8(&mut self, value: &str) -> Result<u16>;

    /// Returns the index of a class entry for the dotted class `name`, adding one if needed.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if the table cannot grow any further.
    fn intern_class_name(&mut self, name: &str) -> Result<u16>;
}

/// Converts a dotted name (`java.util`) to the internal, slash separated form (`java/util`).
#[must_use]
pub fn to_internal_form(name: &str) -> String {
    name.replace('.', "/")
}

/// Converts an internal, slash separated name (`java/util`) to the dotted form (`java.util`).
#[must_use]
pub fn to_dotted_form(name: &str) -> String {
    name.replace('/', ".")
}
