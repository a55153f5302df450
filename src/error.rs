use thiserror::Error;

use crate::descriptor::ScalarField;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The codec trusts its input: it was produced by the same toolchain that reads it back. The
/// variants below therefore cover programming errors (a builder field set twice), version strings
/// that do not follow the version grammar, and the few structural problems that are cheap to
/// notice (a read past the end of a record, a symbol index of the wrong kind). Counts that do not
/// match the record contents are not diagnosed beyond the bounds check.
///
/// # Error Categories
///
/// ## Record Errors
/// - [`Error::OutOfBounds`] - A read ran past the end of an attribute record
/// - [`Error::Malformed`] - Inconsistent attribute set (duplicate or missing attributes)
/// - [`Error::InvalidSymbol`] - A symbol index is missing or refers to the wrong kind of entry
/// - [`Error::LimitExceeded`] - A table is too large for its `u2` count field
///
/// ## Descriptor Errors
/// - [`Error::AlreadySet`] - A scalar builder field was assigned twice
/// - [`Error::VersionParse`] - A version string does not follow the version grammar
///
/// # Examples
///
/// ```rust
/// use modscope::{Error, ModuleBuilder};
///
/// let result = ModuleBuilder::new("m")
///     .main_class("app.Main")
///     .and_then(|builder| builder.main_class("app.Other"));
///
/// match result {
///     Err(Error::AlreadySet(field)) => println!("{field} assigned twice"),
///     Err(e) => println!("Other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while reading a record.
    ///
    /// Attribute records are read through bounds-checked helpers; a count that claims more
    /// entries than the record holds ends here rather than in a panic.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The attribute set is inconsistent and could not be turned into a descriptor.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A symbol table index could not be resolved to the expected kind of entry.
    #[error("Invalid symbol index {index} - expected {expected}")]
    InvalidSymbol {
        /// The index that failed to resolve
        index: u16,
        /// The kind of entry the codec expected at this index
        expected: &'static str,
    },

    /// A table or pool grew beyond what its `u2` count can express.
    #[error("Too many {what} - {count} exceeds the u2 limit")]
    LimitExceeded {
        /// What was being counted
        what: &'static str,
        /// The offending count
        count: usize,
    },

    /// A scalar field of a [`crate::ModuleBuilder`] was assigned a second time.
    ///
    /// Always a caller error; the build in progress should be abandoned.
    #[error("{0} already set")]
    AlreadySet(ScalarField),

    /// A version string does not conform to the module version grammar.
    #[error("Invalid version '{version}' - {reason}")]
    VersionParse {
        /// The string that failed to parse
        version: String,
        /// Why the string was rejected
        reason: &'static str,
    },
}
