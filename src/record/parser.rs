//! Cursor over the bytes of one attribute record.
//!
//! The [`crate::record::parser::Parser`] keeps a position inside a byte slice and hands out
//! big-endian values one after another. Attribute decoders walk their counted tables with it.
//!
//! # Examples
//!
//! ```rust
//! use modscope::Parser;
//!
//! let data = [0x00, 0x02, 0x00, 0x07, 0x00, 0x09];
//! let mut parser = Parser::new(&data);
//!
//! let count = parser.read_be::<u16>()?;
//! let refs = (0..count)
//!     .map(|_| parser.read_be::<u16>())
//!     .collect::<modscope::Result<Vec<_>>>()?;
//!
//! assert_eq!(refs, vec![7, 9]);
//! assert!(!parser.has_more_data());
//! # Ok::<(), modscope::Error>(())
//! ```

use crate::{
    record::io::{read_be_at, RecordIO},
    Result,
};

/// A cursor-based reader for attribute records.
///
/// Every read is bounds-checked and fails with [`crate::Error::OutOfBounds`] instead of
/// panicking. Beyond that, the parser does not second-guess counts it is asked to follow.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] from a byte slice.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Number of bytes left between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Read a big-endian value of type `T` and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
    pub fn read_be<T: RecordIO>(&mut self) -> Result<T> {
        read_be_at(self.data, &mut self.position)
    }
}
