//! Growable output buffer for attribute records.

use crate::{record::io::RecordIO, Error, Result};

/// An append-only byte buffer that encoders fill with big-endian values.
///
/// # Examples
///
/// ```rust
/// use modscope::ByteVector;
///
/// let mut out = ByteVector::new();
/// out.put_be(0x0001_u16);
/// out.put_count(3, "entries")?;
///
/// assert_eq!(out.as_slice(), &[0x00, 0x01, 0x00, 0x03]);
/// # Ok::<(), modscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteVector {
    data: Vec<u8>,
}

impl ByteVector {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` in big-endian byte order.
    pub fn put_be<T: RecordIO>(&mut self, value: T) {
        self.data.extend_from_slice(value.to_be_bytes().as_ref());
    }

    /// Appends a `u2` table count.
    ///
    /// # Arguments
    /// * `count` - Number of entries the table will hold
    /// * `what` - Name of the table, used in the error
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if `count` does not fit into 16 bits.
    pub fn put_count(&mut self, count: usize, what: &'static str) -> Result<()> {
        let Ok(value) = u16::try_from(count) else {
            return Err(Error::LimitExceeded { what, count });
        };

        self.put_be(value);
        Ok(())
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View of the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the written bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<ByteVector> for Vec<u8> {
    fn from(value: ByteVector) -> Self {
        value.into_vec()
    }
}
