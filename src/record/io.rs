//! Byte order helpers for attribute records.
//!
//! Every multi-byte integer in a module attribute is stored big-endian. This module provides the
//! [`crate::record::io::RecordIO`] trait, implemented for the unsigned integer widths the records
//! use, and bounds-checked helpers to read them from a byte slice.
//!
//! # Key Components
//!
//! - [`crate::record::io::RecordIO`] - Conversion between integers and their big-endian bytes
//! - [`crate::record::io::read_be`] - Read a value from the start of a buffer
//! - [`crate::record::io::read_be_at`] - Read a value at an offset and advance the offset
//!
//! # Examples
//!
//! ```rust
//! use modscope::record::io::read_be_at;
//!
//! let data = [0x00, 0x01, 0x00, 0x02];
//! let mut offset = 0;
//!
//! let first: u16 = read_be_at(&data, &mut offset)?;
//! let second: u16 = read_be_at(&data, &mut offset)?;
//! assert_eq!((first, second, offset), (1, 2, 4));
//! # Ok::<(), modscope::Error>(())
//! ```

use crate::{Error::OutOfBounds, Result};

/// Trait for integer types that can be stored in an attribute record.
///
/// Each implementation names the fixed-size byte array of its width; the read helpers convert a
/// slice of exactly that many bytes, the [`crate::record::ByteVector`] appends them.
pub trait RecordIO: Sized + Copy {
    /// Byte array holding one big-endian value of this type
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Write T to a byte buffer in big-endian
    fn to_be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_record_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl RecordIO for $ty {
                type Bytes = [u8; $len];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )*
    };
}

impl_record_io!(u8 => 1, u16 => 2, u32 => 4, u64 => 8);

/// Safely reads a value of type `T` in big-endian byte order from the start of a buffer.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the buffer is shorter than `T`.
pub fn read_be<T: RecordIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_be_at(data, &mut offset)
}

/// Safely reads a value of type `T` in big-endian byte order at `offset`, advancing the offset
/// by the size of `T`.
///
/// The offset is left untouched when the read fails.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_be_at<T: RecordIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_be_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_be_u8() {
        let result = read_be::<u8>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x01);
    }

    #[test]
    fn read_be_u16() {
        let result = read_be::<u16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0102);
    }

    #[test]
    fn read_be_u32() {
        let result = read_be::<u32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0102_0304);
    }

    #[test]
    fn read_be_u64() {
        let result = read_be::<u64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0102_0304_0506_0708);
    }

    #[test]
    fn read_be_at_advances() {
        let mut offset = 2;
        let value = read_be_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(value, 0x0304);
        assert_eq!(offset, 4);
    }

    #[test]
    fn read_be_at_out_of_bounds_keeps_offset() {
        let mut offset = 7;
        let result = read_be_at::<u16>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
        assert_eq!(offset, 7);
    }

    #[test]
    fn read_be_at_offset_overflow() {
        let mut offset = usize::MAX;
        let result = read_be_at::<u32>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
    }
}
